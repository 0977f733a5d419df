//! Declaration machine: references, bindings and scoped blocks.

use pi_ir::{Cmd, Dec, Exp, Ident, Term};
use tracing::{debug, trace};

use crate::automaton::{Automaton, Stacks};
use crate::builder::{BlockCleanup, MachineConfig};
use crate::cmd::CmdMachine;
use crate::control::{Control, DecMarker, Marker};
use crate::environment::{Environment, Store};
use crate::errors::EvalResult;
use crate::ledger::LocationLedger;
use crate::value::{Bindings, Loc, Value};

/// Adds a location ledger on top of [`CmdMachine`].
///
/// This is the complete automaton: it evaluates every term the grammar can
/// express except `Cns`.
#[derive(Clone, Debug, Default)]
pub struct DecMachine {
    cmd: CmdMachine,
    ledger: LocationLedger,
    config: MachineConfig,
}

impl DecMachine {
    pub fn new() -> Self {
        DecMachine::default()
    }

    pub fn with_config(config: MachineConfig) -> Self {
        DecMachine {
            config,
            ..DecMachine::default()
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        self.cmd.environment()
    }

    pub fn store(&self) -> &Store {
        self.cmd.store()
    }

    pub fn ledger(&self) -> &LocationLedger {
        &self.ledger
    }

    /// See [`CmdMachine::bind`].
    pub fn bind(&mut self, name: impl Into<Ident>, loc: Loc) {
        self.cmd.bind(name, loc);
    }

    /// See [`CmdMachine::write`].
    pub fn write(&mut self, loc: Loc, value: impl Into<Value>) {
        self.cmd.write(loc, value);
    }

    /// See [`CmdMachine::declare`]. The location is not recorded in the
    /// ledger: it belongs to the caller, not to any block.
    pub fn declare(&mut self, name: impl Into<Ident>, value: impl Into<Value>) -> EvalResult<Loc> {
        self.cmd.declare(name, value)
    }

    /// See [`CmdMachine::resolve`].
    pub fn resolve(&self, name: &Ident) -> EvalResult<&Value> {
        self.cmd.resolve(name)
    }

    fn resume(&mut self, marker: DecMarker) -> EvalResult<()> {
        let name = marker.name();
        match marker {
            DecMarker::Ref => {
                let value = self.cmd.stacks_mut().pop_value(name)?;
                let loc = self.cmd.allocate(value)?;
                self.ledger.record(loc);
                trace!(%loc, "allocate");
                self.cmd.stacks_mut().push_value(loc);
            }
            DecMarker::Bind(target) => {
                let loc = self.cmd.stacks_mut().pop_loc(name)?;
                self.cmd.stacks_mut().push_value(Value::binding(target, loc));
            }
            DecMarker::DSeq => {
                let later = self.cmd.stacks_mut().pop_bindings(name)?;
                let mut merged = self.cmd.stacks_mut().pop_bindings(name)?;
                merged.extend(later);
                self.cmd.stacks_mut().push_value(Value::Bindings(merged));
            }
            DecMarker::BlkDec { saved, body } => {
                let decls = self.cmd.stacks_mut().pop_bindings(name)?;
                self.enter_block(saved, &decls, *body);
            }
            DecMarker::BlkCmd { saved, outer } => self.leave_block(saved, outer),
        }
        Ok(())
    }

    /// Install the block's declarations over the current environment and
    /// schedule the body, followed by the exit marker.
    #[tracing::instrument(level = "debug", skip_all, fields(outer_allocated = saved.len()))]
    fn enter_block(&mut self, saved: LocationLedger, decls: &Bindings, body: Cmd) {
        let inner = self.cmd.env.overridden_by(decls);
        let outer = std::mem::replace(&mut self.cmd.env, inner);
        debug!(bindings = decls.len(), allocated = self.ledger.len(), "enter block");

        let stacks = self.cmd.stacks_mut();
        stacks.push_control(DecMarker::BlkCmd { saved, outer });
        stacks.push_control(body);
    }

    /// Reinstate the outer environment, reclaim block storage, and roll the
    /// ledger back to its pre-block snapshot.
    ///
    /// The reclaim set is read from the ledger as it stands at exit, so
    /// references allocated by the body are reclaimed along with the
    /// declarations.
    #[tracing::instrument(level = "debug", skip_all, fields(policy = ?self.config.block_cleanup))]
    fn leave_block(&mut self, saved: LocationLedger, outer: Environment) {
        self.cmd.env = outer;
        let reclaimed: Vec<Loc> = match self.config.block_cleanup {
            BlockCleanup::PostDeclarationLedger => self.ledger.as_slice().to_vec(),
            BlockCleanup::OwnDeclarations => self.ledger.allocated_since(&saved).collect(),
        };
        for loc in &reclaimed {
            self.cmd.store.remove(*loc);
        }
        debug!(reclaimed = reclaimed.len(), "leave block");
        self.ledger = saved;
    }
}

impl Automaton for DecMachine {
    fn stacks(&self) -> &Stacks {
        self.cmd.stacks()
    }

    fn stacks_mut(&mut self) -> &mut Stacks {
        self.cmd.stacks_mut()
    }

    fn dispatch(&mut self, entry: Control) -> EvalResult<()> {
        match entry {
            Control::Term(Term::Exp(Exp::Ref(e))) => {
                let stacks = self.cmd.stacks_mut();
                stacks.push_control(DecMarker::Ref);
                stacks.push_control(*e);
                Ok(())
            }
            Control::Term(Term::Dec(Dec::Bind(target, e))) => {
                let stacks = self.cmd.stacks_mut();
                stacks.push_control(DecMarker::Bind(target));
                stacks.push_control(e);
                Ok(())
            }
            Control::Term(Term::Dec(Dec::DSeq(d1, d2))) => {
                let stacks = self.cmd.stacks_mut();
                stacks.push_control(DecMarker::DSeq);
                stacks.push_control(*d2);
                stacks.push_control(*d1);
                Ok(())
            }
            Control::Term(Term::Cmd(Cmd::Blk(decls, body))) => {
                let saved = self.ledger.clone();
                let stacks = self.cmd.stacks_mut();
                stacks.push_control(DecMarker::BlkDec { saved, body });
                stacks.push_control(*decls);
                Ok(())
            }
            Control::Marker(Marker::Dec(marker)) => self.resume(marker),
            other => self.cmd.dispatch(other),
        }
    }
}
