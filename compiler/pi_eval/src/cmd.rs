//! Command machine: identifiers, assignment, sequencing and loops.

use pi_ir::{Cmd, Exp, Ident, Loop, Term};
use tracing::trace;

use crate::automaton::{Automaton, Stacks};
use crate::control::{CmdMarker, Control, Marker};
use crate::environment::{Environment, Store};
use crate::errors::{EvalError, EvalResult};
use crate::exp::ExpMachine;
use crate::value::{Loc, Value};

/// Adds an environment and a store on top of [`ExpMachine`].
#[derive(Clone, Debug, Default)]
pub struct CmdMachine {
    exp: ExpMachine,
    pub(crate) env: Environment,
    pub(crate) store: Store,
}

impl CmdMachine {
    pub fn new() -> Self {
        CmdMachine::default()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Bind `name` to an existing location.
    pub fn bind(&mut self, name: impl Into<Ident>, loc: Loc) {
        self.env.bind(name.into(), loc);
    }

    /// Overwrite the value held at `loc`.
    pub fn write(&mut self, loc: Loc, value: impl Into<Value>) {
        self.store.write(loc, value.into());
    }

    /// Allocate a fresh location for `value` and bind `name` to it.
    pub fn declare(&mut self, name: impl Into<Ident>, value: impl Into<Value>) -> EvalResult<Loc> {
        let loc = self.allocate(value.into())?;
        self.env.bind(name.into(), loc);
        Ok(loc)
    }

    /// Store `value` at the next free location.
    pub(crate) fn allocate(&mut self, value: Value) -> EvalResult<Loc> {
        let loc = self.store.next_free().ok_or(EvalError::LocationsExhausted)?;
        self.store.write(loc, value);
        Ok(loc)
    }

    /// `env[name]`, then `store[loc]`.
    pub fn resolve(&self, name: &Ident) -> EvalResult<&Value> {
        let loc = self.location_of(name)?;
        self.store
            .read(loc)
            .ok_or(EvalError::DanglingLocation { loc })
    }

    fn location_of(&self, name: &Ident) -> EvalResult<Loc> {
        self.env
            .lookup(name.as_str())
            .ok_or_else(|| EvalError::UnboundIdentifier { name: name.clone() })
    }

    fn eval_cmd(&mut self, cmd: Cmd) -> EvalResult<()> {
        match cmd {
            Cmd::Assign(name, e) => {
                self.exp.stacks_mut().push_control(CmdMarker::Assign(name));
                self.exp.stacks_mut().push_control(e);
            }
            Cmd::CSeq(c1, c2) => {
                self.exp.stacks_mut().push_control(*c2);
                self.exp.stacks_mut().push_control(*c1);
            }
            Cmd::Loop(lp) => {
                let cond = lp.cond.as_exp().clone();
                self.exp.stacks_mut().push_control(CmdMarker::Loop(lp));
                self.exp.stacks_mut().push_control(cond);
            }
            blk @ Cmd::Blk(..) => return Err(EvalError::ill_formed(&Control::from(blk))),
        }
        Ok(())
    }

    fn resume(&mut self, marker: CmdMarker) -> EvalResult<()> {
        let name = marker.name();
        match marker {
            CmdMarker::Assign(target) => {
                let value = self.exp.stacks_mut().pop_value(name)?;
                let loc = self.location_of(&target)?;
                trace!(%target, %loc, "assign");
                self.store.write(loc, value);
            }
            CmdMarker::Loop(lp) => {
                if self.exp.stacks_mut().pop_bool(name)? {
                    self.reenter(lp);
                }
            }
        }
        Ok(())
    }

    /// Run the body, then test the condition again.
    fn reenter(&mut self, lp: Box<Loop>) {
        let body = lp.body.clone();
        let stacks = self.exp.stacks_mut();
        stacks.push_control(Cmd::Loop(lp));
        stacks.push_control(body);
    }
}

impl Automaton for CmdMachine {
    fn stacks(&self) -> &Stacks {
        self.exp.stacks()
    }

    fn stacks_mut(&mut self) -> &mut Stacks {
        self.exp.stacks_mut()
    }

    fn dispatch(&mut self, entry: Control) -> EvalResult<()> {
        match entry {
            Control::Term(Term::Exp(Exp::Id(name))) => {
                let value = self.resolve(&name)?.clone();
                self.exp.stacks_mut().push_value(value);
                Ok(())
            }
            Control::Term(Term::Cmd(cmd)) => self.eval_cmd(cmd),
            Control::Marker(Marker::Cmd(marker)) => self.resume(marker),
            other => self.exp.dispatch(other),
        }
    }
}
