//! The two-stack core shared by every machine layer.
//!
//! # Stepping
//!
//! A caller seeds a machine with one term and steps it until the control
//! stack is empty:
//!
//! ```text
//! machine.push_control(term);
//! while !machine.is_done() {
//!     machine.step()?;
//! }
//! ```
//!
//! Each [`Automaton::step`] pops exactly one control entry and hands it to
//! [`Automaton::dispatch`]. A layer's `dispatch` matches the terms and
//! markers it owns and forwards everything else to the layer it wraps, so
//! `DecMachine → CmdMachine → ExpMachine` behave as one evaluator. Stepping
//! can stop at any point; the machine is left in a consistent (possibly
//! non-terminal) state for inspection.

use pi_ir::Term;
use tracing::trace;

use crate::errors::{EvalError, EvalResult};
use crate::value::{Bindings, Loc, Value, ValueKind};
use crate::Control;

/// Value stack and control stack. Both are LIFO with the top at the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stacks {
    values: Vec<Value>,
    control: Vec<Control>,
}

impl Stacks {
    pub fn new() -> Self {
        Stacks::default()
    }

    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    pub fn control(&self) -> &[Control] {
        &self.control
    }

    #[inline]
    pub fn push_value(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    #[inline]
    pub fn push_control(&mut self, entry: impl Into<Control>) {
        self.control.push(entry.into());
    }

    #[inline]
    pub fn pop_control(&mut self) -> Option<Control> {
        self.control.pop()
    }

    /// Pops the top value on behalf of `marker`.
    pub fn pop_value(&mut self, marker: &'static str) -> EvalResult<Value> {
        self.values
            .pop()
            .ok_or(EvalError::ValueStackUnderflow { marker })
    }

    pub fn pop_num(&mut self, marker: &'static str) -> EvalResult<f64> {
        match self.pop_value(marker)? {
            Value::Num(n) => Ok(n),
            other => Err(EvalError::mismatch(marker, ValueKind::Num, other.kind())),
        }
    }

    pub fn pop_bool(&mut self, marker: &'static str) -> EvalResult<bool> {
        match self.pop_value(marker)? {
            Value::Bool(b) => Ok(b),
            other => Err(EvalError::mismatch(marker, ValueKind::Bool, other.kind())),
        }
    }

    pub fn pop_loc(&mut self, marker: &'static str) -> EvalResult<Loc> {
        match self.pop_value(marker)? {
            Value::Loc(l) => Ok(l),
            other => Err(EvalError::mismatch(marker, ValueKind::Loc, other.kind())),
        }
    }

    pub fn pop_bindings(&mut self, marker: &'static str) -> EvalResult<Bindings> {
        match self.pop_value(marker)? {
            Value::Bindings(b) => Ok(b),
            other => Err(EvalError::mismatch(marker, ValueKind::Bindings, other.kind())),
        }
    }
}

/// Outcome of a single [`Automaton::step`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Progress {
    /// One rewrite was performed.
    Stepped,
    /// The control stack was already empty; nothing happened.
    Halted,
}

/// Public contract of every machine layer.
pub trait Automaton {
    fn stacks(&self) -> &Stacks;

    fn stacks_mut(&mut self) -> &mut Stacks;

    /// Apply the rewrite rule for one popped control entry.
    ///
    /// Entries no layer recognizes fail with `IllFormedControl`.
    fn dispatch(&mut self, entry: Control) -> EvalResult<()>;

    /// Seed the control stack with a term.
    fn push_control(&mut self, term: impl Into<Term>) {
        self.stacks_mut().push_control(Control::Term(term.into()));
    }

    /// Pop one control entry and rewrite it.
    fn step(&mut self) -> EvalResult<Progress> {
        let Some(entry) = self.stacks_mut().pop_control() else {
            return Ok(Progress::Halted);
        };
        trace!(
            %entry,
            values = self.stacks().values().len(),
            control = self.stacks().control().len(),
            "step"
        );
        self.dispatch(entry)?;
        Ok(Progress::Stepped)
    }

    /// `true` once the control stack is empty.
    fn is_done(&self) -> bool {
        self.stacks().control().is_empty()
    }

    fn value_stack(&self) -> &[Value] {
        self.stacks().values()
    }

    fn control_stack(&self) -> &[Control] {
        self.stacks().control()
    }
}
