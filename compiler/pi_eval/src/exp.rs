//! Expression machine: arithmetic and boolean terms.

use pi_ir::{Exp, Term};

use crate::automaton::{Automaton, Stacks};
use crate::control::{Control, ExpMarker, Marker};
use crate::errors::{EvalError, EvalResult};
use crate::operators::{evaluate_binary, evaluate_not};
use crate::value::Value;

/// Evaluates `Num`, `Sum`, `Sub`, `Mul`, `Eq` and `Not`.
///
/// The innermost layer: anything it does not recognize is ill-formed.
#[derive(Clone, Debug, Default)]
pub struct ExpMachine {
    stacks: Stacks,
}

impl ExpMachine {
    pub fn new() -> Self {
        ExpMachine::default()
    }

    fn eval_exp(&mut self, exp: Exp) -> EvalResult<()> {
        match exp {
            Exp::Num(f) => self.stacks.push_value(Value::Num(f)),
            Exp::Sum(e1, e2) => self.decompose(ExpMarker::Sum, *e1, *e2),
            Exp::Sub(e1, e2) => self.decompose(ExpMarker::Sub, *e1, *e2),
            Exp::Mul(e1, e2) => self.decompose(ExpMarker::Mul, *e1, *e2),
            Exp::Eq(e1, e2) => self.decompose(ExpMarker::Eq, *e1, *e2),
            Exp::Not(e) => {
                self.stacks.push_control(ExpMarker::Not);
                self.stacks.push_control(*e);
            }
            other => return Err(EvalError::ill_formed(&Control::from(other))),
        }
        Ok(())
    }

    /// Push `marker, e1, e2`: `e2` is evaluated first, `e1` second.
    fn decompose(&mut self, marker: ExpMarker, e1: Exp, e2: Exp) {
        self.stacks.push_control(marker);
        self.stacks.push_control(e1);
        self.stacks.push_control(e2);
    }

    fn resume(&mut self, marker: ExpMarker) -> EvalResult<()> {
        let name = marker.name();
        let result = match marker {
            ExpMarker::Not => evaluate_not(self.stacks.pop_value(name)?)?,
            binary => {
                let v1 = self.stacks.pop_value(name)?;
                let v2 = self.stacks.pop_value(name)?;
                evaluate_binary(binary, v1, v2)?
            }
        };
        self.stacks.push_value(result);
        Ok(())
    }
}

impl Automaton for ExpMachine {
    fn stacks(&self) -> &Stacks {
        &self.stacks
    }

    fn stacks_mut(&mut self) -> &mut Stacks {
        &mut self.stacks
    }

    fn dispatch(&mut self, entry: Control) -> EvalResult<()> {
        match entry {
            Control::Term(Term::Exp(exp)) => self.eval_exp(exp),
            Control::Marker(Marker::Exp(marker)) => self.resume(marker),
            other => Err(EvalError::ill_formed(&other)),
        }
    }
}
