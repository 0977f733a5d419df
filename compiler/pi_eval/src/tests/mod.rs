//! Machine-level tests.
//!
//! Each file drives one layer through full evaluations; the helpers below
//! play the part of the external driver loop.

mod exp_tests;

use crate::{Automaton, EvalResult, ExpMachine, Value};
use pi_ir::Exp;

/// Step `machine` until its control stack is empty. Returns the step count.
pub(crate) fn run<M: Automaton>(machine: &mut M) -> EvalResult<usize> {
    crate::init_tracing();
    let mut steps = 0;
    while !machine.is_done() {
        machine.step()?;
        steps += 1;
    }
    Ok(steps)
}

/// Step until `stop` holds (checked before every step) or the machine is done.
pub(crate) fn run_until<M: Automaton>(machine: &mut M, stop: impl Fn(&M) -> bool) -> EvalResult<()> {
    while !machine.is_done() && !stop(machine) {
        machine.step()?;
    }
    Ok(())
}

/// Evaluate an expression on a fresh `ExpMachine` and return the value stack.
pub(crate) fn eval_exp(exp: Exp) -> EvalResult<Vec<Value>> {
    let mut machine = ExpMachine::new();
    machine.push_control(exp);
    run(&mut machine)?;
    Ok(machine.value_stack().to_vec())
}
