//! Tests for the expression layer.

use super::{eval_exp, run};
use crate::{Automaton, Control, EvalError, ExpMachine, ExpMarker, Progress, Value, ValueKind};
use pi_ir::{Cmd, Exp};
use pretty_assertions::assert_eq;

fn num(f: f64) -> Exp {
    Exp::num(f)
}

#[test]
fn test_num_pushes_value() {
    assert_eq!(eval_exp(num(4.5)), Ok(vec![Value::Num(4.5)]));
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval_exp(Exp::sum(num(1.0), num(2.0))), Ok(vec![Value::Num(3.0)]));
    assert_eq!(eval_exp(Exp::sub(num(5.0), num(3.0))), Ok(vec![Value::Num(2.0)]));
    assert_eq!(eval_exp(Exp::mul(num(2.0), num(4.0))), Ok(vec![Value::Num(8.0)]));
}

#[test]
fn test_nested_expression() {
    // Sum(Num(1), Mul(Num(2), Num(4)))
    let exp = Exp::sum(num(1.0), Exp::mul(num(2.0), num(4.0)));
    assert_eq!(eval_exp(exp), Ok(vec![Value::Num(9.0)]));
}

#[test]
fn test_sub_respects_operand_position() {
    // The right operand is evaluated first, yet the result is still e1 - e2.
    let exp = Exp::sub(Exp::sub(num(10.0), num(1.0)), Exp::mul(num(2.0), num(3.0)));
    assert_eq!(eval_exp(exp), Ok(vec![Value::Num(3.0)]));
}

#[test]
fn test_decomposition_pushes_marker_then_operands() {
    let mut machine = ExpMachine::new();
    machine.push_control(Exp::sub(num(5.0), num(3.0)));
    assert_eq!(machine.step(), Ok(Progress::Stepped));
    assert_eq!(
        machine.control_stack(),
        &[
            Control::from(ExpMarker::Sub),
            Control::from(num(5.0)),
            Control::from(num(3.0)),
        ]
    );

    // e2 is on top, so it is evaluated first.
    machine.step().unwrap();
    assert_eq!(machine.value_stack(), &[Value::Num(3.0)]);
    machine.step().unwrap();
    assert_eq!(machine.value_stack(), &[Value::Num(3.0), Value::Num(5.0)]);
    machine.step().unwrap();
    assert_eq!(machine.value_stack(), &[Value::Num(2.0)]);
    assert!(machine.is_done());
}

#[test]
fn test_eq_and_not() {
    assert_eq!(
        eval_exp(Exp::equals(num(2.0), num(2.0))),
        Ok(vec![Value::Bool(true)])
    );
    assert_eq!(
        eval_exp(Exp::equals(num(2.0), num(3.0))),
        Ok(vec![Value::Bool(false)])
    );
    assert_eq!(
        eval_exp(Exp::not(Exp::equals(num(2.0), num(3.0)))),
        Ok(vec![Value::Bool(true)])
    );
    assert_eq!(
        eval_exp(Exp::not(Exp::not(Exp::equals(num(1.0), num(1.0))))),
        Ok(vec![Value::Bool(true)])
    );
}

#[test]
fn test_step_on_empty_control_halts() {
    let mut machine = ExpMachine::new();
    assert!(machine.is_done());
    assert_eq!(machine.step(), Ok(Progress::Halted));
}

#[test]
fn test_identifier_is_ill_formed_for_expression_machine() {
    let err = eval_exp(Exp::sum(Exp::id("x"), num(1.0))).unwrap_err();
    assert_eq!(
        err,
        EvalError::IllFormedControl {
            entry: "Id".to_string()
        }
    );
}

#[test]
fn test_command_is_ill_formed_for_expression_machine() {
    let mut machine = ExpMachine::new();
    machine.push_control(Cmd::assign("x", num(1.0)));
    assert!(matches!(
        run(&mut machine),
        Err(EvalError::IllFormedControl { .. })
    ));
}

#[test]
fn test_not_on_number_is_a_mismatch() {
    let err = eval_exp(Exp::not(num(1.0))).unwrap_err();
    assert_eq!(
        err,
        EvalError::OperandMismatch {
            marker: "#NOT",
            expected: ValueKind::Bool,
            found: ValueKind::Num,
        }
    );
}

#[test]
fn test_operands_are_never_coerced() {
    let truthy = || Exp::equals(num(1.0), num(1.0));
    let bool_for = |marker| EvalError::OperandMismatch {
        marker,
        expected: ValueKind::Num,
        found: ValueKind::Bool,
    };

    assert_eq!(
        eval_exp(Exp::not(num(0.0))),
        Err(EvalError::OperandMismatch {
            marker: "#NOT",
            expected: ValueKind::Bool,
            found: ValueKind::Num,
        })
    );
    assert_eq!(eval_exp(Exp::sum(truthy(), num(2.0))), Err(bool_for("#SUM")));
    assert_eq!(eval_exp(Exp::equals(num(1.0), truthy())), Err(bool_for("#EQ")));
}

#[test]
fn test_marker_without_operands_underflows() {
    let mut machine = ExpMachine::new();
    machine.stacks_mut().push_control(ExpMarker::Mul);
    assert_eq!(
        machine.step(),
        Err(EvalError::ValueStackUnderflow { marker: "#MUL" })
    );
}
