//! Combination rules for expression markers.
//!
//! `v1` is always the value popped first, which is the result of the
//! left operand `e1`: the decomposition pushes `M, e1, e2`, so `e2` is
//! evaluated first and `e1`'s result ends up on top. Hence `Sub` computes
//! `v1 - v2 = e1 - e2`.

use crate::control::ExpMarker;
use crate::errors::{EvalError, EvalResult};
use crate::value::{Value, ValueKind};

/// Combine the two operands of a binary marker.
pub(crate) fn evaluate_binary(marker: ExpMarker, v1: Value, v2: Value) -> EvalResult<Value> {
    let name = marker.name();
    match marker {
        ExpMarker::Sum => numeric(name, v1, v2).map(|(a, b)| Value::Num(a + b)),
        ExpMarker::Sub => numeric(name, v1, v2).map(|(a, b)| Value::Num(a - b)),
        ExpMarker::Mul => numeric(name, v1, v2).map(|(a, b)| Value::Num(a * b)),
        ExpMarker::Eq => equals(name, &v1, &v2).map(Value::Bool),
        ExpMarker::Not => Err(EvalError::IllFormedControl {
            entry: name.to_string(),
        }),
    }
}

/// Logical negation for the `#NOT` marker.
pub(crate) fn evaluate_not(v: Value) -> EvalResult<Value> {
    match v {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(EvalError::mismatch(
            ExpMarker::Not.name(),
            ValueKind::Bool,
            other.kind(),
        )),
    }
}

fn numeric(marker: &'static str, v1: Value, v2: Value) -> EvalResult<(f64, f64)> {
    match (v1, v2) {
        (Value::Num(a), Value::Num(b)) => Ok((a, b)),
        (Value::Num(_), other) | (other, _) => {
            Err(EvalError::mismatch(marker, ValueKind::Num, other.kind()))
        }
    }
}

/// Equality between two scalars of the same kind.
#[expect(
    clippy::float_cmp,
    reason = "Eq compares the exact values the automaton computed"
)]
fn equals(marker: &'static str, v1: &Value, v2: &Value) -> EvalResult<bool> {
    match (v1, v2) {
        (Value::Num(a), Value::Num(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Loc(a), Value::Loc(b)) => Ok(a == b),
        (a, b) => Err(EvalError::mismatch(marker, a.kind(), b.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sub_is_first_minus_second() {
        assert_eq!(
            evaluate_binary(ExpMarker::Sub, Value::Num(5.0), Value::Num(3.0)),
            Ok(Value::Num(2.0))
        );
    }

    #[test]
    fn test_arithmetic_requires_numbers() {
        let err = evaluate_binary(ExpMarker::Sum, Value::Bool(true), Value::Num(1.0)).unwrap_err();
        assert_eq!(err, EvalError::mismatch("#SUM", ValueKind::Num, ValueKind::Bool));

        let err = evaluate_binary(ExpMarker::Mul, Value::Num(1.0), Value::Bool(false)).unwrap_err();
        assert_eq!(err, EvalError::mismatch("#MUL", ValueKind::Num, ValueKind::Bool));
    }

    #[test]
    fn test_eq_same_kind_only() {
        assert_eq!(
            evaluate_binary(ExpMarker::Eq, Value::Bool(true), Value::Bool(true)),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            evaluate_binary(ExpMarker::Eq, Value::Num(1.0), Value::Bool(true)),
            Err(EvalError::mismatch("#EQ", ValueKind::Num, ValueKind::Bool))
        );
    }

    #[test]
    fn test_eq_on_bindings_reports_operand_kinds() {
        let decls = Value::binding(pi_ir::Ident::from("x"), crate::Loc::FIRST);
        assert_eq!(
            evaluate_binary(ExpMarker::Eq, decls, Value::Num(1.0)),
            Err(EvalError::mismatch("#EQ", ValueKind::Bindings, ValueKind::Num))
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(evaluate_not(Value::Bool(false)), Ok(Value::Bool(true)));
        assert!(evaluate_not(Value::Num(0.0)).is_err());
    }
}
