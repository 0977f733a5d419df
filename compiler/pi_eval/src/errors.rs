//! Evaluation errors.
//!
//! Every error is fatal for the evaluation session: the automaton is a
//! deterministic rewrite system, so reaching one of these states means the
//! term or the seeded machine state was wrong.

use pi_ir::Ident;

use crate::value::{Loc, ValueKind};
use crate::Control;

/// Result of a machine operation.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The popped control entry is not a term or marker any layer handles.
    #[error("ill-formed control entry `{entry}`")]
    IllFormedControl { entry: String },

    #[error("unbound identifier `{name}`")]
    UnboundIdentifier { name: Ident },

    /// The environment points at a location the store no longer holds.
    #[error("{loc} has no value in the store")]
    DanglingLocation { loc: Loc },

    #[error("`{marker}` expected {expected}, found {found}")]
    OperandMismatch {
        marker: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("`{marker}` found the value stack empty")]
    ValueStackUnderflow { marker: &'static str },

    #[error("no location left to allocate")]
    LocationsExhausted,
}

impl EvalError {
    pub(crate) fn ill_formed(entry: &Control) -> Self {
        EvalError::IllFormedControl {
            entry: entry.to_string(),
        }
    }

    pub(crate) fn mismatch(marker: &'static str, expected: ValueKind, found: ValueKind) -> Self {
        EvalError::OperandMismatch {
            marker,
            expected,
            found,
        }
    }
}
