//! Pi IR - Syntax terms for the Pi automaton.
//!
//! This crate contains the abstract syntax consumed by `pi_eval`:
//! - `Ident` for identifier names
//! - Typed syntax categories (`Exp`, `BoolExp`, `Cmd`, `Dec`)
//! - `Term`, the untyped wrapper placed on the control stack
//! - `Sort` and the sort-checked constructors in [`build`]
//!
//! # Design Philosophy
//!
//! - **One enum per category**: the grammar's sorts are Rust types, so a
//!   typed term can never be ill-sorted.
//! - **Checked assembly**: callers assembling terms from untyped parts go
//!   through [`build`], which rejects misplaced operands with
//!   [`MalformedTerm`] before anything reaches a machine.
//! - **Immutable**: terms are plain owned data, cloned when saved as a
//!   continuation.

mod ast;
pub mod build;
mod errors;
mod ident;
mod sort;

pub use ast::{BoolExp, Cmd, Dec, Exp, Loop, Term};
pub use errors::MalformedTerm;
pub use ident::Ident;
pub use sort::Sort;
