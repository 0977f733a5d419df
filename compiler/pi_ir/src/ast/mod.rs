//! Syntax Terms
//!
//! One enum per grammar category plus the untyped [`Term`] wrapper.
//!
//! ```text
//! Exp     ::= Num(f64) | Sum(Exp, Exp) | Sub(Exp, Exp) | Mul(Exp, Exp)
//!           | Eq(Exp, Exp) | Not(Exp) | Id(String) | Ref(Exp) | Cns(Exp)
//! BoolExp ::= Eq(Exp, Exp) | Not(Exp)
//! Cmd     ::= Assign(Id, Exp) | Loop(BoolExp, Cmd) | CSeq(Cmd, Cmd) | Blk(Dec, Cmd)
//! Dec     ::= Bind(Id, Exp) | DSeq(Dec, Dec)
//! ```

mod cmd;
mod dec;
mod expr;

pub use cmd::{Cmd, Loop};
pub use dec::Dec;
pub use expr::{BoolExp, Exp};

use crate::Sort;

/// A term of any category.
///
/// This is what gets pushed onto a machine's control stack.
#[derive(Clone, PartialEq, Debug)]
pub enum Term {
    Exp(Exp),
    Cmd(Cmd),
    Dec(Dec),
}

impl Term {
    /// Most specific sort of this term.
    pub fn sort(&self) -> Sort {
        match self {
            Term::Exp(exp) => exp.sort(),
            Term::Cmd(_) => Sort::Cmd,
            Term::Dec(_) => Sort::Dec,
        }
    }

    /// Grammar rule name of the head constructor, e.g. `"CSeq"`.
    pub fn head(&self) -> &'static str {
        match self {
            Term::Exp(exp) => exp.head(),
            Term::Cmd(cmd) => cmd.head(),
            Term::Dec(dec) => dec.head(),
        }
    }
}

impl From<Exp> for Term {
    fn from(exp: Exp) -> Self {
        Term::Exp(exp)
    }
}

impl From<BoolExp> for Term {
    fn from(exp: BoolExp) -> Self {
        Term::Exp(exp.into_exp())
    }
}

impl From<Cmd> for Term {
    fn from(cmd: Cmd) -> Self {
        Term::Cmd(cmd)
    }
}

impl From<Dec> for Term {
    fn from(dec: Dec) -> Self {
        Term::Dec(dec)
    }
}

#[cfg(test)]
mod tests;
