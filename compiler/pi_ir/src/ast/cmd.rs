//! Command terms.

use super::{BoolExp, Dec, Exp};
use crate::Ident;

/// Command node.
#[derive(Clone, PartialEq, Debug)]
pub enum Cmd {
    Assign(Ident, Exp),
    Loop(Box<Loop>),
    CSeq(Box<Cmd>, Box<Cmd>),
    /// Scoped block: declarations visible only while the body runs
    Blk(Box<Dec>, Box<Cmd>),
}

/// `Loop(cond, body)`, kept as its own node so a machine can hold on to
/// the whole loop as a continuation.
#[derive(Clone, PartialEq, Debug)]
pub struct Loop {
    pub cond: BoolExp,
    pub body: Cmd,
}

impl Cmd {
    pub fn assign(name: impl Into<Ident>, e: Exp) -> Self {
        Cmd::Assign(name.into(), e)
    }

    pub fn looping(cond: BoolExp, body: Cmd) -> Self {
        Cmd::Loop(Box::new(Loop { cond, body }))
    }

    pub fn seq(c1: Cmd, c2: Cmd) -> Self {
        Cmd::CSeq(Box::new(c1), Box::new(c2))
    }

    pub fn block(decls: Dec, body: Cmd) -> Self {
        Cmd::Blk(Box::new(decls), Box::new(body))
    }

    pub fn head(&self) -> &'static str {
        match self {
            Cmd::Assign(..) => "Assign",
            Cmd::Loop(_) => "Loop",
            Cmd::CSeq(..) => "CSeq",
            Cmd::Blk(..) => "Blk",
        }
    }
}
