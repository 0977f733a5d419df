//! Control stack entries.
//!
//! The control stack interleaves pending terms with resume markers. A marker
//! says "the operands this rule needs are now on the value stack"; any other
//! context the rule needs (the assigned name, the loop being run, the ledger
//! and environment to restore) travels inside the marker itself.

use std::fmt;

use pi_ir::{Cmd, Dec, Exp, Ident, Loop, Term};

use crate::environment::Environment;
use crate::ledger::LocationLedger;

/// One entry on the control stack.
#[derive(Clone, PartialEq, Debug)]
pub enum Control {
    Term(Term),
    Marker(Marker),
}

/// Resume marker, grouped by the machine layer that handles it.
#[derive(Clone, PartialEq, Debug)]
pub enum Marker {
    Exp(ExpMarker),
    Cmd(CmdMarker),
    Dec(DecMarker),
}

/// Markers of the expression layer. Operands are taken from the value stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExpMarker {
    Sum,
    Sub,
    Mul,
    Eq,
    Not,
}

/// Markers of the command layer.
#[derive(Clone, PartialEq, Debug)]
pub enum CmdMarker {
    /// Store the value on top of the value stack at the name's location.
    Assign(Ident),
    /// Loop condition is on the value stack; carries the loop to re-enter.
    Loop(Box<Loop>),
}

/// Markers of the declaration layer.
#[derive(Clone, PartialEq, Debug)]
pub enum DecMarker {
    Ref,
    Bind(Ident),
    DSeq,
    /// Declarations of a block are evaluated; install them and run `body`.
    BlkDec {
        /// Ledger as it was before the block.
        saved: LocationLedger,
        body: Box<Cmd>,
    },
    /// Block body has run; restore the outer scope.
    BlkCmd {
        saved: LocationLedger,
        outer: Environment,
    },
}

impl ExpMarker {
    pub const fn name(self) -> &'static str {
        match self {
            ExpMarker::Sum => "#SUM",
            ExpMarker::Sub => "#SUB",
            ExpMarker::Mul => "#MUL",
            ExpMarker::Eq => "#EQ",
            ExpMarker::Not => "#NOT",
        }
    }
}

impl CmdMarker {
    pub const fn name(&self) -> &'static str {
        match self {
            CmdMarker::Assign(_) => "#ASSIGN",
            CmdMarker::Loop(_) => "#LOOP",
        }
    }
}

impl DecMarker {
    pub const fn name(&self) -> &'static str {
        match self {
            DecMarker::Ref => "#REF",
            DecMarker::Bind(_) => "#BIND",
            DecMarker::DSeq => "#DSEQ",
            DecMarker::BlkDec { .. } => "#BLKDEC",
            DecMarker::BlkCmd { .. } => "#BLKCMD",
        }
    }
}

impl Marker {
    pub fn name(&self) -> &'static str {
        match self {
            Marker::Exp(m) => m.name(),
            Marker::Cmd(m) => m.name(),
            Marker::Dec(m) => m.name(),
        }
    }
}

impl Control {
    #[inline]
    pub fn is_marker(&self) -> bool {
        matches!(self, Control::Marker(_))
    }
}

/// Short form for logs and errors: the term's head or the marker's name.
impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Term(term) => f.write_str(term.head()),
            Control::Marker(marker) => f.write_str(marker.name()),
        }
    }
}

impl From<Term> for Control {
    fn from(term: Term) -> Self {
        Control::Term(term)
    }
}

impl From<Exp> for Control {
    fn from(exp: Exp) -> Self {
        Control::Term(Term::Exp(exp))
    }
}

impl From<Cmd> for Control {
    fn from(cmd: Cmd) -> Self {
        Control::Term(Term::Cmd(cmd))
    }
}

impl From<Dec> for Control {
    fn from(dec: Dec) -> Self {
        Control::Term(Term::Dec(dec))
    }
}

impl From<Marker> for Control {
    fn from(marker: Marker) -> Self {
        Control::Marker(marker)
    }
}

impl From<ExpMarker> for Control {
    fn from(m: ExpMarker) -> Self {
        Control::Marker(Marker::Exp(m))
    }
}

impl From<CmdMarker> for Control {
    fn from(m: CmdMarker) -> Self {
        Control::Marker(Marker::Cmd(m))
    }
}

impl From<DecMarker> for Control {
    fn from(m: DecMarker) -> Self {
        Control::Marker(Marker::Dec(m))
    }
}
