//! Declaration terms.

use super::Exp;
use crate::Ident;

/// Declaration node.
#[derive(Clone, PartialEq, Debug)]
pub enum Dec {
    /// Bind a name to the location produced by the expression
    Bind(Ident, Exp),
    /// Later declarations override earlier ones on name collision
    DSeq(Box<Dec>, Box<Dec>),
}

impl Dec {
    pub fn bind(name: impl Into<Ident>, e: Exp) -> Self {
        Dec::Bind(name.into(), e)
    }

    pub fn seq(d1: Dec, d2: Dec) -> Self {
        Dec::DSeq(Box::new(d1), Box::new(d2))
    }

    pub fn head(&self) -> &'static str {
        match self {
            Dec::Bind(..) => "Bind",
            Dec::DSeq(..) => "DSeq",
        }
    }
}
