//! Grammar sorts.

use std::fmt;

/// The syntactic category of a term.
///
/// Every term reports its most specific sort. `Ident`, `ArithExp` and
/// `BoolExp` are refinements of `Exp`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Sort {
    /// `Id(name)`.
    Ident,
    /// `Num`, `Sum`, `Sub`, `Mul`.
    ArithExp,
    /// `Eq`, `Not`.
    BoolExp,
    /// Any expression; the most specific sort of `Ref` and `Cns`.
    Exp,
    Cmd,
    Dec,
}

impl Sort {
    /// Returns `true` if a term of this sort may occupy a position that
    /// requires `required`.
    pub const fn satisfies(self, required: Sort) -> bool {
        match required {
            Sort::Exp => self.is_exp(),
            Sort::Ident => matches!(self, Sort::Ident),
            Sort::ArithExp => matches!(self, Sort::ArithExp),
            Sort::BoolExp => matches!(self, Sort::BoolExp),
            Sort::Cmd => matches!(self, Sort::Cmd),
            Sort::Dec => matches!(self, Sort::Dec),
        }
    }

    #[inline]
    pub const fn is_exp(self) -> bool {
        matches!(self, Sort::Ident | Sort::ArithExp | Sort::BoolExp | Sort::Exp)
    }

    /// Grammar name of the sort, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Sort::Ident => "Id",
            Sort::ArithExp => "ArithExp",
            Sort::BoolExp => "BoolExp",
            Sort::Exp => "Exp",
            Sort::Cmd => "Cmd",
            Sort::Dec => "Dec",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
