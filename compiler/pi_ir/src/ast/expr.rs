//! Expression terms.

use crate::{Ident, MalformedTerm, Sort};

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Exp {
    /// Floating point literal
    Num(f64),
    Sum(Box<Exp>, Box<Exp>),
    Sub(Box<Exp>, Box<Exp>),
    Mul(Box<Exp>, Box<Exp>),
    Eq(Box<Exp>, Box<Exp>),
    Not(Box<Exp>),
    /// Identifier reference, resolved through environment and store
    Id(Ident),
    /// Allocate a fresh location holding the operand's value
    Ref(Box<Exp>),
    /// Constant wrapper. Constructible, but no machine rule evaluates it.
    Cns(Box<Exp>),
}

impl Exp {
    pub fn num(value: f64) -> Self {
        Exp::Num(value)
    }

    pub fn sum(e1: Exp, e2: Exp) -> Self {
        Exp::Sum(Box::new(e1), Box::new(e2))
    }

    pub fn sub(e1: Exp, e2: Exp) -> Self {
        Exp::Sub(Box::new(e1), Box::new(e2))
    }

    pub fn mul(e1: Exp, e2: Exp) -> Self {
        Exp::Mul(Box::new(e1), Box::new(e2))
    }

    pub fn equals(e1: Exp, e2: Exp) -> Self {
        Exp::Eq(Box::new(e1), Box::new(e2))
    }

    pub fn not(e: Exp) -> Self {
        Exp::Not(Box::new(e))
    }

    pub fn id(name: impl Into<Ident>) -> Self {
        Exp::Id(name.into())
    }

    pub fn reference(e: Exp) -> Self {
        Exp::Ref(Box::new(e))
    }

    pub fn constant(e: Exp) -> Self {
        Exp::Cns(Box::new(e))
    }

    pub fn sort(&self) -> Sort {
        match self {
            Exp::Num(_) | Exp::Sum(..) | Exp::Sub(..) | Exp::Mul(..) => Sort::ArithExp,
            Exp::Eq(..) | Exp::Not(_) => Sort::BoolExp,
            Exp::Id(_) => Sort::Ident,
            Exp::Ref(_) | Exp::Cns(_) => Sort::Exp,
        }
    }

    pub fn head(&self) -> &'static str {
        match self {
            Exp::Num(_) => "Num",
            Exp::Sum(..) => "Sum",
            Exp::Sub(..) => "Sub",
            Exp::Mul(..) => "Mul",
            Exp::Eq(..) => "Eq",
            Exp::Not(_) => "Not",
            Exp::Id(_) => "Id",
            Exp::Ref(_) => "Ref",
            Exp::Cns(_) => "Cns",
        }
    }
}

/// A boolean expression: an `Exp` whose head is `Eq` or `Not`.
///
/// `Loop` conditions must be of this sort. The wrapper can only be built
/// through [`BoolExp::new`] or the infallible `equals`/`not` shortcuts.
#[derive(Clone, PartialEq, Debug)]
pub struct BoolExp(Exp);

impl BoolExp {
    /// Checks that `exp` is boolean-sorted.
    pub fn new(exp: Exp) -> Result<Self, MalformedTerm> {
        match exp.sort() {
            Sort::BoolExp => Ok(BoolExp(exp)),
            found => Err(MalformedTerm::new("BoolExp", 0, Sort::BoolExp, found)),
        }
    }

    pub fn equals(e1: Exp, e2: Exp) -> Self {
        BoolExp(Exp::equals(e1, e2))
    }

    pub fn not(e: Exp) -> Self {
        BoolExp(Exp::not(e))
    }

    #[inline]
    pub fn as_exp(&self) -> &Exp {
        &self.0
    }

    #[inline]
    pub fn into_exp(self) -> Exp {
        self.0
    }
}

impl TryFrom<Exp> for BoolExp {
    type Error = MalformedTerm;

    fn try_from(exp: Exp) -> Result<Self, Self::Error> {
        BoolExp::new(exp)
    }
}
