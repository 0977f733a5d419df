//! Values produced by the automaton.
//!
//! Locations are their own identifier type rather than reusing numbers, so
//! the store's address space can never be confused with computed values.

use std::fmt;

use pi_ir::Ident;
use rustc_hash::FxHashMap;

/// A storage location.
///
/// Allocated monotonically: the first location is `Loc(0)`, every later one
/// is one past the largest location currently in the store.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Loc(u64);

impl Loc {
    /// Location handed out when the store is empty.
    pub const FIRST: Loc = Loc(0);

    pub const fn new(index: u64) -> Self {
        Loc(index)
    }

    #[inline]
    pub const fn index(self) -> u64 {
        self.0
    }

    /// The location after this one, or `None` once the space is used up.
    #[inline]
    pub fn next(self) -> Option<Loc> {
        self.0.checked_add(1).map(Loc)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc#{}", self.0)
    }
}

/// Name → location mapping produced by evaluating declarations.
pub type Bindings = FxHashMap<Ident, Loc>;

/// A value on the value stack or in the store.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Num(f64),
    Bool(bool),
    Loc(Loc),
    /// Result of `Bind`/`DSeq`, consumed when a block installs it.
    Bindings(Bindings),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Num(_) => ValueKind::Num,
            Value::Bool(_) => ValueKind::Bool,
            Value::Loc(_) => ValueKind::Loc,
            Value::Bindings(_) => ValueKind::Bindings,
        }
    }

    /// Single-entry bindings `{name: loc}`.
    pub fn binding(name: Ident, loc: Loc) -> Self {
        let mut bindings = Bindings::default();
        bindings.insert(name, loc);
        Value::Bindings(bindings)
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_loc(&self) -> Option<Loc> {
        match self {
            Value::Loc(l) => Some(*l),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Loc> for Value {
    fn from(l: Loc) -> Self {
        Value::Loc(l)
    }
}

/// Kind of a [`Value`], used in operand mismatch errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Num,
    Bool,
    Loc,
    Bindings,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Num => "a number",
            ValueKind::Bool => "a boolean",
            ValueKind::Loc => "a location",
            ValueKind::Bindings => "a binding map",
        })
    }
}
