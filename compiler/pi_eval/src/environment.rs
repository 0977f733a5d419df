//! Environment and store.
//!
//! Identifier resolution always goes name → location → value: the
//! environment only knows locations, the store only knows values.

use std::collections::BTreeMap;

use pi_ir::Ident;
use rustc_hash::FxHashMap;

use crate::value::{Bindings, Loc, Value};

/// Name → location mapping.
///
/// Blocks never mutate an environment in place: entering one builds a new
/// environment from the outer one, leaving one reinstates the outer value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<Ident, Loc>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Loc> {
        self.bindings.get(name).copied()
    }

    pub fn bind(&mut self, name: Ident, loc: Loc) {
        self.bindings.insert(name, loc);
    }

    /// A copy of this environment with `bindings` layered on top.
    pub fn overridden_by(&self, bindings: &Bindings) -> Environment {
        let mut env = self.clone();
        env.bindings
            .extend(bindings.iter().map(|(name, loc)| (name.clone(), *loc)));
        env
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ident, Loc)> {
        self.bindings.iter().map(|(name, loc)| (name, *loc))
    }

    /// Bindings ordered by name.
    pub fn snapshot(&self) -> Vec<(Ident, Loc)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, loc)| (name.clone(), *loc))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Location → value mapping.
///
/// Kept ordered so the next free location (one past the largest key) is a
/// direct lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    cells: BTreeMap<Loc, Value>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    #[inline]
    pub fn read(&self, loc: Loc) -> Option<&Value> {
        self.cells.get(&loc)
    }

    pub fn write(&mut self, loc: Loc, value: Value) {
        self.cells.insert(loc, value);
    }

    pub fn remove(&mut self, loc: Loc) -> Option<Value> {
        self.cells.remove(&loc)
    }

    pub fn contains(&self, loc: Loc) -> bool {
        self.cells.contains_key(&loc)
    }

    /// Location the next allocation will use.
    ///
    /// `Loc::FIRST` for an empty store, otherwise one past the largest
    /// occupied location. `None` only when that would overflow.
    pub fn next_free(&self) -> Option<Loc> {
        match self.cells.last_key_value() {
            Some((last, _)) => last.next(),
            None => Some(Loc::FIRST),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Loc, &Value)> {
        self.cells.iter().map(|(loc, value)| (*loc, value))
    }

    /// Cells ordered by location.
    pub fn snapshot(&self) -> Vec<(Loc, Value)> {
        self.cells
            .iter()
            .map(|(loc, value)| (*loc, value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_free_follows_largest_location() {
        let mut store = Store::new();
        assert_eq!(store.next_free(), Some(Loc::FIRST));

        store.write(Loc::new(4), Value::Num(1.0));
        store.write(Loc::new(1), Value::Num(2.0));
        assert_eq!(store.next_free(), Some(Loc::new(5)));

        store.remove(Loc::new(4));
        assert_eq!(store.next_free(), Some(Loc::new(2)));
    }

    #[test]
    fn test_overridden_by_leaves_outer_untouched() {
        let mut outer = Environment::new();
        outer.bind(Ident::from("x"), Loc::new(0));
        outer.bind(Ident::from("y"), Loc::new(1));

        let mut decls = Bindings::default();
        decls.insert(Ident::from("x"), Loc::new(2));
        let inner = outer.overridden_by(&decls);

        assert_eq!(inner.lookup("x"), Some(Loc::new(2)));
        assert_eq!(inner.lookup("y"), Some(Loc::new(1)));
        assert_eq!(outer.lookup("x"), Some(Loc::new(0)));
    }

    #[test]
    fn test_snapshots_are_ordered() {
        let mut env = Environment::new();
        env.bind(Ident::from("y"), Loc::new(1));
        env.bind(Ident::from("x"), Loc::new(0));
        assert_eq!(
            env.snapshot(),
            vec![(Ident::from("x"), Loc::new(0)), (Ident::from("y"), Loc::new(1))]
        );

        let mut store = Store::new();
        store.write(Loc::new(1), Value::Bool(true));
        store.write(Loc::new(0), Value::Num(3.0));
        assert_eq!(
            store.snapshot(),
            vec![(Loc::new(0), Value::Num(3.0)), (Loc::new(1), Value::Bool(true))]
        );
    }
}
