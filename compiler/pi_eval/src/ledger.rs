//! Location ledger.

use crate::value::Loc;

/// Locations allocated in the current scope, in allocation order.
///
/// Blocks snapshot the ledger on entry and restore that snapshot on exit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationLedger {
    locs: Vec<Loc>,
}

impl LocationLedger {
    pub fn new() -> Self {
        LocationLedger::default()
    }

    pub fn record(&mut self, loc: Loc) {
        self.locs.push(loc);
    }

    pub fn contains(&self, loc: Loc) -> bool {
        self.locs.contains(&loc)
    }

    pub fn as_slice(&self) -> &[Loc] {
        &self.locs
    }

    pub fn len(&self) -> usize {
        self.locs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    /// Locations in `self` that `earlier` does not hold.
    pub fn allocated_since<'a>(&'a self, earlier: &'a LocationLedger) -> impl Iterator<Item = Loc> + 'a {
        self.locs.iter().copied().filter(move |loc| !earlier.contains(*loc))
    }
}

impl FromIterator<Loc> for LocationLedger {
    fn from_iter<I: IntoIterator<Item = Loc>>(iter: I) -> Self {
        LocationLedger {
            locs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocated_since() {
        let before: LocationLedger = [Loc::new(0)].into_iter().collect();
        let mut after = before.clone();
        after.record(Loc::new(1));
        after.record(Loc::new(2));

        let fresh: Vec<_> = after.allocated_since(&before).collect();
        assert_eq!(fresh, vec![Loc::new(1), Loc::new(2)]);
        assert_eq!(before.allocated_since(&after).count(), 0);
    }
}
