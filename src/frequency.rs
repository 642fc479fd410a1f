//! Symbol frequency analysis.
//!
//! The table keeps symbols in the order they were first seen. Tree
//! construction pushes leaves in that order, so it is part of what makes
//! the resulting code reproducible.

use std::collections::HashMap;

use crate::Symbol;

/// Occurrence counts, one entry per distinct symbol.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count every symbol of a sequence.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut table = Self::new();
        for s in symbols {
            table.add(s);
        }
        table
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are skipped and repeated symbols are summed. Counts
    /// saturate at `u64::MAX`.
    pub fn from_counts<I: IntoIterator<Item = (S, u64)>>(counts: I) -> Self {
        let mut table = Self::new();
        for (s, n) in counts {
            table.add_n(s, n);
        }
        table
    }

    /// Record one occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        self.add_n(symbol, 1);
    }

    fn add_n(&mut self, symbol: S, n: u64) {
        if n == 0 {
            return;
        }
        match self.index.get(&symbol) {
            Some(&i) => {
                let count = &mut self.entries[i].1;
                *count = count.saturating_add(n);
            }
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, n));
            }
        }
    }

    /// Occurrences of `symbol`, 0 if it was never seen.
    pub fn count(&self, symbol: &S) -> u64 {
        self.index
            .get(symbol)
            .map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, &(_, n)| acc.saturating_add(n))
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, n)| (s, *n))
    }

    /// Shannon entropy of the distribution, in bits per symbol.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        self.entries
            .iter()
            .map(|&(_, n)| {
                let p = n as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counts_in_first_seen_order() {
        let table: FrequencyTable<char> = "abracadabra".chars().collect();
        let entries: Vec<(char, u64)> = table.iter().map(|(&s, n)| (s, n)).collect();
        assert_eq!(
            entries,
            vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]
        );
        assert_eq!(table.total(), 11);
        assert_eq!(table.count(&'z'), 0);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::<u8>::from_symbols(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.entropy(), 0.0);
    }

    #[test]
    fn test_from_counts_merges_and_drops_zero() {
        let table = FrequencyTable::from_counts(vec![('x', 3), ('y', 0), ('x', 2), ('z', 1)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(&'x'), 5);
        assert_eq!(table.count(&'y'), 0);
        assert_eq!(table.iter().next().map(|(&s, _)| s), Some('x'));
    }

    #[test]
    fn test_huge_counts_saturate() {
        let table = FrequencyTable::from_counts(vec![('a', u64::MAX), ('a', 1), ('b', 7)]);
        assert_eq!(table.count(&'a'), u64::MAX);
        assert_eq!(table.count(&'b'), 7);
        assert_eq!(table.total(), u64::MAX);
    }

    #[test]
    fn test_entropy_uniform() {
        let table = FrequencyTable::from_symbols(vec![0u8, 1, 2, 3]);
        assert!((table.entropy() - 2.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_total_matches_input_length(
            input in prop::collection::vec(0u8..16, 0..200),
        ) {
            let table = FrequencyTable::from_symbols(input.iter().copied());
            prop_assert_eq!(table.total(), input.len() as u64);
            for (s, n) in table.iter() {
                prop_assert!(n > 0);
                prop_assert_eq!(n, input.iter().filter(|&&x| x == *s).count() as u64);
            }
        }
    }
}
