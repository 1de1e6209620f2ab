use std::collections::HashMap;

use crate::symbol::Symbol;


/// Occurrence count of every distinct symbol of an input.
///
/// Entries are kept in order of first appearance, which the tree builder uses to
/// break ties between equally frequent symbols.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {

    entries: Vec<(T, usize)>,
    index: HashMap<T, usize>

}

impl<T> FrequencyTable<T>
where
    T: Symbol
{

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new()
        }
    }


    pub fn from_symbols(data: impl Iterator<Item = T>) -> Self {

        let mut table = Self::new();

        for symbol in data {
            table.add(symbol);
        }

        table
    }


    pub fn add(&mut self, symbol: T) {

        let next = self.entries.len();
        let i = *self.index.entry(symbol).or_insert(next);

        if i == next {
            self.entries.push((symbol, 1));
        } else {
            self.entries[i].1 += 1;
        }
    }


    pub fn count(&self, symbol: &T) -> usize {
        self.index.get(symbol)
            .map_or(0, |&i| self.entries[i].1)
    }


    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Sum of all counts, equal to the length of the analyzed input.
    pub fn total(&self) -> usize {
        self.entries.iter()
            .map(|(_, count)| count)
            .sum()
    }


    /// Symbols and their counts in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.entries.iter().copied()
    }

}

impl<T: Symbol> PartialEq for FrequencyTable<T> {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the entries
        self.entries == other.entries
    }
}

impl<T: Symbol> Eq for FrequencyTable<T> {}

impl<T: Symbol> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
