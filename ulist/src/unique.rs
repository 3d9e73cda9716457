use std::hash::Hash;

use ahash::AHashSet;

use crate::list::UList;

impl<T: Clone + Eq + Hash> UList<T> {
    /// A new list without duplicates.
    ///
    /// The first occurrence of each item is kept, in the original order.
    pub fn find_unique(&self) -> UList<T> {
        let mut seen = AHashSet::with_capacity(self.len());
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }
}
