use std::ops::Index;

use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// An ordered list of items with slicing and drop utilities.
///
/// The list owns its items. Slicing and dropping never modify the list they
/// are called on; they produce a new, independent list holding clones of the
/// selected items. Use a shared pointer such as `Rc` as the item type if the
/// items should be shared rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct UList<T> {
    items: Vec<T>,
}

impl<T> Default for UList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> UList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding the given items, in order.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Create a cursor that hasn't been advanced yet.
    ///
    /// The cursor doesn't borrow the list; pass the list to
    /// [`Cursor::next`] on each step.
    pub fn cursor(&self) -> Cursor {
        Cursor::new()
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if self.items.is_empty() {
            debug!(start, end, "slice of empty list");
            return Err(Error::Empty);
        }
        if end < start {
            debug!(start, end, "slice with end before start");
            return Err(Error::InvalidRange {
                start: saturating_isize(start),
                end: saturating_isize(end),
            });
        }
        if end > self.items.len() {
            debug!(start, end, len = self.items.len(), "slice out of bounds");
            return Err(Error::OutOfBounds {
                index: end,
                len: self.items.len(),
            });
        }
        Ok(())
    }

    // the index of the first item for which the predicate doesn't return
    // `expected`, or the length if there is no such item
    fn scan_while(&self, expected: bool, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.items
            .iter()
            .position(|item| predicate(item) != expected)
            .unwrap_or(self.items.len())
    }
}

impl<T: Clone> UList<T> {
    /// A new list with the items in `start..end`.
    ///
    /// Fails on an empty list whatever the indices, when `end` lies before
    /// `start`, or when `end` lies beyond the length of the list. `start ==
    /// end` gives an empty list.
    pub fn slice(&self, start: usize, end: usize) -> Result<UList<T>> {
        self.check_range(start, end)?;
        Ok(Self {
            items: self.items[start..end].to_vec(),
        })
    }

    /// A new list with the items from `start` to the end.
    ///
    /// `start` may equal the length, which gives an empty list.
    pub fn slice_from(&self, start: usize) -> Result<UList<T>> {
        if self.items.is_empty() {
            debug!(start, "slice of empty list");
            return Err(Error::Empty);
        }
        if start > self.items.len() {
            debug!(start, len = self.items.len(), "slice out of bounds");
            return Err(Error::OutOfBounds {
                index: start,
                len: self.items.len(),
            });
        }
        self.slice(start, self.items.len())
    }

    /// Drop items from the start as long as the predicate holds.
    ///
    /// If the predicate holds for every item the result is empty.
    pub fn drop_while_true(&self, predicate: impl FnMut(&T) -> bool) -> Result<UList<T>> {
        self.slice_from(self.scan_while(true, predicate))
    }

    /// Drop items from the start as long as the predicate does not hold.
    pub fn drop_while_false(&self, predicate: impl FnMut(&T) -> bool) -> Result<UList<T>> {
        self.slice_from(self.scan_while(false, predicate))
    }

    /// Drop `n` items from the start.
    pub fn drop(&self, n: usize) -> Result<UList<T>> {
        self.slice_from(n)
    }

    /// Drop `n` items from the end.
    pub fn drop_right(&self, n: usize) -> Result<UList<T>> {
        if self.items.is_empty() {
            debug!(n, "drop_right on empty list");
            return Err(Error::Empty);
        }
        let len = self.items.len();
        match len.checked_sub(n) {
            Some(end) => self.slice(0, end),
            None => {
                debug!(n, len, "drop_right beyond start of list");
                Err(Error::InvalidRange {
                    start: 0,
                    end: -saturating_isize(n - len),
                })
            }
        }
    }
}

// indices beyond `isize::MAX` are reported as `isize::MAX`
fn saturating_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

impl<T> From<Vec<T>> for UList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> From<&[T]> for UList<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> From<UList<T>> for Vec<T> {
    fn from(list: UList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for UList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for UList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T> IntoIterator for UList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for UList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: PartialEq> PartialEq<[T]> for UList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for UList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for UList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

/// Create a [`UList`] from its items, like `vec!`.
#[macro_export]
macro_rules! ulist {
    () => {
        $crate::UList::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::UList::from(vec![$($item),+])
    };
}
