use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::UList;

/// What a cursor does when it moves past the last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    /// Start again at the first item.
    #[default]
    Yes,
    /// Fail with [`Error::CursorExhausted`].
    No,
}

impl From<bool> for Wrap {
    fn from(wrap: bool) -> Self {
        if wrap {
            Wrap::Yes
        } else {
            Wrap::No
        }
    }
}

/// A forward cursor over a list.
///
/// The cursor holds only a position. It's checked against the list given to
/// each call, so items appended to the list in between are picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    position: Option<usize>,
}

impl Cursor {
    /// A cursor that hasn't been advanced yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The position of the item last returned, or `None` before the first
    /// call to `next`.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Return to the state before the first call to `next`.
    pub fn reset(&mut self) {
        self.position = None;
    }

    /// Advance the cursor and return the item it lands on.
    ///
    /// When the cursor moves past the last item it either wraps around to
    /// the first item or fails, depending on `wrap`. A failed call leaves the
    /// position where it was.
    pub fn next<'a, T>(&mut self, list: &'a UList<T>, wrap: impl Into<Wrap>) -> Result<&'a T> {
        let advanced = self.position.map_or(0, |position| position + 1);
        if let Some(item) = list.get(advanced) {
            self.position = Some(advanced);
            return Ok(item);
        }
        match wrap.into() {
            Wrap::Yes => {
                let first = list.first().ok_or_else(|| {
                    debug!("cursor wrap on empty list");
                    Error::Empty
                })?;
                trace!(from = advanced, "cursor wrapped");
                self.position = Some(0);
                Ok(first)
            }
            Wrap::No => {
                debug!(position = ?self.position, len = list.len(), "cursor exhausted");
                Err(Error::CursorExhausted {
                    position: self.position,
                    len: list.len(),
                })
            }
        }
    }

    /// Iterate over the remaining items without wrapping, advancing the
    /// cursor along the way.
    pub fn iter<'c, 'a, T>(&'c mut self, list: &'a UList<T>) -> CursorIter<'c, 'a, T> {
        CursorIter { cursor: self, list }
    }
}

/// An iterator driving a [`Cursor`] until it is exhausted.
pub struct CursorIter<'c, 'a, T> {
    cursor: &'c mut Cursor,
    list: &'a UList<T>,
}

impl<'a, T> Iterator for CursorIter<'_, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.cursor.next(self.list, Wrap::No).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let next = self.cursor.position.map_or(0, |position| position + 1);
        let remaining = self.list.len().saturating_sub(next);
        (remaining, Some(remaining))
    }
}
