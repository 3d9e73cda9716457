//! An ordered list with slicing, drop and cursor utilities.
//!
//! [`UList`] owns its items. Slicing and the drop operations produce new
//! lists and leave the source alone. Cursors are separate values that only
//! track a position; see [`Cursor`].
//!
//! ```
//! use ulist::{ulist, Wrap};
//!
//! let list = ulist![5, 5, 6, 4, 6];
//! assert_eq!(list.drop_while_true(|x| *x == 5).unwrap(), [6, 4, 6]);
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.next(&list, Wrap::Yes), Ok(&5));
//! ```
mod cursor;
mod error;
mod format;
mod list;
mod parse;
mod unique;

pub use cursor::{Cursor, CursorIter, Wrap};
pub use error::{Error, Result};
pub use list::UList;
