use thiserror::Error;
use ulist_lexer::Span;

/// An error raised by a list operation.
///
/// Operations that fail never leave the list in a modified state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slicing operation was invoked on a list without items.
    #[error("List cannot be empty")]
    Empty,
    /// The end of a range lies before its start.
    #[error("End index {end} cannot be less than start index {start}")]
    InvalidRange { start: isize, end: isize },
    /// An index lies beyond the end of the list.
    #[error("Index {index} is out of bounds for list of length {len}")]
    OutOfBounds { index: usize, len: usize },
    /// A non-wrapping cursor went past the last item.
    #[error("Cursor exhausted at position {position:?} for list of length {len}")]
    CursorExhausted {
        position: Option<usize>,
        len: usize,
    },
    /// The text is not a well-formed list rendering.
    #[error("Parse error at {span:?}: {message}")]
    Parse { span: Span, message: String },
    /// An item in the text could not be converted into the item type.
    #[error("Cannot parse item {value:?} at {span:?}")]
    ParseItem { span: Span, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
