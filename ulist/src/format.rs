use std::fmt::{self, Display, Write};

use crate::list::UList;

pub(crate) const DEFAULT_SEPARATOR: &str = ", ";

fn write_items<T: Display>(
    f: &mut impl Write,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    f.write_char('[')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    f.write_char(']')
}

impl<T: Display> Display for UList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.as_slice(), DEFAULT_SEPARATOR)
    }
}

impl<T: Display> UList<T> {
    /// Render the items in brackets, joined by `separator`.
    ///
    /// The separator is used as given; `format_with(", ")` is the same as
    /// `to_string()`.
    pub fn format_with(&self, separator: &str) -> String {
        let mut s = String::new();
        // writing to a string cannot fail
        let _ = write_items(&mut s, self.as_slice(), separator);
        s
    }
}
