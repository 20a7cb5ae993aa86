//! Cell type

use std::fmt;

/// A single grid cell.
///
/// The grid never interprets the value; an absent cell is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub value: String,
}

impl Cell {
    /// Create a cell holding the given value
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Check if the cell holds the empty string
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the value as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell { value }
    }
}
