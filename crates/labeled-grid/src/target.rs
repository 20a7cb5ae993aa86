//! Column insertion requests and target resolution

use std::fmt;

/// Reference to an existing column.
///
/// On the wire an index is a number and a label is a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColumnTarget {
    /// Zero-based column index
    Index(usize),
    /// First column whose label matches exactly
    Label(String),
}

impl ColumnTarget {
    /// Target a column by its label
    pub fn label<S: Into<String>>(label: S) -> Self {
        ColumnTarget::Label(label.into())
    }

    /// Resolve against the column labels.
    ///
    /// Returns `None` only for a label with no match.
    pub fn resolve(&self, column_labels: &[String]) -> Option<usize> {
        match self {
            ColumnTarget::Index(index) => Some(*index),
            ColumnTarget::Label(label) => column_labels.iter().position(|l| l == label),
        }
    }
}

impl fmt::Display for ColumnTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnTarget::Index(index) => write!(f, "{index}"),
            ColumnTarget::Label(label) => f.write_str(label),
        }
    }
}

impl From<usize> for ColumnTarget {
    fn from(index: usize) -> Self {
        ColumnTarget::Index(index)
    }
}

impl From<&str> for ColumnTarget {
    fn from(label: &str) -> Self {
        ColumnTarget::label(label)
    }
}

impl From<String> for ColumnTarget {
    fn from(label: String) -> Self {
        ColumnTarget::Label(label)
    }
}

/// Placement of a new column relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Insert at the target index, shifting the target right
    Before,
    /// Insert immediately after the target
    #[default]
    After,
}

impl Position {
    /// Insertion offset for a resolved target index
    pub fn offset(self, index: usize) -> usize {
        match self {
            Position::Before => index,
            Position::After => index.saturating_add(1),
        }
    }
}

/// A request to insert one column.
///
/// With no target the column is appended after the last one and `position`
/// is ignored.
///
/// ```rust
/// use labeled_grid::{AddColumn, Position};
///
/// let request = AddColumn::new().labeled("Total").before("Tax");
/// assert_eq!(request.position, Position::Before);
/// assert_eq!(request.column_label.as_deref(), Some("Total"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, rename_all = "camelCase", deny_unknown_fields)
)]
pub struct AddColumn {
    /// Label for the new column (empty when `None`)
    pub column_label: Option<String>,
    /// Placement relative to `target`
    pub position: Position,
    /// Column to insert next to
    #[cfg_attr(feature = "serde", serde(rename = "targetIndex"))]
    pub target: Option<ColumnTarget>,
}

impl AddColumn {
    /// An append-at-end request with no label
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label of the new column
    pub fn labeled<S: Into<String>>(mut self, label: S) -> Self {
        self.column_label = Some(label.into());
        self
    }

    /// Insert before the given column
    pub fn before<T: Into<ColumnTarget>>(mut self, target: T) -> Self {
        self.target = Some(target.into());
        self.position = Position::Before;
        self
    }

    /// Insert after the given column
    pub fn after<T: Into<ColumnTarget>>(mut self, target: T) -> Self {
        self.target = Some(target.into());
        self.position = Position::After;
        self
    }
}
