//! The labeled grid model

use log::{debug, trace, warn};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::matrix::{self, Matrix};
use crate::options::{GridOptions, MissingTarget};
use crate::target::AddColumn;

/// Initial values for a [`LabeledGrid`]. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GridInit {
    /// Cell matrix (defaults to a single empty row)
    pub data: Option<Matrix>,
    /// Column labels (defaults to empty)
    pub column_labels: Option<Vec<String>>,
    /// Row labels (defaults to empty)
    pub row_labels: Option<Vec<String>>,
}

impl GridInit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: Matrix) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_column_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_row_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

impl From<GridState> for GridInit {
    fn from(state: GridState) -> Self {
        Self {
            data: Some(state.data),
            column_labels: Some(state.column_labels),
            row_labels: Some(state.row_labels),
        }
    }
}

/// The matrix together with its row and column labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridState {
    pub data: Matrix,
    pub column_labels: Vec<String>,
    pub row_labels: Vec<String>,
}

impl GridState {
    /// Width of the matrix (length of the first row)
    pub fn width(&self) -> usize {
        matrix::width(&self.data)
    }

    /// Append empty labels until both label sequences cover the matrix.
    ///
    /// Labels longer than the matrix are left alone.
    pub fn pad_labels(&mut self) {
        let width = self.width();
        if self.column_labels.len() < width {
            trace!(
                "padding column labels from {} to {}",
                self.column_labels.len(),
                width
            );
            self.column_labels.resize(width, String::new());
        }

        let rows = self.data.len();
        if self.row_labels.len() < rows {
            trace!("padding row labels from {} to {}", self.row_labels.len(), rows);
            self.row_labels.resize(rows, String::new());
        }
    }

    /// Check that the matrix is rectangular and both label sequences match
    /// its dimensions exactly
    pub fn is_aligned(&self) -> bool {
        matrix::is_rectangular(&self.data)
            && self.column_labels.len() == self.width()
            && self.row_labels.len() == self.data.len()
    }
}

/// A rectangular grid of cells with row and column labels.
///
/// ```rust
/// use labeled_grid::{AddColumn, Cell, GridInit, LabeledGrid};
///
/// let mut grid = LabeledGrid::new(
///     GridInit::new()
///         .with_data(vec![vec![Cell::from("a"), Cell::from("b")]])
///         .with_column_labels(["A", "B"]),
/// );
///
/// grid.add_row(Some("second"), None).unwrap();
/// grid.add_column(AddColumn::new().labeled("New").before("B")).unwrap();
///
/// assert_eq!(grid.state().column_labels, ["A", "New", "B"]);
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGrid {
    state: GridState,
    options: GridOptions,
}

impl Default for LabeledGrid {
    fn default() -> Self {
        Self::new(GridInit::default())
    }
}

impl LabeledGrid {
    /// Create a grid from initial values using default options.
    ///
    /// Missing fields are defaulted and short label sequences are padded with
    /// empty strings.
    pub fn new(init: GridInit) -> Self {
        let mut state = GridState {
            data: init.data.unwrap_or_else(|| vec![Vec::new()]),
            column_labels: init.column_labels.unwrap_or_default(),
            row_labels: init.row_labels.unwrap_or_default(),
        };
        state.pad_labels();
        Self {
            state,
            options: GridOptions::default(),
        }
    }

    /// Create a grid with explicit options.
    ///
    /// With `strict_shapes` a jagged initial matrix is rejected.
    pub fn with_options(init: GridInit, options: GridOptions) -> Result<Self> {
        if options.strict_shapes {
            if let Some(data) = &init.data {
                if let Err(e) = matrix::check_rectangular(data) {
                    warn!("rejecting initial matrix: {e}");
                    return Err(e);
                }
            }
        }
        let mut grid = Self::new(init);
        grid.options = options;
        Ok(grid)
    }

    /// Current options
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    // === State Access ===

    /// Borrow the current state
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GridState {
        self.state.clone()
    }

    /// Consume the grid and return its state
    pub fn into_state(self) -> GridState {
        self.state
    }

    pub fn data(&self) -> &[Vec<Cell>] {
        &self.state.data
    }

    pub fn column_labels(&self) -> &[String] {
        &self.state.column_labels
    }

    pub fn row_labels(&self) -> &[String] {
        &self.state.row_labels
    }

    /// Number of rows in the matrix
    pub fn row_count(&self) -> usize {
        self.state.data.len()
    }

    /// Width of the matrix
    pub fn column_count(&self) -> usize {
        self.state.width()
    }

    /// Get a cell by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.state.data.get(row).and_then(|r| r.get(col))
    }

    /// Index of the first column with this exact label
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.state.column_labels.iter().position(|l| l == label)
    }

    /// Index of the first row with this exact label
    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.state.row_labels.iter().position(|l| l == label)
    }

    /// See [`GridState::is_aligned`]
    pub fn is_aligned(&self) -> bool {
        self.state.is_aligned()
    }

    // === Replacement ===

    /// Replace the matrix.
    ///
    /// Labels are not touched unless `pad_labels_on_replace` is set. With
    /// `strict_shapes` a jagged matrix is rejected and the state is unchanged.
    pub fn set_data(&mut self, data: Matrix) -> Result<()> {
        if self.options.strict_shapes {
            if let Err(e) = matrix::check_rectangular(&data) {
                warn!("rejecting matrix: {e}");
                return Err(e);
            }
        }
        self.state.data = data;
        self.repad();
        Ok(())
    }

    /// Replace the column labels
    pub fn set_column_labels(&mut self, labels: Vec<String>) {
        self.state.column_labels = labels;
        self.repad();
    }

    /// Replace the row labels
    pub fn set_row_labels(&mut self, labels: Vec<String>) {
        self.state.row_labels = labels;
        self.repad();
    }

    fn repad(&mut self) {
        if self.options.pad_labels_on_replace {
            self.state.pad_labels();
        }
    }

    // === Structural Edits ===

    /// Append a row.
    ///
    /// Without `row`, the new row holds one empty cell per column of the
    /// first row. The label defaults to the empty string.
    pub fn add_row(&mut self, row_label: Option<&str>, row: Option<Vec<Cell>>) -> Result<()> {
        let width = self.state.width();
        let row = match row {
            Some(row) => {
                if self.options.strict_shapes && !self.state.data.is_empty() && row.len() != width
                {
                    let err = Error::ShapeMismatch {
                        row: self.state.data.len(),
                        expected: width,
                        actual: row.len(),
                    };
                    warn!("rejecting row: {err}");
                    return Err(err);
                }
                row
            }
            None => matrix::empty_row(width),
        };

        self.state.data.push(row);
        self.state
            .row_labels
            .push(row_label.unwrap_or_default().to_string());
        debug!(
            "appended row {} ({} rows)",
            self.state.data.len() - 1,
            self.state.data.len()
        );
        Ok(())
    }

    /// Insert an empty column into every row and a label into the column
    /// labels.
    ///
    /// The target is resolved once against the column labels. `Before`
    /// inserts at the target index, `After` immediately after it. Offsets
    /// past the end are clamped to the end of each sequence. Without a target
    /// the column is appended.
    ///
    /// Returns the position of the new column label.
    pub fn add_column(&mut self, request: AddColumn) -> Result<usize> {
        let AddColumn {
            column_label,
            position,
            target,
        } = request;

        let index = match &target {
            None => None,
            Some(target) => match target.resolve(&self.state.column_labels) {
                Some(index) => Some(index),
                None => match self.options.missing_target {
                    MissingTarget::Append => {
                        warn!("column target {target} not found, appending");
                        None
                    }
                    MissingTarget::Error => {
                        warn!("column target {target} not found");
                        return Err(Error::TargetNotFound(target.to_string()));
                    }
                },
            },
        };

        let label = column_label.unwrap_or_default();
        let inserted_at = match index {
            Some(index) => {
                let offset = position.offset(index);
                let clamped_rows = matrix::insert_empty_column(&mut self.state.data, offset);
                if clamped_rows > 0 {
                    warn!("column offset {offset} out of range for {clamped_rows} rows, clamped");
                }
                if offset > self.state.column_labels.len() {
                    warn!(
                        "column offset {offset} out of range, clamping label to {}",
                        self.state.column_labels.len()
                    );
                }
                matrix::insert_clamped(&mut self.state.column_labels, offset, label)
            }
            None => {
                matrix::push_empty_column(&mut self.state.data);
                self.state.column_labels.push(label);
                self.state.column_labels.len() - 1
            }
        };

        debug!(
            "inserted column at {inserted_at} ({} columns)",
            self.state.column_labels.len()
        );
        Ok(inserted_at)
    }
}
