//! # labeled-grid
//!
//! A 2D grid of cells paired with row and column labels.
//!
//! This crate provides:
//! - [`LabeledGrid`] - The model, with row append and positional column insertion
//! - [`GridState`] - The matrix and its labels, as handed to a renderer
//! - [`AddColumn`] and [`ColumnTarget`] - Column insertion requests, by index or label
//! - [`GridOptions`] - Strictness and normalization settings
//! - [`records_to_grid`] - Building a grid from key/value records
//!
//! ## Example
//!
//! ```rust
//! use labeled_grid::{AddColumn, Cell, GridInit, LabeledGrid};
//!
//! let mut grid = LabeledGrid::new(GridInit::new().with_data(vec![
//!     vec![Cell::from("a"), Cell::from("b")],
//!     vec![Cell::from("c"), Cell::from("d")],
//! ]));
//!
//! // Labels are padded to the matrix shape
//! assert_eq!(grid.column_labels(), ["", ""]);
//!
//! grid.add_row(Some("R3"), None).unwrap();
//! grid.add_column(AddColumn::new().before(1usize)).unwrap();
//!
//! assert_eq!(grid.cell(0, 2), Some(&Cell::from("b")));
//! assert!(grid.is_aligned());
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod options;
pub mod records;
pub mod target;

// Re-exports for convenience
pub use cell::Cell;
pub use error::{Error, Result};
pub use grid::{GridInit, GridState, LabeledGrid};
pub use matrix::Matrix;
pub use options::{GridOptions, MissingTarget};
pub use records::{records_to_grid, records_to_grids, Record, RecordOptions};
pub use target::{AddColumn, ColumnTarget, Position};
