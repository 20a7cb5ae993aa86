//! Matrix shape helpers
//!
//! A [`Matrix`] is a plain `Vec` of rows. Nothing in the type enforces
//! rectangularity, so the helpers here are what mutations go through to keep
//! every row the same length.

use crate::cell::Cell;
use crate::error::{Error, Result};

/// Ordered rows of cells
pub type Matrix = Vec<Vec<Cell>>;

/// Width of a matrix, taken from its first row (0 when there are no rows)
pub fn width(data: &[Vec<Cell>]) -> usize {
    data.first().map_or(0, Vec::len)
}

/// Check whether every row has the same length
pub fn is_rectangular(data: &[Vec<Cell>]) -> bool {
    let expected = width(data);
    data.iter().all(|row| row.len() == expected)
}

/// Validate that every row has the width of the first row.
///
/// Reports the first offending row.
pub fn check_rectangular(data: &[Vec<Cell>]) -> Result<()> {
    let expected = width(data);
    match data
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        Some((row, cells)) => Err(Error::ShapeMismatch {
            row,
            expected,
            actual: cells.len(),
        }),
        None => Ok(()),
    }
}

/// Build a row of `width` empty cells
pub fn empty_row(width: usize) -> Vec<Cell> {
    vec![Cell::default(); width]
}

/// Insert `value` into `seq` at `offset`, clamped to `[0, seq.len()]`.
///
/// Returns the position actually used.
pub(crate) fn insert_clamped<T>(seq: &mut Vec<T>, offset: usize, value: T) -> usize {
    let at = offset.min(seq.len());
    seq.insert(at, value);
    at
}

/// Insert an empty cell into every row at `offset`.
///
/// Each row clamps the offset to its own length, so no cell is ever dropped.
/// Returns the number of rows that were clamped.
pub fn insert_empty_column(data: &mut Matrix, offset: usize) -> usize {
    let mut clamped = 0;
    for row in data.iter_mut() {
        if insert_clamped(row, offset, Cell::default()) != offset {
            clamped += 1;
        }
    }
    clamped
}

/// Append an empty cell to the end of every row
pub fn push_empty_column(data: &mut Matrix) {
    for row in data.iter_mut() {
        row.push(Cell::default());
    }
}
