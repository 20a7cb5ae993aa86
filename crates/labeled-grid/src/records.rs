//! Building grids from key/value records
//!
//! Each record becomes one row labeled with its key. Field keys become
//! columns, in order of first appearance, after any override columns. A
//! scalar record fills a single value column.

use ahash::AHashMap;
use log::debug;

use crate::cell::Cell;
use crate::grid::{GridInit, GridState, LabeledGrid};
use crate::matrix;

/// One record value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A single value, placed in [`RecordOptions::value_column`]
    Scalar(String),
    /// Named fields, one column per key
    Fields(Vec<(String, String)>),
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Record::Scalar(value.to_string())
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Record::Scalar(value)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record::Fields(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Options for converting records into a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOptions {
    /// Columns placed first, in this order, whether or not any record uses them
    pub column_override: Option<Vec<String>>,
    /// Column that holds scalar records
    pub value_column: String,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            column_override: None,
            value_column: "value".to_string(),
        }
    }
}

impl RecordOptions {
    pub fn with_column_override<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_override = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_value_column<S: Into<String>>(mut self, column: S) -> Self {
        self.value_column = column.into();
        self
    }
}

/// Column labels with a lookup from label to index
struct Columns {
    labels: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Columns {
    fn new(options: &RecordOptions) -> Self {
        let mut columns = Self {
            labels: Vec::new(),
            index: AHashMap::new(),
        };
        for label in options.column_override.iter().flatten() {
            columns.intern(label);
        }
        columns
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), i);
        i
    }
}

fn build(records: &[(String, Record)], options: &RecordOptions) -> GridState {
    let mut columns = Columns::new(options);
    let mut placed: Vec<Vec<(usize, &str)>> = Vec::with_capacity(records.len());

    for (_, record) in records {
        let cells = match record {
            Record::Scalar(value) => vec![(columns.intern(&options.value_column), value.as_str())],
            Record::Fields(fields) => fields
                .iter()
                .map(|(key, value)| (columns.intern(key), value.as_str()))
                .collect(),
        };
        placed.push(cells);
    }

    let width = columns.labels.len();
    let data = placed
        .into_iter()
        .map(|cells| {
            let mut row = matrix::empty_row(width);
            // Later duplicates overwrite earlier ones
            for (col, value) in cells {
                row[col] = Cell::new(value);
            }
            row
        })
        .collect::<Vec<_>>();

    debug!(
        "built {}x{} grid from records",
        data.len(),
        columns.labels.len()
    );

    GridState {
        data,
        column_labels: columns.labels,
        row_labels: records.iter().map(|(key, _)| key.clone()).collect(),
    }
}

/// Convert records into a single grid.
///
/// Every row has one cell per column label. With no records the result has
/// no rows but still lists the override columns.
///
/// ```rust
/// use labeled_grid::{records_to_grid, Record, RecordOptions};
///
/// let state = records_to_grid(
///     [
///         ("alice", Record::from_iter([("age", "31"), ("city", "Oslo")])),
///         ("bob", Record::from_iter([("city", "Rome")])),
///     ],
///     &RecordOptions::default(),
/// );
///
/// assert_eq!(state.row_labels, ["alice", "bob"]);
/// assert_eq!(state.column_labels, ["age", "city"]);
/// assert_eq!(state.data[1][0].value, "");
/// ```
pub fn records_to_grid<I, K>(records: I, options: &RecordOptions) -> GridState
where
    I: IntoIterator<Item = (K, Record)>,
    K: Into<String>,
{
    let records: Vec<(String, Record)> = records.into_iter().map(|(k, r)| (k.into(), r)).collect();
    build(&records, options)
}

/// Convert records into one grid per distinct field-key set.
///
/// Groups appear in order of their first record. Scalar records share one
/// group. Each grid gets the override columns.
pub fn records_to_grids<I, K>(records: I, options: &RecordOptions) -> Vec<GridState>
where
    I: IntoIterator<Item = (K, Record)>,
    K: Into<String>,
{
    let mut group_of: AHashMap<Option<Vec<String>>, usize> = AHashMap::new();
    let mut groups: Vec<Vec<(String, Record)>> = Vec::new();

    for (key, record) in records {
        let shape = match &record {
            Record::Scalar(_) => None,
            Record::Fields(fields) => {
                let mut keys: Vec<String> = fields.iter().map(|(k, _)| k.clone()).collect();
                keys.sort_unstable();
                keys.dedup();
                Some(keys)
            }
        };
        let next = groups.len();
        let group = *group_of.entry(shape).or_insert(next);
        if group == next {
            groups.push(Vec::new());
        }
        groups[group].push((key.into(), record));
    }

    debug!("split records into {} groups", groups.len());
    groups.iter().map(|group| build(group, options)).collect()
}

impl LabeledGrid {
    /// Create a grid from records using default grid options
    pub fn from_records<I, K>(records: I, options: &RecordOptions) -> Self
    where
        I: IntoIterator<Item = (K, Record)>,
        K: Into<String>,
    {
        LabeledGrid::new(GridInit::from(records_to_grid(records, options)))
    }
}
