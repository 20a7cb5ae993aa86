//! Grid options

/// What `add_column` does when a label target has no match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTarget {
    /// Append the column at the end, as if no target had been given
    #[default]
    Append,
    /// Fail with [`Error::TargetNotFound`](crate::Error::TargetNotFound)
    Error,
}

/// Options controlling how a [`LabeledGrid`](crate::LabeledGrid) validates
/// and normalizes its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Reject jagged matrices on construction, `set_data` and `add_row`
    pub strict_shapes: bool,
    /// Behavior for unmatched label targets
    pub missing_target: MissingTarget,
    /// Re-pad labels after `set_data` and the label setters
    pub pad_labels_on_replace: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            strict_shapes: false,
            missing_target: MissingTarget::Append,
            pad_labels_on_replace: false,
        }
    }
}

impl GridOptions {
    /// Strict shapes and errors for unmatched targets
    pub fn strict() -> Self {
        Self {
            strict_shapes: true,
            missing_target: MissingTarget::Error,
            ..Self::default()
        }
    }

    pub fn with_strict_shapes(mut self, strict: bool) -> Self {
        self.strict_shapes = strict;
        self
    }

    pub fn with_missing_target(mut self, missing_target: MissingTarget) -> Self {
        self.missing_target = missing_target;
        self
    }

    pub fn with_pad_labels_on_replace(mut self, pad: bool) -> Self {
        self.pad_labels_on_replace = pad;
        self
    }
}
