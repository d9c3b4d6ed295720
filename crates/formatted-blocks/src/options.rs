//! Configuration options for conversion

/// Default maximum nesting depth accepted by the converter.
///
/// Each input level costs several stack frames, so this stays low enough to
/// fit a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for tree conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest input nesting level converted before failing with
    /// [`ConvertError::TooDeep`](crate::ConvertError::TooDeep). The root is
    /// at depth 0.
    pub max_depth: usize,

    /// Drop nodes whose text is exactly `"\n"`
    pub drop_newline_text: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            drop_newline_text: true,
        }
    }
}
