//! Errors raised by the cloud layouter.

/// Everything that can go wrong while placing rectangles.
///
/// A failed call never leaves partial state behind: the layout is exactly
/// what it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("rectangle size must be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("no free position for a {width}x{height} rectangle after {iterations} spiral steps")]
    PlacementTimeout {
        width: i32,
        height: i32,
        iterations: u32,
    },

    #[error("invalid layout option `{option}`: {reason}")]
    InvalidConfig {
        option: &'static str,
        reason: String,
    },

    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

impl LayoutError {
    /// Short machine-readable name, used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutError::InvalidSize { .. } => "invalid_input",
            LayoutError::PlacementTimeout { .. } => "placement_timeout",
            LayoutError::InvalidConfig { .. } => "invalid_config",
            LayoutError::MalformedInput(_) => "malformed_input",
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
