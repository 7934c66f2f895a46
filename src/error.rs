//! Error types for timecode operations.

use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur when constructing timecode values.
///
/// The codec itself ([`parse`](crate::parse) / [`format`](crate::format))
/// never fails: malformed input is clamped or zero-filled. Errors exist only
/// at the typed seams, namely unknown frame-rate labels and malformed
/// calendar dates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimecodeError {
    /// Frame-rate label is not one of the supported rates.
    #[error("unknown frame rate: {label}")]
    UnknownFrameRate {
        /// The label that failed to resolve.
        label: String,
    },

    /// Calendar date part failed to parse as `YYYY-MM-DD`.
    #[error("invalid date: {source}")]
    InvalidDate {
        /// The underlying date parse failure.
        #[from]
        source: chrono::ParseError,
    },
}

impl TimecodeError {
    /// Create an unknown frame rate error.
    pub fn unknown_frame_rate(label: impl Into<String>) -> Self {
        Self::UnknownFrameRate {
            label: label.into(),
        }
    }
}
