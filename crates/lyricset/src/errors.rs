//! # Error Types

/// Errors from lyricset operations.
#[derive(Debug, thiserror::Error)]
pub enum LyricsError {
    /// A required column is missing from the CSV header.
    #[error("missing required column: {column:?}")]
    MissingColumn {
        /// The name of the missing column.
        column: String,
    },

    /// Dataset index outside of ``0..len``.
    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,

        /// The dataset length.
        len: usize,
    },

    /// CSV parse or read error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for lyricset operations.
pub type LRResult<T> = core::result::Result<T, LyricsError>;
