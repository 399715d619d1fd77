//! # `lyricset` Character-Level Lyrics Dataset
//!
//! Reads a CSV of song lyrics, optionally filters it by artist, and serves
//! each lyric as fixed-length integer character labels for next-character
//! prediction models.
//!
//! See:
//! * [`codec`] to map characters to labels, and pad label sequences.
//! * [`dataset`] for the indexed dataset and its load options.
//! * [`records`] for the in-memory table and the row filters.
//!
//! Batching and shuffling are left to the consumer; see [`IndexedDataset`].
//!
//! ## Crate Features
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Loading a Dataset
//!
//! ```rust,ignore
//! use lyricset::{IndexedDataset, LyricsDatasetOptions};
//!
//! let dataset = LyricsDatasetOptions::default()
//!     .with_artists(Some(vec!["Nina Simone".to_string()]))
//!     .load("lyrics.csv")?;
//!
//! let item = dataset.get(0)?;
//! // item.input, item.target: Vec<i64> of len dataset.max_text_len()
//! // item.length: the unpadded length
//! ```
#![warn(missing_docs, unused)]

pub mod codec;
pub mod dataset;
pub mod errors;
pub mod records;

#[doc(inline)]
pub use codec::{
    ALPHABET,
    DEFAULT_PAD_LABEL,
    IGNORE_LABEL,
    Label,
    NOT_FOUND_LABEL,
    NUM_CHARS,
    character_to_label,
    label_to_character,
    label_to_string,
    pad_sequence,
    string_to_label,
};
#[doc(inline)]
pub use dataset::{DatasetSummary, EncodedItem, IndexedDataset, LyricsDataset, LyricsDatasetOptions};
#[doc(inline)]
pub use errors::{LRResult, LyricsError};
#[doc(inline)]
pub use records::{LyricRecord, LyricsTable};
