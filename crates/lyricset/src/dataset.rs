//! # Lyrics Indexed Dataset
//!
//! [`LyricsDataset`] loads a lyrics CSV, applies the optional artist filters
//! once, and then serves each row as a fixed-length [`EncodedItem`] for
//! next-character prediction.
//!
//! ```rust,ignore
//! use lyricset::{IndexedDataset, LyricsDatasetOptions};
//!
//! let dataset = LyricsDatasetOptions::default()
//!     .with_min_song_count(Some(10))
//!     .load("lyrics.csv")?;
//!
//! for index in 0..dataset.len() {
//!     let item = dataset.get(index)?;
//!     assert_eq!(item.input.len(), dataset.max_text_len());
//! }
//! ```

use core::fmt;
use std::path::{Path, PathBuf};

use crate::{
    codec::{DEFAULT_PAD_LABEL, IGNORE_LABEL, Label, pad_sequence, string_to_label},
    errors::{LRResult, LyricsError},
    records::{LyricRecord, LyricsTable},
};

/// Random-access dataset contract, as consumed by batching/shuffling layers.
pub trait IndexedDataset {
    /// The item type.
    type Item;

    /// The number of items.
    fn len(&self) -> usize;

    /// Is the dataset empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the item at `index`.
    ///
    /// ## Errors
    /// [`LyricsError::IndexOutOfRange`] when `index >= len()`.
    fn get(
        &self,
        index: usize,
    ) -> LRResult<Self::Item>;
}

/// One encoded lyric, shifted for next-character prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedItem {
    /// Labels of every character but the last; padded with the input pad label.
    pub input: Vec<Label>,

    /// Labels of every character but the first; padded with the target pad label.
    pub target: Vec<Label>,

    /// The number of non-pad positions; the character count minus one.
    pub length: usize,
}

/// Options for loading a [`LyricsDataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsDatasetOptions {
    /// Keep only artists with strictly more than this many songs.
    pub min_song_count: Option<usize>,

    /// Keep only rows crediting one of these artists.
    pub artists: Option<Vec<String>>,

    /// Pad label for input sequences.
    pub input_pad_label: Label,

    /// Pad label for target sequences.
    pub target_pad_label: Label,
}

impl Default for LyricsDatasetOptions {
    fn default() -> Self {
        Self {
            min_song_count: None,
            artists: None,
            input_pad_label: DEFAULT_PAD_LABEL,
            target_pad_label: IGNORE_LABEL,
        }
    }
}

impl LyricsDatasetOptions {
    /// Sets the per-artist song count threshold.
    pub fn set_min_song_count(
        &mut self,
        min_song_count: Option<usize>,
    ) {
        self.min_song_count = min_song_count;
    }

    /// Sets the per-artist song count threshold.
    pub fn with_min_song_count(
        mut self,
        min_song_count: Option<usize>,
    ) -> Self {
        self.set_min_song_count(min_song_count);
        self
    }

    /// Sets the artist allow-list.
    ///
    /// An empty list is the same as no list.
    pub fn set_artists(
        &mut self,
        artists: Option<Vec<String>>,
    ) {
        self.artists = artists.filter(|a| !a.is_empty());
    }

    /// Sets the artist allow-list.
    ///
    /// An empty list is the same as no list.
    pub fn with_artists(
        mut self,
        artists: Option<Vec<String>>,
    ) -> Self {
        self.set_artists(artists);
        self
    }

    /// Sets the input pad label.
    pub fn with_input_pad_label(
        mut self,
        label: Label,
    ) -> Self {
        self.input_pad_label = label;
        self
    }

    /// Sets the target pad label.
    pub fn with_target_pad_label(
        mut self,
        label: Label,
    ) -> Self {
        self.target_pad_label = label;
        self
    }

    fn artist_filter(&self) -> Option<&[String]> {
        self.artists.as_deref().filter(|a| !a.is_empty())
    }

    /// Load and filter a [`LyricsDataset`] from a CSV file.
    ///
    /// ## Errors
    /// I/O and CSV errors, and [`LyricsError::MissingColumn`] when ``text`` or
    /// ``artist`` is absent, or ``artists`` is absent while an allow-list is set.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, csv_path)))]
    pub fn load<P: AsRef<Path>>(
        &self,
        csv_path: P,
    ) -> LRResult<LyricsDataset> {
        let csv_path = csv_path.as_ref();
        let table = LyricsTable::read_csv_path(csv_path, self.artist_filter().is_some())?;
        log::debug!("read {} rows from {}", table.len(), csv_path.display());

        Ok(self.build(table, csv_path))
    }

    /// Filter an already loaded table into a [`LyricsDataset`].
    ///
    /// Filters run in order (artists, then song count) before the
    /// max text length is taken.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn build<P: Into<PathBuf>>(
        &self,
        mut table: LyricsTable,
        csv_path: P,
    ) -> LyricsDataset {
        if let Some(artists) = self.artist_filter() {
            table.retain_artists(artists);
            log::debug!("{} rows after artist filter {:?}", table.len(), artists);
        }

        if let Some(min_song_count) = self.min_song_count {
            table.retain_min_song_count(min_song_count);
            log::debug!(
                "{} rows after min song count filter (> {})",
                table.len(),
                min_song_count
            );
        }

        let dataset = LyricsDataset {
            csv_path: csv_path.into(),
            max_text_len: table.max_text_len(),
            artists_list: table.distinct_artists(),
            table,
            input_pad_label: self.input_pad_label,
            target_pad_label: self.target_pad_label,
        };

        for line in dataset.summary().to_string().lines() {
            log::info!("{line}");
        }

        dataset
    }
}

/// The load summary of a [`LyricsDataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// The source CSV path.
    pub csv_path: PathBuf,

    /// The number of items.
    pub len: usize,

    /// The number of distinct artists.
    pub num_of_artists: usize,

    /// The padded sequence length.
    pub max_text_len: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Lyrics Dataset")?;
        writeln!(f, "  CSV File      : {}", self.csv_path.display())?;
        writeln!(f, "  Dataset Length: {}", self.len)?;
        writeln!(f, "  Total Artists : {}", self.num_of_artists)?;
        write!(f, "  Max Text Len  : {}", self.max_text_len)
    }
}

/// A filtered lyrics table served as fixed-length [`EncodedItem`]s.
///
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct LyricsDataset {
    csv_path: PathBuf,
    table: LyricsTable,
    max_text_len: usize,
    artists_list: Vec<String>,
    input_pad_label: Label,
    target_pad_label: Label,
}

impl LyricsDataset {
    /// Load a dataset with no filters.
    pub fn open<P: AsRef<Path>>(csv_path: P) -> LRResult<Self> {
        LyricsDatasetOptions::default().load(csv_path)
    }

    /// The source CSV path.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The padded length of every label sequence.
    pub fn max_text_len(&self) -> usize {
        self.max_text_len
    }

    /// The distinct artists, in first-seen order.
    pub fn artists_list(&self) -> &[String] {
        &self.artists_list
    }

    /// The number of distinct artists.
    pub fn num_of_artists(&self) -> usize {
        self.artists_list.len()
    }

    /// The underlying (filtered) table.
    pub fn table(&self) -> &LyricsTable {
        &self.table
    }

    /// Get the raw record at `index`.
    pub fn record(
        &self,
        index: usize,
    ) -> LRResult<&LyricRecord> {
        self.table.get(index).ok_or(LyricsError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Get the encoded item at `index`.
    pub fn get(
        &self,
        index: usize,
    ) -> LRResult<EncodedItem> {
        Ok(self.encode_text(&self.record(index)?.text))
    }

    /// Encode every item, in order.
    pub fn iter(&self) -> impl Iterator<Item = EncodedItem> + '_ {
        self.table
            .records()
            .iter()
            .map(|r| self.encode_text(&r.text))
    }

    /// Encode `text` as an item of this dataset.
    ///
    /// Text longer than [`Self::max_text_len`] is not truncated.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> EncodedItem {
        let labels = string_to_label(text);
        let length = labels.len().saturating_sub(1);

        let (input, target) = match labels.split_first() {
            Some((_, tail)) => (labels[..length].to_vec(), tail.to_vec()),
            None => (Vec::new(), Vec::new()),
        };

        EncodedItem {
            input: pad_sequence(input, self.max_text_len, self.input_pad_label),
            target: pad_sequence(target, self.max_text_len, self.target_pad_label),
            length,
        }
    }

    /// Summarize the dataset.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            csv_path: self.csv_path.clone(),
            len: self.len(),
            num_of_artists: self.num_of_artists(),
            max_text_len: self.max_text_len,
        }
    }
}

impl IndexedDataset for LyricsDataset {
    type Item = EncodedItem;

    fn len(&self) -> usize {
        LyricsDataset::len(self)
    }

    fn get(
        &self,
        index: usize,
    ) -> LRResult<EncodedItem> {
        LyricsDataset::get(self, index)
    }
}
