//! # Lyrics Table
//!
//! The in-memory row table behind [`LyricsDataset`](crate::LyricsDataset),
//! with the CSV loader and the two row filters.

use std::{
    collections::{HashMap, HashSet},
    io::Read,
    path::Path,
};

use crate::errors::{LRResult, LyricsError};

/// The lyric body column.
pub const TEXT_COLUMN: &str = "text";

/// The primary artist column; used for grouping.
pub const ARTIST_COLUMN: &str = "artist";

/// The artist list column; used for allow-list filtering.
pub const ARTISTS_COLUMN: &str = "artists";

/// One row of the lyrics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricRecord {
    /// The raw lyric text.
    pub text: String,

    /// The primary artist.
    pub artist: String,

    /// All credited artists, when the source has an ``artists`` column.
    pub artists: Option<Vec<String>>,
}

impl LyricRecord {
    /// The length of the text, in characters.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Does the ``artists`` list contain any of `names`?
    ///
    /// Records without an ``artists`` list never match.
    pub fn credits_any(
        &self,
        names: &HashSet<&str>,
    ) -> bool {
        self.artists
            .as_ref()
            .is_some_and(|artists| artists.iter().any(|a| names.contains(a.as_str())))
    }
}

/// Parse an ``artists`` field.
///
/// Accepts a single bare name, or a bracketed list as written by dataframe
/// exporters: ``['X', 'Y']`` or ``["X", "Y"]``. Commas inside quoted names
/// do not split.
pub fn parse_artist_list(field: &str) -> Vec<String> {
    let field = field.trim();
    match field
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) => split_quoted_list(inner),
        None => vec![unquote(field).to_string()],
    }
}

/// Split on commas outside of ``'..'`` / ``".."`` quoted items.
///
/// A quote only opens at the start of an item, so apostrophes inside
/// bare names are kept.
fn split_quoted_list(inner: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in inner.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' if current.trim().is_empty() => {
                    current.clear();
                    quote = Some(c);
                }
                ',' => items.push(core::mem::take(&mut current)),
                _ => current.push(c),
            },
        }
    }
    items.push(current);

    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn unquote(s: &str) -> &str {
    for q in ['\'', '"'] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
) -> LRResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| LyricsError::MissingColumn {
            column: column.to_string(),
        })
}

/// An ordered, in-memory table of [`LyricRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsTable {
    records: Vec<LyricRecord>,
}

impl From<Vec<LyricRecord>> for LyricsTable {
    fn from(records: Vec<LyricRecord>) -> Self {
        Self { records }
    }
}

impl LyricsTable {
    /// Read a table from a CSV file.
    ///
    /// ## Arguments
    /// * `path` - The CSV file path.
    /// * `require_artists` - Fail if the ``artists`` column is absent.
    pub fn read_csv_path<P: AsRef<Path>>(
        path: P,
        require_artists: bool,
    ) -> LRResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_csv(file, require_artists)
    }

    /// Read a table from CSV data with a header row.
    ///
    /// ``text`` and ``artist`` columns are required; other columns
    /// (beyond ``artists``) are ignored.
    pub fn read_csv<R: Read>(
        reader: R,
        require_artists: bool,
    ) -> LRResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let text_idx = column_index(&headers, TEXT_COLUMN)?;
        let artist_idx = column_index(&headers, ARTIST_COLUMN)?;
        let artists_idx = match column_index(&headers, ARTISTS_COLUMN) {
            Ok(idx) => Some(idx),
            Err(err) if require_artists => return Err(err),
            Err(_) => None,
        };

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let field = |idx: usize| row.get(idx).unwrap_or_default();
            records.push(LyricRecord {
                text: field(text_idx).to_string(),
                artist: field(artist_idx).to_string(),
                artists: artists_idx.map(|idx| parse_artist_list(field(idx))),
            });
        }

        Ok(records.into())
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The rows, in order.
    pub fn records(&self) -> &[LyricRecord] {
        &self.records
    }

    /// Get a row by position.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&LyricRecord> {
        self.records.get(index)
    }

    /// Keep only the rows whose ``artists`` list names an allowed artist.
    ///
    /// Row order is preserved, and positions are contiguous afterwards.
    pub fn retain_artists<S: AsRef<str>>(
        &mut self,
        allowed: &[S],
    ) {
        let allowed: HashSet<&str> = allowed.iter().map(|s| s.as_ref()).collect();
        self.records.retain(|r| r.credits_any(&allowed));
    }

    /// Keep only the rows whose ``artist`` has more than `min_song_count` rows.
    ///
    /// Row order is preserved, and positions are contiguous afterwards.
    pub fn retain_min_song_count(
        &mut self,
        min_song_count: usize,
    ) {
        let keep: Vec<bool> = {
            let counts = self.artist_counts();
            self.records
                .iter()
                .map(|r| counts[r.artist.as_str()] > min_song_count)
                .collect()
        };

        let mut keep = keep.into_iter();
        self.records.retain(|_| keep.next().unwrap_or(false));
    }

    /// Count rows per ``artist``.
    pub fn artist_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in &self.records {
            *counts.entry(r.artist.as_str()).or_default() += 1;
        }
        counts
    }

    /// The distinct ``artist`` values, in first-seen order.
    pub fn distinct_artists(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.artist.as_str()))
            .map(|r| r.artist.clone())
            .collect()
    }

    /// The longest ``text``, in characters; 0 for an empty table.
    pub fn max_text_len(&self) -> usize {
        self.records
            .iter()
            .map(LyricRecord::text_len)
            .max()
            .unwrap_or_default()
    }
}
