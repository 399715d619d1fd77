//! # Character Codec
//!
//! Maps characters to integer labels by their position in a fixed
//! printable-character [`ALPHABET`], and pads label sequences to a fixed
//! length.
//!
//! Labels are signed so that the "not found" label (``-1``) and the
//! loss-ignore sentinel ([`IGNORE_LABEL`]) can share a sequence with real
//! character labels.

/// A character label.
pub type Label = i64;

/// The printable-character alphabet.
///
/// Digits, lowercase, uppercase, punctuation, then whitespace;
/// a character's label is its position in this string.
pub const ALPHABET: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// The number of characters in [`ALPHABET`].
pub const NUM_CHARS: usize = 100;

/// The label for characters outside of [`ALPHABET`].
pub const NOT_FOUND_LABEL: Label = -1;

/// The default pad label; one past the last alphabet position.
pub const DEFAULT_PAD_LABEL: Label = NUM_CHARS as Label;

/// The target pad label; masked out by downstream loss functions.
pub const IGNORE_LABEL: Label = -100;

// ALPHABET is pure ASCII, so byte positions are char positions.
const _: () = assert!(ALPHABET.len() == NUM_CHARS);

/// Get the label of a character.
///
/// ## Returns
/// The position of `c` in [`ALPHABET`], or [`NOT_FOUND_LABEL`].
#[inline]
pub fn character_to_label(c: char) -> Label {
    if !c.is_ascii() {
        return NOT_FOUND_LABEL;
    }
    ALPHABET
        .bytes()
        .position(|b| b == c as u8)
        .map_or(NOT_FOUND_LABEL, |idx| idx as Label)
}

/// Get the character for a label, if it is an alphabet position.
///
/// Pad labels, [`NOT_FOUND_LABEL`] and [`IGNORE_LABEL`] all map to `None`.
#[inline]
pub fn label_to_character(label: Label) -> Option<char> {
    usize::try_from(label)
        .ok()
        .and_then(|idx| ALPHABET.as_bytes().get(idx))
        .map(|&b| b as char)
}

/// Encode a string as one label per character.
///
/// The result always has `text.chars().count()` entries;
/// unknown characters become [`NOT_FOUND_LABEL`].
pub fn string_to_label(text: &str) -> Vec<Label> {
    text.chars().map(character_to_label).collect()
}

/// Decode labels back to a string.
///
/// Labels which are not alphabet positions are skipped.
pub fn label_to_string(labels: &[Label]) -> String {
    labels
        .iter()
        .filter_map(|&label| label_to_character(label))
        .collect()
}

/// Pad a label sequence out to `max_length`.
///
/// Appends `pad_label` until the sequence is `max_length` long.
/// A sequence already at or past `max_length` is returned unchanged;
/// it is never truncated.
///
/// ## Arguments
/// * `seq` - The labels to pad.
/// * `max_length` - The target length.
/// * `pad_label` - The filler label; usually [`DEFAULT_PAD_LABEL`] or [`IGNORE_LABEL`].
pub fn pad_sequence(
    mut seq: Vec<Label>,
    max_length: usize,
    pad_label: Label,
) -> Vec<Label> {
    if let Some(count) = max_length.checked_sub(seq.len()) {
        seq.extend(core::iter::repeat_n(pad_label, count));
    }
    seq
}
