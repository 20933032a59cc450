//! Split, convert, pad and join numeral tokens into sort keys.
//!
//! Both entry points share one policy:
//!
//! 1. Without a separator the whole input is a single segment.
//! 2. With one, the input is split on every separator and empty pieces are
//!    dropped, so `1..1`, `.1` and `1.` behave like `1.1`, `1` and `1`.
//!    An input that leaves no pieces at all keys as one empty segment.
//! 3. Each segment is converted (unchanged for decimal, Roman value for
//!    Roman), left-padded to the width, joined with `|` and closed with
//!    `//`.
//!
//! Nothing is validated. Whitespace inside a segment is kept, and a
//! separator of the other family stays embedded in its segment.

use crate::pad::pad_left;
use crate::roman::roman_to_int_str;
use crate::separator::Separator;
use crate::sort_key::SortKey;

/// Segment width used by [`normalize_number`] when none is given.
pub const DEFAULT_WIDTH: usize = 8;

/// Joins padded segments within a key.
pub const KEY_SEGMENT_JOINER: char = '|';

/// Terminates every key.
pub const KEY_SENTINEL: &str = "//";

/// Build a decimal sort key. `width` defaults to [`DEFAULT_WIDTH`].
///
/// Segments are padded as text and never parsed, so arbitrarily long digit
/// runs keep their exact value.
///
/// ```
/// use layered_sort_keys::{normalize_number, Separator};
///
/// let key = normalize_number("1.2.3", Some(Separator::Dot), None);
/// assert_eq!(key.as_str(), "00000001|00000002|00000003//");
/// ```
pub fn normalize_number(text: &str, separator: Option<Separator>, width: Option<usize>) -> SortKey {
    let width = width.unwrap_or(DEFAULT_WIDTH);
    build_key(text, separator, width, |segment| pad_left(segment, width))
}

/// Build a Roman sort key; each segment is replaced by its Roman value.
pub fn normalize_roman_number(text: &str, separator: Option<Separator>, width: usize) -> SortKey {
    build_key(text, separator, width, |segment| {
        pad_left(&roman_to_int_str(segment), width)
    })
}

fn build_key(
    text: &str,
    separator: Option<Separator>,
    width: usize,
    convert: impl Fn(&str) -> String,
) -> SortKey {
    let segments = split_segments(text, separator);

    let mut key = String::with_capacity(segments.len() * (width + 1) + KEY_SENTINEL.len());
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            key.push(KEY_SEGMENT_JOINER);
        }
        key.push_str(&convert(segment));
    }
    key.push_str(KEY_SENTINEL);

    SortKey::new(key)
}

fn split_segments(text: &str, separator: Option<Separator>) -> Vec<&str> {
    let sep = match separator {
        Some(sep) => sep.as_char(),
        None => return vec![text],
    };

    let segments: Vec<&str> = text.split(sep).filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        tracing::trace!(text, separator = %sep, "input has no segments, keying as empty");
        return vec![""];
    }

    segments
}
