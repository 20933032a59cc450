#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixed-width sort keys for numbered names.
//!
//! Names such as `10. Appendix`, `1.2.3 Scope` or `IV-ii Terms` sort badly
//! as plain strings. This crate finds the numeral at the front of a name and
//! turns it into a key whose plain string order is the numeric order:
//!
//! ```
//! use layered_sort_keys::MatcherKind;
//!
//! let a = MatcherKind::CompoundDot.sort_key("2.1 Scope", 8).unwrap();
//! let b = MatcherKind::CompoundDot.sort_key("10.1 Appendix", 8).unwrap();
//! assert_eq!(a.as_str(), "00000002|00000001//");
//! assert!(a < b);
//! ```
//!
//! ## Matchers
//!
//! | Matcher               | Segment      | Separator |
//! |-----------------------|--------------|-----------|
//! | `Plain`               | `0-9`        |           |
//! | `CompoundDot`         | `0-9`        | `.`       |
//! | `CompoundDash`        | `0-9`        | `-`       |
//! | `Roman`               | `ivxlcdm`    |           |
//! | `CompoundRomanDot`    | `ivxlcdm`    | `.`       |
//! | `CompoundRomanDash`   | `ivxlcdm`    | `-`       |
//!
//! ## Keys
//!
//! [`normalize_number`] and [`normalize_roman_number`] split a token on its
//! separator, left-pad every segment with zeros, join them with `|` and
//! append `//`. Decimal segments are never parsed, so digit runs of any
//! length are fine. Segments longer than the width are kept whole.
//!
//! Malformed input is keyed, not rejected.

mod config;
mod display;
mod errors;
mod matcher;
mod normalize;
mod pad;
mod roman;
mod separator;
mod sort_key;

pub use config::SortKeyConfig;
pub use display::SortKeyTable;
pub use errors::{SortKeyError, SortKeyResult};
pub use matcher::{MatcherKind, NumeralFamily, NumeralMatch};
pub use normalize::{
    normalize_number, normalize_roman_number, DEFAULT_WIDTH, KEY_SEGMENT_JOINER, KEY_SENTINEL,
};
pub use pad::pad_left;
pub use roman::{is_roman_letter, roman_digit_value, roman_to_int_str, ROMAN_LETTERS};
pub use separator::Separator;
pub use sort_key::SortKey;
