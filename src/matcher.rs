//! Recognizers for numeral tokens at the front of a name.
//!
//! Six matchers share one grammar, parameterized by the character class of
//! a segment (ASCII digits or Roman letters) and an optional separator:
//!
//! - leading whitespace is skipped and never captured
//! - a token is one segment, or for compound matchers a segment followed by
//!   any number of `separator segment` groups
//! - after the token, one dangling own separator is consumed but not
//!   captured
//!
//! Anything else ends the token, including the other family's separator
//! and doubled separators. `5.-2` gives `5`, `xvx.d..i` gives `xvx.d`.

use crate::errors::SortKeyError;
use crate::normalize::{normalize_number, normalize_roman_number};
use crate::separator::Separator;
use crate::sort_key::SortKey;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a single segment of a numeral is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumeralFamily {
    /// ASCII digits `0-9`.
    Decimal,
    /// Letters `i v x l c d m`, either case.
    Roman,
}

impl NumeralFamily {
    fn char_class(self) -> &'static str {
        match self {
            NumeralFamily::Decimal => "[0-9]",
            NumeralFamily::Roman => "[ivxlcdmIVXLCDM]",
        }
    }
}

/// One of the six numeral recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherKind {
    /// `42`
    Plain = 0,
    /// `1.2.3`
    CompoundDot = 1,
    /// `1-2-3`
    CompoundDash = 2,
    /// `xiv`
    Roman = 3,
    /// `I.II.III`
    CompoundRomanDot = 4,
    /// `I-II-III`
    CompoundRomanDash = 5,
}

static PATTERNS: Lazy<[Regex; 6]> = Lazy::new(|| MatcherKind::ALL.map(MatcherKind::build_pattern));

/// A token recognized at the front of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralMatch<'a> {
    pub kind: MatcherKind,
    /// The captured numeral, without leading whitespace or a dangling separator.
    pub token: &'a str,
    /// Text after everything the matcher consumed.
    pub remainder: &'a str,
    /// Bytes consumed from the input: whitespace, token and dangling separator.
    pub consumed: usize,
}

impl<'a> NumeralMatch<'a> {
    /// Key the token with the normalizer for its matcher.
    pub fn sort_key(&self, width: usize) -> SortKey {
        self.kind.normalize(self.token, width)
    }
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 6] = [
        MatcherKind::Plain,
        MatcherKind::CompoundDot,
        MatcherKind::CompoundDash,
        MatcherKind::Roman,
        MatcherKind::CompoundRomanDot,
        MatcherKind::CompoundRomanDash,
    ];

    /// The matcher for a segment family and optional separator.
    pub fn new(family: NumeralFamily, separator: Option<Separator>) -> Self {
        match (family, separator) {
            (NumeralFamily::Decimal, None) => MatcherKind::Plain,
            (NumeralFamily::Decimal, Some(Separator::Dot)) => MatcherKind::CompoundDot,
            (NumeralFamily::Decimal, Some(Separator::Dash)) => MatcherKind::CompoundDash,
            (NumeralFamily::Roman, None) => MatcherKind::Roman,
            (NumeralFamily::Roman, Some(Separator::Dot)) => MatcherKind::CompoundRomanDot,
            (NumeralFamily::Roman, Some(Separator::Dash)) => MatcherKind::CompoundRomanDash,
        }
    }

    pub fn family(self) -> NumeralFamily {
        match self {
            MatcherKind::Plain | MatcherKind::CompoundDot | MatcherKind::CompoundDash => {
                NumeralFamily::Decimal
            }
            MatcherKind::Roman | MatcherKind::CompoundRomanDot | MatcherKind::CompoundRomanDash => {
                NumeralFamily::Roman
            }
        }
    }

    /// The separator joining segments, `None` for the non-compound matchers.
    pub fn separator(self) -> Option<Separator> {
        match self {
            MatcherKind::Plain | MatcherKind::Roman => None,
            MatcherKind::CompoundDot | MatcherKind::CompoundRomanDot => Some(Separator::Dot),
            MatcherKind::CompoundDash | MatcherKind::CompoundRomanDash => Some(Separator::Dash),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::Plain => "plain",
            MatcherKind::CompoundDot => "compound-dot",
            MatcherKind::CompoundDash => "compound-dash",
            MatcherKind::Roman => "roman",
            MatcherKind::CompoundRomanDot => "compound-roman-dot",
            MatcherKind::CompoundRomanDash => "compound-roman-dash",
        }
    }

    /// Find this matcher's token at the front of `text`.
    ///
    /// Returns `None` when, after leading whitespace, the text does not
    /// start with a character of the matcher's class.
    ///
    /// ```
    /// use layered_sort_keys::MatcherKind;
    ///
    /// let m = MatcherKind::CompoundDot.try_match(" 56.78.000.1abc").unwrap();
    /// assert_eq!(m.token, "56.78.000.1");
    /// assert_eq!(m.remainder, "abc");
    ///
    /// assert!(MatcherKind::Plain.try_match("-1").is_none());
    /// ```
    pub fn try_match(self, text: &str) -> Option<NumeralMatch<'_>> {
        let captures = self.pattern().captures(text)?;
        let token = captures.get(1)?;
        let consumed = captures.get(0)?.end();

        Some(NumeralMatch {
            kind: self,
            token: token.as_str(),
            remainder: &text[consumed..],
            consumed,
        })
    }

    /// Key `token` with the normalizer of this matcher's family and separator.
    pub fn normalize(self, token: &str, width: usize) -> SortKey {
        match self.family() {
            NumeralFamily::Decimal => normalize_number(token, self.separator(), Some(width)),
            NumeralFamily::Roman => normalize_roman_number(token, self.separator(), width),
        }
    }

    /// Match the front of `text` and key the token, or `None` if there is
    /// no token.
    pub fn sort_key(self, text: &str, width: usize) -> Option<SortKey> {
        match self.try_match(text) {
            Some(found) => Some(found.sort_key(width)),
            None => {
                tracing::trace!(matcher = self.name(), text, "no numeral token");
                None
            }
        }
    }

    fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }

    fn build_pattern(self) -> Regex {
        let class = self.family().char_class();
        let pattern = match self.separator() {
            None => format!(r"^\s*({class}+)", class = class),
            Some(sep) => {
                let sep = regex::escape(&sep.as_char().to_string());
                format!(
                    r"^\s*({class}+(?:{sep}{class}+)*){sep}?",
                    class = class,
                    sep = sep
                )
            }
        };
        Regex::new(&pattern).expect("Invalid numeral matcher regex")
    }
}

impl FromStr for MatcherKind {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatcherKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SortKeyError::UnknownMatcher {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
