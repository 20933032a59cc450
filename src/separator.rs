use crate::errors::{SortKeyError, SortKeyResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Punctuation joining the segments of a compound numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    /// `1.2.3`, `I.II.III`
    Dot,
    /// `1-2-3`, `I-II-III`
    Dash,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Dot => '.',
            Separator::Dash => '-',
        }
    }

    /// Parse a separator designator.
    ///
    /// `None`, `""` and whitespace-only strings all mean "no separator" and
    /// yield `Ok(None)`.
    pub fn from_designator(designator: Option<&str>) -> SortKeyResult<Option<Separator>> {
        match designator.map(str::trim) {
            None | Some("") => Ok(None),
            Some(other) => other.parse().map(Some),
        }
    }
}

impl FromStr for Separator {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Separator::Dot),
            "-" => Ok(Separator::Dash),
            other => Err(SortKeyError::UnknownSeparator {
                designator: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = SortKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(sep: Separator) -> Self {
        sep.as_char().to_string()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
