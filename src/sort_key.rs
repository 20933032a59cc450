use serde::Serialize;
use std::fmt;

/// A fixed-width key whose plain string order is the intended numeral order.
///
/// Built by [`normalize_number`](crate::normalize_number) and
/// [`normalize_roman_number`](crate::normalize_roman_number). Keys are only
/// comparable with keys built for the same separator family and width.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SortKey(String);

impl SortKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SortKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SortKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SortKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.0
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
