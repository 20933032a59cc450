//! Sort key configuration.

use crate::errors::{SortKeyError, SortKeyResult};
use crate::matcher::MatcherKind;
use crate::normalize::DEFAULT_WIDTH;
use crate::sort_key::SortKey;
use serde::{Deserialize, Serialize};

/// Which matcher to key names with, and how wide each segment is.
///
/// ```toml
/// matcher = "compound-roman-dot"
/// width = 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKeyConfig {
    #[serde(default = "default_matcher")]
    pub matcher: MatcherKind,
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_matcher() -> MatcherKind {
    MatcherKind::Plain
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl SortKeyConfig {
    pub fn new(matcher: MatcherKind) -> Self {
        Self {
            matcher,
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the segment width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the matcher.
    pub fn with_matcher(mut self, matcher: MatcherKind) -> Self {
        self.matcher = matcher;
        self
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(content: &str) -> SortKeyResult<Self> {
        let config: SortKeyConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::debug!(matcher = %config.matcher, width = config.width, "loaded sort key config");
        Ok(config)
    }

    pub fn validate(&self) -> SortKeyResult<()> {
        if self.width == 0 {
            return Err(SortKeyError::ZeroWidth);
        }
        Ok(())
    }

    /// Key the numeral at the front of `text`, if there is one.
    pub fn sort_key(&self, text: &str) -> Option<SortKey> {
        self.matcher.sort_key(text, self.width)
    }
}

impl Default for SortKeyConfig {
    fn default() -> Self {
        Self::new(default_matcher())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SortKeyConfig::default();
        assert_eq!(config.matcher, MatcherKind::Plain);
        assert_eq!(config.width, 8);
    }

    #[test]
    fn test_from_toml() {
        let config = SortKeyConfig::from_toml_str(
            r#"
            matcher = "compound-roman-dot"
            width = 5
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            SortKeyConfig::new(MatcherKind::CompoundRomanDot).with_width(5)
        );
    }

    #[test]
    fn test_from_toml_fills_defaults() {
        let config = SortKeyConfig::from_toml_str(r#"matcher = "compound-dash""#).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);

        let config = SortKeyConfig::from_toml_str("").unwrap();
        assert_eq!(config, SortKeyConfig::default());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(
            SortKeyConfig::from_toml_str("width = 0"),
            Err(SortKeyError::ZeroWidth)
        );
    }

    #[test]
    fn test_unknown_matcher_rejected() {
        let err = SortKeyConfig::from_toml_str(r#"matcher = "compound-slash""#).unwrap_err();
        assert!(matches!(err, SortKeyError::Config { .. }), "{:?}", err);
    }

    #[test]
    fn test_sort_key() {
        let config = SortKeyConfig::new(MatcherKind::CompoundDot).with_width(3);
        assert_eq!(config.sort_key("  1.22.3. Intro").unwrap(), "001|022|003//");
        assert_eq!(config.sort_key("Intro 1.2"), None);
    }
}
