use crate::config::SortKeyConfig;
use crate::sort_key::SortKey;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Internal representation of a keyed name.
struct KeyedRow {
    name: String,
    token: Option<String>,
    key: Option<SortKey>,
}

/// Text table of names with their matched tokens and sort keys.
///
/// Rows are listed in key order; names without a token come last, in the
/// order they were pushed.
///
/// ```text
/// I.II Scope     I.II     00001|00002//
/// IV Terms       IV       00004//
/// Appendix       -        -
/// ```
pub struct SortKeyTable {
    config: SortKeyConfig,
    rows: Vec<KeyedRow>,
}

impl SortKeyTable {
    pub fn new(config: SortKeyConfig) -> Self {
        Self {
            config,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        let (token, key) = match self.config.matcher.try_match(&name) {
            Some(found) => (
                Some(found.token.to_string()),
                Some(found.sort_key(self.config.width)),
            ),
            None => (None, None),
        };
        self.rows.push(KeyedRow { name, token, key });
        self
    }

    pub fn extend<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.push(name);
        }
        self
    }

    /// Names in key order, unmatched names last.
    pub fn sorted_names(&self) -> Vec<&str> {
        self.sorted_rows()
            .into_iter()
            .map(|row| row.name.as_str())
            .collect()
    }

    fn sorted_rows(&self) -> Vec<&KeyedRow> {
        let mut rows: Vec<&KeyedRow> = self.rows.iter().collect();
        // stable: equal keys keep push order
        rows.sort_by(|a, b| match (&a.key, &b.key) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        rows
    }
}

const COLUMN_GAP: usize = 2;
const MISSING: &str = "-";

fn write_cell(f: &mut fmt::Formatter<'_>, text: &str, column_width: usize) -> fmt::Result {
    f.write_str(text)?;
    let fill = column_width.saturating_sub(UnicodeWidthStr::width(text)) + COLUMN_GAP;
    for _ in 0..fill {
        f.write_char(' ')?;
    }
    Ok(())
}

impl fmt::Display for SortKeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.sorted_rows();

        let name_width = rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.name.as_str()))
            .max()
            .unwrap_or(0);
        let token_width = rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.token.as_deref().unwrap_or(MISSING)))
            .max()
            .unwrap_or(0);

        let mut is_first = true;
        for row in rows {
            if is_first {
                is_first = false;
            } else {
                f.write_char('\n')?;
            }

            write_cell(f, &row.name, name_width)?;
            write_cell(f, row.token.as_deref().unwrap_or(MISSING), token_width)?;
            match &row.key {
                Some(key) => f.write_str(key.as_str())?,
                None => f.write_str(MISSING)?,
            }
        }

        Ok(())
    }
}
