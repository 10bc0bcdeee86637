//! Positional rows mapped onto header names.

use serde::{Deserialize, Serialize};

/// One data row keyed by header name, in header order.
///
/// Lookups on a duplicated header name see the right-most column, matching
/// how a later column overwrites an earlier one when a row is turned into a
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    /// Maps `cells` onto `headers` by position. Missing trailing cells become
    /// empty strings; cells beyond the header width are dropped.
    pub fn from_cells<S: AsRef<str>>(headers: &[S], cells: &[S]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = cells.get(idx).map_or("", |cell| cell.as_ref());
                (header.as_ref().to_string(), value.to_string())
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// First non-empty value among `keys`, tried in order.
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_trailing_cells_are_empty() {
        let row = RawRow::from_cells(&["House", "Name", "Notes"], &["House 1", "Ann"]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("Notes"), Some(""));
        assert_eq!(row.get("Missing"), None);
    }

    #[test]
    fn test_extra_cells_dropped() {
        let row = RawRow::from_cells(&["House"], &["House 1", "stray"]);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![("House", "House 1")]);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let row = RawRow::from_cells(&["Name", "Name"], &["first", "second"]);
        assert_eq!(row.get("Name"), Some("second"));
    }

    #[test]
    fn test_first_non_empty() {
        let row = RawRow::from_cells(&["House", "Address"], &["", "12 Mill Lane"]);
        assert_eq!(row.first_non_empty(&["House", "Address"]), Some("12 Mill Lane"));
        assert_eq!(row.first_non_empty(&["Building"]), None);
    }
}
