//! Parsing for the kstat text format exposed under `/proc/spl/kstat`.
//!
//! The files look something like this:
//!
//! ```text
//! 13 1 0x01 123 33456 8613981003 1178296512371
//! name                            type data
//! hits                            4    2394852
//! misses                          4    95838
//! c                               4    2147483648
//! c_max                           4    4294967296
//! size                            4    1073741824
//! ```
//!
//! Only rows with exactly three columns are kept. Rows whose last column is an
//! integer go into the table proper; the rest are remembered by name with their
//! raw text, so a malformed row can be told apart from a missing one. Anything
//! that isn't three columns is ignored.

use indexmap::IndexMap;

/// The integer rows of a kstat file, keyed by their full name and kept in file
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KstatTable {
    entries: IndexMap<String, i128>,
    /// Three-column rows whose value isn't an integer.
    malformed: IndexMap<String, String>,
}

impl KstatTable {
    /// Parses kstat text into a table.
    ///
    /// Names are matched whole, so `c` and `c_max` are separate entries no
    /// matter which appears first. If a name repeats, the last row wins.
    pub fn parse(text: &str) -> Self {
        let mut entries = IndexMap::new();
        let mut malformed = IndexMap::new();

        for line in text.lines() {
            let mut columns = line.split_whitespace();
            let (Some(name), Some(_data_type), Some(value), None) = (
                columns.next(),
                columns.next(),
                columns.next(),
                columns.next(),
            ) else {
                continue;
            };

            match value.parse::<i128>() {
                Ok(value) => {
                    malformed.shift_remove(name);
                    entries.insert(name.to_string(), value);
                }
                Err(_) => {
                    entries.shift_remove(name);
                    malformed.insert(name.to_string(), value.to_string());
                }
            }
        }

        Self { entries, malformed }
    }

    /// Returns the value of the row named exactly `name`.
    pub fn get(&self, name: &str) -> Option<i128> {
        self.entries.get(name).copied()
    }

    /// Returns the raw text of the row named exactly `name`, if that row is
    /// present but its value isn't an integer.
    pub fn get_malformed(&self, name: &str) -> Option<&str> {
        self.malformed.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i128)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
