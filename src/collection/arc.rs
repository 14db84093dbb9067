use std::{fmt, path::Path};

use super::kstat::KstatTable;
use crate::{
    units::data_units::ByteCount,
    utils::error::{ArcError, Result},
};

/// A snapshot of ARC usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcStats {
    /// Current size of the ARC (`size`).
    pub size: ByteCount,
    /// Target size of the ARC (`c`).
    pub target_size: ByteCount,
    /// Maximum size of the ARC (`c_max`).
    pub max_size: ByteCount,
    pub hits: u64,
    pub misses: u64,
}

impl ArcStats {
    /// Pulls the ARC fields out of a parsed kstat table. Every field has to be
    /// present; nothing defaults to zero. A row that is present but doesn't
    /// hold a usable value is invalid rather than missing.
    pub fn from_table(table: &KstatTable) -> Result<Self> {
        let size = |name: &'static str| -> Result<ByteCount> {
            ByteCount::try_from(field_value(table, name)?).map_err(|err| match err {
                ArcError::InvalidInput(reason) => invalid_field(name, &reason),
                other => other,
            })
        };
        let counter = |name: &'static str| -> Result<u64> {
            let value = field_value(table, name)?;
            u64::try_from(value).map_err(|_| {
                let reason = if value < 0 {
                    format!("'{value}' is negative, counters must be zero or greater")
                } else {
                    format!("'{value}' is too large to be a counter")
                };
                invalid_field(name, &reason)
            })
        };

        Ok(ArcStats {
            size: size("size")?,
            target_size: size("c")?,
            max_size: size("c_max")?,
            hits: counter("hits")?,
            misses: counter("misses")?,
        })
    }

    /// Parses the text of an `arcstats` file.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_table(&KstatTable::parse(text))
    }

    /// Reads and parses an `arcstats` file.
    pub fn read_from(path: &Path) -> Result<Self> {
        crate::debug!("Reading ARC stats from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|err| {
            ArcError::InvalidIo(format!("unable to read '{}': {err}", path.display()))
        })?;
        let stats = Self::parse(&text)?;

        crate::debug!("Parsed ARC stats: {stats:?}");
        Ok(stats)
    }

    pub fn hit_ratio(&self) -> HitRatio {
        HitRatio::new(self.hits, self.misses)
    }
}

/// Returns the integer value of the row `name`.
fn field_value(table: &KstatTable, name: &'static str) -> Result<i128> {
    if let Some(value) = table.get(name) {
        Ok(value)
    } else if let Some(raw) = table.get_malformed(name) {
        Err(invalid_field(name, &format!("'{raw}' is not a whole number")))
    } else {
        Err(ArcError::MissingField(name))
    }
}

fn invalid_field(name: &str, reason: &str) -> ArcError {
    ArcError::InvalidInput(format!("field '{name}' is invalid: {reason}"))
}

/// The share of ARC lookups that were hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitRatio {
    /// A percentage between 0 and 100.
    Percent(f64),
    /// There have been no lookups yet, so there's nothing to take a ratio of.
    NoData,
}

impl HitRatio {
    pub fn new(hits: u64, misses: u64) -> Self {
        let total = u128::from(hits) + u128::from(misses);
        if total == 0 {
            HitRatio::NoData
        } else {
            HitRatio::Percent(hits as f64 / total as f64 * 100.0)
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            HitRatio::Percent(p) => Some(*p),
            HitRatio::NoData => None,
        }
    }
}

impl fmt::Display for HitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitRatio::Percent(p) => write!(f, "{p:.2}%"),
            HitRatio::NoData => write!(f, "no data"),
        }
    }
}
