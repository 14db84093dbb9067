//! Byte counts and their human-readable forms.

use std::fmt;

use crate::utils::error::{ArcError, Result};

pub const KILO_LIMIT: u64 = 1000;
pub const MEGA_LIMIT: u64 = 1_000_000;
pub const GIGA_LIMIT: u64 = 1_000_000_000;
pub const TERA_LIMIT: u64 = 1_000_000_000_000;
pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const GIBI_LIMIT: u64 = 1024 * 1024 * 1024;
pub const TEBI_LIMIT: u64 = 1024 * 1024 * 1024 * 1024;

/// Binary units, largest first.
const BINARY_UNITS: [(u64, &str); 4] = [
    (TEBI_LIMIT, "TiB"),
    (GIBI_LIMIT, "GiB"),
    (MEBI_LIMIT, "MiB"),
    (KIBI_LIMIT, "KiB"),
];

/// Decimal (SI) units, largest first.
const DECIMAL_UNITS: [(u64, &str); 4] = [
    (TERA_LIMIT, "TB"),
    (GIGA_LIMIT, "GB"),
    (MEGA_LIMIT, "MB"),
    (KILO_LIMIT, "KB"),
];

/// Which set of unit prefixes to use when formatting.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum UnitBase {
    /// Powers of 1024 (KiB, MiB, ...).
    #[default]
    Binary,
    /// Powers of 1000 (KB, MB, ...).
    Decimal,
}

/// A non-negative number of bytes.
///
/// Anything signed or wider than a [`u64`] has to go through [`TryFrom`],
/// which rejects negative values with [`ArcError::InvalidInput`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ByteCount(u64);

impl ByteCount {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Formats this count with the given unit base.
    pub fn format(self, base: UnitBase) -> FormattedSize {
        match base {
            UnitBase::Binary => get_binary_bytes(self.0),
            UnitBase::Decimal => get_decimal_bytes(self.0),
        }
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl TryFrom<i128> for ByteCount {
    type Error = ArcError;

    fn try_from(value: i128) -> Result<Self> {
        if value < 0 {
            return Err(ArcError::InvalidInput(format!(
                "'{value}' is negative, byte counts must be zero or greater"
            )));
        }

        u64::try_from(value).map(Self).map_err(|_| {
            ArcError::InvalidInput(format!("'{value}' is too large to be a byte count"))
        })
    }
}

impl TryFrom<i64> for ByteCount {
    type Error = ArcError;

    fn try_from(value: i64) -> Result<Self> {
        Self::try_from(i128::from(value))
    }
}

impl std::str::FromStr for ByteCount {
    type Err = ArcError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let value: i128 = s
            .parse()
            .map_err(|_| ArcError::InvalidInput(format!("'{s}' is not a whole number of bytes")))?;

        Self::try_from(value)
    }
}

/// A byte count scaled to a unit, ready to print.
///
/// Only built by [`get_binary_bytes`] and [`get_decimal_bytes`], so a plain
/// `"B"` value is always a whole number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedSize {
    value: f64,
    unit: &'static str,
}

impl FormattedSize {
    /// The byte count divided by the unit's size.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit label, e.g. `"KiB"`, or `"B"` for plain bytes.
    pub fn unit(&self) -> &'static str {
        self.unit
    }
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Plain bytes are always whole, so they don't get a fraction.
        if self.unit == "B" {
            write!(f, "{} B", self.value as u64)
        } else {
            write!(f, "{:.2} {}", self.value, self.unit)
        }
    }
}

fn scale(bytes: u64, units: &[(u64, &'static str)]) -> FormattedSize {
    units
        .iter()
        .find(|(limit, _)| bytes >= *limit)
        .map(|&(limit, unit)| FormattedSize {
            value: bytes as f64 / limit as f64,
            unit,
        })
        .unwrap_or(FormattedSize {
            value: bytes as f64,
            unit: "B",
        })
}

/// Returns the value and unit of `bytes` in units of 1024, picking the largest
/// unit the value reaches. This only goes up to a tebi.
#[inline]
pub fn get_binary_bytes(bytes: u64) -> FormattedSize {
    scale(bytes, &BINARY_UNITS)
}

/// Returns the value and unit of `bytes` in units of 1000. This only goes up to
/// a tera.
#[inline]
pub fn get_decimal_bytes(bytes: u64) -> FormattedSize {
    scale(bytes, &DECIMAL_UNITS)
}

/// Formats `bytes` with binary prefixes, e.g. `"3.50 GiB"` or `"512 B"`.
///
/// Fractions are rounded with the standard `{:.2}` float formatting, so exact
/// ties go to the even digit.
pub fn format_binary_bytes(bytes: u64) -> String {
    get_binary_bytes(bytes).to_string()
}

/// Formats `bytes` with decimal prefixes, e.g. `"1.50 KB"`.
pub fn format_decimal_bytes(bytes: u64) -> String {
    get_decimal_bytes(bytes).to_string()
}
