//! Rendering [`ArcStats`] for people and for scripts.

use std::fmt;

use serde::Serialize;

use crate::{
    collection::arc::{ArcStats, HitRatio},
    units::data_units::{ByteCount, UnitBase},
};

/// One formatted size, alongside the raw byte count it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeEntry {
    pub bytes: u64,
    pub formatted: String,
}

impl SizeEntry {
    fn new(count: ByteCount, base: UnitBase) -> Self {
        SizeEntry {
            bytes: count.get(),
            formatted: count.format(base).to_string(),
        }
    }
}

/// A rendered ARC usage report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcReport {
    pub current_size: SizeEntry,
    pub target_size: SizeEntry,
    pub max_size: SizeEntry,
    pub hits: u64,
    pub misses: u64,
    /// `null` if there have been no lookups.
    pub hit_ratio: Option<f64>,
    #[serde(skip)]
    ratio: HitRatio,
}

impl ArcReport {
    pub fn new(stats: &ArcStats, base: UnitBase) -> Self {
        let ratio = stats.hit_ratio();

        ArcReport {
            current_size: SizeEntry::new(stats.size, base),
            target_size: SizeEntry::new(stats.target_size, base),
            max_size: SizeEntry::new(stats.max_size, base),
            hits: stats.hits,
            misses: stats.misses,
            hit_ratio: ratio.percent(),
            ratio,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ArcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ARC current size: {}", self.current_size.formatted)?;
        writeln!(f, "ARC target size:  {}", self.target_size.formatted)?;
        writeln!(f, "ARC max size:     {}", self.max_size.formatted)?;
        write!(f, "ARC hit ratio:    {}", self.ratio)
    }
}
