/// Where ZFS on Linux exposes ARC statistics.
pub const DEFAULT_ARCSTATS_PATH: &str = "/proc/spl/kstat/zfs/arcstats";

/// The config file location, relative to the platform's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "arcstat/arcstat.toml";

/// Where the `logging` feature writes to.
#[cfg(feature = "logging")]
pub const DEBUG_LOG_FILE: &str = "arcstat_debug.log";
