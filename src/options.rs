//! How arcstat figures out what to do, from the command line and the config
//! file.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use config::Config;
pub use error::OptionError;
pub(crate) use error::OptionResult;

use self::args::Args;
use crate::{
    constants::{DEFAULT_ARCSTATS_PATH, DEFAULT_CONFIG_FILE_LOCATION},
    units::data_units::UnitBase,
};

/// How the report should be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything needed to produce a report, after merging the arguments and the
/// config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub arcstats_path: PathBuf,
    pub unit_base: UnitBase,
    pub output: OutputFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            arcstats_path: PathBuf::from(DEFAULT_ARCSTATS_PATH),
            unit_base: UnitBase::default(),
            output: OutputFormat::default(),
        }
    }
}

/// Returns the config path to use, and whether it was explicitly asked for.
///
/// If no path was given, this falls back to the platform's config directory
/// (e.g. `~/.config/arcstat/arcstat.toml` on Linux), if there is one.
pub(crate) fn get_config_path(override_config_path: Option<&str>) -> Option<(PathBuf, bool)> {
    if let Some(conf_loc) = override_config_path {
        return Some((PathBuf::from(conf_loc), true));
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_CONFIG_FILE_LOCATION);
        (path, false)
    })
}

/// Reads the config file at `path`.
///
/// A missing file is only an error if the path was explicitly given; otherwise
/// the defaults are used and nothing is written to disk.
pub(crate) fn read_config(path: &Path, explicit: bool) -> OptionResult<Config> {
    match fs::read_to_string(path) {
        Ok(config_string) => {
            crate::info!("Using config file at {}", path.display());
            Ok(toml_edit::de::from_str(&config_string)?)
        }
        Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
            crate::info!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(err) => Err(OptionError::config(format!(
            "unable to read '{}': {err}",
            path.display()
        ))),
    }
}

/// Gets the config for this run, given the arguments.
pub(crate) fn get_config(args: &Args) -> OptionResult<Config> {
    match get_config_path(args.general_args.config_location.as_deref()) {
        Some((path, explicit)) => read_config(&path, explicit),
        None => Ok(Config::default()),
    }
}

/// Merges the arguments with the config file. Arguments take priority.
pub(crate) fn init_report_options(args: &Args, config: &Config) -> OptionResult<ReportOptions> {
    let flags = config.flags.clone().unwrap_or_default();

    let arcstats_path = match (&args.general_args.arcstats, &flags.arcstats) {
        (Some(path), _) if path.trim().is_empty() => {
            return Err(OptionError::invalid_arg_value("arcstats"));
        }
        (Some(path), _) => PathBuf::from(path),
        (None, Some(path)) if path.trim().is_empty() => {
            return Err(OptionError::config(
                "'arcstats' was set with an empty path, please update it in your config file.",
            ));
        }
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => PathBuf::from(DEFAULT_ARCSTATS_PATH),
    };

    let unit_base = if args.output_args.decimal || flags.decimal.unwrap_or(false) {
        UnitBase::Decimal
    } else {
        UnitBase::Binary
    };

    let output = if args.output_args.json || flags.json.unwrap_or(false) {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    Ok(ReportOptions {
        arcstats_path,
        unit_base,
        output,
    })
}
