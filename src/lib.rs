//! A small reporter for ZFS ARC statistics.
//!
//! The interesting bits are [`units::data_units`], which turns byte counts
//! into things like `"3.50 GiB"`, and [`collection::arc`], which reads the
//! kstat file the kernel exposes.

#![warn(rust_2018_idioms)]

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod collection;
pub mod constants;
pub mod options;
pub mod report;
pub mod units {
    pub mod data_units;
}

use anyhow::{Context, Result};

use crate::{
    collection::arc::ArcStats,
    options::{args, OutputFormat},
    report::ArcReport,
    units::data_units::{ByteCount, UnitBase},
};

/// Formats a single byte count given on the command line.
fn format_single(bytes: &str, unit_base: UnitBase) -> Result<String> {
    let count: ByteCount = bytes.parse().context("Unable to format the given byte count.")?;
    Ok(count.format(unit_base).to_string())
}

/// Main code to call to start arcstat.
pub fn start_arcstat() -> Result<()> {
    let args = args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new(constants::DEBUG_LOG_FILE),
        )?;
    }

    let config = options::get_config(&args).context("Unable to properly parse the config file.")?;
    let options = options::init_report_options(&args, &config)
        .context("Found an issue while trying to set up the report options.")?;
    crate::debug!("Running with {options:?}");

    if let Some(bytes) = &args.general_args.bytes {
        println!("{}", format_single(bytes, options.unit_base)?);
        return Ok(());
    }

    let stats = ArcStats::read_from(&options.arcstats_path)
        .context("Unable to read the ARC statistics. Is the ZFS kernel module loaded?")?;
    let report = ArcReport::new(&stats, options.unit_base);

    match options.output {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
