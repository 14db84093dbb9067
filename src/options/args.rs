//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "arcstat [OPTIONS]";

const VERSION: &str = match option_env!("NIGHTLY_VERSION") {
    Some(nightly_version) => nightly_version,
    None => crate_version!(),
};

/// The arguments for arcstat.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = VERSION,
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub(crate) struct Args {
    #[command(flatten)]
    pub(crate) general_args: GeneralArgs,

    #[command(flatten)]
    pub(crate) output_args: OutputArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub(crate) struct GeneralArgs {
    #[arg(
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "Sets the location of the ARC statistics file.",
        long_help = "Sets the location of the ARC statistics file to read. The file is expected to be in the \
                    kstat format, with one '<name> <type> <value>' row per line. Defaults to \
                    /proc/spl/kstat/zfs/arcstats."
    )]
    pub(crate) arcstats: Option<String>,

    #[arg(
        short = 'b',
        long,
        value_name = "BYTES",
        allow_hyphen_values = true,
        help = "Formats a single byte count and exits.",
        long_help = "Formats a single byte count with the same units as the report, prints it, and exits \
                    without reading any ARC statistics. The value must be a whole number that is zero \
                    or greater."
    )]
    pub(crate) bytes: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        value_hint = ValueHint::AnyPath,
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    Unlike the default location, a path given here must exist."
    )]
    pub(crate) config_location: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub(crate) struct OutputArgs {
    #[arg(
        long,
        help = "Uses decimal prefixes for sizes.",
        long_help = "Uses decimal (powers of 1000) prefixes such as KB and GB for sizes, rather than the \
                    default binary (powers of 1024) prefixes such as KiB and GiB."
    )]
    pub(crate) decimal: bool,

    #[arg(
        long,
        help = "Prints the report as JSON.",
        long_help = "Prints the report as a JSON object containing both the raw byte counts and their \
                    formatted forms. The hit ratio is null if there have been no lookups."
    )]
    pub(crate) json: bool,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use `--help`.")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns an [`Args`].
pub(crate) fn get_args() -> Args {
    Args::parse()
}

/// Returns an [`Command`] based off of [`Args`].
#[cfg(test)]
pub(crate) fn build_cmd() -> Command {
    Args::command()
}
