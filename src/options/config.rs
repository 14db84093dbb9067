pub mod flags;

use serde::Deserialize;

use self::flags::FlagConfig;

/// The config file. Everything is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
}
