use serde::Deserialize;

/// The `[flags]` table. Every field mirrors a command-line argument of the
/// same name, and the argument wins if both are set.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FlagConfig {
    pub(crate) arcstats: Option<String>,
    pub(crate) decimal: Option<bool>,
    pub(crate) json: Option<bool>,
}
