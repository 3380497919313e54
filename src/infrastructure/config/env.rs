//! Environment variables as a configuration source
//!
//! `Section__Key` nests under `Section.Key`. Values are kept as the exact
//! strings the process was given: `Greeting=007` stays `"007"`.

use figment::providers::Env;
use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};

use super::keys::insert_string;

/// Separator used in variable names where configuration keys nest
pub const ENV_DELIMITER: &str = "__";

/// Snapshot of the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    dict: Dict,
}

impl EnvSource {
    /// Read the process environment
    ///
    /// Variables starting with `_` are shell bookkeeping and are skipped.
    pub fn from_env() -> Self {
        // `lowercase(false)` must come last: `filter` and `split` reset it.
        let env = Env::raw()
            .filter(|key| !key.as_str().starts_with('_'))
            .split(ENV_DELIMITER)
            .lowercase(false);

        let mut dict = Dict::new();
        for (key, value) in env.iter() {
            insert_string(&mut dict, key.as_str(), value);
        }
        Self { dict }
    }
}

impl Provider for EnvSource {
    fn metadata(&self) -> Metadata {
        Metadata::named("environment variable(s)")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Profile::Default.collect(self.dict.clone()))
    }
}
