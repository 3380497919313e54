use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved application settings
///
/// Built exactly once at startup from the layered configuration sources plus
/// the secrets pulled from Key Vault, then shared read-only for the lifetime
/// of the process. Field names are serialized in PascalCase so that they line
/// up with configuration keys and secret names (`ApiKey`, `ConnectionString`).
///
/// There are no defaults: a field that no source provides fails extraction,
/// which aborts startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// API key, normally stored as a secret
    #[serde(deserialize_with = "scalar_string")]
    pub api_key: String,

    /// Connection string, normally stored as a secret
    #[serde(deserialize_with = "scalar_string")]
    pub connection_string: String,

    /// Plain configuration value, normally from the environment or a file
    #[serde(deserialize_with = "scalar_string")]
    pub greeting: String,
}

/// Accept any scalar as a string.
///
/// Environment values and secrets are always strings, but a YAML file may
/// write `Greeting: 42` or `Greeting: true`.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl Visitor<'_> for ScalarVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}
