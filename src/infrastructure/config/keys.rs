//! Configuration key names
//!
//! Keys match case-insensitively across every source: `apikey` in the vault,
//! `KEYVAULT__BASEURL` in the environment and `keyVault: { baseUrl }` in a
//! file all land on the declared PascalCase name. Keys outside the schema are
//! kept as written.

use figment::value::{Dict, Map, Tag, Value};
use figment::{Error, Metadata, Profile, Provider};

/// A known key and the keys nested under it
struct Key {
    name: &'static str,
    children: &'static [Key],
}

const fn leaf(name: &'static str) -> Key {
    Key {
        name,
        children: &[],
    }
}

const fn section(name: &'static str, children: &'static [Key]) -> Key {
    Key { name, children }
}

static SCHEMA: &[Key] = &[
    leaf("ApiKey"),
    leaf("ConnectionString"),
    leaf("Greeting"),
    section(
        "KeyVault",
        &[leaf("BaseUrl"), leaf("Prefix"), leaf("TimeoutSecs")],
    ),
    section("Server", &[leaf("Host"), leaf("Port")]),
    section(
        "Logging",
        &[leaf("Level"), leaf("Format"), leaf("LogDir"), leaf("Rotation")],
    ),
];

fn lookup<'a>(level: &'a [Key], segment: &str) -> Option<&'a Key> {
    level
        .iter()
        .find(|key| key.name.eq_ignore_ascii_case(segment))
}

/// Declared spelling of a dotted key path
pub fn canonical_path(segments: &[&str]) -> Vec<String> {
    let mut level = SCHEMA;
    segments
        .iter()
        .map(|segment| match lookup(level, segment) {
            Some(key) => {
                level = key.children;
                key.name.to_string()
            }
            None => {
                level = &[];
                (*segment).to_string()
            }
        })
        .collect()
}

/// Insert a string under a dotted key, creating sections as needed
///
/// A scalar already sitting where a section is needed is replaced. Returns
/// `false` when the key has no non-empty segment.
pub fn insert_string(dict: &mut Dict, key: &str, value: String) -> bool {
    let segments: Vec<&str> = key.split('.').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return false;
    }
    insert_path(dict, &canonical_path(&segments), value);
    true
}

fn insert_path(dict: &mut Dict, path: &[String], value: String) {
    match path {
        [] => {}
        [leaf] => {
            dict.insert(leaf.clone(), Value::String(Tag::Default, value));
        }
        [head, rest @ ..] => {
            let entry = dict
                .entry(head.clone())
                .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
            if !matches!(entry, Value::Dict(..)) {
                *entry = Value::Dict(Tag::Default, Dict::new());
            }
            if let Value::Dict(_, inner) = entry {
                insert_path(inner, rest, value);
            }
        }
    }
}

fn canonicalize(dict: Dict, level: &[Key]) -> Dict {
    dict.into_iter()
        .map(|(name, value)| {
            let (name, children) = match lookup(level, &name) {
                Some(key) => (key.name.to_string(), key.children),
                None => (name, &[][..]),
            };
            let value = match value {
                Value::Dict(tag, inner) => Value::Dict(tag, canonicalize(inner, children)),
                other => other,
            };
            (name, value)
        })
        .collect()
}

/// Wraps a provider so its keys match the schema case-insensitively
pub struct CaseInsensitive<P>(pub P);

impl<P: Provider> Provider for CaseInsensitive<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Ok(self
            .0
            .data()?
            .into_iter()
            .map(|(profile, dict)| (profile, canonicalize(dict, SCHEMA)))
            .collect())
    }
}
