//! Define-map builder for the frontend bundler.
//!
//! The bundled frontend reads its credentials through `process.env.*`
//! references; the bundler replaces those references with literal text
//! at build time. This module builds that substitution map from a
//! resolved environment: present variables become JSON string literals,
//! absent ones become the bare token `undefined`. A missing variable is
//! never an error here.

use std::collections::BTreeMap;

use marketrag_types::bundle::BundleConfig;

/// The environment variables substituted into the frontend bundle.
///
/// A variable not in this list is never substituted, no matter what the
/// environment contains.
pub const INJECTED_ENV_VARS: [&str; 4] = [
    "POLYGON_API_KEY",
    "OPENAI_API_KEY",
    "SUPABASE_KEY",
    "SUPABASE_URL",
];

const DEFINE_KEY_PREFIX: &str = "process.env.";
const UNDEFINED_TOKEN: &str = "undefined";

/// Build the substitution map for the injected variables.
pub fn define_map(env: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    INJECTED_ENV_VARS
        .iter()
        .map(|name| {
            let key = format!("{DEFINE_KEY_PREFIX}{name}");
            let value = match env.get(*name) {
                Some(v) => serde_json::Value::String(v.clone()).to_string(),
                None => UNDEFINED_TOKEN.to_string(),
            };
            (key, value)
        })
        .collect()
}

/// Build the full bundler configuration: the define map plus an empty
/// plugin list.
pub fn bundle_config(env: &BTreeMap<String, String>) -> BundleConfig {
    BundleConfig {
        define: define_map(env),
        plugins: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_present_variable_is_json_quoted() {
        let map = define_map(&env(&[("POLYGON_API_KEY", "X")]));
        assert_eq!(map["process.env.POLYGON_API_KEY"], "\"X\"");
    }

    #[test]
    fn test_absent_variable_becomes_undefined_token() {
        let map = define_map(&env(&[]));
        assert_eq!(map["process.env.SUPABASE_URL"], "undefined");
    }

    #[test]
    fn test_all_four_keys_always_present() {
        let map = define_map(&env(&[("OPENAI_API_KEY", "sk-1")]));
        assert_eq!(map.len(), 4);
        for name in INJECTED_ENV_VARS {
            assert!(map.contains_key(&format!("process.env.{name}")));
        }
    }

    #[test]
    fn test_value_escaping_matches_json_encoding() {
        let map = define_map(&env(&[("SUPABASE_KEY", "a\"b\\c")]));
        assert_eq!(map["process.env.SUPABASE_KEY"], r#""a\"b\\c""#);
    }

    #[test]
    fn test_unlisted_variables_are_not_substituted() {
        let map = define_map(&env(&[("SOME_OTHER_KEY", "value")]));
        assert!(!map.keys().any(|k| k.contains("SOME_OTHER_KEY")));
    }

    #[test]
    fn test_bundle_config_plugins_always_empty() {
        let config = bundle_config(&env(&[("SUPABASE_URL", "https://x.supabase.co")]));
        assert!(config.plugins.is_empty());
        assert_eq!(
            config.define["process.env.SUPABASE_URL"],
            "\"https://x.supabase.co\""
        );
    }
}
