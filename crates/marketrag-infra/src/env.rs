//! Environment configuration loading.
//!
//! Two consumers read the environment:
//!
//! - [`RetrieverConfig::from_env`] pulls the retriever credentials from
//!   the process environment. Unset or empty variables fail fast with
//!   [`ConfigError::Missing`] instead of deferring the failure to the
//!   first network call.
//! - [`load_env`] resolves the mode-specific environment for the
//!   frontend bundler from `.env` files plus the process environment.
//!   Missing variables are NOT an error there; the define-map builder
//!   turns them into `undefined` tokens.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use marketrag_types::error::ConfigError;

/// Embeddings API credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Supabase project URL.
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";

/// Supabase service key.
pub const SUPABASE_KEY_VAR: &str = "SUPABASE_KEY";

/// Credentials for the retriever's two hosted services.
///
/// An explicit struct rather than ambient lookups inside the client
/// constructors, so tests can inject arbitrary values without touching
/// the real process environment.
#[derive(Clone)]
pub struct RetrieverConfig {
    pub openai_api_key: String,
    pub supabase_url: String,
    pub supabase_key: String,
}

impl RetrieverConfig {
    /// Read the three credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: require_var(OPENAI_API_KEY_VAR)?,
            supabase_url: require_var(SUPABASE_URL_VAR)?,
            supabase_key: require_var(SUPABASE_KEY_VAR)?,
        })
    }
}

impl fmt::Debug for RetrieverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrieverConfig")
            .field("openai_api_key", &"<redacted>")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"<redacted>")
            .finish()
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        // Invalid Unicode is treated as absent: credentials must be
        // valid strings.
        _ => Err(ConfigError::Missing(name.to_string())),
    }
}

/// Load the environment for a bundler build mode.
///
/// Files are read from `dir` in the order `.env`, `.env.local`,
/// `.env.{mode}`, `.env.{mode}.local`; a later file overrides an
/// earlier one, and variables already present in the process
/// environment override all file values. Missing files are skipped;
/// a file that exists but cannot be parsed is an error.
pub fn load_env(mode: &str, dir: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let file_names = [
        ".env".to_string(),
        ".env.local".to_string(),
        format!(".env.{mode}"),
        format!(".env.{mode}.local"),
    ];

    let mut merged = BTreeMap::new();
    for name in &file_names {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        for item in dotenvy::from_path_iter(&path).map_err(|e| ConfigError::EnvFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })? {
            let (key, value) = item.map_err(|e| ConfigError::EnvFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            merged.insert(key, value);
        }
    }

    for (key, value) in std::env::vars() {
        merged.insert(key, value);
    }

    Ok(merged)
}
