//! `mrag bundle-env` -- print the frontend bundler configuration.
//!
//! Resolves the mode-specific environment (.env files plus the process
//! environment) and prints the define map as JSON for the bundler to
//! consume. Absent variables become `undefined` tokens, never errors.

use std::path::Path;

use marketrag_core::bundle::bundle_config;
use marketrag_infra::env::load_env;

pub fn run(mode: &str, dir: &Path) -> anyhow::Result<()> {
    let env = load_env(mode, dir)?;
    let config = bundle_config(&env);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_files_feed_the_define_map() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".env.production"),
            "POLYGON_API_KEY=pk-123\n",
        )
        .unwrap();

        let env = load_env("production", tmp.path()).unwrap();
        let config = bundle_config(&env);

        assert_eq!(config.define["process.env.POLYGON_API_KEY"], "\"pk-123\"");
        assert_eq!(config.define.len(), 4);
        assert!(config.plugins.is_empty());
    }
}
