//! Bundler configuration for the frontend build.
//!
//! The JS frontend is bundled with its credentials substituted into the
//! source text at build time. [`BundleConfig`] is the object handed to
//! the bundler: a `define` map of textual replacements plus a plugin
//! list (always empty here).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration object consumed by the frontend bundler.
///
/// `define` maps a source-text key (e.g. `"process.env.SUPABASE_URL"`)
/// to the replacement token. Replacement is textual, not a runtime
/// lookup: the value must already be a valid source expression (a JSON
/// string literal, or the bare token `undefined`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    pub define: BTreeMap<String, String>,
    #[serde(default)]
    pub plugins: Vec<String>,
}
