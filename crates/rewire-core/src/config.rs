//! Host build configuration model.
//!
//! The subset of a Vite-style build configuration that the configuration
//! hook reads and mutates: the project root override, resolve aliases, and
//! the dependency-optimizer include/exclude lists.
//!
//! ## Accepted alias forms
//!
//! ```json
//! { "resolve": { "alias": { "@": "./src" } } }
//! { "resolve": { "alias": [{ "find": "@", "replacement": "./src" }] } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Host build configuration passed to the `config` hook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildConfig {
    /// Project root override supplied by the host.
    pub root: Option<PathBuf>,
    /// Module resolution options.
    pub resolve: ResolveOptions,
    /// Dependency optimizer options.
    pub optimize_deps: OptimizeDeps,
}

/// Module resolution options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Import alias table, in either accepted form.
    pub alias: AliasConfig,
}

/// Dependency optimizer (pre-bundling) options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeDeps {
    /// Ids the user explicitly opted into pre-bundling.
    pub include: Vec<String>,
    /// Ids excluded from pre-bundling.
    pub exclude: Vec<String>,
}

/// A single alias rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Import specifier to match.
    pub find: String,
    /// Replacement path or specifier.
    pub replacement: String,
}

/// Alias table in either of the two accepted forms.
///
/// Mapping form keeps insertion order, so normalizing it to entries is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasConfig {
    /// Ordered `{ find, replacement }` entries.
    Entries(Vec<Alias>),
    /// Plain mapping from specifier to replacement.
    Map(IndexMap<String, String>),
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}
