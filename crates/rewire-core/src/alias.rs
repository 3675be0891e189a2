//! Configuration rewiring: alias and optimizer-exclude installation.
//!
//! Both operations are pure config-value transformations. They never touch
//! the filesystem, they only append, and they preserve the order of
//! whatever the user already configured.

use crate::config::{Alias, AliasConfig, BuildConfig, OptimizeDeps};

/// Normalize an alias table to ordered entries.
///
/// Mapping form converts to `{ find, replacement }` entries in insertion
/// order; entry form passes through untouched.
#[must_use]
pub fn normalize_alias(alias: AliasConfig) -> Vec<Alias> {
    match alias {
        AliasConfig::Entries(entries) => entries,
        AliasConfig::Map(map) => map
            .into_iter()
            .map(|(find, replacement)| Alias { find, replacement })
            .collect(),
    }
}

/// Append alias entries to the host config.
///
/// Any pre-existing mapping-form table is normalized to entry form first;
/// user entries keep their positions and the new entries follow them.
pub fn install_aliases(config: &mut BuildConfig, entries: Vec<Alias>) {
    let existing = std::mem::take(&mut config.resolve.alias);
    let mut list = normalize_alias(existing);
    list.extend(entries);
    config.resolve.alias = AliasConfig::Entries(list);
}

/// Append module ids to `optimizeDeps.exclude`.
///
/// An incoming id the user explicitly opted into `optimizeDeps.include` is
/// skipped; pre-existing exclude entries are never filtered or deduplicated.
pub fn install_excludes(config: &mut BuildConfig, ids: &[String]) {
    let OptimizeDeps { include, exclude } = &mut config.optimize_deps;
    exclude.extend(ids.iter().filter(|id| !include.contains(id)).cloned());
}
