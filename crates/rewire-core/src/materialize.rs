//! Materialization of declared modules into the cache directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::module::{ResolveContext, VirtualModules};

/// Path a module id materializes to under `cache_dir`.
///
/// Shared with alias installation so the written file and the alias
/// replacement can never disagree.
#[must_use]
pub fn module_path(cache_dir: &Path, id: &str) -> PathBuf {
    cache_dir.join(format!("{id}.js"))
}

/// Write every declared module with resolvable content into `cache_dir`.
///
/// Modules are processed sequentially in declaration order. A producer
/// yielding `Ok(None)` skips its module; existing files are overwritten
/// unconditionally. Scoped ids (`@scope/name`) get their parent directory
/// created on demand.
///
/// # Errors
/// Producer failures and write failures abort the pass.
pub async fn materialize(cache_dir: &Path, modules: &VirtualModules) -> Result<(), Error> {
    for (id, source) in modules.iter() {
        let ctx = ResolveContext {
            cache_dir: cache_dir.to_path_buf(),
        };
        let Some(content) = source.resolve(ctx).await? else {
            debug!(id, "module produced no content, skipping");
            continue;
        };

        let target = module_path(cache_dir, id);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, content.as_bytes()).await?;
        debug!(id, path = %target.display(), bytes = content.len(), "materialized module");
    }

    Ok(())
}
