//! Plugin facade wiring config rewiring and materialization into the
//! host's configuration hook.
//!
//! ## Example
//!
//! ```ignore
//! use rewire_core::{BuildConfig, Plugin, RewirePlugin};
//!
//! let plugin = RewirePlugin::new()
//!     .module("virtual:build-info", "export const sha = 'abc123';");
//!
//! let mut config = BuildConfig::default();
//! plugin.config(&mut config).await?;
//! ```

use std::future::Future;
use std::path::PathBuf;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::alias::{install_aliases, install_excludes};
use crate::config::{Alias, BuildConfig};
use crate::error::Error;
use crate::materialize::{materialize, module_path};
use crate::module::{ModuleSource, ProducerOutput, ResolveContext, VirtualModules};
use crate::paths::find_node_modules;

/// Default cache directory, joined under the nearest `node_modules`.
///
/// Every materialized module lands under this directory unless
/// [`RewirePlugin::dir`] overrides it.
pub const DEFAULT_CACHE_DIR: &str = ".rewire";

/// A build plugin with a configuration-time hook.
///
/// The only hook the host calls is `config`; it runs once per
/// configuration pass and may mutate the config and write files.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Plugin name for diagnostics and error messages.
    fn name(&self) -> &str;

    /// Mutate the host config before it is resolved.
    async fn config(&self, _config: &mut BuildConfig) -> Result<(), Error> {
        Ok(())
    }
}

/// The virtual-module resolve plugin.
///
/// Declared modules are written into the cache directory and the host
/// config is rewired so imports of the declared ids resolve to the
/// generated files.
pub struct RewirePlugin {
    modules: VirtualModules,
    dir: PathBuf,
    cwd: PathBuf,
    cache_dir: OnceCell<PathBuf>,
}

impl RewirePlugin {
    /// Create a plugin with no declared modules and the default cache dir.
    pub fn new() -> Self {
        Self {
            modules: VirtualModules::new(),
            dir: PathBuf::from(DEFAULT_CACHE_DIR),
            cwd: std::env::current_dir().unwrap_or_default(),
            cache_dir: OnceCell::new(),
        }
    }

    /// Declare a module with literal content.
    pub fn module(mut self, id: impl Into<String>, code: impl Into<String>) -> Self {
        self.modules.insert(id, ModuleSource::literal(code));
        self
    }

    /// Declare a module whose content is produced at configuration time.
    ///
    /// The producer may return `Ok(None)` to skip the module for this pass.
    pub fn module_with<F, Fut>(mut self, id: impl Into<String>, produce: F) -> Self
    where
        F: Fn(ResolveContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProducerOutput> + Send + 'static,
    {
        self.modules.insert(id, ModuleSource::producer(produce));
        self
    }

    /// Override the cache directory.
    ///
    /// A relative path is joined under the nearest `node_modules` on the
    /// first configuration pass; an absolute path is used as-is.
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Override the directory the `node_modules` search starts from.
    ///
    /// Defaults to the process working directory at construction.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// The normalized, absolute cache directory.
    ///
    /// Computed lazily on first use and pinned for the lifetime of this
    /// plugin instance — later config passes and root overrides cannot
    /// move it.
    ///
    /// # Errors
    /// Returns [`Error::NodeModulesNotFound`] when the cache dir is
    /// relative and no `node_modules` exists within the search bound.
    pub fn cache_dir(&self) -> Result<&PathBuf, Error> {
        self.cache_dir.get_or_try_init(|| {
            if self.dir.is_absolute() {
                return Ok(self.dir.clone());
            }
            let anchor = find_node_modules(&self.cwd)?;
            Ok(anchor.join(&self.dir))
        })
    }
}

impl Default for RewirePlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Plugin for RewirePlugin {
    fn name(&self) -> &str {
        "rewire"
    }

    async fn config(&self, config: &mut BuildConfig) -> Result<(), Error> {
        let cache_dir = self.cache_dir()?.clone();

        // The root override arrives after the cache dir is already pinned,
        // so it cannot move the node_modules anchor.
        if let Some(root) = &config.root {
            debug!(root = %root.display(), "host root override observed");
        }

        let ids: Vec<String> = self.modules.ids().map(ToString::to_string).collect();
        install_excludes(config, &ids);

        let entries = ids
            .iter()
            .map(|id| Alias {
                find: id.clone(),
                replacement: module_path(&cache_dir, id).display().to_string(),
            })
            .collect();
        install_aliases(config, entries);

        materialize(&cache_dir, &self.modules).await
    }
}
