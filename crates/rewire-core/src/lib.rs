#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

//! Build-time virtual module materialization and config rewiring.
//!
//! Modules declared against a [`RewirePlugin`] are written as real ES
//! module files into a cache directory under the nearest `node_modules`,
//! and the host build configuration is rewired so imports of the declared
//! ids resolve to those files: one alias entry per id, plus an entry in
//! the dependency-optimizer exclude list.
//!
//! The cache directory defaults to `node_modules/.rewire`
//! ([`DEFAULT_CACHE_DIR`]); override it with [`RewirePlugin::dir`] if your
//! tooling expects generated modules somewhere else.
//!
//! ```ignore
//! let plugin = RewirePlugin::new()
//!     .module("virtual:build-info", "export const sha = 'abc123';")
//!     .module_with("config", |ctx| async move {
//!         Ok(Some(format!("export const dir = {:?};", ctx.cache_dir)))
//!     });
//!
//! plugin.config(&mut config).await?;
//! ```

pub mod alias;
pub mod config;
pub mod error;
pub mod materialize;
pub mod module;
pub mod paths;
pub mod plugin;

pub use alias::{install_aliases, install_excludes, normalize_alias};
pub use config::{Alias, AliasConfig, BuildConfig, OptimizeDeps, ResolveOptions};
pub use error::{BoxError, Error};
pub use materialize::{materialize, module_path};
pub use module::{ModuleSource, ProducerOutput, ResolveContext, VirtualModules};
pub use paths::{find_node_modules, MAX_ANCESTOR_LEVELS};
pub use plugin::{Plugin, RewirePlugin, DEFAULT_CACHE_DIR};
