//! Declare two virtual modules and print the rewired configuration.
//!
//! Writes into a temp directory so it runs without a `node_modules` nearby:
//!
//! ```sh
//! cargo run --example virtual_modules
//! ```

use rewire_core::{BuildConfig, Plugin, RewirePlugin};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cache = tempfile::tempdir()?;

    let plugin = RewirePlugin::new()
        .dir(cache.path())
        .module("virtual:build-info", "export const builtAt = 'dev';")
        .module_with("@app/env", |ctx| async move {
            Ok(Some(format!(
                "export const cacheDir = '{}';",
                ctx.cache_dir.display()
            )))
        });

    let mut config = BuildConfig::default();
    plugin.config(&mut config).await?;

    println!("{config:#?}");
    println!("cache dir: {}", plugin.cache_dir()?.display());
    Ok(())
}
