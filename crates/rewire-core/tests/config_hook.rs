//! End-to-end tests for the configuration hook: a project directory with a
//! `node_modules`, one literal module, one producer module, two passes.

use std::fs;
use std::path::Path;

use rewire_core::{AliasConfig, BuildConfig, Plugin, RewirePlugin};

fn project_with_node_modules() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    dir
}

fn alias_entries(config: &BuildConfig) -> &[rewire_core::Alias] {
    match &config.resolve.alias {
        AliasConfig::Entries(entries) => entries,
        AliasConfig::Map(_) => panic!("alias table should be in entry form after the hook"),
    }
}

#[tokio::test]
async fn test_config_pass_materializes_and_rewires() {
    let project = project_with_node_modules();

    let plugin = RewirePlugin::new()
        .cwd(project.path())
        .dir(".cache")
        .module("virtual:foo", "export default 1")
        .module_with("@scope/bar", |_ctx| async { Ok(None) });

    let mut config = BuildConfig::default();
    plugin.config(&mut config).await.unwrap();

    // Literal content landed byte-exact under node_modules/.cache.
    let cache = project.path().join("node_modules").join(".cache");
    let written = fs::read_to_string(cache.join("virtual:foo.js")).unwrap();
    assert_eq!(written, "export default 1");

    // The producer yielded None: nothing was written for it.
    assert!(!cache.join("@scope").join("bar.js").exists());

    // Both ids were aliased, in declaration order, pointing into the cache.
    let entries = alias_entries(&config);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].find, "virtual:foo");
    assert_eq!(
        Path::new(&entries[0].replacement),
        cache.join("virtual:foo.js")
    );
    assert_eq!(entries[1].find, "@scope/bar");
    assert_eq!(
        Path::new(&entries[1].replacement),
        cache.join("@scope").join("bar.js")
    );

    // Both ids were excluded from dependency pre-bundling.
    assert_eq!(config.optimize_deps.exclude, ["virtual:foo", "@scope/bar"]);
}

#[tokio::test]
async fn test_user_configuration_is_preserved() {
    let project = project_with_node_modules();

    let plugin = RewirePlugin::new()
        .cwd(project.path())
        .module("virtual:foo", "export default 1");

    let mut config: BuildConfig = serde_json::from_str(
        r#"{
            "resolve": { "alias": { "@": "./src" } },
            "optimizeDeps": { "include": ["vue"], "exclude": ["left-pad"] }
        }"#,
    )
    .unwrap();

    plugin.config(&mut config).await.unwrap();

    let entries = alias_entries(&config);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].find, "@");
    assert_eq!(entries[0].replacement, "./src");
    assert_eq!(entries[1].find, "virtual:foo");

    assert_eq!(config.optimize_deps.include, ["vue"]);
    assert_eq!(config.optimize_deps.exclude, ["left-pad", "virtual:foo"]);
}

#[tokio::test]
async fn test_include_opt_in_wins_over_exclusion() {
    let project = project_with_node_modules();

    let plugin = RewirePlugin::new()
        .cwd(project.path())
        .module("virtual:foo", "export default 1");

    let mut config = BuildConfig::default();
    config.optimize_deps.include.push("virtual:foo".to_string());

    plugin.config(&mut config).await.unwrap();

    assert!(config.optimize_deps.exclude.is_empty());
    // The alias is still installed; only the exclude is skipped.
    assert_eq!(alias_entries(&config).len(), 1);
}

#[tokio::test]
async fn test_second_pass_appends_again_and_reuses_cache_dir() {
    let project = project_with_node_modules();

    let plugin = RewirePlugin::new()
        .cwd(project.path())
        .module("virtual:foo", "export default 1");

    let mut config = BuildConfig::default();
    plugin.config(&mut config).await.unwrap();
    plugin.config(&mut config).await.unwrap();

    // Append-only semantics: two passes, two copies of everything.
    assert_eq!(alias_entries(&config).len(), 2);
    assert_eq!(config.optimize_deps.exclude, ["virtual:foo", "virtual:foo"]);

    // Both passes wrote through the same pinned cache dir.
    let replacement_first = &alias_entries(&config)[0].replacement;
    let replacement_second = &alias_entries(&config)[1].replacement;
    assert_eq!(replacement_first, replacement_second);
}

#[tokio::test]
async fn test_root_override_does_not_move_the_cache_dir() {
    let project = project_with_node_modules();
    let elsewhere = project_with_node_modules();

    let plugin = RewirePlugin::new()
        .cwd(project.path())
        .module("virtual:foo", "export default 1");

    let mut config = BuildConfig {
        root: Some(elsewhere.path().to_path_buf()),
        ..BuildConfig::default()
    };

    plugin.config(&mut config).await.unwrap();

    // The module landed under the construction-time project, not the
    // root override from the host config.
    assert!(project
        .path()
        .join("node_modules")
        .join(rewire_core::DEFAULT_CACHE_DIR)
        .join("virtual:foo.js")
        .is_file());
    assert!(!elsewhere
        .path()
        .join("node_modules")
        .join(rewire_core::DEFAULT_CACHE_DIR)
        .join("virtual:foo.js")
        .exists());
}

#[tokio::test]
async fn test_producer_failure_surfaces_unmodified() {
    let project = project_with_node_modules();

    let plugin = RewirePlugin::new()
        .cwd(project.path())
        .module_with("virtual:boom", |_ctx| async {
            Err("registry unreachable".into())
        });

    let mut config = BuildConfig::default();
    let err = plugin.config(&mut config).await.unwrap_err();
    assert_eq!(err.to_string(), "registry unreachable");
}
