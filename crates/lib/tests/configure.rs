//! End-to-end configuration tests.
//!
//! Each test lays out a plugin directory and runtime installations in a temp
//! directory, then drives the public pipeline the way a host build would.

use std::fs;
use std::path::{Path, PathBuf};

use pyembed_lib::config::{BuildMode, EngineConfig};
use pyembed_lib::discover::DiscoverError;
use pyembed_lib::engine::{ConfigureError, ConfigureOptions, configure, locate};
use serial_test::serial;
use temp_env::with_vars;
use tempfile::TempDir;

const TARGET: &str = "x86_64-windows";

fn touch(path: &Path) {
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, b"").unwrap();
}

fn canonical_temp() -> (TempDir, PathBuf) {
  let temp = TempDir::new().unwrap();
  let root = dunce::canonicalize(temp.path()).unwrap();
  (temp, root)
}

/// Config using the generic runtime naming, with a redistributable directory.
fn runtime_config(plugin: &Path) -> EngineConfig {
  fs::create_dir_all(plugin.join("redist")).unwrap();
  EngineConfig::parse(
    r#"
      [discovery]
      hints = []
      primary_env = "RUNTIME_HOME"
      secondary_env = "RUNTIME_HOME_ALT"
      marker = "marker.h"

      [library]
      prefix = "prefix"

      [bundle]
      redist_dir = "redist"

      [search_path]
      variable = "PYEMBED_IT_PATH"
    "#,
    plugin,
  )
  .unwrap()
}

fn options() -> ConfigureOptions {
  ConfigureOptions {
    amend_search_path: false,
    ..ConfigureOptions::new(TARGET)
  }
}

#[test]
#[serial]
fn runtime_home_from_environment() {
  let (_temp, root) = canonical_temp();
  let rt = root.join("opt/rt");
  touch(&rt.join("include/marker.h"));
  touch(&rt.join("libs/prefix7.lib"));
  let config = runtime_config(&root.join("plugin"));

  with_vars(
    [("RUNTIME_HOME", Some(rt.to_str().unwrap())), ("RUNTIME_HOME_ALT", None)],
    || {
      let description = configure(&config, &options()).unwrap();
      assert_eq!(description.include_paths, vec![rt.clone()]);
      assert_eq!(description.libraries, vec![rt.join("libs").join("prefix7.lib")]);
      assert!(description.runtime_dependencies.is_empty());
    },
  );
}

#[test]
#[serial]
fn primary_variable_outranks_secondary() {
  let (_temp, root) = canonical_temp();
  for name in ["primary", "secondary"] {
    touch(&root.join(name).join("include/marker.h"));
    touch(&root.join(name).join("libs/prefix3.lib"));
  }
  let config = runtime_config(&root.join("plugin"));
  let primary = root.join("primary");
  let secondary = root.join("secondary");

  with_vars(
    [
      ("RUNTIME_HOME", Some(primary.to_str().unwrap())),
      ("RUNTIME_HOME_ALT", Some(secondary.to_str().unwrap())),
    ],
    || {
      let found = locate(&config, TARGET).unwrap();
      assert_eq!(found.home.path(), primary);
    },
  );

  with_vars(
    [
      ("RUNTIME_HOME", Some(root.join("missing").to_str().unwrap())),
      ("RUNTIME_HOME_ALT", Some(secondary.to_str().unwrap())),
    ],
    || {
      let found = locate(&config, TARGET).unwrap();
      assert_eq!(found.home.path(), secondary);
    },
  );
}

#[test]
#[serial]
fn static_hints_outrank_environment() {
  let (_temp, root) = canonical_temp();
  let plugin = root.join("plugin");
  touch(&plugin.join("bundled/Headers/marker.h"));
  touch(&plugin.join("bundled/libs/prefix1.lib"));
  touch(&root.join("env/include/marker.h"));
  touch(&root.join("env/libs/prefix9.lib"));

  let mut config = runtime_config(&plugin);
  config.discovery.hints = vec!["bundled".to_string()];
  let env_home = root.join("env");

  with_vars(
    [("RUNTIME_HOME", Some(env_home.to_str().unwrap())), ("RUNTIME_HOME_ALT", None)],
    || {
      let found = locate(&config, TARGET).unwrap();
      assert_eq!(found.home.path(), plugin.join("bundled"));
      assert_eq!(found.library.minor_version, 1);
    },
  );
}

#[test]
#[serial]
fn no_installation_reports_every_candidate() {
  let (_temp, root) = canonical_temp();
  let mut config = runtime_config(&root.join("plugin"));
  config.discovery.hints = vec!["nowhere".to_string()];
  let env_home = root.join("also-nowhere");

  with_vars(
    [("RUNTIME_HOME", Some(env_home.to_str().unwrap())), ("RUNTIME_HOME_ALT", None)],
    || {
      let err = configure(&config, &options()).unwrap_err();
      let ConfigureError::Discover(DiscoverError::InstallationNotFound { tried, .. }) = &err else {
        panic!("unexpected error: {err}");
      };
      assert_eq!(tried, &vec![root.join("plugin").join("nowhere"), env_home.clone()]);
    },
  );
}

#[test]
#[serial]
fn unsupported_target_gets_no_configuration() {
  let (_temp, root) = canonical_temp();
  let config = runtime_config(&root.join("plugin"));

  for target in ["x86_64-linux", "aarch64-darwin", "Win32"] {
    let err = configure(&config, &ConfigureOptions::new(target)).unwrap_err();
    assert!(matches!(err, ConfigureError::UnsupportedPlatform(_)));
    assert!(err.to_string().contains(target));
  }
}

#[test]
#[serial]
fn full_description_for_editor_build() {
  let (_temp, root) = canonical_temp();
  let plugin = root.join("plugin");
  let rt = root.join("rt");
  touch(&rt.join("include/marker.h"));
  touch(&rt.join("libs/prefix7.lib"));
  touch(&rt.join("libs/prefix9.lib"));
  touch(&plugin.join("redist/a/x.dll"));
  touch(&plugin.join("redist/b/y.pyd"));
  touch(&plugin.join("redist/c/z.txt"));

  let config = runtime_config(&plugin);
  let options = ConfigureOptions {
    mode: BuildMode::Editor,
    host_minor: Some(20),
    ..options()
  };

  with_vars(
    [("RUNTIME_HOME", Some(rt.to_str().unwrap())), ("RUNTIME_HOME_ALT", None)],
    || {
      let description = configure(&config, &options).unwrap();
      assert_eq!(description.libraries, vec![rt.join("libs").join("prefix9.lib")]);

      let staged: Vec<_> = description.runtime_dependencies.iter().map(|(name, _)| name).collect();
      assert_eq!(staged, vec!["x.dll", "y.pyd"]);

      assert!(description.module.private.contains(&"UnrealEd".to_string()));
      assert!(description.module.private.contains(&"ApplicationCore".to_string()));
      assert_eq!(description.watched_env, vec!["RUNTIME_HOME", "RUNTIME_HOME_ALT"]);
      assert!(
        description
          .cargo_directives()
          .contains(&"cargo:rustc-link-lib=prefix9".to_string())
      );
    },
  );
}
