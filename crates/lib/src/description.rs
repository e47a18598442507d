//! Build description handed to the host build.
//!
//! This is the engine's only output: everything the host needs to compile,
//! link and stage against the discovered runtime.

use std::path::PathBuf;

use serde::Serialize;

use crate::bundle::BundleManifest;
use crate::config::{BuildMode, ModuleDependencies};
use crate::discover::Discovery;
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescription {
  pub target: Platform,
  pub mode: BuildMode,
  pub runtime_home: PathBuf,
  pub include_paths: Vec<PathBuf>,
  pub libraries: Vec<PathBuf>,
  pub module: ModuleDependencies,
  /// Directory appended to the PATH-like variable for dependent tooling
  pub search_path_entry: PathBuf,
  pub runtime_dependencies: BundleManifest,
  /// Environment variables whose change invalidates this description
  pub watched_env: Vec<String>,
  #[serde(skip)]
  link_name: Option<String>,
}

impl BuildDescription {
  pub fn new(
    target: Platform,
    mode: BuildMode,
    discovery: Discovery,
    module: ModuleDependencies,
    runtime_dependencies: BundleManifest,
    watched_env: Vec<String>,
  ) -> Self {
    let home = discovery.home.path().to_path_buf();
    let link_name = discovery.library.link_name();
    Self {
      target,
      mode,
      include_paths: vec![home.clone()],
      libraries: vec![discovery.library.path],
      module,
      search_path_entry: home.clone(),
      runtime_home: home,
      runtime_dependencies,
      watched_env,
      link_name,
    }
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  /// Render as Cargo build-script directives.
  ///
  /// Module definitions and dependency names have no Cargo equivalent and are
  /// omitted; staging is not expressed either since Cargo has no notion of it.
  pub fn cargo_directives(&self) -> Vec<String> {
    let mut lines = Vec::new();

    for var in &self.watched_env {
      lines.push(format!("cargo:rerun-if-env-changed={var}"));
    }
    for library in &self.libraries {
      lines.push(format!("cargo:rerun-if-changed={}", library.display()));
      if let Some(dir) = library.parent() {
        lines.push(format!("cargo:rustc-link-search=native={}", dir.display()));
      }
    }
    if let Some(name) = &self.link_name {
      lines.push(format!("cargo:rustc-link-lib={name}"));
    }
    for include in &self.include_paths {
      lines.push(format!("cargo:include={}", include.display()));
    }

    lines
  }
}
