//! Staged configuration pipeline.
//!
//! Stages run strictly in order and the first failure stops the whole run:
//! platform gate, discovery, search-path amendment, bundling. Nothing is cached
//! between invocations.

use thiserror::Error;
use tracing::{info, info_span};

use crate::bundle::{self, BundleError};
use crate::config::{BuildMode, EngineConfig};
use crate::description::BuildDescription;
use crate::discover::{self, DiscoverError, Discovery};
use crate::platform::env::amend_process_var;
use crate::platform::gate::{self, UnsupportedPlatform};
use crate::platform::paths::resolve;

/// Any failure that aborts configuration.
#[derive(Debug, Error)]
pub enum ConfigureError {
  #[error(transparent)]
  UnsupportedPlatform(#[from] UnsupportedPlatform),

  #[error(transparent)]
  Discover(#[from] DiscoverError),

  #[error(transparent)]
  Bundle(#[from] BundleError),
}

/// Per-invocation inputs that do not come from the config file.
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
  /// Target identifier checked by the platform gate
  pub target: String,
  pub mode: BuildMode,
  /// Minor version of the host engine, used by conditional module rules
  pub host_minor: Option<u32>,
  /// Append the runtime home to the process search path
  pub amend_search_path: bool,
}

impl ConfigureOptions {
  pub fn new(target: impl Into<String>) -> Self {
    Self {
      target: target.into(),
      mode: BuildMode::default(),
      host_minor: None,
      amend_search_path: true,
    }
  }
}

/// Gate the target and discover the runtime, without bundling.
pub fn locate(config: &EngineConfig, target: &str) -> Result<Discovery, ConfigureError> {
  gate::check(target, config.platform.supported)?;
  Ok(discover::discover(config)?)
}

/// Run the full pipeline and produce the build description.
pub fn configure(config: &EngineConfig, options: &ConfigureOptions) -> Result<BuildDescription, ConfigureError> {
  let _span = info_span!("configure", target = %options.target, mode = %options.mode).entered();

  let target = gate::check(&options.target, config.platform.supported)?;
  let discovery = discover::discover(config)?;

  if options.amend_search_path {
    amend_process_var(&config.search_path.variable, discovery.home.path());
  }

  let redist_dir = resolve(&config.bundle.redist_dir, config.base_dir());
  let manifest = bundle::bundle(&redist_dir, &config.bundle.output_token, &config.bundle.extensions)?;
  info!(count = manifest.len(), redist = %redist_dir.display(), "collected runtime dependencies");

  let module = config.module.resolve(target, options.mode, options.host_minor);
  let watched_env = [&config.discovery.primary_env, &config.discovery.secondary_env]
    .into_iter()
    .filter(|var| !var.is_empty())
    .cloned()
    .collect();

  Ok(BuildDescription::new(
    target,
    options.mode,
    discovery,
    module,
    manifest,
    watched_env,
  ))
}
