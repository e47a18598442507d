mod bundle;
mod configure;
mod info;
mod locate;
mod stage;

pub use bundle::cmd_bundle;
pub use configure::cmd_configure;
pub use info::cmd_info;
pub use locate::cmd_locate;
pub use stage::cmd_stage;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pyembed_lib::config::EngineConfig;
use pyembed_lib::consts::CONFIG_FILENAME;
use pyembed_lib::platform::platform_triple;

use crate::EngineArgs;

/// Load the config named on the command line, falling back to `./pyembed.toml`
/// and then to the built-in defaults anchored at the working directory.
pub(crate) fn load_config(args: &EngineArgs) -> Result<EngineConfig> {
  if let Some(path) = &args.config {
    return EngineConfig::load(path).with_context(|| format!("Failed to load config: {}", path.display()));
  }

  let local = Path::new(CONFIG_FILENAME);
  if local.is_file() {
    return EngineConfig::load(local).with_context(|| format!("Failed to load config: {}", local.display()));
  }

  let cwd = std::env::current_dir().context("Failed to determine working directory")?;
  let base_dir = dunce::canonicalize(&cwd).unwrap_or(cwd);
  debug!(base = %base_dir.display(), "no config file, using defaults");
  Ok(EngineConfig::default().with_base_dir(base_dir))
}

/// Target from the command line, or the host platform.
pub(crate) fn target(args: &EngineArgs) -> String {
  args
    .target
    .clone()
    .or_else(platform_triple)
    .unwrap_or_else(|| format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS))
}
