//! Implementation of the `pyembed locate` command.

use anyhow::{Context, Result};

use pyembed_lib::engine::locate;

use crate::EngineArgs;
use crate::output::{print_stat, print_success};

pub fn cmd_locate(args: &EngineArgs) -> Result<()> {
  let config = super::load_config(args)?;
  let target = super::target(args);

  let found = locate(&config, &target).context("Failed to locate runtime")?;

  print_success(&format!("Runtime found for {}", target));
  print_stat("Home", &found.home.to_string());
  print_stat("Library", &found.library.path.display().to_string());
  print_stat("Version", &found.library.minor_version.to_string());
  Ok(())
}
