//! Implementation of the `pyembed bundle` command.

use anyhow::{Context, Result};

use pyembed_lib::engine::{ConfigureOptions, configure};

use crate::EngineArgs;
use crate::output::{print_info, print_json, print_mapping};

pub fn cmd_bundle(args: &EngineArgs, json: bool) -> Result<()> {
  let config = super::load_config(args)?;
  let options = ConfigureOptions {
    amend_search_path: false,
    ..ConfigureOptions::new(super::target(args))
  };

  let description = configure(&config, &options).context("Configuration failed")?;
  let manifest = &description.runtime_dependencies;

  if json {
    return print_json(manifest);
  }

  if manifest.is_empty() {
    print_info("No runtime dependencies to stage.");
    return Ok(());
  }

  print_info(&format!("{} runtime dependencies:", manifest.len()));
  for (_, entry) in manifest.iter() {
    print_mapping(
      &entry.destination.display().to_string(),
      &entry.source.display().to_string(),
    );
  }
  Ok(())
}
