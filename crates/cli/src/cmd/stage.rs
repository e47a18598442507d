//! Implementation of the `pyembed stage` command.
//!
//! Copies every manifest entry into the binary output directory. The engine
//! only describes what to stage; this command is the copying side.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pyembed_lib::engine::{ConfigureOptions, configure};

use crate::EngineArgs;
use crate::output::{print_info, print_success};

pub fn cmd_stage(args: &EngineArgs, out: &Path) -> Result<()> {
  let config = super::load_config(args)?;
  let options = ConfigureOptions {
    amend_search_path: false,
    ..ConfigureOptions::new(super::target(args))
  };

  let description = configure(&config, &options).context("Configuration failed")?;
  let manifest = &description.runtime_dependencies;

  fs::create_dir_all(out).with_context(|| format!("Failed to create output directory: {}", out.display()))?;

  for (name, entry) in manifest.iter() {
    let dest = out.join(name);
    fs::copy(&entry.source, &dest)
      .with_context(|| format!("Failed to copy {} to {}", entry.source.display(), dest.display()))?;
  }

  if manifest.is_empty() {
    print_info("No runtime dependencies to stage.");
  } else {
    print_success(&format!("Staged {} file(s) into {}", manifest.len(), out.display()));
  }
  Ok(())
}
