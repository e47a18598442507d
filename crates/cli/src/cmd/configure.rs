//! Implementation of the `pyembed configure` command.
//!
//! Runs the whole pipeline and prints the build description in the requested
//! format. Cargo format is meant to be echoed from a build script.
//!
//! The process environment is left alone: this process exits right after
//! printing, so the search-path entry is reported for the caller to apply.

use anyhow::{Context, Result};

use pyembed_lib::config::BuildMode;
use pyembed_lib::engine::{ConfigureOptions, configure};

use crate::EngineArgs;
use crate::output::{OutputFormat, print_json, print_mapping, print_stat, print_success};

pub fn cmd_configure(args: &EngineArgs, mode: BuildMode, host_minor: Option<u32>, format: OutputFormat) -> Result<()> {
  let config = super::load_config(args)?;
  let options = ConfigureOptions {
    mode,
    host_minor,
    amend_search_path: false,
    ..ConfigureOptions::new(super::target(args))
  };

  let description = configure(&config, &options).context("Configuration failed")?;

  match format {
    OutputFormat::Json => print_json(&description)?,
    OutputFormat::Cargo => {
      for line in description.cargo_directives() {
        println!("{}", line);
      }
    }
    OutputFormat::Text => {
      print_success(&format!("Configured {} build for {}", description.mode, description.target));
      print_stat("Runtime home", &description.runtime_home.display().to_string());
      for include in &description.include_paths {
        print_stat("Include", &include.display().to_string());
      }
      for library in &description.libraries {
        print_stat("Library", &library.display().to_string());
      }
      print_stat("Search path entry", &description.search_path_entry.display().to_string());
      print_stat("Definitions", &description.module.definitions.join(" "));
      print_stat("Public modules", &description.module.public.join(", "));
      print_stat("Private modules", &description.module.private.join(", "));
      print_stat(
        "Runtime dependencies",
        &description.runtime_dependencies.len().to_string(),
      );
      for (_, entry) in description.runtime_dependencies.iter() {
        print_mapping(
          &entry.destination.display().to_string(),
          &entry.source.display().to_string(),
        );
      }
    }
  }

  Ok(())
}
