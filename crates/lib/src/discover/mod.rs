//! Runtime installation discovery.
//!
//! Discovery runs in three steps:
//! 1. [`candidates::collect`] gathers candidate directories in precedence order
//! 2. [`validate::validate`] picks the first candidate containing the marker header
//! 3. [`library::select_library`] finds the newest versioned link library in it

pub mod candidates;
pub mod library;
pub mod validate;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::EngineConfig;

pub use library::select_library;
pub use validate::validate;

/// A runtime installation directory proven to contain the marker header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedHome(PathBuf);

impl ResolvedHome {
  pub(crate) fn new(path: PathBuf) -> Self {
    Self(path)
  }

  pub fn path(&self) -> &Path {
    &self.0
  }
}

impl fmt::Display for ResolvedHome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.display())
  }
}

/// The versioned link library selected from a [`ResolvedHome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryArtifact {
  pub path: PathBuf,
  pub minor_version: u32,
}

impl LibraryArtifact {
  /// Library name as passed to a linker, i.e. the file name without extension
  pub fn link_name(&self) -> Option<String> {
    self.path.file_stem().map(|s| s.to_string_lossy().into_owned())
  }
}

/// Errors that stop discovery.
#[derive(Debug, Error)]
pub enum DiscoverError {
  #[error(
    "no runtime installation found: none of the candidates contain include/{marker} or Headers/{marker}\n  tried: {}",
    format_tried(.tried)
  )]
  InstallationNotFound { marker: String, tried: Vec<PathBuf> },

  #[error(
    "invalid runtime installation at {}: missing versioned library files\n  tried: {}",
    .home.display(),
    format_tried(.tried)
  )]
  LibraryArtifactMissing { home: PathBuf, tried: Vec<PathBuf> },
}

fn format_tried(paths: &[PathBuf]) -> String {
  if paths.is_empty() {
    return "(no candidates)".to_string();
  }
  paths
    .iter()
    .map(|p| p.display().to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Outcome of a successful discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discovery {
  pub home: ResolvedHome,
  pub library: LibraryArtifact,
}

/// Run candidate collection, validation and library selection for `config`.
pub fn discover(config: &EngineConfig) -> Result<Discovery, DiscoverError> {
  let settings = &config.discovery;
  let candidates = candidates::collect(&settings.hints, &settings.primary_env, &settings.secondary_env);

  let home = validate(&candidates, config.base_dir(), &settings.marker)?;
  info!(home = %home, "using runtime installation");

  let library = select_library(&home, &config.library)?;
  info!(library = %library.path.display(), version = library.minor_version, "using link library");

  Ok(Discovery { home, library })
}
