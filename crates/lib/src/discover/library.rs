use tracing::debug;

use super::{DiscoverError, LibraryArtifact, ResolvedHome};
use crate::config::LibraryConfig;
use crate::consts::MAX_MINOR_VERSION;

/// Pick the newest versioned link library under `home`.
///
/// Minor versions are probed from [`MAX_MINOR_VERSION`] down to zero and the
/// first existing file wins. There is no fallback: an exhausted range is an
/// invalid installation.
pub fn select_library(home: &ResolvedHome, layout: &LibraryConfig) -> Result<LibraryArtifact, DiscoverError> {
  let mut tried = Vec::new();

  for minor in (0..=MAX_MINOR_VERSION).rev() {
    let path = layout.artifact_path(home.path(), minor);
    if path.is_file() {
      debug!(path = %path.display(), "found versioned library");
      return Ok(LibraryArtifact {
        path,
        minor_version: minor,
      });
    }
    debug!(path = %path.display(), "library version not present");
    tried.push(path);
  }

  Err(DiscoverError::LibraryArtifactMissing {
    home: home.path().to_path_buf(),
    tried,
  })
}
