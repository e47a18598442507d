//! Supported-platform gate.
//!
//! The embedded runtime ships for exactly one target. Any other target gets no
//! configuration at all, so the gate runs before any discovery work.

use thiserror::Error;
use tracing::debug;

use super::Platform;

/// The requested target is not the supported platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported platform: {target}, only {supported} is supported")]
pub struct UnsupportedPlatform {
  pub target: String,
  pub supported: Platform,
}

/// Accept `target` only if it is exactly the `supported` platform's triple.
///
/// `target` is an opaque identifier compared as text, so alias spellings that
/// would parse to the same platform (`aarch64-macos` for `aarch64-darwin`) are
/// rejected like any other value.
pub fn check(target: &str, supported: Platform) -> Result<Platform, UnsupportedPlatform> {
  if target == supported.triple() {
    debug!(target = %target, "target platform accepted");
    return Ok(supported);
  }
  Err(UnsupportedPlatform {
    target: target.to_string(),
    supported,
  })
}
