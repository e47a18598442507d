pub mod arch;
pub mod env;
pub mod gate;
pub mod os;
pub mod paths;

use arch::Arch;
use os::Os;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Platform identifier combining architecture and OS (e.g., "x86_64-windows")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Platform {
  pub arch: Arch,
  pub os: Os,
}

/// Error returned when a string is not a recognizable `<arch>-<os>` triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePlatformError {
  #[error("expected <arch>-<os>, got {0:?}")]
  Malformed(String),

  #[error("unknown architecture: {0}")]
  UnknownArch(String),

  #[error("unknown operating system: {0}")]
  UnknownOs(String),
}

impl Platform {
  /// Create a new platform identifier
  pub fn new(arch: Arch, os: Os) -> Self {
    Self { arch, os }
  }

  /// Detect the current platform at runtime
  ///
  /// Returns `None` if the OS or architecture is not supported
  pub fn current() -> Option<Self> {
    Some(Self {
      arch: Arch::current()?,
      os: Os::current()?,
    })
  }

  /// Returns the platform triple string (e.g., "x86_64-windows")
  pub fn triple(&self) -> String {
    format!("{}-{}", self.arch, self.os)
  }
}

impl Default for Platform {
  /// 64-bit Windows, the only target the embedded runtime ships for
  fn default() -> Self {
    Self::new(Arch::X86_64, Os::Windows)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.triple())
  }
}

impl FromStr for Platform {
  type Err = ParsePlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (arch, os) = s
      .split_once('-')
      .ok_or_else(|| ParsePlatformError::Malformed(s.to_string()))?;
    Ok(Self::new(arch.parse()?, os.parse()?))
  }
}

impl TryFrom<String> for Platform {
  type Error = ParsePlatformError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<Platform> for String {
  fn from(platform: Platform) -> Self {
    platform.triple()
  }
}

/// Returns the platform triple for the current system (e.g., "aarch64-darwin")
///
/// Returns `None` if the current platform is not supported
pub fn platform_triple() -> Option<String> {
  Platform::current().map(|p| p.triple())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn platform_triple_format() {
    let platform = Platform::new(Arch::Aarch64, Os::MacOs);
    assert_eq!(platform.triple(), "aarch64-darwin");

    let platform = Platform::new(Arch::X86_64, Os::Windows);
    assert_eq!(platform.triple(), "x86_64-windows");
  }

  #[test]
  fn parse_round_trips_through_triple() {
    let platform: Platform = "x86_64-windows".parse().unwrap();
    assert_eq!(platform, Platform::default());
    assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
  }

  #[test]
  fn parse_rejects_malformed_triples() {
    assert_eq!(
      "Win64".parse::<Platform>(),
      Err(ParsePlatformError::Malformed("Win64".to_string()))
    );
    assert_eq!(
      "arm-windows".parse::<Platform>(),
      Err(ParsePlatformError::UnknownArch("arm".to_string()))
    );
    assert_eq!(
      "x86_64-freebsd".parse::<Platform>(),
      Err(ParsePlatformError::UnknownOs("freebsd".to_string()))
    );
  }
}
