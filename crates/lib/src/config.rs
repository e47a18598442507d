//! Engine configuration.
//!
//! Every setting has a default matching the stock plugin layout, so a missing or
//! partial `pyembed.toml` still describes a complete configuration. The file is
//! read once at the start of an invocation; relative paths inside it are anchored
//! at the directory containing the file.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::BINARY_OUTPUT_TOKEN;
use crate::platform::Platform;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse config {}: {source}", path.display())]
  Parse { path: PathBuf, source: toml::de::Error },

  #[error("failed to canonicalize config directory {}: {source}", path.display())]
  Canonicalize { path: PathBuf, source: std::io::Error },
}

/// Complete configuration for one build invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
  pub platform: PlatformConfig,
  pub discovery: DiscoveryConfig,
  pub library: LibraryConfig,
  pub bundle: BundleConfig,
  pub search_path: SearchPathConfig,
  pub module: ModuleRules,
  #[serde(skip)]
  base_dir: PathBuf,
}

impl EngineConfig {
  /// Load a configuration file, anchoring relative paths at its directory.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };
    let base_dir = dunce::canonicalize(dir).map_err(|e| ConfigError::Canonicalize {
      path: dir.to_path_buf(),
      source: e,
    })?;

    Self::parse(&content, base_dir).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// Parse configuration text with an explicit base directory.
  pub fn parse(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self, toml::de::Error> {
    let config: EngineConfig = toml::from_str(content)?;
    Ok(config.with_base_dir(base_dir))
  }

  /// Replace the directory relative candidate paths are anchored at.
  pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
    self.base_dir = base_dir.into();
    self
  }

  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
  /// The single target the runtime can be embedded for
  pub supported: Platform,
}

/// Where to look for the runtime installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
  /// Static candidates, tried before either environment variable
  pub hints: Vec<String>,
  pub primary_env: String,
  pub secondary_env: String,
  /// Header whose presence marks a directory as a runtime installation
  pub marker: String,
}

impl Default for DiscoveryConfig {
  fn default() -> Self {
    Self {
      hints: vec!["Resources/python_build_dependency".to_string()],
      primary_env: "PYTHONHOME".to_string(),
      secondary_env: "UNREALENGINEPYTHONHOME".to_string(),
      marker: "Python.h".to_string(),
    }
  }
}

/// Naming of the versioned link library inside a runtime home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
  /// Directory under the runtime home holding the libraries
  pub dir: String,
  pub prefix: String,
  pub extension: String,
}

impl LibraryConfig {
  /// File name for a given minor version, e.g. `python39.lib`
  pub fn file_name(&self, minor: u32) -> String {
    if self.extension.is_empty() {
      format!("{}{}", self.prefix, minor)
    } else {
      format!("{}{}.{}", self.prefix, minor, self.extension)
    }
  }

  /// Full path of the library for a given minor version under `home`
  pub fn artifact_path(&self, home: &Path, minor: u32) -> PathBuf {
    home.join(&self.dir).join(self.file_name(minor))
  }
}

impl Default for LibraryConfig {
  fn default() -> Self {
    Self {
      dir: "libs".to_string(),
      prefix: "python3".to_string(),
      extension: "lib".to_string(),
    }
  }
}

/// Redistributable files staged next to the produced binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
  pub redist_dir: String,
  pub output_token: String,
  /// File name suffixes marking a file as needed at run time (case sensitive)
  pub extensions: Vec<String>,
}

impl Default for BundleConfig {
  fn default() -> Self {
    Self {
      redist_dir: "Resources/python_runtime_dependency".to_string(),
      output_token: BINARY_OUTPUT_TOKEN.to_string(),
      extensions: vec![".dll".to_string(), ".pyd".to_string(), ".zip".to_string()],
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPathConfig {
  /// PATH-like variable the runtime home is appended to
  pub variable: String,
}

impl Default for SearchPathConfig {
  fn default() -> Self {
    Self {
      variable: "PATH".to_string(),
    }
  }
}

/// Kind of host build being configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  #[default]
  Game,
  Editor,
}

impl BuildMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Game => "game",
      Self::Editor => "editor",
    }
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Private dependencies added only when the host engine is new enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalDependencies {
  pub min_host_minor: u32,
  #[serde(default)]
  pub private_dependencies: Vec<String>,
}

/// Declarative module rules passed through to the host build.
///
/// `modes` and `platforms` are keyed by [`BuildMode::as_str`] and platform
/// triple respectively, and contribute extra private dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleRules {
  pub definitions: Vec<String>,
  pub public_dependencies: Vec<String>,
  pub private_dependencies: Vec<String>,
  pub modes: BTreeMap<String, Vec<String>>,
  pub platforms: BTreeMap<String, Vec<String>>,
  pub conditional: Vec<ConditionalDependencies>,
}

/// Module rules flattened for one target, mode and host version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleDependencies {
  pub definitions: Vec<String>,
  pub public: Vec<String>,
  pub private: Vec<String>,
}

impl ModuleRules {
  /// Flatten the table for a single build.
  ///
  /// Order is preserved: base lists first, then platform, mode and conditional
  /// additions. Names already present are not repeated.
  pub fn resolve(&self, target: Platform, mode: BuildMode, host_minor: Option<u32>) -> ModuleDependencies {
    let mut private = Vec::new();
    let platform_extra = self.platforms.get(&target.triple());
    let mode_extra = self.modes.get(mode.as_str());
    let conditional_extra = self
      .conditional
      .iter()
      .filter(|c| host_minor.is_some_and(|minor| minor >= c.min_host_minor))
      .map(|c| &c.private_dependencies);

    let sources = std::iter::once(&self.private_dependencies)
      .chain(platform_extra)
      .chain(mode_extra)
      .chain(conditional_extra);
    for names in sources {
      push_unique(&mut private, names);
    }

    let mut public = Vec::new();
    push_unique(&mut public, &self.public_dependencies);
    let mut definitions = Vec::new();
    push_unique(&mut definitions, &self.definitions);

    ModuleDependencies {
      definitions,
      public,
      private,
    }
  }
}

fn push_unique(into: &mut Vec<String>, names: &[String]) {
  for name in names {
    if !into.contains(name) {
      into.push(name.clone());
    }
  }
}

fn names(list: &[&str]) -> Vec<String> {
  list.iter().map(|s| s.to_string()).collect()
}

impl Default for ModuleRules {
  fn default() -> Self {
    let mut modes = BTreeMap::new();
    modes.insert(
      BuildMode::Editor.as_str().to_string(),
      names(&[
        "UnrealEd",
        "LevelEditor",
        "BlueprintGraph",
        "Projects",
        "Sequencer",
        "SequencerWidgets",
        "AssetTools",
        "LevelSequenceEditor",
        "MovieSceneTools",
        "MovieSceneTracks",
        "CinematicCamera",
        "EditorStyle",
        "GraphEditor",
        "UMGEditor",
        "AIGraph",
        "RawMesh",
        "DesktopWidgets",
        "EditorWidgets",
        "FBX",
        "Persona",
        "PropertyEditor",
        "LandscapeEditor",
        "MaterialEditor",
        "Json",
        "AssetManagerEditor",
      ]),
    );

    Self {
      definitions: names(&["WITH_UNREALENGINEPYTHON=1"]),
      public_dependencies: names(&["Core", "Sockets", "Networking"]),
      private_dependencies: names(&[
        "CoreUObject",
        "Engine",
        "InputCore",
        "Slate",
        "SlateCore",
        "MovieScene",
        "LevelSequence",
        "HTTP",
        "UMG",
        "AppFramework",
        "RHI",
        "Voice",
        "RenderCore",
        "MovieSceneCapture",
        "Landscape",
        "Foliage",
        "AIModule",
        "ApplicationCore",
        "HairStrandsCore",
      ]),
      modes,
      platforms: BTreeMap::new(),
      conditional: vec![ConditionalDependencies {
        min_host_minor: 18,
        private_dependencies: names(&["ApplicationCore"]),
      }],
    }
  }
}
