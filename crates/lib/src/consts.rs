/// Config file looked up in the working directory when none is given
pub const CONFIG_FILENAME: &str = "pyembed.toml";

/// Highest minor version probed when selecting the link library.
///
/// The scan always covers `MAX_MINOR_VERSION..=0`, newest first.
pub const MAX_MINOR_VERSION: u32 = 9;

/// Directories under a runtime home that may hold the marker header.
///
/// `include` is the Windows installer layout, `Headers` the macOS framework layout.
pub const HEADER_DIRS: [&str; 2] = ["include", "Headers"];

/// Placeholder for the host build's binary output directory in bundle destinations
pub const BINARY_OUTPUT_TOKEN: &str = "$(BinaryOutputDir)";
