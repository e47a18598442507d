//! pyembed-lib: build-time discovery of an embedded Python runtime
//!
//! This crate turns a set of location hints into a validated runtime installation
//! and derives everything a host build needs to link and ship against it:
//! - `platform`: target identifiers, the supported-platform gate, path helpers
//! - `discover`: candidate collection, installation validation, library selection
//! - `bundle`: the manifest of redistributable files staged next to the binary
//! - `description`: the build description handed to the host build
//! - `engine`: the staged pipeline tying it all together

pub mod bundle;
pub mod config;
pub mod consts;
pub mod description;
pub mod discover;
pub mod engine;
pub mod platform;

#[cfg(test)]
pub mod testutil;
