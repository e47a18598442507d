//! PATH-style variable amendment.

use std::path::Path;

use tracing::debug;

/// Separator between entries of a PATH-like variable on this host
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';

/// Separator between entries of a PATH-like variable on this host
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Append `entry` to a PATH-like value unless it is already there.
///
/// Containment is a case-insensitive substring check, so an entry present under
/// different casing is never added twice. Existing entries are never removed or
/// reordered. The appended entry is always followed by a separator.
pub fn amend(current: &str, entry: &str) -> String {
  if current.to_lowercase().contains(&entry.to_lowercase()) {
    return current.to_string();
  }

  let mut updated = String::with_capacity(current.len() + entry.len() + 2);
  updated.push_str(current);
  if !updated.is_empty() && !updated.ends_with(PATH_LIST_SEPARATOR) {
    updated.push(PATH_LIST_SEPARATOR);
  }
  updated.push_str(entry);
  updated.push(PATH_LIST_SEPARATOR);
  updated
}

/// Apply [`amend`] to the process environment variable `var`.
///
/// An unset variable is treated as empty. Returns true if the variable changed.
///
/// Only the configuration pipeline calls this, and it runs before the host build
/// spawns any threads.
pub(crate) fn amend_process_var(var: &str, entry: &Path) -> bool {
  let current = std::env::var_os(var)
    .map(|v| v.to_string_lossy().into_owned())
    .unwrap_or_default();
  let entry = entry.to_string_lossy();
  let updated = amend(&current, &entry);

  if updated == current {
    debug!(var, entry = %entry, "search path already contains entry");
    return false;
  }

  // SAFETY: build configuration runs on a single thread; nothing else reads or
  // writes the environment while the pipeline is executing.
  unsafe { std::env::set_var(var, &updated) };
  debug!(var, entry = %entry, "appended entry to search path");
  true
}
