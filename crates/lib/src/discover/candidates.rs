use tracing::debug;

/// Build the ordered candidate list.
///
/// Precedence is positional: static hints first, then the primary environment
/// variable, then the secondary one. Unset or empty variables contribute nothing.
/// Entries are neither deduplicated nor checked.
pub fn collect(hints: &[String], primary_env: &str, secondary_env: &str) -> Vec<String> {
  let mut candidates = hints.to_vec();

  for var in [primary_env, secondary_env] {
    if var.is_empty() {
      continue;
    }
    match std::env::var(var) {
      Ok(value) if !value.is_empty() => {
        debug!(var, value = %value, "candidate from environment");
        candidates.push(value);
      }
      _ => debug!(var, "environment override not set"),
    }
  }

  candidates
}
