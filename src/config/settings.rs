//! Runtime settings read from environment variables.
//!
//! Values usually come from a `.env` file loaded at startup. Every setting has a
//! default, so the planner runs with no environment at all.

use std::path::PathBuf;

/// Seed file used when `PLANNER_SEED_PATH` is not set.
pub const DEFAULT_SEED_PATH: &str = "config.toml";

/// Gets the seed file path from `PLANNER_SEED_PATH`, falling back to [`DEFAULT_SEED_PATH`].
#[must_use]
pub fn get_seed_path() -> PathBuf {
    resolve_seed_path(std::env::var("PLANNER_SEED_PATH").ok())
}

/// Gets the store id whose chart should be printed from `PLANNER_CHART_STORE`.
#[must_use]
pub fn get_chart_store() -> Option<String> {
    non_blank(std::env::var("PLANNER_CHART_STORE").ok())
}

fn resolve_seed_path(value: Option<String>) -> PathBuf {
    non_blank(value).map_or_else(|| PathBuf::from(DEFAULT_SEED_PATH), PathBuf::from)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_seed_path_default() {
        assert_eq!(resolve_seed_path(None), PathBuf::from("config.toml"));
        assert_eq!(resolve_seed_path(Some("  ".to_string())), PathBuf::from("config.toml"));
    }

    #[test]
    fn test_resolve_seed_path_override() {
        assert_eq!(
            resolve_seed_path(Some("data/q3.toml".to_string())),
            PathBuf::from("data/q3.toml")
        );
    }

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank(Some(" ST046 ".to_string())), Some("ST046".to_string()));
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(None), None);
    }
}
