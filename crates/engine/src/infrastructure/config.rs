//! Engine configuration read from the environment.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use herobldr_domain::MAX_FEATURE_DEPTH;

pub const DEFAULT_LOG_FILTER: &str = "herobldr_engine=debug";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Hero document to inspect
    pub hero_path: Option<PathBuf>,
    /// Sourcebook documents, in priority order
    pub sourcebook_paths: Vec<PathBuf>,
    /// Nesting limit for feature panels
    pub max_feature_depth: usize,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hero_path: None,
            sourcebook_paths: Vec::new(),
            max_feature_depth: MAX_FEATURE_DEPTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let max_feature_depth = match non_empty("HEROBLDR_MAX_FEATURE_DEPTH") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("HEROBLDR_MAX_FEATURE_DEPTH must be a number, got {:?}", raw))?,
            None => MAX_FEATURE_DEPTH,
        };

        let sourcebook_paths = non_empty("HEROBLDR_SOURCEBOOK_PATHS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(Self {
            hero_path: non_empty("HEROBLDR_HERO_PATH").map(PathBuf::from),
            sourcebook_paths,
            max_feature_depth,
            log_filter: non_empty("HEROBLDR_LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        })
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.max_feature_depth, 16);
        assert_eq!(config.log_filter, "herobldr_engine=debug");
    }

    #[test]
    fn reads_paths_and_limits() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("HEROBLDR_HERO_PATH", "heroes/korva.json"),
            ("HEROBLDR_SOURCEBOOK_PATHS", "core.json, homebrew.json,,"),
            ("HEROBLDR_MAX_FEATURE_DEPTH", "4"),
            ("HEROBLDR_LOG_FILTER", "herobldr_engine=warn"),
        ]))
        .expect("config");

        assert_eq!(config.hero_path, Some(PathBuf::from("heroes/korva.json")));
        assert_eq!(
            config.sourcebook_paths,
            vec![PathBuf::from("core.json"), PathBuf::from("homebrew.json")]
        );
        assert_eq!(config.max_feature_depth, 4);
        assert_eq!(config.log_filter, "herobldr_engine=warn");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = EngineConfig::from_lookup(lookup(&[("HEROBLDR_HERO_PATH", "  ")])).expect("config");
        assert_eq!(config.hero_path, None);
    }

    #[test]
    fn rejects_a_non_numeric_depth() {
        let err = EngineConfig::from_lookup(lookup(&[("HEROBLDR_MAX_FEATURE_DEPTH", "deep")]))
            .expect_err("should fail");
        assert!(err.to_string().contains("HEROBLDR_MAX_FEATURE_DEPTH"));
    }
}
