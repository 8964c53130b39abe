// src/config.rs
//! Service configuration: catalog location and how many songs to return.
//! Loaded from `config/recommender.toml`; every field has a default and env
//! overrides win, so a missing file is never fatal.

use serde::Deserialize;
use std::{env, fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/recommender.toml";

pub const ENV_CONFIG_PATH: &str = "RECOMMENDER_CONFIG_PATH";
pub const ENV_CATALOG_PATH: &str = "CATALOG_PATH";
pub const ENV_TOP_N: &str = "RECOMMENDER_TOP_N";

fn default_catalog_path() -> String {
    "config/catalog.json".to_string()
}

fn default_top_n() -> usize {
    crate::recommend::DEFAULT_TOP_N
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            top_n: default_top_n(),
        }
    }
}

impl RecommenderConfig {
    /// Load from the TOML file named by `RECOMMENDER_CONFIG_PATH` (or the
    /// default path), then apply env overrides. Falls back to defaults on any
    /// read/parse problem.
    pub fn load() -> Self {
        let path = env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut cfg = Self::load_from_file(&path);

        if let Ok(p) = env::var(ENV_CATALOG_PATH) {
            cfg.catalog_path = p;
        }
        if let Ok(raw) = env::var(ENV_TOP_N) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => cfg.top_n = n,
                _ => warn!(target: "config", value = %raw, "ignoring invalid RECOMMENDER_TOP_N"),
            }
        }
        cfg
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => match toml::from_str::<RecommenderConfig>(&s) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!(target: "config", path = %path.display(), error = %e, "config parse failed, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
