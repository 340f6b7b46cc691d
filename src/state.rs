//! Shared handler state

use std::path::PathBuf;

use crate::config::Config;

/// Handlers re-read the site config on every request; nothing else is shared.
#[derive(Debug, Clone)]
pub struct AppState {
    pub site_config: PathBuf,
    pub cache_max_age: u64,
}

impl AppState {
    pub fn new(site_config: impl Into<PathBuf>, cache_max_age: u64) -> Self {
        Self {
            site_config: site_config.into(),
            cache_max_age,
        }
    }

    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age)
    }
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self::new(config.site_config.clone(), config.cache_max_age)
    }
}
