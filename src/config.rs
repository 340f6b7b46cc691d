//! Configuration

use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub web_addr: String,
    pub cors: String,
    pub site_config: PathBuf,
    pub cache_max_age: u64, // seconds
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv::dotenv().ok();

    Config {
        web_addr: env::var("WEB_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        cors: env::var("WEB_CORS").unwrap_or_else(|_| "*".to_string()),
        site_config: env::var("SITE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("src").join("config.jsonc")),
        cache_max_age: env::var("CACHE_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600),
    }
});
