//! Site configuration loading
//!
//! The file is JSON with optional comments. Every loader here degrades to an
//! empty object on failure; derived views then fall back to their defaults.

use serde_json::{Map, Value};
use std::path::Path;

use crate::core::jsonc;
use crate::error::{Error, Result};

fn parse(path: &Path, raw: &str) -> Result<Value> {
    let value: Value = jsonc::from_str(raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(_) => Ok(value),
        Value::Null => Err(Error::NotAnObject("null")),
        Value::Bool(_) => Err(Error::NotAnObject("a boolean")),
        Value::Number(_) => Err(Error::NotAnObject("a number")),
        Value::String(_) => Err(Error::NotAnObject("a string")),
        Value::Array(_) => Err(Error::NotAnObject("an array")),
    }
}

pub fn try_load_site_config(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &raw)
}

/// Read and parse the site config, or `{}` if that fails.
pub fn load_site_config(path: &Path) -> Value {
    try_load_site_config(path).unwrap_or_else(|e| {
        tracing::error!("Failed to load site config: {}", e);
        Value::Object(Map::new())
    })
}

/// Async variant for request handlers.
pub async fn load_site_config_async(path: &Path) -> Value {
    let loaded = match tokio::fs::read_to_string(path).await {
        Ok(raw) => parse(path, &raw),
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    };

    loaded.unwrap_or_else(|e| {
        tracing::error!("Failed to load site config: {}", e);
        Value::Object(Map::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_jsonc() {
        let file = write_config(
            r#"{
                // analytics
                "umami": { "enable": true },
                /* fonts */
                "fonts": { "enable": false }
            }"#,
        );
        let value = load_site_config(file.path());
        assert_eq!(value["umami"]["enable"], true);
        assert_eq!(value["fonts"]["enable"], false);
    }

    #[test]
    fn test_missing_file_is_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let value = load_site_config(&dir.path().join("config.jsonc"));
        assert_eq!(value, serde_json::json!({}));

        let err = try_load_site_config(&dir.path().join("config.jsonc")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_empty_object() {
        let file = write_config("{ \"fonts\": ");
        assert_eq!(load_site_config(file.path()), serde_json::json!({}));
        assert!(matches!(
            try_load_site_config(file.path()),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_non_object_root_rejected() {
        let file = write_config("[1, 2, 3]");
        assert!(matches!(
            try_load_site_config(file.path()),
            Err(Error::NotAnObject("an array"))
        ));
        assert_eq!(load_site_config(file.path()), serde_json::json!({}));
    }

    #[test]
    fn test_example_config() {
        let value = try_load_site_config(Path::new("config.example.jsonc")).unwrap();
        assert_eq!(value["fonts"]["enable"], true);
        assert_eq!(value["fonts"]["customFonts"][0]["format"], "truetype");
        assert_eq!(value["umami"]["enable"], false);
    }

    #[tokio::test]
    async fn test_async_loader() {
        let file = write_config(r#"{"fonts": {"enable": true}}"#);
        let value = load_site_config_async(file.path()).await;
        assert_eq!(value["fonts"]["enable"], true);

        let dir = tempfile::tempdir().unwrap();
        let value = load_site_config_async(&dir.path().join("nope.json")).await;
        assert_eq!(value, serde_json::json!({}));
    }
}
