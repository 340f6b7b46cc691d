//! Umami analytics settings
//!
//! Users paste either a public share link
//! (`https://eu.umami.is/api/share/2dKQ5T0WrUn6AYtr`) or the tracking snippet
//! Umami generates. Whatever the user leaves empty is derived from those.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

static SRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"src=["']([^"']*)["']"#).expect("static regex"));
static WEBSITE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-website-id=["']([^"']*)["']"#).expect("static regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UmamiConfig {
    pub enable: bool,
    pub share_url: String,
    pub html_script: String,
    pub url: String,
    pub script_url: String,
    pub website_id: String,
}

/// Older site configs nest the settings under `Analysis.umami`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyUmami {
    enabled: bool,
    #[serde(rename = "shareURL")]
    share_url: String,
    scripts: String,
}

impl From<LegacyUmami> for UmamiConfig {
    fn from(legacy: LegacyUmami) -> Self {
        Self {
            enable: legacy.enabled,
            share_url: legacy.share_url,
            html_script: legacy.scripts,
            ..Self::default()
        }
    }
}

/// Values recovered from a share link or a tracking snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub url: String,
    pub script_url: String,
    pub website_id: String,
}

fn base_url(u: &Url) -> Option<String> {
    let host = u.host_str().filter(|h| !h.is_empty())?;
    Some(format!("{}://{}", u.scheme(), host))
}

/// The website id is the last path segment of the share link; the script
/// lives at `/script.js` on the same host.
pub fn extract_from_share_url(share_url: &str) -> Option<Extracted> {
    if share_url.is_empty() {
        return None;
    }

    let u = match Url::parse(share_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::error!("Error extracting config from share URL: {}", e);
            return None;
        }
    };
    let url = base_url(&u)?;
    // A trailing slash leaves the id empty; url and script are still usable
    let website_id = u.path().rsplit('/').next().unwrap_or("");

    Some(Extracted {
        script_url: format!("{}/script.js", url),
        website_id: website_id.to_string(),
        url,
    })
}

/// Pull `src` and `data-website-id` out of a `<script>` tag.
pub fn extract_from_html_script(html_script: &str) -> Option<Extracted> {
    if html_script.is_empty() {
        return None;
    }

    let script_url = SRC_RE.captures(html_script)?.get(1)?.as_str();
    let website_id = WEBSITE_ID_RE.captures(html_script)?.get(1)?.as_str();

    let u = match Url::parse(script_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::error!("Error parsing script URL: {}", e);
            return None;
        }
    };

    Some(Extracted {
        url: base_url(&u)?,
        script_url: script_url.to_string(),
        website_id: website_id.to_string(),
    })
}

fn fill(field: &mut String, value: &str) {
    if field.is_empty() {
        *field = value.to_string();
    }
}

impl UmamiConfig {
    pub fn try_from_site(site: &Value) -> Result<Self> {
        let mut config = if let Some(umami) = site.get("umami").filter(|v| !v.is_null()) {
            Self::deserialize(umami).map_err(|source| Error::Section {
                key: "umami",
                source,
            })?
        } else if let Some(legacy) = site
            .get("Analysis")
            .and_then(|a| a.get("umami"))
            .filter(|v| !v.is_null())
        {
            LegacyUmami::deserialize(legacy)
                .map_err(|source| Error::Section {
                    key: "Analysis.umami",
                    source,
                })?
                .into()
        } else {
            tracing::debug!("No umami section in site config, using defaults");
            Self::default()
        };

        config.resolve();
        Ok(config)
    }

    /// Like [`UmamiConfig::try_from_site`], falling back to a disabled config.
    pub fn from_site(site: &Value) -> Self {
        Self::try_from_site(site).unwrap_or_else(|e| {
            tracing::error!("Error reading Umami config: {}", e);
            Self::default()
        })
    }

    /// Fill empty `url`/`scriptUrl`/`websiteId` from the share link, then
    /// from the snippet. Explicit values are never overwritten.
    pub fn resolve(&mut self) {
        let sources = [
            extract_from_share_url(&self.share_url),
            extract_from_html_script(&self.html_script),
        ];
        for extracted in sources.into_iter().flatten() {
            fill(&mut self.url, &extracted.url);
            fill(&mut self.script_url, &extracted.script_url);
            fill(&mut self.website_id, &extracted.website_id);
        }
    }

    /// Tracking tag for the page head, when enabled and fully resolved.
    pub fn tracking_script(&self) -> Option<String> {
        if !self.enable || self.script_url.is_empty() || self.website_id.is_empty() {
            return None;
        }
        Some(format!(
            r#"<script defer src="{}" data-website-id="{}"></script>"#,
            self.script_url, self.website_id
        ))
    }
}
