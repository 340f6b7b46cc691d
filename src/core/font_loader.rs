//! Font loader
//!
//! Applies a [`FontConfig`] to a page: marks `<body>` with
//! [`ENABLED_CLASS`] and injects `<style>` elements for the font faces and
//! the user's custom CSS. The browser build of the same routine ships as
//! `static/font-loader.js`; here it drives any [`Document`], which lets the
//! server pre-render pages with [`StaticDocument`].

use crate::core::fonts::{font_face_css, FontConfig, ENABLED_CLASS};
use crate::core::presets;

pub const FONT_FACES_ID: &str = "dynamic-font-faces";
pub const CUSTOM_CSS_ID: &str = "custom-font-css";

/// The parts of a DOM the loader touches.
pub trait Document {
    fn add_body_class(&mut self, class: &str);
    /// Append `<style id=..>` to the head.
    fn append_style(&mut self, id: &str, css: &str);
    /// Remove the element with this id, if present.
    fn remove_element(&mut self, id: &str);
}

/// In-memory document that renders to HTML fragments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticDocument {
    body_classes: Vec<String>,
    styles: Vec<(String, String)>,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_class(&self) -> String {
        self.body_classes.join(" ")
    }

    pub fn style(&self, id: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(style_id, _)| style_id == id)
            .map(|(_, css)| css.as_str())
    }

    /// `<style>` elements in insertion order, one per line.
    pub fn head_html(&self) -> String {
        self.styles
            .iter()
            .map(|(id, css)| format!("<style id=\"{}\">\n{}\n</style>", id, css))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Document for StaticDocument {
    fn add_body_class(&mut self, class: &str) {
        if !self.body_classes.iter().any(|c| c == class) {
            self.body_classes.push(class.to_string());
        }
    }

    fn append_style(&mut self, id: &str, css: &str) {
        self.styles.push((id.to_string(), css.to_string()));
    }

    fn remove_element(&mut self, id: &str) {
        if let Some(pos) = self.styles.iter().position(|(style_id, _)| style_id == id) {
            self.styles.remove(pos);
        }
    }
}

#[derive(Debug, Default)]
pub struct FontLoader {
    config: Option<FontConfig>,
}

impl FontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FontConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    pub fn config(&self) -> Option<&FontConfig> {
        self.config.as_ref()
    }

    /// Fetch `/api/font-config` from `base_url` and apply it. Failures are
    /// logged and leave the document untouched.
    pub async fn init<D: Document>(
        &mut self,
        client: &reqwest::Client,
        base_url: &str,
        doc: &mut D,
    ) {
        let endpoint = format!("{}/api/font-config", base_url.trim_end_matches('/'));

        let response = match client.get(&endpoint).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Failed to load font config: {}", e);
                return;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(
                "Failed to load font config: {} returned {}",
                endpoint,
                response.status()
            );
            return;
        }

        match response.json::<FontConfig>().await {
            Ok(config) => {
                self.config = Some(config);
                self.apply(doc);
            }
            Err(e) => tracing::warn!("Failed to load font config: {}", e),
        }
    }

    pub fn apply<D: Document>(&self, doc: &mut D) {
        let Some(config) = self.config.as_ref().filter(|c| c.enable) else {
            return;
        };

        doc.add_body_class(ENABLED_CLASS);

        if !config.custom_fonts.is_empty() {
            doc.append_style(FONT_FACES_ID, &font_face_css(&config.custom_fonts));
        }

        if let Some(css) = config.custom_css.as_deref().filter(|css| !css.is_empty()) {
            doc.append_style(CUSTOM_CSS_ID, css);
        }
    }

    /// Swap in a new config, dropping the styles injected for the old one.
    pub fn update<D: Document>(&mut self, config: FontConfig, doc: &mut D) {
        self.config = Some(config);
        doc.remove_element(FONT_FACES_ID);
        doc.remove_element(CUSTOM_CSS_ID);
        self.apply(doc);
    }

    /// Returns false for unknown preset names.
    pub fn switch_preset<D: Document>(&mut self, name: &str, doc: &mut D) -> bool {
        match presets::preset(name) {
            Some(config) => {
                self.update(config, doc);
                tracing::info!("Switched to {} font preset", name);
                true
            }
            None => {
                tracing::warn!("Font preset \"{}\" not found", name);
                false
            }
        }
    }
}
