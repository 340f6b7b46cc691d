//! Font configuration and CSS generation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{Error, Result};

/// Class added to `<body>` when the custom font system is active.
pub const ENABLED_CLASS: &str = "font-config-enabled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    pub enable: bool,
    pub global: FontStack,
    pub code: FontStack,
    pub custom_fonts: Vec<CustomFont>,
    #[serde(rename = "customCSS", skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStack {
    pub font_family: String,
    pub fallback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFont {
    pub name: String,
    pub src: String,
    pub format: FontFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<FontDisplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode_range: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFormat {
    Truetype,
    Woff,
    Woff2,
    Opentype,
    EmbeddedOpentype,
}

/// `"500"`, `"bold"` or a bare number like `700` or `350.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Number(serde_json::Number),
    Keyword(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    Auto,
    Block,
    Swap,
    Fallback,
    Optional,
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontFormat::Truetype => "truetype",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
            FontFormat::Opentype => "opentype",
            FontFormat::EmbeddedOpentype => "embedded-opentype",
        })
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Number(n) => write!(f, "{}", n),
            FontWeight::Keyword(s) => f.write_str(s),
        }
    }
}

impl FontWeight {
    fn is_set(&self) -> bool {
        match self {
            FontWeight::Number(n) => n.as_f64() != Some(0.0),
            FontWeight::Keyword(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        })
    }
}

impl fmt::Display for FontDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontDisplay::Auto => "auto",
            FontDisplay::Block => "block",
            FontDisplay::Swap => "swap",
            FontDisplay::Fallback => "fallback",
            FontDisplay::Optional => "optional",
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            enable: false,
            global: FontStack {
                font_family: "system-ui".to_string(),
                fallback: strings(&[
                    "-apple-system",
                    "BlinkMacSystemFont",
                    "Segoe UI",
                    "Roboto",
                    "sans-serif",
                ]),
            },
            code: FontStack {
                font_family: "ui-monospace".to_string(),
                fallback: strings(&["SFMono-Regular", "Menlo", "Monaco", "Consolas", "monospace"]),
            },
            custom_fonts: Vec::new(),
            custom_css: Some(String::new()),
        }
    }
}

impl FontStack {
    pub fn new(font_family: &str, fallback: &[&str]) -> Self {
        Self {
            font_family: font_family.to_string(),
            fallback: strings(fallback),
        }
    }

    /// Primary family quoted, fallbacks verbatim: `'Inter', system-ui, sans-serif`
    pub fn css_stack(&self) -> String {
        std::iter::once(format!("'{}'", self.font_family))
            .chain(self.fallback.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Primary family followed by fallbacks, unquoted.
    pub fn families(&self) -> Vec<String> {
        std::iter::once(self.font_family.clone())
            .chain(self.fallback.iter().cloned())
            .collect()
    }
}

impl FontConfig {
    /// Read the `fonts` section of a site config.
    pub fn try_from_site(site: &Value) -> Result<Self> {
        match site.get("fonts") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(fonts) => Self::deserialize(fonts).map_err(|source| Error::Section {
                key: "fonts",
                source,
            }),
        }
    }

    /// Like [`FontConfig::try_from_site`], falling back to the default config.
    pub fn from_site(site: &Value) -> Self {
        Self::try_from_site(site).unwrap_or_else(|e| {
            tracing::warn!("{}, using default font config", e);
            Self::default()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enable
    }

    fn custom_css(&self) -> Option<&str> {
        self.custom_css.as_deref().filter(|css| !css.is_empty())
    }
}

fn font_face_rule(font: &CustomFont) -> String {
    let mut properties = vec![
        format!("font-family: '{}';", font.name),
        format!("src: url('{}') format('{}');", font.src, font.format),
    ];

    if let Some(weight) = font.weight.as_ref().filter(|w| w.is_set()) {
        properties.push(format!("font-weight: {};", weight));
    }
    if let Some(style) = font.style {
        properties.push(format!("font-style: {};", style));
    }
    if let Some(display) = font.display {
        properties.push(format!("font-display: {};", display));
    }
    if let Some(range) = font.unicode_range.as_deref().filter(|r| !r.is_empty()) {
        properties.push(format!("unicode-range: {};", range));
    }

    format!("@font-face {{\n  {}\n}}", properties.join("\n  "))
}

/// One `@font-face` block per font, separated by a blank line.
pub fn font_face_css(fonts: &[CustomFont]) -> String {
    fonts
        .iter()
        .map(font_face_rule)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Font-family rules scoped under [`ENABLED_CLASS`]. Empty when disabled.
pub fn font_family_css(config: &FontConfig) -> String {
    if !config.enable {
        return String::new();
    }

    format!(
        "/* global font */\n\
         .{cls} {{\n  font-family: {global};\n}}\n\
         \n\
         /* code font */\n\
         .{cls} code,\n.{cls} pre,\n.{cls} .code-font {{\n  font-family: {code};\n}}",
        cls = ENABLED_CLASS,
        global = config.global.css_stack(),
        code = config.code.css_stack(),
    )
}

/// Full stylesheet: font faces, family rules, then the user's custom CSS.
pub fn font_css(config: &FontConfig) -> String {
    if !config.enable {
        return String::new();
    }

    let mut parts = Vec::new();
    if !config.custom_fonts.is_empty() {
        parts.push(font_face_css(&config.custom_fonts));
    }
    parts.push(font_family_css(config));
    if let Some(css) = config.custom_css() {
        parts.push(css.to_string());
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn zen_maru() -> CustomFont {
        CustomFont {
            name: "ZenMaruGothic-Medium".to_string(),
            src: "/assets/font/ZenMaruGothic-Medium.ttf".to_string(),
            format: FontFormat::Truetype,
            weight: Some(FontWeight::Keyword("500".to_string())),
            style: None,
            display: Some(FontDisplay::Swap),
            unicode_range: None,
        }
    }

    #[test]
    fn test_default_when_fonts_missing() {
        let config = FontConfig::from_site(&json!({}));
        assert_eq!(config, FontConfig::default());
        assert!(!config.is_enabled());
        assert_eq!(config.global.font_family, "system-ui");
        assert_eq!(config.code.fallback.last().unwrap(), "monospace");
    }

    #[test]
    fn test_default_when_fonts_malformed() {
        let site = json!({ "fonts": { "enable": "yes" } });
        assert!(FontConfig::try_from_site(&site).is_err());
        assert_eq!(FontConfig::from_site(&site), FontConfig::default());

        let site = json!({ "fonts": { "customFonts": [{ "name": "X", "src": "x", "format": "svg" }] } });
        assert_eq!(FontConfig::from_site(&site), FontConfig::default());
    }

    #[test]
    fn test_partial_fonts_filled_from_default() {
        let site = json!({ "fonts": { "enable": true, "global": { "fontFamily": "Inter", "fallback": ["sans-serif"] } } });
        let config = FontConfig::from_site(&site);
        assert!(config.enable);
        assert_eq!(config.global.families(), vec!["Inter", "sans-serif"]);
        assert_eq!(config.code, FontConfig::default().code);
    }

    #[test]
    fn test_parse_full_config() {
        let site = json!({
            "fonts": {
                "enable": true,
                "global": { "fontFamily": "ZenMaruGothic-Medium", "fallback": ["system-ui", "sans-serif"] },
                "code": { "fontFamily": "JetBrains Mono", "fallback": ["monospace"] },
                "customFonts": [
                    { "name": "A", "src": "/a.woff2", "format": "woff2", "weight": 700, "style": "italic" },
                    { "name": "B", "src": "/b.eot", "format": "embedded-opentype", "unicodeRange": "U+0000-00FF" }
                ],
                "customCSS": "body { color: red; }"
            }
        });
        let config = FontConfig::from_site(&site);
        assert_eq!(config.custom_fonts.len(), 2);
        assert_eq!(config.custom_fonts[0].weight, Some(FontWeight::Number(700.into())));
        assert_eq!(config.custom_fonts[0].style, Some(FontStyle::Italic));
        assert_eq!(config.custom_fonts[1].format, FontFormat::EmbeddedOpentype);
        assert_eq!(config.custom_css.as_deref(), Some("body { color: red; }"));
    }

    #[test]
    fn test_fractional_weight() {
        let site = json!({
            "fonts": {
                "enable": true,
                "customFonts": [
                    { "name": "A", "src": "/a.woff2", "format": "woff2", "weight": 400.0 },
                    { "name": "B", "src": "/b.woff2", "format": "woff2", "weight": 350.5 },
                    { "name": "C", "src": "/c.woff2", "format": "woff2", "weight": 0 }
                ]
            }
        });
        let config = FontConfig::from_site(&site);
        assert!(config.enable);
        assert_eq!(config.custom_fonts.len(), 3);

        let css = font_face_css(&config.custom_fonts);
        assert!(css.contains("font-weight: 400.0;"));
        assert!(css.contains("font-weight: 350.5;"));
        assert_eq!(css.matches("font-weight").count(), 2);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(FontConfig::default()).unwrap();
        assert_eq!(value["global"]["fontFamily"], "system-ui");
        assert_eq!(value["customFonts"], json!([]));
        assert_eq!(value["customCSS"], "");
    }

    #[test]
    fn test_font_face_css() {
        let css = font_face_css(&[zen_maru()]);
        assert_eq!(
            css,
            "@font-face {\n  \
             font-family: 'ZenMaruGothic-Medium';\n  \
             src: url('/assets/font/ZenMaruGothic-Medium.ttf') format('truetype');\n  \
             font-weight: 500;\n  \
             font-display: swap;\n}"
        );
    }

    #[test]
    fn test_font_face_css_all_properties() {
        let font = CustomFont {
            name: "B".to_string(),
            src: "/b.woff".to_string(),
            format: FontFormat::Woff,
            weight: Some(FontWeight::Number(300.into())),
            style: Some(FontStyle::Oblique),
            display: Some(FontDisplay::Optional),
            unicode_range: Some("U+4E00-9FFF".to_string()),
        };
        let css = font_face_css(&[zen_maru(), font]);
        assert_eq!(css.matches("@font-face").count(), 2);
        assert!(css.contains("}\n\n@font-face {"));
        assert!(css.ends_with(
            "font-weight: 300;\n  font-style: oblique;\n  font-display: optional;\n  unicode-range: U+4E00-9FFF;\n}"
        ));
    }

    #[test]
    fn test_empty_weight_skipped() {
        let mut font = zen_maru();
        font.weight = Some(FontWeight::Keyword(String::new()));
        assert!(!font_face_css(&[font]).contains("font-weight"));
        assert_eq!(font_face_css(&[]), "");
    }

    #[test]
    fn test_font_family_css() {
        let mut config = FontConfig::default();
        assert_eq!(font_family_css(&config), "");

        config.enable = true;
        let css = font_family_css(&config);
        assert!(css.contains(
            ".font-config-enabled {\n  font-family: 'system-ui', -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, sans-serif;\n}"
        ));
        assert!(css.contains(
            ".font-config-enabled code,\n.font-config-enabled pre,\n.font-config-enabled .code-font {\n  font-family: 'ui-monospace', SFMono-Regular, Menlo, Monaco, Consolas, monospace;\n}"
        ));
        assert_eq!(css.matches("font-family:").count(), 2);
    }

    #[test]
    fn test_font_css() {
        let mut config = FontConfig::default();
        assert_eq!(font_css(&config), "");

        config.enable = true;
        assert_eq!(font_css(&config), font_family_css(&config));

        config.custom_fonts.push(zen_maru());
        config.custom_css = Some(".x { font-feature-settings: \"palt\" 1; }".to_string());
        let css = font_css(&config);
        assert!(css.starts_with("@font-face {"));
        assert!(css.ends_with("\n\n.x { font-feature-settings: \"palt\" 1; }"));
        assert_eq!(css.matches("@font-face").count(), 1);
    }
}
