//! Built-in font presets, switchable at runtime by the font loader.

use crate::core::fonts::{CustomFont, FontConfig, FontDisplay, FontFormat, FontStack, FontWeight};

pub const NAMES: &[&str] = &["default", "system", "japanese"];

fn truetype(name: &str, src: &str, weight: &str) -> CustomFont {
    CustomFont {
        name: name.to_string(),
        src: src.to_string(),
        format: FontFormat::Truetype,
        weight: Some(FontWeight::Keyword(weight.to_string())),
        style: None,
        display: Some(FontDisplay::Swap),
        unicode_range: None,
    }
}

fn default_preset() -> FontConfig {
    FontConfig {
        enable: true,
        global: FontStack::new(
            "ZenMaruGothic-Medium",
            &["system-ui", "-apple-system", "BlinkMacSystemFont", "Segoe UI", "Roboto", "sans-serif"],
        ),
        code: FontStack::new(
            "JetBrains Mono Variable",
            &["ui-monospace", "SFMono-Regular", "Menlo", "Monaco", "Consolas", "monospace"],
        ),
        custom_fonts: vec![truetype(
            "ZenMaruGothic-Medium",
            "/assets/font/ZenMaruGothic-Medium.ttf",
            "500",
        )],
        custom_css: Some(String::new()),
    }
}

fn system_preset() -> FontConfig {
    FontConfig {
        enable: true,
        custom_css: Some(
            ".font-config-enabled {\n  font-feature-settings: \"liga\" 1, \"kern\" 1;\n  text-rendering: optimizeLegibility;\n}"
                .to_string(),
        ),
        ..FontConfig::default()
    }
}

fn japanese_preset() -> FontConfig {
    FontConfig {
        enable: true,
        global: FontStack::new(
            "GenEiGothic",
            &["Hiragino Sans", "Yu Gothic", "Meiryo", "sans-serif"],
        ),
        code: FontStack::new(
            "JetBrains Mono Variable",
            &["ui-monospace", "SFMono-Regular", "monospace"],
        ),
        custom_fonts: vec![
            truetype("GenEiGothic", "/assets/font/GenEiGothicP.ttf", "normal"),
            CustomFont {
                name: "JetBrains Mono Variable".to_string(),
                src: "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;700&display=swap".to_string(),
                format: FontFormat::Woff2,
                weight: None,
                style: None,
                display: Some(FontDisplay::Swap),
                unicode_range: None,
            },
        ],
        custom_css: Some(
            ".font-config-enabled {\n  font-feature-settings: \"palt\" 1;\n  text-spacing: ideograph-alpha ideograph-numeric;\n}"
                .to_string(),
        ),
    }
}

pub fn preset(name: &str) -> Option<FontConfig> {
    match name {
        "default" => Some(default_preset()),
        "system" => Some(system_preset()),
        "japanese" => Some(japanese_preset()),
        _ => None,
    }
}
