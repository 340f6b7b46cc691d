//! Tailwind theme fragments derived from the font config

use serde::Serialize;

use crate::core::fonts::FontConfig;

/// `defaultTheme.fontFamily.sans` from Tailwind CSS v3.
pub const DEFAULT_SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "\"Apple Color Emoji\"",
    "\"Segoe UI Emoji\"",
    "\"Segoe UI Symbol\"",
    "\"Noto Color Emoji\"",
];

/// `defaultTheme.fontFamily.mono` from Tailwind CSS v3.
pub const DEFAULT_MONO: &[&str] = &[
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "\"Liberation Mono\"",
    "\"Courier New\"",
    "monospace",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontFamilies {
    pub sans: Vec<String>,
    pub mono: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindFontConfig {
    pub font_family: FontFamilies,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    pub font_family: FontFamilies,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindTheme {
    pub dark_mode: &'static str,
    pub theme: Theme,
}

fn configured(config: &FontConfig) -> Option<FontFamilies> {
    config.enable.then(|| FontFamilies {
        sans: config.global.families(),
        mono: config.code.families(),
    })
}

/// `{ fontFamily: { sans, mono } }`, or `None` when the font system is
/// disabled.
pub fn font_family(config: &FontConfig) -> Option<TailwindFontConfig> {
    configured(config).map(|font_family| TailwindFontConfig { font_family })
}

/// Theme extension for `tailwind.config`. Falls back to Roboto plus the
/// Tailwind stacks when fonts are disabled.
pub fn theme(config: &FontConfig) -> TailwindTheme {
    let font_family = configured(config).unwrap_or_else(|| FontFamilies {
        sans: ["Roboto", "sans-serif"]
            .iter()
            .chain(DEFAULT_SANS)
            .map(|s| s.to_string())
            .collect(),
        mono: DEFAULT_MONO.iter().map(|s| s.to_string()).collect(),
    });

    TailwindTheme {
        dark_mode: "class",
        theme: Theme {
            extend: ThemeExtend { font_family },
        },
    }
}
