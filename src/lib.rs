//! Presentation config for a static site: font CSS, Tailwind theme
//! fragments and Umami settings derived from one JSONC file.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod state;
pub mod static_files;
