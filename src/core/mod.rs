//! Site config and the views derived from it

pub mod font_loader;
pub mod fonts;
pub mod jsonc;
pub mod loader;
pub mod presets;
pub mod tailwind;
pub mod umami;
