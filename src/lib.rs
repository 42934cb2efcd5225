//! Generates the square PNG icons used by the Office add-in: a single white
//! glyph centered on a solid blue background, at each size the manifest
//! needs.

pub mod error;
pub mod font;
pub mod models;
pub mod render;
pub mod utils;

pub use error::{Error, Result};
pub use font::GlyphFont;
pub use models::{ICON_TARGETS, IconTarget};
pub use render::{create_icon, render_icon};
