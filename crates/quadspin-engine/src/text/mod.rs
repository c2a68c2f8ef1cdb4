//! Font loading and single-line text rasterization (CPU side).
//!
//! The GPU side lives in `render::text`.

mod bitmap;
mod font;

pub use bitmap::{GlyphCoverage, TextBitmap};
pub use font::{Font, FontLoadError, FALLBACK_FONTS};
