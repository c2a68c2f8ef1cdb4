//! Coordinate types shared across renderers.
//!
//! Renderables in this crate author geometry directly in NDC
//! (`[-1, 1]` on both axes, +Y up). The viewport carries the drawable size
//! so renderers can correct for aspect ratio and convert pixel extents.

mod viewport;

pub use viewport::Viewport;
