//! GPU rendering subsystem.
//!
//! Each renderable owns its GPU resources (pipeline, buffers, textures) outright
//! and releases them when dropped. Nothing is shared between renderables.
//!
//! Convention:
//! - geometry is authored in NDC (`[-1, 1]`, +Y up)
//! - shaders are loaded from disk as vertex/fragment pairs (see [`shader`])

mod common;
mod ctx;

pub mod shader;
pub mod square;
pub mod text;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{ShaderProgram, ShaderSource};
pub use square::Square;
pub use text::{Text, TextStyle};
pub use triangle::Triangle;
