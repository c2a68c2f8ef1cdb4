//! Color model shared by the renderables and the frame clear.

pub mod color;

pub use color::Color;
