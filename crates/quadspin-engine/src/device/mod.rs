//! GPU device + surface management.
//!
//! [`Gpu`] owns the wgpu device and the window surface, hands out one
//! [`GpuFrame`] per redraw and presents it. Surface loss and resizes are
//! absorbed here; callers only see [`FrameAcquire`].

mod acquire;
mod context;
mod frame;
mod init;
mod surface;

pub use acquire::{FrameAcquire, SurfaceErrorAction};
pub use context::Gpu;
pub use frame::GpuFrame;
pub use init::GpuInit;
