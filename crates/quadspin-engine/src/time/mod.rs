//! Frame timing.
//!
//! - `FrameClock` produces clamped delta times, one tick per presented frame.
//! - `FrameLimiter` schedules frame deadlines for a target frame rate.

mod frame_clock;
mod frame_limiter;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_limiter::FrameLimiter;
