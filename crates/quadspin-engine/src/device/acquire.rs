use super::GpuFrame;

/// What the caller should do after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame should succeed.
    Reconfigured,
    /// Transient; drop this frame and try again next time.
    SkipFrame,
    /// Unrecoverable (out of memory); stop rendering.
    Fatal,
}

/// Result of [`Gpu::acquire_frame`](super::Gpu::acquire_frame).
pub enum FrameAcquire {
    Ready(GpuFrame),
    /// Nothing to draw into this time (zero-area window or recovered error).
    Skipped,
    Fatal,
}

impl From<SurfaceErrorAction> for FrameAcquire {
    fn from(action: SurfaceErrorAction) -> Self {
        match action {
            SurfaceErrorAction::Fatal => FrameAcquire::Fatal,
            SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => FrameAcquire::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_errors_stop_rendering() {
        assert!(matches!(FrameAcquire::from(SurfaceErrorAction::Fatal), FrameAcquire::Fatal));
        assert!(matches!(FrameAcquire::from(SurfaceErrorAction::SkipFrame), FrameAcquire::Skipped));
        assert!(matches!(
            FrameAcquire::from(SurfaceErrorAction::Reconfigured),
            FrameAcquire::Skipped
        ));
    }
}
