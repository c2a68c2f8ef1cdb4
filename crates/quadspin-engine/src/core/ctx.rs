use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{FrameAcquire, Gpu};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::{RuntimeCtx, WindowMode};

use super::app::AppControl;

/// The window being drawn.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    pub fn mode(&self) -> WindowMode {
        match self.window.fullscreen() {
            Some(_) => WindowMode::BorderlessFullscreen,
            None => WindowMode::Windowed,
        }
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Current viewport in physical pixels (the surface size).
    pub fn viewport(&self) -> Viewport {
        self.gpu.viewport()
    }

    /// Render context for building resources outside of [`render`](Self::render).
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.viewport(),
        )
    }

    /// Clears the surface with `clear`, lets `draw` record on top of it, then
    /// presents.
    ///
    /// `draw` is not called when no frame could be acquired (minimized window,
    /// recovered surface error). A fatal surface error returns `Exit`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.acquire_frame() {
            FrameAcquire::Ready(frame) => frame,
            FrameAcquire::Skipped => return AppControl::Continue,
            FrameAcquire::Fatal => return AppControl::Exit,
        };

        clear_pass(&mut frame.encoder, &frame.view, clear);

        {
            let rctx = self.render_ctx();
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);

        AppControl::Continue
    }
}

fn clear_pass(encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView, clear: Color) {
    // The pass only clears; it ends when dropped.
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("quadspin clear"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear.into()),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}
