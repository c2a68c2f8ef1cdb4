use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FrameLimiter, FrameTime};

/// How the window occupies the screen.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Borderless full-screen on the current monitor.
    BorderlessFullscreen,
}

impl WindowMode {
    pub fn toggled(self) -> Self {
        match self {
            WindowMode::Windowed => WindowMode::BorderlessFullscreen,
            WindowMode::BorderlessFullscreen => WindowMode::Windowed,
        }
    }

    fn fullscreen(self) -> Option<Fullscreen> {
        match self {
            WindowMode::Windowed => None,
            WindowMode::BorderlessFullscreen => Some(Fullscreen::Borderless(None)),
        }
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Size used in windowed mode.
    pub initial_size: LogicalSize<f64>,
    pub mode: WindowMode,
    pub resizable: bool,
    /// Redraw cap; 0 redraws as fast as the swapchain allows.
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadspin".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            mode: WindowMode::Windowed,
            resizable: true,
            target_fps: 140,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    pub fn set_window_mode(&mut self, mode: WindowMode) {
        self.commands.push(Command::SetWindowMode(mode));
    }

    /// Stops the loop and makes [`Runtime::run`] return `err`.
    pub fn fail(&mut self, err: anyhow::Error) {
        self.commands.push(Command::Fail(err));
    }
}

enum Command {
    SetWindowMode(WindowMode),
    Fail(anyhow::Error),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits or the window closes.
    ///
    /// Errors raised while creating the window or the GPU context, or passed to
    /// [`RuntimeCtx::fail`], are returned once the event loop has stopped.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    limiter: FrameLimiter,
    mode: WindowMode,
    window: Option<WindowEntry>,

    error: Option<anyhow::Error>,
    app_released: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            limiter: FrameLimiter::new(config.target_fps),
            mode: config.mode,
            config,
            gpu_init,
            app,
            window: None,
            error: None,
            app_released: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable)
            .with_fullscreen(self.mode.fullscreen());

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        log::info!(
            "window created: {}x{} {:?}, target {} fps",
            size.width,
            size.height,
            self.mode,
            self.config.target_fps
        );

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        self.window = Some(entry);
        Ok(())
    }

    /// Releases the app's GPU resources, then the window and its GPU context.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.release_app();
        self.window = None;
        event_loop.exit();
    }

    fn release_app(&mut self) {
        if !self.app_released {
            self.app_released = true;
            self.app.on_exit();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        self.shutdown(event_loop);
    }

    fn set_window_mode(&mut self, mode: WindowMode) {
        self.mode = mode;
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.set_fullscreen(mode.fullscreen()));
        }
        log::info!("window mode: {mode:?}");
    }

    /// Applies buffered commands. Returns true when the loop should stop.
    fn apply_commands(&mut self, ctx: RuntimeCtx) -> bool {
        let mut exit = false;
        for cmd in ctx.commands {
            match cmd {
                Command::SetWindowMode(mode) => self.set_window_mode(mode),
                Command::Fail(err) => {
                    log::error!("{err:#}");
                    self.error.get_or_insert(err);
                    exit = true;
                }
                Command::Exit => exit = true,
            }
        }
        exit
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.limiter.frame_started(Instant::now());

        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return;
        };

        entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();

            // Scope to ensure `ctx` is dropped before mutating frame state.
            {
                let mut ctx = FrameCtx {
                    window: WindowCtx { window: fields.window },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time: ft,
                    runtime: &mut runtime_ctx,
                };

                app_control = app.on_frame(&mut ctx);
            }

            // Clear per-frame deltas after the frame is consumed.
            fields.input_frame.clear();
        });

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }

        if self.apply_commands(runtime_ctx) {
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.app_released {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
            return;
        }

        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = &self.window else {
            return;
        };

        let now = Instant::now();
        if self.limiter.is_due(now) {
            event_loop.set_control_flow(ControlFlow::Wait);
            entry.with_window(|w| w.request_redraw());
        } else if let Some(deadline) = self.limiter.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return;
        };

        let mut exit_from_input = false;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.input_state, &event) {
                if app.on_input(&ev) == AppControl::Exit {
                    exit_from_input = true;
                }
                fields.input_state.apply_event(fields.input_frame, &ev);
            }
        });

        if exit_from_input {
            self.shutdown(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release_app();
        self.window = None;
    }
}
