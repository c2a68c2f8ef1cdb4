use quadspin_engine::core::{App, AppControl, FrameCtx};
use quadspin_engine::input::{InputEvent, Key};
use quadspin_engine::paint::Color;

use crate::config::DemoConfig;
use crate::scene::Scene;

/// Drives the scene: builds it on the first frame, then updates and draws it
/// once per redraw.
pub struct DemoApp {
    config: DemoConfig,
    scene: Option<Scene>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        Self { config, scene: None }
    }
}

/// Background fill. The value is a display (sRGB) level, so the surface shows
/// 26/255 blue.
fn clear_color() -> Color {
    Color::from_srgb(0.0, 0.0, 0.1, 1.0)
}

/// True for the key presses that end the demo.
fn is_quit(event: &InputEvent) -> bool {
    matches!(event.pressed_key(), Some(Key::Escape | Key::Q))
}

impl App for DemoApp {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        if is_quit(event) {
            log::info!("quit requested");
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.was_pressed(Key::F11) {
            ctx.runtime.set_window_mode(ctx.window.mode().toggled());
        }

        if self.scene.is_none() {
            log::info!("building scene on {}", ctx.gpu.adapter_info().name);
            match Scene::new(&ctx.render_ctx(), &self.config) {
                Ok(scene) => self.scene = Some(scene),
                Err(err) => {
                    ctx.runtime.fail(err);
                    return AppControl::Exit;
                }
            }
        }

        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        scene.update(ctx.time.dt);
        ctx.render(clear_color(), |rctx, target| scene.render(rctx, target))
    }

    fn on_exit(&mut self) {
        if self.scene.take().is_some() {
            log::debug!("scene released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadspin_engine::input::{KeyState, Modifiers};

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    #[test]
    fn escape_and_q_quit_on_press() {
        assert!(is_quit(&key(Key::Escape, KeyState::Pressed)));
        assert!(is_quit(&key(Key::Q, KeyState::Pressed)));
        assert!(!is_quit(&key(Key::Escape, KeyState::Released)));
    }

    #[test]
    fn clear_color_is_dark_blue_in_linear_space() {
        let c = clear_color();
        assert_eq!((c.r, c.g, c.a), (0.0, 0.0, 1.0));
        assert!((c.b - 0.01).abs() < 1e-3, "{}", c.b);
    }

    #[test]
    fn other_input_continues() {
        let mut app = DemoApp::new(DemoConfig::default());
        assert_eq!(app.on_input(&key(Key::Space, KeyState::Pressed)), AppControl::Continue);
        assert_eq!(app.on_input(&InputEvent::Focused(false)), AppControl::Continue);
        assert_eq!(app.on_input(&key(Key::Q, KeyState::Pressed)), AppControl::Exit);
    }
}
