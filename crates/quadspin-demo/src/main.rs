mod app;
mod config;
mod scene;

use anyhow::Result;

use quadspin_engine::device::GpuInit;
use quadspin_engine::logging::{init_logging, LoggingConfig};
use quadspin_engine::window::{Runtime, RuntimeConfig, WindowMode};

use app::DemoApp;
use config::DemoConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env();
    log::info!(
        "starting quadspin: shaders from {}, {:?}, {} fps",
        config.shader_dir.display(),
        config.shape,
        config.target_fps
    );

    let mode = if config.windowed {
        WindowMode::Windowed
    } else {
        WindowMode::BorderlessFullscreen
    };

    let runtime = RuntimeConfig {
        title: "quadspin".to_string(),
        mode,
        target_fps: config.target_fps,
        ..RuntimeConfig::default()
    };

    Runtime::run(runtime, GpuInit::default(), DemoApp::new(config))
}
