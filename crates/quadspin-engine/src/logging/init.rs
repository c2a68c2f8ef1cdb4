use std::sync::Once;

/// Crates kept at `warn` unless a filter string says otherwise.
const NOISY_MODULES: &[&str] = &["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "quadspin_engine=debug,wgpu_core=warn"). When unset, `RUST_LOG` is used,
/// then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Filter {
    /// Explicit filter string (config or `RUST_LOG`).
    Spec(String),
    /// `default_level` with [`NOISY_MODULES`] capped at `warn`.
    Level(log::LevelFilter),
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> Filter {
    config
        .env_filter
        .clone()
        .or(rust_log)
        .filter(|s| !s.trim().is_empty())
        .map(Filter::Spec)
        .unwrap_or(Filter::Level(config.default_level))
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            Filter::Spec(spec) => {
                builder.parse_filters(&spec);
            }
            Filter::Level(level) => {
                builder.filter_level(level);
                for module in NOISY_MODULES {
                    builder.filter_module(module, log::LevelFilter::Warn.min(level));
                }
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(
            resolve_filter(&config, Some("trace".into())),
            Filter::Spec("debug".into())
        );
    }

    #[test]
    fn rust_log_is_used_when_no_filter_is_configured() {
        assert_eq!(
            resolve_filter(&LoggingConfig::default(), Some("quadspin_engine=trace".into())),
            Filter::Spec("quadspin_engine=trace".into())
        );
    }

    #[test]
    fn blank_rust_log_falls_back_to_default_level() {
        assert_eq!(
            resolve_filter(&LoggingConfig::default(), Some("  ".into())),
            Filter::Level(log::LevelFilter::Info)
        );
        assert_eq!(
            resolve_filter(&LoggingConfig::default(), None),
            Filter::Level(log::LevelFilter::Info)
        );
    }
}
