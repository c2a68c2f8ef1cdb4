//! Demo settings read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

/// Which shape the scene draws under the label.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Shape {
    #[default]
    Square,
    Triangle,
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Shape::Square),
            "triangle" => Ok(Shape::Triangle),
            other => Err(format!("unknown shape {other:?} (expected square or triangle)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Directory holding the `default` and `text` materials.
    pub shader_dir: PathBuf,
    /// Font file for the label; `None` falls back to a system font.
    pub font: Option<PathBuf>,
    pub target_fps: u32,
    pub windowed: bool,
    pub shape: Shape,
    /// Square spin rate in degrees per second.
    pub spin_deg_per_sec: f32,
    pub label: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shader_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders")),
            font: None,
            target_fps: 140,
            windowed: false,
            shape: Shape::Square,
            spin_deg_per_sec: 45.0,
            label: "quadspin".to_string(),
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by `QUADSPIN_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("QUADSPIN_SHADER_DIR") {
            config.shader_dir = PathBuf::from(dir);
        }
        if let Some(font) = lookup("QUADSPIN_FONT") {
            config.font = Some(PathBuf::from(font));
        }
        if let Some(label) = lookup("QUADSPIN_TEXT") {
            config.label = label;
        }

        override_with(&lookup, "QUADSPIN_FPS", &mut config.target_fps, |s| {
            s.trim().parse().ok()
        });
        override_with(&lookup, "QUADSPIN_WINDOWED", &mut config.windowed, parse_bool);
        override_with(&lookup, "QUADSPIN_SHAPE", &mut config.shape, |s| s.parse().ok());
        override_with(&lookup, "QUADSPIN_SPEED", &mut config.spin_deg_per_sec, |s| {
            s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
        });

        config
    }
}

fn override_with<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
    parse: impl Fn(&str) -> Option<T>,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match parse(&raw) {
        Some(value) => *slot = value,
        None => log::warn!("ignoring {key}={raw:?}: unparseable"),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DemoConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        assert_eq!(config_from(&[]), DemoConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let c = config_from(&[
            ("QUADSPIN_SHADER_DIR", "/tmp/shaders"),
            ("QUADSPIN_FONT", "/tmp/font.ttf"),
            ("QUADSPIN_FPS", "60"),
            ("QUADSPIN_WINDOWED", "yes"),
            ("QUADSPIN_SHAPE", "Triangle"),
            ("QUADSPIN_SPEED", "-90"),
            ("QUADSPIN_TEXT", "hello"),
        ]);
        assert_eq!(c.shader_dir, PathBuf::from("/tmp/shaders"));
        assert_eq!(c.font, Some(PathBuf::from("/tmp/font.ttf")));
        assert_eq!(c.target_fps, 60);
        assert!(c.windowed);
        assert_eq!(c.shape, Shape::Triangle);
        assert_eq!(c.spin_deg_per_sec, -90.0);
        assert_eq!(c.label, "hello");
    }

    #[test]
    fn unparseable_values_are_ignored() {
        let c = config_from(&[
            ("QUADSPIN_FPS", "fast"),
            ("QUADSPIN_WINDOWED", "maybe"),
            ("QUADSPIN_SHAPE", "circle"),
            ("QUADSPIN_SPEED", "NaN"),
        ]);
        let d = DemoConfig::default();
        assert_eq!(c.target_fps, d.target_fps);
        assert_eq!(c.windowed, d.windowed);
        assert_eq!(c.shape, d.shape);
        assert_eq!(c.spin_deg_per_sec, d.spin_deg_per_sec);
    }

    #[test]
    fn bools_accept_common_spellings() {
        assert_eq!(parse_bool(" ON "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
