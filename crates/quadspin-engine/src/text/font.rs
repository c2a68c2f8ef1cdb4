use std::fmt;
use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::paint::Color;

use super::{GlyphCoverage, TextBitmap};

/// System fonts tried, in order, when no usable font path is configured.
pub const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Error returned by [`Font::load`].
#[derive(Debug)]
pub enum FontLoadError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: Option<PathBuf>, reason: String },
    NoFallback,
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Read { path, .. } => write!(f, "failed to read font {}", path.display()),
            FontLoadError::Parse { path: Some(path), reason } => {
                write!(f, "failed to parse font {}: {reason}", path.display())
            }
            FontLoadError::Parse { path: None, reason } => write!(f, "failed to parse font: {reason}"),
            FontLoadError::NoFallback => {
                write!(f, "no font configured and none of the fallback system fonts could be loaded")
            }
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A parsed TrueType/OpenType font.
pub struct Font {
    inner: fontdue::Font,
    path: Option<PathBuf>,
}

impl Font {
    /// Loads the font at `path`, or the first loadable fallback system font
    /// when `path` is `None` or does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, FontLoadError> {
        match path {
            Some(p) if p.exists() => Self::from_file(p),
            Some(p) => {
                log::warn!("font {} not found; falling back to a system font", p.display());
                Self::load_fallback()
            }
            None => Self::load_fallback(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut font = Self::from_bytes(&bytes).map_err(|e| match e {
            FontLoadError::Parse { reason, .. } => FontLoadError::Parse {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })?;
        font.path = Some(path.to_path_buf());
        log::info!("loaded font {}", path.display());
        Ok(font)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let inner = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse { path: None, reason: e.to_string() })?;
        Ok(Self { inner, path: None })
    }

    fn load_fallback() -> Result<Self, FontLoadError> {
        FALLBACK_FONTS
            .iter()
            .map(Path::new)
            .filter(|p| p.exists())
            .find_map(|p| match Self::from_file(p) {
                Ok(font) => Some(font),
                Err(e) => {
                    log::debug!("skipping fallback font: {e}");
                    None
                }
            })
            .ok_or(FontLoadError::NoFallback)
    }

    /// File the font was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Rasterizes `text` as a single line at `px` pixels into a bitmap tinted
    /// with `color`.
    ///
    /// Glyphs that overhang the origin (negative left bearing) shift the whole
    /// line right, so width covers every glyph's advance and ink. Height is the
    /// laid-out line height. The bitmap is at least 1x1.
    pub fn rasterize(&self, text: &str, px: f32, color: Color) -> TextBitmap {
        let px = px.max(1.0);

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[&self.inner], &TextStyle::new(text, px, 0));

        let left = layout.glyphs().iter().map(|g| g.x).fold(0.0f32, f32::min);
        let shift = (-left).ceil();

        let mut width = 0.0f32;
        let mut glyphs = Vec::new();

        for g in layout.glyphs() {
            let x = g.x + shift;
            let m = self.inner.metrics_indexed(g.key.glyph_index, px);
            let pen_end = x - m.xmin as f32 + m.advance_width;
            width = width.max(pen_end).max(x + g.width as f32);

            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }

            let (metrics, coverage) = self.inner.rasterize_config(g.key);
            glyphs.push(GlyphCoverage {
                x: x.round() as i32,
                y: g.y.round() as i32,
                width: metrics.width,
                height: metrics.height,
                coverage,
            });
        }

        let height = layout.height().max(px);

        TextBitmap::compose(width.ceil() as u32, height.ceil() as u32, &glyphs, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = Font::from_bytes(b"definitely not a font").err().unwrap();
        assert!(matches!(err, FontLoadError::Parse { path: None, .. }));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let path = std::env::temp_dir().join(format!("quadspin-font-dir-{}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();

        // A directory exists but cannot be read as a file.
        let err = Font::from_file(&path).err().unwrap();
        assert!(err.to_string().contains("quadspin-font-dir"));

        std::fs::remove_dir_all(path).ok();
    }

    #[test]
    fn rasterized_line_has_ink_when_a_system_font_exists() {
        let Ok(font) = Font::load(None) else {
            // No fallback font on this machine.
            return;
        };

        let bmp = font.rasterize("Hello", 36.0, Color::WHITE);
        assert!(bmp.width > 36 && bmp.height >= 36);
        assert_eq!(bmp.pixels.len(), (bmp.width * bmp.height * 4) as usize);
        assert!(!bmp.is_blank());
    }

    #[test]
    fn left_overhang_is_not_clipped() {
        let Ok(font) = Font::load(None) else { return };

        let (metrics, coverage) = font.inner.rasterize('j', 36.0);
        let bmp = font.rasterize("j", 36.0, Color::WHITE);

        assert!(bmp.width as usize >= metrics.width);
        let ink: u32 = coverage.iter().map(|&c| c as u32).sum();
        let drawn: u32 = bmp.pixels.chunks_exact(4).map(|px| px[3] as u32).sum();
        assert_eq!(drawn, ink);
    }

    #[test]
    fn empty_text_is_still_uploadable() {
        let Ok(font) = Font::load(None) else { return };
        let bmp = font.rasterize("", 24.0, Color::WHITE);
        assert!(bmp.width >= 1 && bmp.height >= 1);
        assert!(bmp.is_blank());
    }
}
