use crate::paint::Color;

/// Coverage mask of one rasterized glyph, positioned in bitmap pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCoverage {
    /// Left edge, may be negative for glyphs that overhang the origin.
    pub x: i32,
    /// Top edge (+Y down).
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

/// Premultiplied RGBA8 image of a text line.
///
/// Row 0 is the top row. `pixels.len() == width * height * 4` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextBitmap {
    /// Composes glyph coverage masks into a `width` x `height` bitmap tinted
    /// with `color`. Overlapping glyph pixels keep the stronger coverage;
    /// anything outside the bitmap is clipped.
    ///
    /// Zero dimensions are raised to 1 so the result is always uploadable.
    pub fn compose(width: u32, height: u32, glyphs: &[GlyphCoverage], color: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut coverage = vec![0u8; width as usize * height as usize];

        for g in glyphs {
            debug_assert_eq!(g.coverage.len(), g.width * g.height);
            for row in 0..g.height {
                let y = g.y + row as i32;
                if y < 0 || y >= height as i32 {
                    continue;
                }
                for col in 0..g.width {
                    let x = g.x + col as i32;
                    if x < 0 || x >= width as i32 {
                        continue;
                    }
                    let dst = &mut coverage[y as usize * width as usize + x as usize];
                    *dst = (*dst).max(g.coverage[row * g.width + col]);
                }
            }
        }

        let pixels = coverage
            .iter()
            .flat_map(|&c| color.with_coverage(c as f32 / 255.0).to_rgba8())
            .collect();

        Self { width, height, pixels }
    }

    /// Alpha value at `(x, y)`.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[((y * self.width + x) * 4 + 3) as usize]
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x: i32, y: i32, w: usize, h: usize, value: u8) -> GlyphCoverage {
        GlyphCoverage { x, y, width: w, height: h, coverage: vec![value; w * h] }
    }

    #[test]
    fn dimensions_are_exact() {
        let bmp = TextBitmap::compose(37, 12, &[], Color::WHITE);
        assert_eq!((bmp.width, bmp.height), (37, 12));
        assert_eq!(bmp.pixels.len(), 37 * 12 * 4);
        assert!(bmp.is_blank());
    }

    #[test]
    fn empty_size_becomes_one_pixel() {
        let bmp = TextBitmap::compose(0, 0, &[], Color::WHITE);
        assert_eq!((bmp.width, bmp.height), (1, 1));
    }

    #[test]
    fn glyph_coverage_is_tinted_and_premultiplied() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let bmp = TextBitmap::compose(4, 4, &[glyph(1, 1, 2, 2, 255)], red);

        let at = |x: u32, y: u32| {
            let i = ((y * 4 + x) * 4) as usize;
            [bmp.pixels[i], bmp.pixels[i + 1], bmp.pixels[i + 2], bmp.pixels[i + 3]]
        };
        assert_eq!(at(1, 1), [255, 0, 0, 255]);
        assert_eq!(at(0, 0), [0, 0, 0, 0]);
        assert_eq!(at(3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn overlapping_glyphs_keep_max_coverage() {
        let bmp = TextBitmap::compose(
            3,
            1,
            &[glyph(0, 0, 2, 1, 100), glyph(1, 0, 2, 1, 200)],
            Color::WHITE,
        );
        assert_eq!(bmp.alpha_at(0, 0), 100);
        assert_eq!(bmp.alpha_at(1, 0), 200);
        assert_eq!(bmp.alpha_at(2, 0), 200);
    }

    #[test]
    fn out_of_bounds_pixels_are_clipped() {
        let bmp = TextBitmap::compose(2, 2, &[glyph(-1, -1, 4, 4, 255)], Color::WHITE);
        assert!((0..2).all(|y| (0..2).all(|x| bmp.alpha_at(x, y) == 255)));
    }
}
