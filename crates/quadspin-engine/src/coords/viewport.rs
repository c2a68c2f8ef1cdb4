/// Drawable size in physical pixels.
///
/// Renderers use this to keep NDC geometry square on non-square surfaces and
/// to convert pixel extents (text bitmaps) into NDC extents.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height. Degenerate viewports report `1.0`.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }

    /// Per-axis scale that keeps unit-space geometry square on screen.
    ///
    /// The narrower dimension is left untouched: a wide surface shrinks x by
    /// `1 / aspect`, a tall surface shrinks y by `aspect`.
    #[inline]
    pub fn aspect_scale(self) -> [f32; 2] {
        let aspect = self.aspect_ratio();
        if aspect > 1.0 {
            [1.0 / aspect, 1.0]
        } else {
            [1.0, aspect]
        }
    }

    /// Converts a size in pixels to a size in NDC units.
    #[inline]
    pub fn pixels_to_ndc(self, width: f32, height: f32) -> [f32; 2] {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        [2.0 * width / w, 2.0 * height / h]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_shrinks_x() {
        let s = Viewport::new(1920.0, 1080.0).aspect_scale();
        assert!((s[0] - 1080.0 / 1920.0).abs() < 1e-6);
        assert_eq!(s[1], 1.0);
    }

    #[test]
    fn tall_viewport_shrinks_y() {
        let s = Viewport::new(500.0, 1000.0).aspect_scale();
        assert_eq!(s[0], 1.0);
        assert!((s[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn square_viewport_is_identity() {
        assert_eq!(Viewport::new(800.0, 800.0).aspect_scale(), [1.0, 1.0]);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let v = Viewport::new(800.0, 0.0);
        assert!(!v.is_valid());
        assert_eq!(v.aspect_ratio(), 1.0);
        assert!(v.pixels_to_ndc(10.0, 10.0).iter().all(|c| c.is_finite()));
    }

    #[test]
    fn full_width_in_pixels_spans_ndc() {
        let v = Viewport::new(640.0, 480.0);
        assert_eq!(v.pixels_to_ndc(640.0, 480.0), [2.0, 2.0]);
        assert_eq!(v.pixels_to_ndc(320.0, 120.0), [1.0, 0.5]);
    }
}
