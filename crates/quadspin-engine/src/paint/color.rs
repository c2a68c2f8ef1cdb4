/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    /// Creates a linear premultiplied color from straight sRGB components in `[0, 1]`.
    ///
    /// Alpha is not gamma encoded and passes through unchanged.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_straight(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// Same as [`Color::from_srgb`], from bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let n = |v: u8| v as f32 / 255.0;
        Self::from_srgb(n(r), n(g), n(b), n(a))
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Scales every channel by `coverage` (`0..=1`), keeping premultiplication.
    #[inline]
    pub fn with_coverage(self, coverage: f32) -> Self {
        let c = coverage.clamp(0.0, 1.0);
        Self { r: self.r * c, g: self.g * c, b: self.b * c, a: self.a * c }
    }

    /// Packs the color into RGBA8 bytes (still premultiplied).
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color { r: c.r as f64, g: c.g as f64, b: c.b as f64, a: c.a as f64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 3.0);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn srgb_bytes_are_decoded_to_linear() {
        let c = Color::from_srgb_u8(255, 0, 128, 255);
        assert_eq!((c.r, c.g, c.a), (1.0, 0.0, 1.0));
        // sRGB mid-grey is about 21.6% linear.
        assert!((c.b - 0.2158).abs() < 1e-3, "{}", c.b);
    }

    #[test]
    fn srgb_floats_match_byte_decoding() {
        let f = Color::from_srgb(0.0, 0.5, 1.0, 0.5);
        let b = Color::from_srgb_u8(0, 128, 255, 128);
        assert!((f.g - b.g).abs() < 1e-2);
        assert!((f.b - b.b).abs() < 1e-2);
        assert_eq!(f.a, 0.5);
        // Dark tones fall on the linear segment of the curve.
        assert!((Color::from_srgb(0.02, 0.0, 0.0, 1.0).r - 0.02 / 12.92).abs() < 1e-6);
    }

    #[test]
    fn coverage_scales_all_channels() {
        let c = Color::WHITE.with_coverage(0.5);
        assert_eq!(c.to_array(), [0.5, 0.5, 0.5, 0.5]);
        assert_eq!(c.to_rgba8(), [128, 128, 128, 128]);
    }
}
