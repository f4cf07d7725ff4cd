//! Color values used by the canvas painter.

/// RGB color with a fractional alpha, formatted for canvas fill/stroke
/// styles via [`Rgba::css`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string accepted by `CanvasRenderingContext2d`.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Accent used by the glow dots, particles and pointer gradient.
pub const ACCENT: Rgba = Rgba::new(124, 45, 58, 1.0);

pub const GRID_DARK: Rgba = Rgba::new(255, 255, 255, 0.025);
pub const GRID_LIGHT: Rgba = Rgba::new(0, 0, 0, 0.04);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_channels_and_alpha() {
        assert_eq!(Rgba::new(124, 45, 58, 1.0).css(), "rgba(124,45,58,1)");
        assert_eq!(Rgba::new(0, 0, 0, 0.04).css(), "rgba(0,0,0,0.04)");
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = ACCENT.with_alpha(0.12);
        assert_eq!((c.r, c.g, c.b), (124, 45, 58));
        assert_eq!(c.a, 0.12);
    }
}
