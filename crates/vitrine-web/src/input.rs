// Pure pointer math shared by the cursor and the canvas painter. Kept
// free of web-sys so the host-side tests can include it directly.

use glam::Vec2;

/// Off-screen parking position for the cursor elements before the first
/// pointer event.
pub const OFFSCREEN: f32 = -999.0;

/// Last known pointer state.
#[derive(Clone, Copy, Debug)]
pub struct MouseState {
    /// Page-pixel position, driving the cursor dot and glow.
    pub page: Vec2,
    /// Background-surface position in normalized coordinates.
    pub surface_uv: Vec2,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            page: Vec2::new(OFFSCREEN, OFFSCREEN),
            surface_uv: Vec2::new(0.5, 0.5),
        }
    }
}

/// Client-space pointer position to surface-normalized coordinates, given
/// the surface bounding box. `None` while the surface has no layout yet,
/// so the caller holds the previous value.
#[inline]
pub fn surface_uv(client: Vec2, rect_min: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let frac = (client - rect_min) / rect_size;
    Some(frac.clamp(Vec2::ZERO, Vec2::ONE))
}

/// Pointer position inside an element as fractions of its size.
#[inline]
pub fn element_frac(client: Vec2, rect_min: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    Some((client - rect_min) / rect_size)
}

/// Pointer offset from an element's center, in pixels.
#[inline]
pub fn center_delta(client: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    client - (rect_min + rect_size * 0.5)
}
