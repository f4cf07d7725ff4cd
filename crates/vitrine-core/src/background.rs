//! Animated background scene: drifting particles over a periodic grid
//! whose intersections glow as the pointer approaches.
//!
//! The scene is pure state. Each frame the web painter calls
//! [`BackgroundScene::advance_particles`] once, then asks for the grid
//! lines, the [`GlowDot`]s for the current pointer position and the
//! [`PointerGlow`] gradient, and strokes/fills them onto the canvas.
//! Pointer position and theme arrive as inputs, never as ambient state.

use glam::Vec2;
use rand::prelude::*;

use crate::color::{Rgba, ACCENT};
use crate::constants::{
    GLOW_ALPHA_SPAN, GLOW_BASE_ALPHA, GLOW_BASE_RADIUS, GLOW_IDLE_RADIUS, GLOW_RADIUS_SPAN,
    GRID_SPACING, PARTICLE_ALPHA_SPAN, PARTICLE_COUNT, PARTICLE_MIN_ALPHA, PARTICLE_MIN_RADIUS,
    PARTICLE_RADIUS_SPAN, PARTICLE_SPEED_RANGE, POINTER_GLOW_RADIUS, PROXIMITY_THRESHOLD,
};
use crate::theme::Theme;

/// One drifting point. Velocity is in px per frame; radius and alpha are
/// fixed at creation.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Filled circle drawn at a grid intersection.
#[derive(Clone, Copy, Debug)]
pub struct GlowDot {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

/// Radial gradient compositing the pointer highlight over the surface.
#[derive(Clone, Copy, Debug)]
pub struct PointerGlow {
    pub center: Vec2,
    pub radius: f32,
    pub inner: Rgba,
}

pub struct BackgroundScene {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl BackgroundScene {
    /// Build a scene for a surface of the given pixel size. The seed fully
    /// determines the particle layout, so tests can assert exact positions.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut scene = Self {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        scene.resize(width, height);
        scene
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt new surface dimensions and rebuild the particle set from
    /// scratch. A surface without area (container not laid out yet) keeps
    /// the particle set empty; frames drawn in that state are no-ops.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();
        if self.width == 0.0 || self.height == 0.0 {
            log::debug!("background surface has no area yet, skipping particles");
            return;
        }
        for _ in 0..PARTICLE_COUNT {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let vel = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
            );
            self.particles.push(Particle {
                pos,
                vel,
                radius: self.rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_MIN_RADIUS,
                alpha: self.rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_MIN_ALPHA,
            });
        }
    }

    /// Advance every particle by one frame of drift. A coordinate leaving
    /// `[0, dim]` re-enters at the opposite edge.
    pub fn advance_particles(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x = w;
            } else if p.pos.x > w {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = h;
            } else if p.pos.y > h {
                p.pos.y = 0.0;
            }
        }
    }

    /// Offsets of the vertical grid lines, both edges included when the
    /// extent is a multiple of the spacing.
    pub fn vertical_lines(&self) -> impl Iterator<Item = f32> {
        grid_steps(self.width)
    }

    /// Offsets of the horizontal grid lines.
    pub fn horizontal_lines(&self) -> impl Iterator<Item = f32> {
        grid_steps(self.height)
    }

    /// Glow circle for every grid intersection, sized and faded by
    /// proximity to the pointer (normalized surface coordinates).
    pub fn glow_dots(&self, pointer_uv: Vec2) -> Vec<GlowDot> {
        let mut dots = Vec::new();
        if self.width == 0.0 || self.height == 0.0 {
            return dots;
        }
        for x in self.vertical_lines() {
            for y in self.horizontal_lines() {
                let uv = Vec2::new(x / self.width, y / self.height);
                let p = proximity(uv, pointer_uv);
                dots.push(GlowDot {
                    pos: Vec2::new(x, y),
                    radius: glow_radius(p),
                    alpha: glow_alpha(p),
                });
            }
        }
        dots
    }

    /// Pointer-follow gradient in surface pixels for the given theme.
    pub fn pointer_glow(&self, pointer_uv: Vec2, theme: Theme) -> PointerGlow {
        PointerGlow {
            center: pointer_uv * Vec2::new(self.width, self.height),
            radius: POINTER_GLOW_RADIUS,
            inner: ACCENT.with_alpha(theme.pointer_glow_alpha()),
        }
    }
}

/// Positions `0, GRID_SPACING, 2*GRID_SPACING, ..` up to and including
/// `extent`.
fn grid_steps(extent: f32) -> impl Iterator<Item = f32> {
    let count = if extent > 0.0 {
        (extent / GRID_SPACING) as usize + 1
    } else {
        0
    };
    (0..count).map(|i| i as f32 * GRID_SPACING)
}

/// Normalized closeness of a grid intersection to the pointer: 1 when they
/// coincide, 0 from `PROXIMITY_THRESHOLD` outward.
pub fn proximity(intersection_uv: Vec2, pointer_uv: Vec2) -> f32 {
    let dist = intersection_uv.distance(pointer_uv);
    (1.0 - dist / PROXIMITY_THRESHOLD).max(0.0)
}

pub fn glow_alpha(proximity: f32) -> f32 {
    GLOW_BASE_ALPHA + proximity * GLOW_ALPHA_SPAN
}

pub fn glow_radius(proximity: f32) -> f32 {
    if proximity > 0.0 {
        GLOW_BASE_RADIUS + proximity * GLOW_RADIUS_SPAN
    } else {
        GLOW_IDLE_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let a = BackgroundScene::new(800.0, 600.0, 7);
        let b = BackgroundScene::new(800.0, 600.0, 7);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.alpha, pb.alpha);
        }
    }

    #[test]
    fn zero_area_surface_has_no_particles_or_dots() {
        let scene = BackgroundScene::new(0.0, 600.0, 1);
        assert!(scene.particles().is_empty());
        assert!(scene.glow_dots(Vec2::new(0.5, 0.5)).is_empty());
    }

    #[test]
    fn grid_lines_include_both_edges_on_exact_multiples() {
        let scene = BackgroundScene::new(120.0, 60.0, 1);
        let xs: Vec<f32> = scene.vertical_lines().collect();
        assert_eq!(xs, vec![0.0, 60.0, 120.0]);
        let ys: Vec<f32> = scene.horizontal_lines().collect();
        assert_eq!(ys, vec![0.0, 60.0]);
    }

    #[test]
    fn glow_radius_falls_back_to_idle_size() {
        assert_eq!(glow_radius(0.0), GLOW_IDLE_RADIUS);
        assert_eq!(glow_radius(1.0), GLOW_BASE_RADIUS + GLOW_RADIUS_SPAN);
    }

    #[test]
    fn pointer_glow_tracks_theme_alpha() {
        let scene = BackgroundScene::new(400.0, 200.0, 3);
        let uv = Vec2::new(0.25, 0.5);
        let dark = scene.pointer_glow(uv, Theme::Dark);
        let light = scene.pointer_glow(uv, Theme::Light);
        assert_eq!(dark.center, Vec2::new(100.0, 100.0));
        assert_eq!(dark.radius, POINTER_GLOW_RADIUS);
        assert!(dark.inner.a > light.inner.a);
    }
}
