//! Pointer-driven motion math: cursor glow smoothing, magnetic button
//! offsets and project-card tilt.

use glam::Vec2;

use crate::constants::{MAGNET_PULL_X, MAGNET_PULL_Y, TILT_MAX_DEG};

/// Move `current` a fixed fraction toward `target`, one frame of the
/// cursor-glow follower.
#[inline]
pub fn follow(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Translation applied to a magnetic element, from the pointer offset
/// relative to the element center. Vertical pull is stronger.
#[inline]
pub fn magnetic_offset(delta: Vec2) -> Vec2 {
    Vec2::new(delta.x * MAGNET_PULL_X, delta.y * MAGNET_PULL_Y)
}

/// Tilt of a hovered card, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

/// Tilt for a pointer at `frac`, its position inside the card as
/// fractions of the card size. The card yaws toward the pointer
/// horizontally and pitches away vertically.
#[inline]
pub fn card_tilt(frac: Vec2) -> CardTilt {
    let x = frac.x - 0.5;
    let y = frac.y - 0.5;
    CardTilt {
        rotate_y_deg: x * TILT_MAX_DEG,
        rotate_x_deg: -y * TILT_MAX_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_converges_on_a_static_target() {
        let target = Vec2::new(100.0, 40.0);
        let mut pos = Vec2::ZERO;
        for _ in 0..200 {
            pos = follow(pos, target, 0.12);
        }
        assert!(pos.distance(target) < 0.01);
    }

    #[test]
    fn follow_at_factor_one_snaps() {
        assert_eq!(
            follow(Vec2::ZERO, Vec2::new(5.0, 5.0), 1.0),
            Vec2::new(5.0, 5.0)
        );
    }

    #[test]
    fn magnetic_pull_is_stronger_vertically() {
        let off = magnetic_offset(Vec2::new(10.0, 10.0));
        assert_eq!(off, Vec2::new(2.5, 3.5));
    }

    #[test]
    fn tilt_is_zero_at_the_card_center() {
        let t = card_tilt(Vec2::new(0.5, 0.5));
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
    }

    #[test]
    fn tilt_extremes_reach_half_the_max_angle() {
        let t = card_tilt(Vec2::new(1.0, 0.0));
        assert_eq!(t.rotate_y_deg, TILT_MAX_DEG * 0.5);
        assert_eq!(t.rotate_x_deg, TILT_MAX_DEG * 0.5);
    }
}
