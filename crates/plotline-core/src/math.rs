//! Vector math built on [`glam`].
//!
//! All geometry in this workspace uses `glam` types directly;
//! this module re-exports them so downstream crates depend on a
//! single math vocabulary.
//!
//! # Common Types
//!
//! - [`Vec2`]: 2D vector (x, y) for screen points, directions, normals
//! - [`Vec2::perp`]: the 90° counter-clockwise rotation, used for
//!   stroke edge normals
//! - [`Vec2::from_angle`] + [`Vec2::rotate`]: arbitrary rotations,
//!   used for round cap corners
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp_is_ccw() {
        let right = Vec2::new(1.0, 0.0);
        assert_eq!(right.perp(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0);
        let rotated = Vec2::from_angle(std::f32::consts::FRAC_PI_2).rotate(v);
        assert!((rotated - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }
}
