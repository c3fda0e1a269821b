//! Brick Pong - a paddle, a bouncing ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Frame-stepped physics (angle reflection, hit tests, brick layout)
//! - `renderer`: Drawing surface abstraction and mesh tessellation
//! - `game`: Frame driver owning every entity
//! - `settings`: Presentation settings loaded from JSON

pub mod font;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use font::{Font, FontError};
pub use game::Game;
pub use settings::{Settings, Variant};

/// Game configuration constants
pub mod consts {
    /// Paddle movement per key press (pixels)
    pub const PADDLE_SPEED: f64 = 20.0;
    /// Paddle width is screen width divided by this
    pub const PADDLE_WIDTH_DIVISOR: f64 = 4.0;
    /// Paddle height is screen height divided by this
    pub const PADDLE_HEIGHT_DIVISOR: f64 = 64.0;
    /// Paddle top edge sits screen height divided by this above the bottom
    pub const PADDLE_BOTTOM_OFFSET_DIVISOR: f64 = 7.0;

    /// Ball radius is screen width divided by this
    pub const BALL_RADIUS_DIVISOR: f64 = 64.0;
    /// Ball speed (pixels per frame)
    pub const BALL_SPEED: f64 = 3.0;
    /// Initial heading (degrees, clockwise on screen)
    pub const BALL_START_ANGLE: f64 = 45.0;

    /// Brick grid
    pub const BRICK_COLUMNS: usize = 20;
    pub const BRICK_ROWS: usize = 10;
    pub const BRICK_COUNT: usize = BRICK_COLUMNS * BRICK_ROWS;
    /// Brick height is screen height divided by this
    pub const BRICK_HEIGHT_DIVISOR: f64 = 15.0;
    /// Vertical offset of the first brick row
    pub const BRICK_TOP_MARGIN: f64 = 30.0;
    /// Extra vertical offset for the lower half of the grid
    pub const BRICK_LOWER_STAGGER: f64 = 20.0;

    /// Score text anchor
    pub const SCORE_POS: (f64, f64) = (10.0, 20.0);
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_360(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // Tiny negative inputs round up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}

/// Heading in degrees to a unit direction vector (screen space, y down)
#[inline]
pub fn heading(angle_deg: f64) -> glam::DVec2 {
    let rad = angle_deg.to_radians();
    glam::DVec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(450.0), 90.0);
        assert_eq!(normalize_360(-90.0), 270.0);
        assert_eq!(normalize_360(-720.0), 0.0);
        assert_eq!(normalize_360(315.0), 315.0);
    }

    #[test]
    fn test_normalize_tiny_negative() {
        let a = normalize_360(-1e-14);
        assert!((0.0..360.0).contains(&a));
    }

    #[test]
    fn test_heading_axes() {
        let right = heading(0.0);
        assert!((right.x - 1.0).abs() < 1e-12 && right.y.abs() < 1e-12);
        // 90 degrees points down the screen
        let down = heading(90.0);
        assert!(down.x.abs() < 1e-12 && (down.y - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn normalize_in_range(a in -1.0e6f64..1.0e6) {
            let n = normalize_360(a);
            prop_assert!((0.0..360.0).contains(&n));
        }

        #[test]
        fn normalize_idempotent(a in -1.0e6f64..1.0e6) {
            let n = normalize_360(a);
            prop_assert_eq!(normalize_360(n), n);
        }
    }
}
