//! Hit tests and angle reflection
//!
//! The ball carries no velocity vector, only a heading in degrees. A bounce
//! is an angle rewrite: mirroring across the horizontal axis flips vertical
//! travel, mirroring across the vertical axis flips horizontal travel.
//! All ranges below are closed intervals.

use glam::DVec2;

use super::state::{Bounds, Brick, Paddle};
use crate::normalize_360;

/// Flip vertical travel (floor/ceiling style bounce)
#[inline]
pub fn reflect_vertical(angle: f64) -> f64 {
    normalize_360(360.0 - angle)
}

/// Flip horizontal travel (side wall style bounce)
#[inline]
pub fn reflect_horizontal(angle: f64) -> f64 {
    normalize_360(180.0 - angle)
}

/// Heading points down the screen (y grows downward)
#[inline]
pub fn moving_down(angle: f64) -> bool {
    angle < 180.0
}

#[inline]
pub fn moving_up(angle: f64) -> bool {
    angle > 180.0
}

#[inline]
pub fn moving_right(angle: f64) -> bool {
    angle < 90.0 || angle > 270.0
}

#[inline]
pub fn moving_left(angle: f64) -> bool {
    (90.0..=270.0).contains(&angle)
}

#[inline]
fn within(value: f64, lo: f64, hi: f64) -> bool {
    lo <= value && value <= hi
}

/// Geometric paddle contact test (heading is checked by the caller)
///
/// The vertical band is deliberately lopsided: it reaches half a radius above
/// the paddle's center line but a full radius below it.
pub fn ball_paddle_contact(ball_pos: DVec2, ball_radius: f64, paddle: &Paddle) -> bool {
    let half_h = paddle.height / 2.0;
    within(ball_pos.x, paddle.pos.x, paddle.pos.x + paddle.width)
        && within(
            ball_pos.y,
            paddle.pos.y - half_h - ball_radius / 2.0,
            paddle.pos.y + half_h + ball_radius,
        )
}

/// Ball touches (or is past) the left or right screen edge
pub fn touches_side_wall(ball_pos: DVec2, ball_radius: f64, bounds: Bounds) -> bool {
    ball_pos.x <= ball_radius || ball_pos.x >= bounds.width - ball_radius
}

/// Ball touches (or is past) the top or bottom screen edge
pub fn touches_top_or_bottom_wall(ball_pos: DVec2, ball_radius: f64, bounds: Bounds) -> bool {
    ball_pos.y <= ball_radius || ball_pos.y >= bounds.height - ball_radius
}

/// One side of a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickEdge {
    Bottom,
    Top,
    Left,
    Right,
}

impl BrickEdge {
    /// Evaluation order used when resolving hits
    pub const ALL: [BrickEdge; 4] = [
        BrickEdge::Bottom,
        BrickEdge::Top,
        BrickEdge::Left,
        BrickEdge::Right,
    ];

    /// Whether the ball center lies in this edge's contact band
    pub fn contact(self, ball_pos: DVec2, ball_radius: f64, brick: &Brick) -> bool {
        let (x, y) = (brick.pos.x, brick.pos.y);
        let (w, h, r) = (brick.width, brick.height, ball_radius);
        match self {
            BrickEdge::Bottom => {
                within(ball_pos.x, x, x + w) && within(ball_pos.y, y + h, y + h + r)
            }
            BrickEdge::Top => within(ball_pos.x, x, x + w) && within(ball_pos.y, y - r, y),
            BrickEdge::Left => within(ball_pos.y, y, y + h) && within(ball_pos.x, x - r, x),
            BrickEdge::Right => {
                within(ball_pos.y, y, y + h) && within(ball_pos.x, x + w, x + w + r)
            }
        }
    }

    /// Whether a ball with this heading is travelling into the edge
    pub fn approaching(self, angle: f64) -> bool {
        match self {
            BrickEdge::Bottom => moving_up(angle),
            BrickEdge::Top => moving_down(angle),
            BrickEdge::Left => moving_right(angle),
            BrickEdge::Right => moving_left(angle),
        }
    }

    /// Heading after bouncing off this edge
    pub fn reflect(self, angle: f64) -> f64 {
        match self {
            BrickEdge::Bottom | BrickEdge::Top => reflect_vertical(angle),
            BrickEdge::Left | BrickEdge::Right => reflect_horizontal(angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_reflect_vertical() {
        assert_eq!(reflect_vertical(90.0), 270.0);
        assert_eq!(reflect_vertical(45.0), 315.0);
        assert_eq!(reflect_vertical(0.0), 0.0);
    }

    #[test]
    fn test_reflect_horizontal() {
        assert_eq!(reflect_horizontal(45.0), 135.0);
        assert_eq!(reflect_horizontal(315.0), 225.0);
        assert_eq!(reflect_horizontal(180.0), 0.0);
    }

    #[test]
    fn test_heading_quadrants() {
        assert!(moving_down(45.0) && moving_right(45.0));
        assert!(moving_up(225.0) && moving_left(225.0));
        // 90 and 270 count as leftward
        assert!(moving_left(90.0) && moving_left(270.0));
        assert!(!moving_up(180.0) && !moving_down(180.0));
    }

    #[test]
    fn test_paddle_band_is_lopsided() {
        let paddle = Paddle::new(DVec2::new(100.0, 200.0), 50.0, 10.0, 20.0, colors::WHITE);
        let r = 8.0;
        // Above: paddle.y - 5 - 4
        assert!(ball_paddle_contact(DVec2::new(120.0, 191.0), r, &paddle));
        assert!(!ball_paddle_contact(DVec2::new(120.0, 190.9), r, &paddle));
        // Below: paddle.y + 5 + 8
        assert!(ball_paddle_contact(DVec2::new(120.0, 213.0), r, &paddle));
        assert!(!ball_paddle_contact(DVec2::new(120.0, 213.1), r, &paddle));
        // Horizontal extent is the paddle itself, edges included
        assert!(ball_paddle_contact(DVec2::new(150.0, 200.0), r, &paddle));
        assert!(!ball_paddle_contact(DVec2::new(99.0, 200.0), r, &paddle));
    }

    #[test]
    fn test_walls() {
        let bounds = Bounds::new(640.0, 480.0);
        assert!(touches_side_wall(DVec2::new(10.0, 100.0), 10.0, bounds));
        assert!(touches_side_wall(DVec2::new(630.0, 100.0), 10.0, bounds));
        assert!(!touches_side_wall(DVec2::new(320.0, 100.0), 10.0, bounds));
        assert!(touches_top_or_bottom_wall(DVec2::new(320.0, 470.0), 10.0, bounds));
        assert!(!touches_top_or_bottom_wall(DVec2::new(320.0, 240.0), 10.0, bounds));
    }

    #[test]
    fn test_brick_edge_bands() {
        let brick = Brick::new(DVec2::ZERO, 10.0, 10.0, colors::WHITE);
        let r = 3.0;
        assert!(BrickEdge::Top.contact(DVec2::new(5.0, -2.0), r, &brick));
        assert!(BrickEdge::Bottom.contact(DVec2::new(5.0, 12.0), r, &brick));
        assert!(BrickEdge::Left.contact(DVec2::new(-3.0, 5.0), r, &brick));
        assert!(BrickEdge::Right.contact(DVec2::new(13.0, 5.0), r, &brick));
        assert!(!BrickEdge::Right.contact(DVec2::new(13.5, 5.0), r, &brick));
    }

    #[test]
    fn test_brick_edge_reflect_axis() {
        assert_eq!(BrickEdge::Top.reflect(45.0), 315.0);
        assert_eq!(BrickEdge::Bottom.reflect(315.0), 45.0);
        assert_eq!(BrickEdge::Left.reflect(45.0), 135.0);
        assert_eq!(BrickEdge::Right.reflect(135.0), 45.0);
    }
}
