//! Entity types
//!
//! Positions are screen pixels with y growing downward. Everything is created
//! once at startup and lives for the rest of the process.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Color;

/// Screen size, fixed at setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    /// Pixels moved per key press
    pub speed: f64,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: DVec2, width: f64, height: f64, speed: f64, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
            color,
        }
    }

    /// Default paddle for a screen: a quarter of the width wide, left edge at
    /// the horizontal middle, a seventh of the height above the bottom edge
    pub fn for_screen(bounds: Bounds, color: Color) -> Self {
        Self::new(
            DVec2::new(
                bounds.width / 2.0,
                bounds.height - bounds.height / PADDLE_BOTTOM_OFFSET_DIVISOR,
            ),
            bounds.width / PADDLE_WIDTH_DIVISOR,
            bounds.height / PADDLE_HEIGHT_DIVISOR,
            PADDLE_SPEED,
            color,
        )
    }

    // No clamping: the paddle may leave the screen.
    pub fn move_left(&mut self) {
        self.pos.x -= self.speed;
    }

    pub fn move_right(&mut self) {
        self.pos.x += self.speed;
    }

    /// Horizontal center (used by the autopilot)
    pub fn center_x(&self) -> f64 {
        self.pos.x + self.width / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: DVec2,
    pub radius: f64,
    /// Pixels per frame
    pub speed: f64,
    /// Direction of travel in degrees, 0 = +x, clockwise on screen
    pub angle: f64,
    pub color: Color,
}

impl Ball {
    /// New ball tucked into the top-left corner, heading down-right
    pub fn new(radius: f64, speed: f64, color: Color) -> Self {
        Self {
            pos: DVec2::splat(radius),
            radius,
            speed,
            angle: BALL_START_ANGLE,
            color,
        }
    }

    pub fn for_screen(bounds: Bounds, color: Color) -> Self {
        Self::new(bounds.width / BALL_RADIUS_DIVISOR, BALL_SPEED, color)
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// Set once on the first hit, never cleared
    pub dead: bool,
}

impl Brick {
    pub fn new(pos: DVec2, width: f64, height: f64, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            color,
            dead: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub(crate) fn kill(&mut self) {
        self.dead = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_paddle_moves_without_clamp() {
        let mut paddle = Paddle::new(DVec2::new(10.0, 400.0), 100.0, 8.0, 20.0, colors::WHITE);
        paddle.move_left();
        assert_eq!(paddle.pos.x, -10.0);
        paddle.move_left();
        assert_eq!(paddle.pos.x, -30.0);
        paddle.move_right();
        assert_eq!(paddle.pos.x, -10.0);
        assert_eq!(paddle.pos.y, 400.0);
    }

    #[test]
    fn test_paddle_for_screen() {
        let paddle = Paddle::for_screen(Bounds::new(640.0, 448.0), colors::WHITE);
        assert_eq!(paddle.pos, DVec2::new(320.0, 384.0));
        assert_eq!(paddle.width, 160.0);
        assert_eq!(paddle.height, 7.0);
        assert_eq!(paddle.speed, PADDLE_SPEED);
    }

    #[test]
    fn test_ball_defaults() {
        let ball = Ball::for_screen(Bounds::new(640.0, 480.0), colors::WHITE);
        assert_eq!(ball.radius, 10.0);
        assert_eq!(ball.pos, DVec2::new(10.0, 10.0));
        assert_eq!(ball.angle, 45.0);
        assert_eq!(ball.speed, 3.0);
    }

    #[test]
    fn test_brick_starts_alive() {
        let mut brick = Brick::new(DVec2::ZERO, 32.0, 32.0, colors::WHITE);
        assert!(brick.is_alive());
        brick.kill();
        brick.kill();
        assert!(brick.dead);
    }
}
