//! Per-frame ball update and brick hit resolution
//!
//! One call to [`Ball::update`] is one frame. The checks run in a fixed order
//! and each may rewrite the heading, so a later check can override an earlier
//! one within the same frame.

use super::collision::{
    BrickEdge, ball_paddle_contact, moving_down, reflect_horizontal, reflect_vertical,
    touches_side_wall, touches_top_or_bottom_wall,
};
use super::state::{Ball, Bounds, Brick, Paddle};
use crate::heading;

/// Axis corrected by the end-of-frame clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampAxis {
    X,
    Y,
}

/// What happened to the ball during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallContacts {
    pub paddle: bool,
    pub side_wall: bool,
    pub top_or_bottom_wall: bool,
    pub clamped: Option<ClampAxis>,
}

impl Ball {
    /// Advance the ball by one frame
    pub fn update(&mut self, paddle: &Paddle, bounds: Bounds) -> BallContacts {
        let mut contacts = BallContacts::default();

        if ball_paddle_contact(self.pos, self.radius, paddle) && moving_down(self.angle) {
            self.angle = reflect_vertical(self.angle);
            contacts.paddle = true;
        }
        if touches_side_wall(self.pos, self.radius, bounds) {
            self.angle = reflect_horizontal(self.angle);
            contacts.side_wall = true;
        }
        if touches_top_or_bottom_wall(self.pos, self.radius, bounds) {
            self.angle = reflect_vertical(self.angle);
            contacts.top_or_bottom_wall = true;
        }

        self.pos += heading(self.angle) * self.speed;
        contacts.clamped = self.clamp_to(bounds);
        contacts
    }

    /// Pull the ball back inside the screen.
    ///
    /// Only the first out-of-range coordinate (x before y) is fixed per call,
    /// so a ball past a corner keeps its y overflow until the next frame.
    fn clamp_to(&mut self, bounds: Bounds) -> Option<ClampAxis> {
        let r = self.radius;
        if self.pos.x < r {
            self.pos.x = r;
            Some(ClampAxis::X)
        } else if self.pos.x > bounds.width - r {
            self.pos.x = bounds.width - r;
            Some(ClampAxis::X)
        } else if self.pos.y < r {
            self.pos.y = r;
            Some(ClampAxis::Y)
        } else if self.pos.y > bounds.height - r {
            self.pos.y = bounds.height - r;
            Some(ClampAxis::Y)
        } else {
            None
        }
    }
}

/// Edges of one brick that fired during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeHits {
    pub bottom: bool,
    pub top: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeHits {
    fn set(&mut self, edge: BrickEdge) {
        match edge {
            BrickEdge::Bottom => self.bottom = true,
            BrickEdge::Top => self.top = true,
            BrickEdge::Left => self.left = true,
            BrickEdge::Right => self.right = true,
        }
    }

    pub fn contains(&self, edge: BrickEdge) -> bool {
        match edge {
            BrickEdge::Bottom => self.bottom,
            BrickEdge::Top => self.top,
            BrickEdge::Left => self.left,
            BrickEdge::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.bottom || self.top || self.left || self.right
    }

    pub fn count(&self) -> usize {
        BrickEdge::ALL.iter().filter(|e| self.contains(**e)).count()
    }
}

impl Brick {
    /// Test all four edges against the ball and bounce it off every edge hit.
    ///
    /// Edges are checked bottom, top, left, right. Each check sees the heading
    /// left by the previous one. Any hit kills the brick; a brick that was
    /// already dead is skipped entirely.
    ///
    /// The alive check is read once on entry, so a hit on one edge does not
    /// stop the later edges from being tested. A corner hit reflects twice.
    pub fn resolve_hits(&mut self, ball: &mut Ball) -> EdgeHits {
        let mut hits = EdgeHits::default();
        if self.dead {
            return hits;
        }

        for edge in BrickEdge::ALL {
            if edge.contact(ball.pos, ball.radius, self) && edge.approaching(ball.angle) {
                ball.angle = edge.reflect(ball.angle);
                self.kill();
                hits.set(edge);
            }
        }

        if hits.any() {
            log::debug!(
                "Brick at ({:.1}, {:.1}) destroyed, ball heading now {:.1}",
                self.pos.x,
                self.pos.y,
                ball.angle
            );
        }
        hits
    }
}
