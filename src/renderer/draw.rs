//! Entity drawing
//!
//! Drawing the ball advances it one frame first, and drawing a brick runs its
//! hit tests after rendering, so a frame is simply "draw everything in order".

use super::Canvas;
use crate::sim::{Ball, BallContacts, Bounds, Brick, EdgeHits, Paddle};

impl Paddle {
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.rectangle(self.pos, self.width, self.height, self.color);
    }
}

impl Ball {
    /// Update once, then render at the new position
    pub fn draw(&mut self, paddle: &Paddle, bounds: Bounds, canvas: &mut impl Canvas) -> BallContacts {
        let contacts = self.update(paddle, bounds);
        canvas.circle(self.pos, self.radius, self.color);
        contacts
    }
}

impl Brick {
    /// Render if alive, then test the ball against the edges
    pub fn draw(&mut self, ball: &mut Ball, canvas: &mut impl Canvas) -> EdgeHits {
        if self.is_alive() {
            canvas.rectangle(self.pos, self.width, self.height, self.color);
        }
        self.resolve_hits(ball)
    }
}
