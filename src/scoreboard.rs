//! Score display
//!
//! The score is never stored: it is the number of dead bricks, counted again
//! on every draw.

use glam::DVec2;

use crate::consts::SCORE_POS;
use crate::font::Font;
use crate::renderer::{Canvas, Color};
use crate::sim::Brick;

pub struct Scoreboard {
    font: Font,
    pos: DVec2,
    color: Color,
}

impl Scoreboard {
    pub fn new(font: Font, color: Color) -> Self {
        Self {
            font,
            pos: DVec2::new(SCORE_POS.0, SCORE_POS.1),
            color,
        }
    }

    /// Number of dead bricks
    pub fn score(bricks: &[Brick]) -> usize {
        bricks.iter().filter(|b| b.dead).count()
    }

    pub fn label(score: usize) -> String {
        format!("Score: {}", score)
    }

    pub fn draw(&self, bricks: &[Brick], canvas: &mut impl Canvas) -> usize {
        let score = Self::score(bricks);
        canvas.text(&self.font, &Self::label(score), self.pos, self.color);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand, colors};

    fn bricks(dead: usize, total: usize) -> Vec<Brick> {
        (0..total)
            .map(|i| {
                let mut b = Brick::new(DVec2::new(i as f64, 0.0), 1.0, 1.0, colors::WHITE);
                b.dead = i < dead;
                b
            })
            .collect()
    }

    #[test]
    fn test_score_counts_dead() {
        assert_eq!(Scoreboard::score(&bricks(0, 200)), 0);
        assert_eq!(Scoreboard::score(&bricks(17, 200)), 17);
        assert_eq!(Scoreboard::score(&bricks(200, 200)), 200);
        assert_eq!(Scoreboard::score(&[]), 0);
    }

    #[test]
    fn test_draw_renders_label() {
        let font = Font::from_bytes("default.otf", b"OTTO0000", 16.0).unwrap();
        let board = Scoreboard::new(font, colors::BLACK);
        let mut canvas = CommandList::new();
        assert_eq!(board.draw(&bricks(5, 10), &mut canvas), 5);
        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Text {
                text: "Score: 5".to_string(),
                x: 10.0,
                y: 20.0,
                font: "default".to_string(),
                size: 16.0,
                color: colors::BLACK,
            }]
        );
    }
}
