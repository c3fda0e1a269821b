//! Frame driver
//!
//! Owns every entity for the life of the process. The host calls
//! [`Game::key_down`] for each key event and [`Game::frame`] once per display
//! refresh; both run on the host's single thread.

use crate::font::{Font, FontError};
use crate::input::Key;
use crate::renderer::{Canvas, Color};
use crate::scoreboard::Scoreboard;
use crate::settings::{Settings, Variant};
use crate::sim::{Ball, BallContacts, Bounds, Brick, Paddle, generate_grid};

/// Summary of one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub contacts: BallContacts,
    /// Bricks killed this frame
    pub bricks_destroyed: usize,
    /// Dead bricks so far
    pub score: usize,
}

pub struct Game {
    bounds: Bounds,
    background: Color,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Empty in the classic variant
    pub bricks: Vec<Brick>,
    scoreboard: Option<Scoreboard>,
    autopilot: bool,
    frame_count: u64,
}

impl Game {
    /// Build the configured variant, loading the score font only when the
    /// variant draws text
    pub fn from_settings(settings: &Settings) -> Result<Self, FontError> {
        if settings.variant.needs_font() {
            let font = Font::load(&settings.font_path, settings.font_size)?;
            Ok(Self::with_bricks(settings, font))
        } else {
            Ok(Self::classic(settings))
        }
    }

    /// Paddle and ball only
    pub fn classic(settings: &Settings) -> Self {
        let bounds = settings.bounds();
        log::info!(
            "Starting classic game on {}x{}",
            settings.width,
            settings.height
        );
        Self {
            bounds,
            background: settings.background,
            paddle: Paddle::for_screen(bounds, settings.foreground),
            ball: Ball::for_screen(bounds, settings.foreground),
            bricks: Vec::new(),
            scoreboard: None,
            autopilot: settings.autopilot,
            frame_count: 0,
        }
    }

    /// Paddle, ball, brick grid and score
    pub fn with_bricks(settings: &Settings, font: Font) -> Self {
        let mut game = Self::classic(settings);
        game.bricks = generate_grid(game.bounds);
        game.scoreboard = Some(Scoreboard::new(font, settings.text_color));
        game
    }

    pub fn variant(&self) -> Variant {
        if self.scoreboard.is_some() {
            Variant::Bricks
        } else {
            Variant::Classic
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Dead bricks so far (always 0 in the classic variant)
    pub fn score(&self) -> usize {
        Scoreboard::score(&self.bricks)
    }

    /// Handle a key-down event from the host. Unknown keys are ignored.
    pub fn key_down(&mut self, name: &str) -> Option<Key> {
        let key = Key::from_name(name);
        match key {
            Some(key) => self.press(key),
            None => log::trace!("Ignoring key '{}'", name),
        }
        key
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.paddle.move_left(),
            Key::ArrowRight => self.paddle.move_right(),
        }
    }

    /// Run one frame: update the ball, then draw everything
    pub fn frame(&mut self, canvas: &mut impl Canvas) -> FrameReport {
        if self.autopilot {
            if let Some(key) = self.autopilot_key() {
                self.key_down(key.as_str());
            }
        }

        canvas.clear(self.background);
        self.paddle.draw(canvas);
        let contacts = self.ball.draw(&self.paddle, self.bounds, canvas);
        if contacts.paddle {
            log::debug!("Paddle return, heading {:.1}", self.ball.angle);
        }

        let mut bricks_destroyed = 0;
        for brick in &mut self.bricks {
            if brick.draw(&mut self.ball, canvas).any() {
                bricks_destroyed += 1;
            }
        }

        let score = match &self.scoreboard {
            Some(board) => board.draw(&self.bricks, canvas),
            None => 0,
        };

        self.frame_count += 1;
        FrameReport {
            contacts,
            bricks_destroyed,
            score,
        }
    }

    /// Key that moves the paddle toward the ball, if it's off-center
    fn autopilot_key(&self) -> Option<Key> {
        let quarter = self.paddle.width / 4.0;
        let offset = self.ball.pos.x - self.paddle.center_x();
        if offset < -quarter {
            Some(Key::ArrowLeft)
        } else if offset > quarter {
            Some(Key::ArrowRight)
        } else {
            None
        }
    }
}
