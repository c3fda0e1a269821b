//! Drawing surface module
//!
//! The host window supplies the real drawing primitives. Game code only talks
//! to the [`Canvas`] trait; the two canvases here record frames as commands or
//! tessellate them into vertex buffers.

pub mod draw;
pub mod mesh;
pub mod shapes;
pub mod vertex;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::font::Font;

pub use mesh::{MeshCanvas, TextLabel};
pub use vertex::{Vertex, colors};

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Drawing primitives provided by the host
pub trait Canvas {
    /// Fill the whole surface; called once at the start of every frame
    fn clear(&mut self, color: Color);
    /// Filled, unstroked rectangle with its top-left corner at `pos`
    fn rectangle(&mut self, pos: DVec2, width: f64, height: f64, color: Color);
    /// Filled circle
    fn circle(&mut self, center: DVec2, radius: f64, color: Color);
    /// Text with its baseline starting at `pos`
    fn text(&mut self, font: &Font, text: &str, pos: DVec2, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: String,
        size: f64,
        color: Color,
    },
}

/// Canvas that records draw calls in order
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand back the recorded frame and start a fresh one
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Text of every text command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for CommandList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn rectangle(&mut self, pos: DVec2, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rectangle {
            x: pos.x,
            y: pos.y,
            width,
            height,
            color,
        });
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x: center.x,
            y: center.y,
            radius,
            color,
        });
    }

    fn text(&mut self, font: &Font, text: &str, pos: DVec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: pos.x,
            y: pos.y,
            font: font.name.clone(),
            size: font.size,
            color,
        });
    }
}
