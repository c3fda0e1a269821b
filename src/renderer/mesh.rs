//! Canvas that tessellates a frame into one triangle list
//!
//! Rectangles and circles become vertices ready for a vertex buffer. Text is
//! kept as labels for the host's glyph renderer.

use glam::{DVec2, Vec2};

use super::shapes;
use super::vertex::Vertex;
use super::{Canvas, Color};
use crate::font::Font;

/// Text queued for the host's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub font: String,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Default)]
pub struct MeshCanvas {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle count of the current frame
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex data as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.labels.clear();
    }

    fn rectangle(&mut self, pos: DVec2, width: f64, height: f64, color: Color) {
        self.vertices.extend(shapes::rect(
            pos.as_vec2(),
            Vec2::new(width as f32, height as f32),
            color,
        ));
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let radius = radius as f32;
        self.vertices.extend(shapes::circle(
            center.as_vec2(),
            radius,
            color,
            shapes::circle_segments(radius),
        ));
    }

    fn text(&mut self, font: &Font, text: &str, pos: DVec2, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos: pos.as_vec2(),
            font: font.name.clone(),
            size: font.size as f32,
            color,
        });
    }
}
