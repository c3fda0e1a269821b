//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PINK: [f32; 4] = [1.0, 0.753, 0.796, 1.0];

    /// Brick colors, one per row, repeating
    pub const BRICK_ROWS: [[f32; 4]; 5] = [
        [0.9, 0.2, 0.3, 1.0],
        [0.95, 0.55, 0.2, 1.0],
        [0.95, 0.85, 0.25, 1.0],
        [0.3, 0.75, 0.4, 1.0],
        [0.3, 0.5, 0.9, 1.0],
    ];
}
