//! Brick grid generation
//!
//! 20 columns by 10 rows. Some cells start out dead so the surviving bricks
//! form a picture: a face in the upper half, a checkered fringe at the bottom.

use glam::DVec2;

use super::state::{Bounds, Brick};
use crate::consts::*;
use crate::renderer::{Color, colors};

/// Hand-picked cells knocked out of the picture (eyes, mouth, two holes)
pub const PATTERN_DEAD_CELLS: &[usize] = &[
    26, 27, 32, 33, // eyes
    66, 67, 68, 69, 70, 71, 72, 73, // mouth
    125, 134,
];

/// Whether cell `index` starts dead
pub fn is_pattern_cell_dead(index: usize) -> bool {
    let column = index % BRICK_COLUMNS;
    let row = index / BRICK_COLUMNS;

    let side_margin = column < 2 || column >= BRICK_COLUMNS - 2;
    let gap_row = (80..100).contains(&index);
    let fringe = row >= 8 && (column + row) % 2 == 0;

    side_margin || gap_row || fringe || PATTERN_DEAD_CELLS.contains(&index)
}

/// Size of a single grid cell for this screen
pub fn cell_size(bounds: Bounds) -> DVec2 {
    DVec2::new(
        bounds.width / BRICK_COLUMNS as f64,
        bounds.height / BRICK_HEIGHT_DIVISOR,
    )
}

/// Top-left corner of cell `index`
pub fn cell_origin(index: usize, bounds: Bounds) -> DVec2 {
    let size = cell_size(bounds);
    let column = (index % BRICK_COLUMNS) as f64;
    let row = (index / BRICK_COLUMNS) as f64;

    let mut y = row * size.y + BRICK_TOP_MARGIN;
    if index >= BRICK_COUNT / 2 {
        y += BRICK_LOWER_STAGGER;
    }
    DVec2::new(column * size.x, y)
}

/// Color for a brick row
pub fn row_color(row: usize) -> Color {
    colors::BRICK_ROWS[row % colors::BRICK_ROWS.len()]
}

/// Build the full grid with the pattern cells already dead
pub fn generate_grid(bounds: Bounds) -> Vec<Brick> {
    let size = cell_size(bounds);
    let bricks: Vec<Brick> = (0..BRICK_COUNT)
        .map(|i| {
            let mut brick = Brick::new(
                cell_origin(i, bounds),
                size.x,
                size.y,
                row_color(i / BRICK_COLUMNS),
            );
            brick.dead = is_pattern_cell_dead(i);
            brick
        })
        .collect();

    log::info!(
        "Brick grid: {} cells, {} live, cell {:.1}x{:.1}",
        bricks.len(),
        bricks.iter().filter(|b| b.is_alive()).count(),
        size.x,
        size.y
    );
    bricks
}
