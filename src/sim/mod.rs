//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering:
//! - One update per frame, no timestep scaling
//! - Headings are degrees, bounces are angle rewrites
//! - Stable iteration order (brick grid index)

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{BrickEdge, reflect_horizontal, reflect_vertical};
pub use layout::{generate_grid, is_pattern_cell_dead};
pub use state::{Ball, Bounds, Brick, Paddle};
pub use tick::{BallContacts, ClampAxis, EdgeHits};
