//! Matrix grid generation and point location.
//!
//! Grid order: rows run from the highest impact down to 1, columns from
//! probability 1 up to N. Row 0 is the top of the rendered matrix.

pub mod generator;
pub mod palette;
pub mod position;

pub use generator::{generate_grid, LabeledGrid};
pub use palette::level_color;
pub use position::{heatmap, locate_cell, CellPosition};
