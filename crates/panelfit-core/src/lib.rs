//! Panel fitting core: given roof and panel dimensions, estimates how many
//! identical panels fit by trying a fixed set of tiling layouts (both
//! uniform orientations plus one horizontal and one vertical split) and
//! keeping the best.

pub mod types;

mod fitter;

pub use fitter::{compute_panels, placements, Fitter};
pub use types::*;
