use serde::{Deserialize, Serialize};

/// Input: the four dimensions the user provides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitRequest {
    pub roof_width: f64,
    pub roof_height: f64,
    pub panel_width: f64,
    pub panel_height: f64,
}

/// Which layout produced the result, or why no panels were placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    InvalidDimensions,
    PanelTooLarge,
    UniformNormal,
    UniformRotated,
    MixedHorizontal,
    MixedVertical,
}

/// One tiled rectangular region of the roof.
///
/// Uniform layouts produce a single region covering the whole roof; mixed
/// layouts produce two (the first strip plus the leftover strip). The panel
/// dimensions are stored as placed, so a rotated region carries the swapped
/// width/height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub cols: u64,
    pub rows: u64,
    pub panel_width: f64,
    pub panel_height: f64,
    pub rotated: bool,
}

impl Region {
    /// Whole panels held by this region. Saturates instead of overflowing
    /// for degenerate ratios, so computing a count can never panic.
    pub fn count(&self) -> u64 {
        self.cols.saturating_mul(self.rows)
    }
}

/// Position of a single placed panel, for renderers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// Output: best layout found among the candidate strategies.
///
/// Always well-formed: invalid or infeasible input degrades to a zero-count
/// result with an explanatory label instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub panel_count: u64,
    pub strategy: Strategy,
    pub label: String,
    pub explanation: String,
    /// Structured breakdown of the winning layout; empty for zero outcomes.
    pub regions: Vec<Region>,
}

/// A request paired with its result, as written to report files and
/// consumed by the SVG generators (which need the roof dimensions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub request: FitRequest,
    pub result: FitResult,
}

/// Error type for request validation
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FitError>;
