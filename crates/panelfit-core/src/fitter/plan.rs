use crate::types::{FitResult, Placement};

/// Expands a result's regions into per-panel placements.
///
/// Renderers place panels from this instead of re-deriving the tiling, so a
/// drawn layout always agrees with the reported count:
/// `placements(r).len() == r.panel_count`.
pub fn placements(result: &FitResult) -> Vec<Placement> {
    let mut out = Vec::new();

    for region in &result.regions {
        for row in 0..region.rows {
            for col in 0..region.cols {
                out.push(Placement {
                    x: region.x + col as f64 * region.panel_width,
                    y: region.y + row as f64 * region.panel_height,
                    width: region.panel_width,
                    height: region.panel_height,
                    rotated: region.rotated,
                });
            }
        }
    }

    out
}
