use crate::types::*;

mod describe;
mod plan;
mod strategy;
#[cfg(test)]
mod tests;

pub use plan::placements;

use strategy::Candidate;

/// Estimates how many panels fit on a roof by trying a fixed set of
/// tiling layouts and keeping the best.
pub struct Fitter {
    request: FitRequest,
}

impl Fitter {
    /// Validates the request and builds a new fitter instance.
    ///
    /// Only malformed input (NaN or infinite dimensions) is rejected here.
    /// Non-positive dimensions are a reported outcome of [`Fitter::compute`],
    /// not a construction error.
    pub fn new(request: FitRequest) -> Result<Self> {
        for (name, value) in [
            ("roof_width", request.roof_width),
            ("roof_height", request.roof_height),
            ("panel_width", request.panel_width),
            ("panel_height", request.panel_height),
        ] {
            if !value.is_finite() {
                return Err(FitError::InvalidInput(format!(
                    "Dimension '{}' is not a finite number",
                    name
                )));
            }
        }

        Ok(Self { request })
    }

    /// Evaluates the four candidate layouts and returns the best one found.
    ///
    /// Never fails: invalid dimensions and panels that fit in neither
    /// orientation degrade to a zero-count result with an explanatory label.
    pub fn compute(&self) -> FitResult {
        let request = &self.request;

        if request.roof_width <= 0.0
            || request.roof_height <= 0.0
            || request.panel_width <= 0.0
            || request.panel_height <= 0.0
        {
            return self.rejected(Strategy::InvalidDimensions);
        }

        // A panel is placeable in an orientation iff both of its placed
        // dimensions fit inside the roof.
        let fits_normal = request.panel_width <= request.roof_width
            && request.panel_height <= request.roof_height;
        let fits_rotated = request.panel_height <= request.roof_width
            && request.panel_width <= request.roof_height;

        if !fits_normal && !fits_rotated {
            return self.rejected(Strategy::PanelTooLarge);
        }

        // Fixed evaluation order; ties keep the first candidate seen.
        let mut best = strategy::uniform(request, false);
        for candidate in [
            strategy::uniform(request, true),
            strategy::mixed_horizontal(request),
            strategy::mixed_vertical(request),
        ] {
            if candidate.count > best.count {
                best = candidate;
            }
        }

        self.finish(best)
    }

    fn rejected(&self, strategy: Strategy) -> FitResult {
        FitResult {
            panel_count: 0,
            strategy,
            label: describe::label(&self.request, strategy),
            explanation: describe::explanation(strategy, &[], 0),
            regions: Vec::new(),
        }
    }

    fn finish(&self, candidate: Candidate) -> FitResult {
        FitResult {
            panel_count: candidate.count,
            strategy: candidate.strategy,
            label: describe::label(&self.request, candidate.strategy),
            explanation: describe::explanation(
                candidate.strategy,
                &candidate.regions,
                candidate.count,
            ),
            regions: candidate.regions,
        }
    }
}

/// Convenience entry point taking the four raw dimensions.
///
/// Never fails: non-finite input degrades to the invalid-dimensions result
/// like any other rejected geometry.
pub fn compute_panels(
    roof_width: f64,
    roof_height: f64,
    panel_width: f64,
    panel_height: f64,
) -> FitResult {
    let request = FitRequest {
        roof_width,
        roof_height,
        panel_width,
        panel_height,
    };

    match Fitter::new(request) {
        Ok(fitter) => fitter.compute(),
        Err(_) => FitResult {
            panel_count: 0,
            strategy: Strategy::InvalidDimensions,
            label: describe::label(&request, Strategy::InvalidDimensions),
            explanation: describe::explanation(Strategy::InvalidDimensions, &[], 0),
            regions: Vec::new(),
        },
    }
}
