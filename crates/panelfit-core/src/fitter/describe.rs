use crate::types::{FitRequest, Region, Strategy};

/// Short label naming the winning strategy, with the placed orientation
/// dimensions for uniform layouts.
pub(super) fn label(request: &FitRequest, strategy: Strategy) -> String {
    match strategy {
        Strategy::InvalidDimensions => "Invalid dimensions".to_string(),
        Strategy::PanelTooLarge => "Panel too large".to_string(),
        Strategy::UniformNormal => format!(
            "Normal orientation ({}×{})",
            request.panel_width, request.panel_height
        ),
        Strategy::UniformRotated => format!(
            "Rotated orientation ({}×{})",
            request.panel_height, request.panel_width
        ),
        Strategy::MixedHorizontal => "Mixed layout (horizontal split)".to_string(),
        Strategy::MixedVertical => "Mixed layout (vertical split)".to_string(),
    }
}

/// Human-readable breakdown of how the count was reached.
pub(super) fn explanation(strategy: Strategy, regions: &[Region], count: u64) -> String {
    match strategy {
        Strategy::InvalidDimensions => {
            "All dimensions must be greater than zero".to_string()
        }
        Strategy::PanelTooLarge => {
            "The panel does not fit on the roof in either orientation".to_string()
        }
        Strategy::UniformNormal | Strategy::UniformRotated => match regions.first() {
            Some(region) => format!(
                "{} panels across × {} down = {}",
                region.cols, region.rows, count
            ),
            None => String::new(),
        },
        Strategy::MixedHorizontal => match regions {
            [top, bottom] => format!(
                "Top: {}×{} ({}×{}), Bottom: {}×{} ({}×{}) = {}",
                top.rows,
                top.cols,
                top.panel_width,
                top.panel_height,
                bottom.rows,
                bottom.cols,
                bottom.panel_width,
                bottom.panel_height,
                count
            ),
            _ => String::new(),
        },
        Strategy::MixedVertical => match regions {
            [left, right] => format!(
                "Left: {}×{} ({}×{}), Right: {}×{} ({}×{}) = {}",
                left.cols,
                left.rows,
                left.panel_width,
                left.panel_height,
                right.cols,
                right.rows,
                right.panel_width,
                right.panel_height,
                count
            ),
            _ => String::new(),
        },
    }
}
