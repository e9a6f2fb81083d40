use crate::types::{FitRequest, Region, Strategy};

/// Outcome of evaluating one candidate layout.
pub(super) struct Candidate {
    pub strategy: Strategy,
    pub count: u64,
    pub regions: Vec<Region>,
}

/// A panel orientation with its placed dimensions.
#[derive(Clone, Copy)]
struct Orient {
    width: f64,
    height: f64,
    rotated: bool,
}

impl Orient {
    fn normal(request: &FitRequest) -> Self {
        Self {
            width: request.panel_width,
            height: request.panel_height,
            rotated: false,
        }
    }

    fn rotated(request: &FitRequest) -> Self {
        Self {
            width: request.panel_height,
            height: request.panel_width,
            rotated: true,
        }
    }
}

/// Whole panels that fit along one axis. The cast saturates for
/// degenerate ratios.
fn fit_count(available: f64, panel: f64) -> u64 {
    (available / panel).floor() as u64
}

fn total(regions: &[Region]) -> u64 {
    regions
        .iter()
        .map(Region::count)
        .fold(0, |acc, count| acc.saturating_add(count))
}

/// Tiles the whole roof with a single orientation.
pub(super) fn uniform(request: &FitRequest, rotated: bool) -> Candidate {
    let orient = if rotated {
        Orient::rotated(request)
    } else {
        Orient::normal(request)
    };

    let region = Region {
        x: 0.0,
        y: 0.0,
        cols: fit_count(request.roof_width, orient.width),
        rows: fit_count(request.roof_height, orient.height),
        panel_width: orient.width,
        panel_height: orient.height,
        rotated: orient.rotated,
    };

    Candidate {
        strategy: if rotated {
            Strategy::UniformRotated
        } else {
            Strategy::UniformNormal
        },
        count: region.count(),
        regions: vec![region],
    }
}

/// Splits the roof by height: a top strip in one orientation takes every
/// whole row, the leftover height is tiled with the other orientation.
/// Both orderings are tried and the better kept.
pub(super) fn mixed_horizontal(request: &FitRequest) -> Candidate {
    let normal = Orient::normal(request);
    let rotated = Orient::rotated(request);

    let a = stacked(request, normal, rotated);
    let b = stacked(request, rotated, normal);
    let regions = if total(&b) > total(&a) { b } else { a };

    Candidate {
        strategy: Strategy::MixedHorizontal,
        count: total(&regions),
        regions,
    }
}

/// Same as [`mixed_horizontal`] but splitting by width into left/right strips.
pub(super) fn mixed_vertical(request: &FitRequest) -> Candidate {
    let normal = Orient::normal(request);
    let rotated = Orient::rotated(request);

    let a = side_by_side(request, normal, rotated);
    let b = side_by_side(request, rotated, normal);
    let regions = if total(&b) > total(&a) { b } else { a };

    Candidate {
        strategy: Strategy::MixedVertical,
        count: total(&regions),
        regions,
    }
}

fn stacked(request: &FitRequest, top: Orient, bottom: Orient) -> Vec<Region> {
    let top_rows = fit_count(request.roof_height, top.height);
    let top_cols = fit_count(request.roof_width, top.width);

    // The top strip consumes every whole row, even when it holds no panels
    // because no column fits. The split is never applied recursively.
    let used_height = top_rows as f64 * top.height;
    let remaining = request.roof_height - used_height;

    vec![
        Region {
            x: 0.0,
            y: 0.0,
            cols: top_cols,
            rows: top_rows,
            panel_width: top.width,
            panel_height: top.height,
            rotated: top.rotated,
        },
        Region {
            x: 0.0,
            y: used_height,
            cols: fit_count(request.roof_width, bottom.width),
            rows: fit_count(remaining, bottom.height),
            panel_width: bottom.width,
            panel_height: bottom.height,
            rotated: bottom.rotated,
        },
    ]
}

fn side_by_side(request: &FitRequest, left: Orient, right: Orient) -> Vec<Region> {
    let left_cols = fit_count(request.roof_width, left.width);
    let left_rows = fit_count(request.roof_height, left.height);

    let used_width = left_cols as f64 * left.width;
    let remaining = request.roof_width - used_width;

    vec![
        Region {
            x: 0.0,
            y: 0.0,
            cols: left_cols,
            rows: left_rows,
            panel_width: left.width,
            panel_height: left.height,
            rotated: left.rotated,
        },
        Region {
            x: used_width,
            y: 0.0,
            cols: fit_count(remaining, right.width),
            rows: fit_count(request.roof_height, right.height),
            panel_width: right.width,
            panel_height: right.height,
            rotated: right.rotated,
        },
    ]
}
