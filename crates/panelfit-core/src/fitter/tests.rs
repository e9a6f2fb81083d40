use super::*;

fn request(roof_width: f64, roof_height: f64, panel_width: f64, panel_height: f64) -> FitRequest {
    FitRequest {
        roof_width,
        roof_height,
        panel_width,
        panel_height,
    }
}

#[test]
fn test_uniform_fit_exact_grid() {
    let result = compute_panels(2.0, 4.0, 1.0, 2.0);

    assert_eq!(result.panel_count, 4);
    // Every strategy reaches 4 here; the first one evaluated must win.
    assert_eq!(result.strategy, Strategy::UniformNormal);
    assert_eq!(result.regions.len(), 1);
    assert_eq!(result.regions[0].cols, 2);
    assert_eq!(result.regions[0].rows, 2);
}

#[test]
fn test_split_beats_both_uniform_layouts() {
    // Uniform normal reaches 6 and uniform rotated 5, but splitting the
    // roof and rotating the leftover strip fits a seventh panel.
    let result = compute_panels(3.0, 5.0, 1.0, 2.0);

    assert_eq!(result.panel_count, 7);
    assert_eq!(result.strategy, Strategy::MixedHorizontal);
    assert!(result.explanation.contains("Top"));
    assert!(result.explanation.contains("= 7"));

    assert_eq!(result.regions.len(), 2);
    let top = result.regions[0];
    let bottom = result.regions[1];
    assert_eq!(top.count(), 6);
    assert!(!top.rotated);
    assert_eq!(bottom.count(), 1);
    assert!(bottom.rotated);
    assert_eq!(bottom.y, 4.0);
}

#[test]
fn test_rotated_uniform_wins_when_normal_cannot_place() {
    let result = compute_panels(2.0, 3.0, 3.0, 2.0);

    assert_eq!(result.panel_count, 1);
    assert_eq!(result.strategy, Strategy::UniformRotated);
    assert!(result.label.contains("Rotated"));
}

#[test]
fn test_panel_larger_than_roof_in_both_orientations() {
    let result = compute_panels(1.0, 10.0, 2.0, 2.0);

    assert_eq!(result.panel_count, 0);
    assert_eq!(result.strategy, Strategy::PanelTooLarge);
    assert!(result.regions.is_empty());
    assert!(result.explanation.contains("either orientation"));
}

#[test]
fn test_single_panel_exact_fit() {
    let result = compute_panels(5.0, 5.0, 5.0, 5.0);

    assert_eq!(result.panel_count, 1);
    assert_eq!(result.strategy, Strategy::UniformNormal);
}

#[test]
fn test_leftover_strip_too_small_for_second_region() {
    // The leftover strip of width/height 1 cannot hold a 3×3 panel in any
    // orientation, so no mixed layout can beat the single uniform panel.
    let result = compute_panels(4.0, 4.0, 3.0, 3.0);

    assert_eq!(result.panel_count, 1);
}

#[test]
fn test_fractional_dimensions() {
    let result = compute_panels(2.5, 2.5, 1.0, 2.0);

    assert_eq!(result.panel_count, 2);
    assert_eq!(result.strategy, Strategy::UniformNormal);
}

#[test]
fn test_large_roof_counts_do_not_overflow() {
    // 200000 columns × 200000 rows exceeds u32; the count must come back
    // exact, not panic or wrap.
    let result = compute_panels(100000.0, 100000.0, 0.5, 0.5);

    assert_eq!(result.panel_count, 40_000_000_000);
    assert_eq!(result.strategy, Strategy::UniformNormal);
    assert_eq!(result.regions[0].cols, 200_000);
    assert_eq!(result.regions[0].rows, 200_000);
}

#[test]
fn test_non_positive_dimensions_always_rejected() {
    // Every combination of zero/negative slots must degrade to the
    // invalid-dimensions result, never panic or report panels.
    for mask in 1u32..16 {
        for bad in [0.0, -2.5] {
            let dims: Vec<f64> = (0..4)
                .map(|slot| if mask & (1 << slot) != 0 { bad } else { 3.0 })
                .collect();

            let result = compute_panels(dims[0], dims[1], dims[2], dims[3]);
            assert_eq!(result.panel_count, 0, "mask {} bad {}", mask, bad);
            assert_eq!(result.strategy, Strategy::InvalidDimensions);
            assert!(result.regions.is_empty());
        }
    }
}

#[test]
fn test_non_finite_dimensions() {
    let nan = request(f64::NAN, 4.0, 1.0, 2.0);
    assert!(Fitter::new(nan).is_err());

    let inf = request(2.0, f64::INFINITY, 1.0, 2.0);
    assert!(Fitter::new(inf).is_err());

    // The raw entry point degrades instead of failing.
    let result = compute_panels(f64::NAN, 4.0, 1.0, 2.0);
    assert_eq!(result.panel_count, 0);
    assert_eq!(result.strategy, Strategy::InvalidDimensions);
}

#[test]
fn test_rotating_the_whole_problem_is_equivalent() {
    let samples = [
        (2.0, 4.0, 1.0, 2.0),
        (3.0, 5.0, 1.0, 2.0),
        (1.0, 10.0, 2.0, 2.0),
        (5.0, 5.0, 5.0, 5.0),
        (4.0, 4.0, 3.0, 3.0),
        (10.0, 7.0, 2.0, 3.0),
        (2.5, 2.5, 1.0, 2.0),
        (9.0, 5.0, 2.0, 5.0),
    ];

    for (w, h, a, b) in samples {
        let original = compute_panels(w, h, a, b);
        let rotated = compute_panels(h, w, b, a);
        assert_eq!(
            original.panel_count, rotated.panel_count,
            "roof {}×{} panel {}×{}",
            w, h, a, b
        );
    }
}

#[test]
fn test_shrinking_panels_never_lose_panels() {
    // Panel sizes ordered from large to small on a fixed roof.
    let sequences: [(f64, f64, &[(f64, f64)]); 2] = [
        (10.0, 10.0, &[(3.0, 3.0), (2.0, 3.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)]),
        (3.0, 5.0, &[(2.0, 2.0), (1.0, 2.0), (1.0, 1.0)]),
    ];

    for (roof_w, roof_h, panels) in sequences {
        let mut previous = 0;
        for (panel_w, panel_h) in panels {
            let count = compute_panels(roof_w, roof_h, *panel_w, *panel_h).panel_count;
            assert!(
                count >= previous,
                "roof {}×{} panel {}×{}: {} < {}",
                roof_w,
                roof_h,
                panel_w,
                panel_h,
                count,
                previous
            );
            previous = count;
        }
    }
}

#[test]
fn test_placements_match_reported_count() {
    let samples = [
        (2.0, 4.0, 1.0, 2.0),
        (3.0, 5.0, 1.0, 2.0),
        (5.0, 5.0, 5.0, 5.0),
        (4.0, 4.0, 3.0, 3.0),
        (1.0, 10.0, 2.0, 2.0),
        (10.0, 7.0, 2.0, 3.0),
    ];

    for (w, h, a, b) in samples {
        let result = compute_panels(w, h, a, b);
        let placed = placements(&result);

        assert_eq!(placed.len(), result.panel_count as usize);

        for p in &placed {
            assert!(p.x >= -1e-9 && p.x + p.width <= w + 1e-9);
            assert!(p.y >= -1e-9 && p.y + p.height <= h + 1e-9);
        }
    }
}

#[test]
fn test_placements_do_not_overlap() {
    let result = compute_panels(3.0, 5.0, 1.0, 2.0);
    let placed = placements(&result);

    for (i, a) in placed.iter().enumerate() {
        for b in placed.iter().skip(i + 1) {
            let separated = a.x + a.width <= b.x + 1e-9
                || b.x + b.width <= a.x + 1e-9
                || a.y + a.height <= b.y + 1e-9
                || b.y + b.height <= a.y + 1e-9;
            assert!(separated, "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_report_serialization_round_trip() {
    let req = request(3.0, 5.0, 1.0, 2.0);
    let fitter = Fitter::new(req).unwrap();
    let report = FitReport {
        request: req,
        result: fitter.compute(),
    };

    let json = serde_json::to_string(&report).unwrap();
    let parsed: FitReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.result.panel_count, 7);
    assert_eq!(parsed.result.strategy, Strategy::MixedHorizontal);
    assert_eq!(parsed.result.regions.len(), 2);
}
