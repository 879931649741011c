//! Unit tests for the geometry model's normalization.

use derivative_editor::geometry::{normalize, Geometry};
use derivative_editor::types::{Area, Canvas, Ratio};

const CANVAS: Canvas = Canvas {
    width: 800.0,
    height: 600.0,
};

fn sample_areas() -> Vec<Area> {
    let mut areas = Vec::new();
    for left in [-120.0, 0.0, 37.5, 400.0, 790.0, 1200.0] {
        for top in [-50.0, 0.0, 12.0, 300.0, 599.0, 900.0] {
            for (width, height) in [(-10.0, 5.0), (0.0, 0.0), (120.0, 80.0), (640.0, 480.0), (1000.0, 900.0)] {
                areas.push(Area::new(left, top, width, height));
            }
        }
    }
    areas
}

#[test]
fn test_every_write_satisfies_canvas_bounds() {
    let ratios = [
        Ratio::Free,
        Ratio::Fixed {
            width: 4.0,
            height: 3.0,
        },
        Ratio::Fixed {
            width: 1.0,
            height: 5.0,
        },
    ];
    for ratio in ratios {
        for area in sample_areas() {
            let canonical = normalize(area, CANVAS, ratio);
            assert!(
                canonical.fits_in(CANVAS),
                "{area:?} under {ratio:?} normalized to {canonical:?}"
            );
        }
    }
}

#[test]
fn test_in_bounds_areas_are_fixed_points() {
    for area in sample_areas() {
        if area.fits_in(CANVAS) {
            assert_eq!(normalize(area, CANVAS, Ratio::Free), area);
        }
    }
}

#[test]
fn test_fixed_ratio_height_follows_width() {
    let (w, h) = (16.0, 9.0);
    let ratio = Ratio::Fixed {
        width: w,
        height: h,
    };
    for area in sample_areas() {
        let canonical = normalize(area, CANVAS, ratio);
        assert_eq!(canonical.height, (canonical.width * h / w).round());
    }
}

#[test]
fn test_out_of_bounds_positions_clamp_against_size() {
    let area = normalize(Area::new(-40.0, 700.0, 100.0, 100.0), CANVAS, Ratio::Free);
    assert_eq!(area, Area::new(0.0, 500.0, 100.0, 100.0));
}

#[test]
fn test_degenerate_fixed_ratio_is_treated_as_free() {
    let ratio = Ratio::Fixed {
        width: 0.0,
        height: 3.0,
    };
    let area = normalize(Area::new(0.0, 0.0, 100.0, 40.0), CANVAS, ratio);
    assert_eq!(area, Area::new(0.0, 0.0, 100.0, 40.0));
}

#[test]
fn test_set_before_attach_is_ignored() {
    let mut geometry = Geometry::new();
    assert_eq!(geometry.set(Area::new(0.0, 0.0, 1.0, 1.0), Ratio::Free), None);
    assert!(geometry.get().is_err());
}
