use glam::DVec2;

use super::twirl::UnitBox;
use super::{nudge_inside, BilinearQuad, Extent, InverseMap, Lens, PowerSineWarp, Projective, Rescale, SqrtSineWarp, Tile, Twirl};
use crate::common::Error;

const EPSILON: f64 = 1e-9;

fn assert_vec_eq(a: DVec2, b: DVec2, tolerance: f64) {
    assert!(
        (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance,
        "{:?} != {:?}",
        a,
        b
    );
}

// =============================================================================
// Rescale
// =============================================================================

#[test]
fn rescale_with_equal_extents_is_identity() {
    let e = Extent::new(100, 80);
    let map = Rescale::new(e, e);

    for (x, y) in [(0.5, 0.5), (37.5, 12.5), (99.5, 79.5)] {
        assert_eq!(map.map_to_source(x, y), DVec2::new(x, y));
    }
}

#[test]
fn rescale_stretches_source_over_destination() {
    let map = Rescale::new(Extent::new(100, 100), Extent::new(200, 50));

    assert_vec_eq(
        map.map_to_source(100.0, 25.0),
        DVec2::new(50.0, 50.0),
        EPSILON,
    );
}

// =============================================================================
// Reference warps
// =============================================================================

#[test]
fn sqrt_sine_warp_formula() {
    let e = Extent::new(100, 100);
    let map = SqrtSineWarp::new(e, e);

    let uv = map.map_to_source(50.0, 25.0);
    assert!((uv.x - 0.5f64.sqrt() * 100.0).abs() < EPSILON);
    let expected_v = 0.5 * (1.0 + (0.25 * std::f64::consts::PI).sin()) * 100.0;
    assert!((uv.y - expected_v).abs() < EPSILON);
}

#[test]
fn power_sine_warp_formula() {
    let e = Extent::new(100, 100);
    let map = PowerSineWarp::new(e, e);

    let uv = map.map_to_source(50.0, 50.0);
    assert!((uv.x - 0.5f64.powf(0.7) * 100.0).abs() < EPSILON);
    // sin(pi/4)^2 == 0.5
    assert!((uv.y - 50.0).abs() < EPSILON);
}

// =============================================================================
// Twirl / Lens
// =============================================================================

#[test]
fn twirl_strength_zero_has_exact_unit_box() {
    let twirl = Twirl::fit(Extent::new(64, 48), 0.0);

    assert_eq!(
        twirl.unit_box(),
        UnitBox {
            x_min: 0.0,
            y_min: 0.0,
            x_scale: 1.0,
            y_scale: 1.0,
        }
    );
    assert_eq!(twirl.output_extent(), Extent::new(64, 48));
}

#[test]
fn twirl_strength_zero_is_identity() {
    let twirl = Twirl::fit(Extent::new(64, 64), 0.0);

    for (x, y) in [(0.5, 0.5), (10.5, 53.5), (32.0, 32.0), (63.5, 0.5)] {
        assert_vec_eq(twirl.map_to_source(x, y), DVec2::new(x, y), 1e-12);
    }
}

#[test]
fn twirl_inverse_undoes_forward() {
    let strength = 2.0;
    for (u, v) in [(0.1, 0.2), (0.5, 0.9), (0.75, 0.3), (0.5, 0.5)] {
        let p = Twirl::forward_unit(u, v, strength);
        let back = Twirl::inverse_unit(p.x, p.y, strength);
        assert_vec_eq(back, DVec2::new(u, v), EPSILON);
    }
}

#[test]
fn twirl_grows_canvas() {
    let twirl = Twirl::fit(Extent::new(100, 100), 5.0);
    let out = twirl.output_extent();
    assert!(out.width > 100 && out.height > 100);
}

#[test]
fn lens_inverse_undoes_forward() {
    for (u, v) in [(0.1, 0.2), (0.5, 0.9), (0.75, 0.3), (0.95, 0.95)] {
        let p = Lens::forward_unit(u, v);
        let back = Lens::inverse_unit(p.x, p.y);
        assert_vec_eq(back, DVec2::new(u, v), EPSILON);
    }
}

#[test]
fn lens_center_maps_to_center() {
    assert_eq!(Lens::forward_unit(0.5, 0.5), DVec2::new(0.5, 0.5));
    assert_eq!(Lens::inverse_unit(0.5, 0.5), DVec2::new(0.5, 0.5));
}

// =============================================================================
// Tile
// =============================================================================

#[test]
fn tile_repeats_source() {
    let map = Tile::new(Extent::new(100, 100), 2, 2);
    assert_eq!(map.output_extent(), Extent::new(100, 100));

    // The same source pixel from every quadrant.
    let base = map.map_to_source(25.5, 25.5);
    for (x, y) in [(75.5, 25.5), (25.5, 75.5), (75.5, 75.5)] {
        assert_vec_eq(map.map_to_source(x, y), base, EPSILON);
    }

    assert_vec_eq(base, DVec2::new(51.0, 51.0), EPSILON);
}

#[test]
fn tile_single_repeat_is_identity() {
    let map = Tile::new(Extent::new(40, 40), 1, 1);
    assert_vec_eq(
        map.map_to_source(13.5, 27.5),
        DVec2::new(13.5, 27.5),
        EPSILON,
    );
}

// =============================================================================
// Projective
// =============================================================================

#[test]
fn projective_translation_cancels_to_identity() {
    // The canvas fit shifts the bounding-box minimum back to the origin, so
    // a pure translation round-trips to the identity.
    let map = Projective::builder()
        .translate(10.0, 5.0)
        .fit(Extent::new(50, 40))
        .unwrap();

    assert_eq!(map.output_extent(), Extent::new(50, 40));
    assert_vec_eq(map.map_to_source(7.5, 3.5), DVec2::new(7.5, 3.5), EPSILON);
}

#[test]
fn projective_flip_mirrors_in_place() {
    let map = Projective::builder()
        .flip(true, false)
        .fit(Extent::new(50, 40))
        .unwrap();

    assert_eq!(map.output_extent(), Extent::new(50, 40));
    // After the min-corner shift the forward map is (x, y) -> (50 - x, y).
    assert_vec_eq(map.map_to_source(5.0, 3.0), DVec2::new(45.0, 3.0), EPSILON);
}

#[test]
fn projective_scale_halves_coordinates() {
    let map = Projective::builder()
        .scale(2.0, 2.0)
        .fit(Extent::new(50, 40))
        .unwrap();

    assert_eq!(map.output_extent(), Extent::new(100, 80));
    assert_vec_eq(map.map_to_source(30.0, 10.0), DVec2::new(15.0, 5.0), EPSILON);
}

#[test]
fn projective_inverse_roundtrips_with_perspective() {
    let map = Projective::builder()
        .rotate(30.0)
        .shear(0.2, 0.0)
        .perspective(0.001, 0.0005)
        .fit(Extent::new(64, 64))
        .unwrap();

    for (x, y) in [(1.0, 1.0), (20.0, 40.0), (63.0, 10.0)] {
        let uv = map.map_to_source(x, y);
        let roundtrip = map.forward().transform_point(uv);
        assert_vec_eq(roundtrip, DVec2::new(x, y), 1e-6);
    }
}

#[test]
fn projective_singular_matrix_is_rejected() {
    let result = Projective::builder()
        .scale(0.0, 0.0)
        .fit(Extent::new(10, 10));
    assert!(matches!(result, Err(Error::SingularTransform(_))));
}

// =============================================================================
// Bilinear quad
// =============================================================================

#[test]
fn quad_axis_aligned_rectangle_is_identity() {
    let src = Extent::new(50, 40);
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 40.0),
        DVec2::new(50.0, 40.0),
        DVec2::new(50.0, 0.0),
    ];
    let map = BilinearQuad::new(src, corners);

    assert_eq!(map.output_extent(), Extent::new(50, 40));
    assert_vec_eq(map.map_to_source(12.5, 33.5), DVec2::new(12.5, 33.5), 1e-6);
}

#[test]
fn quad_scaled_rectangle_halves_coordinates() {
    let src = Extent::new(50, 40);
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 80.0),
        DVec2::new(100.0, 80.0),
        DVec2::new(100.0, 0.0),
    ];
    let map = BilinearQuad::new(src, corners);

    assert_eq!(map.output_extent(), Extent::new(100, 80));
    assert_vec_eq(map.map_to_source(20.0, 10.0), DVec2::new(10.0, 5.0), 1e-6);
}

#[test]
fn quad_inverse_undoes_forward_on_skewed_corners() {
    let src = Extent::new(100, 100);
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 100.0),
        DVec2::new(150.0, 110.0),
        DVec2::new(100.0, 0.0),
    ];
    let map = BilinearQuad::new(src, corners);

    for (s, t) in [(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (1.0, 1.0), (0.9, 0.1)] {
        let p = map.forward_unit(s, t);
        let uv = map.map_to_source(p.x, p.y);
        assert_vec_eq(uv, DVec2::new(s * 100.0, t * 100.0), 1e-6);
    }
}

#[test]
fn quad_point_off_surface_has_no_preimage() {
    let src = Extent::new(10, 10);
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 10.0),
        DVec2::new(12.0, 12.0),
        DVec2::new(10.0, 2.0),
    ];
    let map = BilinearQuad::new(src, corners);

    // Far outside the quad: the solver either finds no real root or lands
    // outside the source raster; either way the coordinate must not pass a
    // bounds check.
    let uv = map.map_to_source(-500.0, -500.0);
    let inside = uv.x >= 0.0 && uv.x < 10.0 && uv.y >= 0.0 && uv.y < 10.0;
    assert!(!inside);
}

// =============================================================================
// Edge nudge
// =============================================================================

#[test]
fn nudge_pulls_upper_bound_inward() {
    let src = Extent::new(100, 50);

    let uv = nudge_inside(DVec2::new(100.0, 50.0), src);
    assert!(uv.x < 100.0 && uv.x > 99.99);
    assert!(uv.y < 50.0 && uv.y > 49.99);

    // Interior coordinates pass through untouched.
    let uv = nudge_inside(DVec2::new(42.5, 17.5), src);
    assert_eq!(uv, DVec2::new(42.5, 17.5));
}
