#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- perspective_scale ---

#[test]
fn scale_is_one_at_zero_depth() {
    assert_eq!(perspective_scale(0.0), 1.0);
}

#[test]
fn scale_is_half_at_max_depth() {
    assert!(approx_eq(perspective_scale(1000.0), 0.5));
}

#[test]
fn scale_decreases_with_depth() {
    let depths = [0.5, 1.0, 10.0, 250.0, 500.0, 999.0, 1000.0];
    for pair in depths.windows(2) {
        assert!(perspective_scale(pair[0]) > perspective_scale(pair[1]), "{pair:?}");
    }
}

#[test]
fn scale_stays_in_unit_interval() {
    for z in [0.001, 1.0, 333.3, 1000.0] {
        let s = perspective_scale(z);
        assert!(s > 0.0 && s <= 1.0, "z={z} scale={s}");
    }
}

// --- project_point ---

#[test]
fn center_maps_to_itself_at_any_scale() {
    let center = Point::new(400.0, 300.0);
    for scale in [1.0, 0.75, 0.5] {
        assert_eq!(project_point(center, scale, 800.0, 600.0), center);
    }
}

#[test]
fn unit_scale_is_identity() {
    let p = Point::new(12.5, 580.0);
    assert_eq!(project_point(p, 1.0, 800.0, 600.0), p);
}

#[test]
fn half_scale_pulls_corner_halfway_to_center() {
    let p = project_point(Point::new(0.0, 0.0), 0.5, 800.0, 600.0);
    assert!(approx_eq(p.x, 200.0));
    assert!(approx_eq(p.y, 150.0));
}

#[test]
fn point_outside_surface_is_pulled_inward() {
    let p = project_point(Point::new(900.0, -50.0), 0.5, 800.0, 600.0);
    assert!(approx_eq(p.x, 650.0));
    assert!(approx_eq(p.y, 125.0));
}
