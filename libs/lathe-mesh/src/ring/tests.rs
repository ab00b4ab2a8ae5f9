//! Tests for the ring generator.

use super::*;
use approx::assert_relative_eq;

#[test]
fn symmetric_table_matches_direct_trig() {
    for n in 3..=96 {
        let symmetric = unit_circle_symmetric(n);
        let direct = unit_circle_direct(n, 0.0, 1.0);
        assert_eq!(symmetric.len(), n + 1);
        for (j, (s, d)) in symmetric.iter().zip(&direct).enumerate() {
            assert!(
                (*s - *d).length() < 1e-12,
                "n = {n}, j = {j}: {s:?} vs {d:?}"
            );
        }
    }
}

#[test]
fn symmetric_table_has_exact_axis_points() {
    let table = unit_circle_symmetric(16);
    assert_eq!(table[0], Vec2::X);
    assert_eq!(table[2], Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
    assert_eq!(table[4], Vec2::Y);
    assert_eq!(table[8], Vec2::new(-1.0, 0.0));
    assert_eq!(table[12], Vec2::new(0.0, -1.0));
    assert_eq!(table[16], table[0]);

    let table = unit_circle_symmetric(6);
    assert_eq!(table[3], Vec2::new(-1.0, 0.0));
}

#[test]
fn symmetric_table_mirrors_exactly() {
    let table = unit_circle_symmetric(24);
    for j in 1..12 {
        assert_eq!(table[24 - j].x, table[j].x);
        assert_eq!(table[24 - j].y, -table[j].y);
    }
    for j in 0..=6 {
        assert_eq!(table[12 - j].x, -table[j].x);
    }
}

#[test]
fn full_ring_repeats_first_corner_with_full_u() {
    let span = TextureSpan {
        u0: 0.25,
        u1: 0.75,
        v: 0.5,
    };
    let ring = generate_ring(&RingParams::new(8, 1.0, 2.0).with_span(span)).unwrap();
    assert!(ring.full_turn);
    assert_eq!(ring.divisions(), 8);
    let first = ring.corners[0];
    let last = ring.corners[8];
    assert_eq!(first.position, last.position);
    assert_eq!(first.normal, last.normal);
    assert_eq!(first.texcoord, Vec2::new(0.25, 0.5));
    assert_eq!(last.texcoord, Vec2::new(0.75, 0.5));
    assert_relative_eq!(ring.corners[4].texcoord.x, 0.5);
    assert!(ring.positions().all(|p| p.z == 2.0));
}

#[test]
fn rotated_full_ring_starts_at_start_azimuth() {
    let ring = generate_ring(&RingParams::new(8, 2.0, 0.0).with_azimuth(0.25, 1.25)).unwrap();
    assert!(ring.full_turn);
    let p = ring.corners[0].position;
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    assert_eq!(ring.corners[8].position, p);
}

#[test]
fn partial_ring_evaluates_every_corner() {
    let ring = generate_ring(&RingParams::new(4, 1.0, 0.0).with_azimuth(0.0, 0.5)).unwrap();
    assert!(!ring.full_turn);
    let last = ring.corners[4].position;
    assert_relative_eq!(last.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(last.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(ring.corners[2].position.y, 1.0, epsilon = 1e-12);
}

#[test]
fn prototype_normal_rotates_with_azimuth() {
    let proto = Vec3::new(0.6, 0.0, 0.8);
    let ring = generate_ring(&RingParams::new(4, 1.0, 0.0).with_normal(proto)).unwrap();
    assert_eq!(ring.corners[0].normal, proto);
    let quarter = ring.corners[1].normal;
    assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-15);
    assert_relative_eq!(quarter.y, 0.6, epsilon = 1e-15);
    assert_eq!(quarter.z, 0.8);
}

#[test]
fn rejects_invalid_parameters() {
    assert!(generate_ring(&RingParams::new(2, 1.0, 0.0)).is_err());
    assert!(generate_ring(&RingParams::new(8, 0.0, 0.0)).is_err());
    assert!(generate_ring(&RingParams::new(8, f64::NAN, 0.0)).is_err());
    assert!(generate_ring(&RingParams::new(8, 1.0, 0.0).with_azimuth(0.5, 0.5)).is_err());
    assert!(generate_ring(&RingParams::new(8, 1.0, 0.0).with_azimuth(0.0, 2.0)).is_err());
}
