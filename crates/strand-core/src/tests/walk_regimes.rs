use crate::geom::point;
use crate::walk::*;
use crate::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "expected {b}, got {a}");
}

#[test]
fn regime_boundary_sits_between_m_and_n() {
    assert_eq!(Regime::of(0), Regime::Coiled);
    assert_eq!(Regime::of(12), Regime::Coiled);
    assert_eq!(Regime::of(13), Regime::Zigzag);
    assert_eq!(Regime::of(25), Regime::Zigzag);
}

#[test]
fn m_uses_the_coiled_formula() {
    let walk = Walk::start(point(0.0, 0.0));
    assert_eq!(walk.turn(12), (1.5, 1.0));
    assert_eq!(walk.turn(0), (0.5, 1.0));
}

#[test]
fn n_uses_the_zigzag_formula_and_flips_the_sign() {
    let walk = Walk::start(point(0.0, 0.0));
    assert_eq!(walk.turn(13), (0.4, -1.0));
    let (z, next) = walk.turn(25);
    assert_close(z, std::f64::consts::PI * 2.0 / 3.0);
    assert_eq!(next, -1.0);
}

#[test]
fn coiled_letters_do_not_flip_the_zigzag_sign() {
    // n (+0.4), a (+0.5, no flip), n (-0.4)
    let chain = generate("nan", 800, 600).unwrap();
    let angles: Vec<f64> = chain.iter().map(|n| n.angle).collect();
    assert_close(angles[0], 0.0);
    assert_close(angles[1], 0.4);
    assert_close(angles[2], 0.9);
    assert_close(angles[3], 0.5);
}

#[test]
fn zigzag_sign_alternates_strictly() {
    let chain = generate("nnnn", 800, 600).unwrap();
    let angles: Vec<f64> = chain.iter().map(|n| n.angle).collect();
    assert_close(angles[1], 0.4);
    assert_close(angles[2], 0.0);
    assert_close(angles[3], 0.4);
    assert_close(angles[4], 0.0);
}

#[test]
fn heading_accumulates_across_the_sequence() {
    let chain = generate("aaaa", 800, 600).unwrap();
    for (i, node) in chain.iter().enumerate() {
        assert_close(node.angle, 0.5 * i as f64);
    }
}

#[test]
fn step_length_spans_twenty_to_eighty() {
    assert_close(step_length(0), 20.0);
    assert_close(step_length(25), 80.0);
    assert!((step_length(13) - 51.2).abs() < 1e-9);
}

#[test]
fn step_moves_along_the_new_heading() {
    let walk = Walk::start(point(10.0, 10.0)).step(25);
    let heading = std::f64::consts::PI * 2.0 / 3.0;
    assert_close(walk.angle, heading);
    assert_close(walk.position.x, 10.0 + heading.cos() * 80.0);
    assert_close(walk.position.y, 10.0 + heading.sin() * 80.0);
    assert_eq!(walk.zigzag_sign, -1.0);
}

#[test]
fn map_range_is_linear() {
    assert_eq!(map_range(0.0, 0.0, 25.0, 3.0, 8.0), 3.0);
    assert_eq!(map_range(25.0, 0.0, 25.0, 3.0, 8.0), 8.0);
    assert_eq!(map_range(6.0, 0.0, 12.0, 0.5, 1.5), 1.0);
}
