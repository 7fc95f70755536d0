use strand_core::geom::{Point, point};
use strand_core::map_range;
use strand_core::walk::MAX_VALUE;

pub const POLYGON_RADIUS: f64 = 10.0;
pub const MIN_SIDES: usize = 3;
pub const MAX_SIDES: usize = 8;

/// Side count for a node value: 3 sides for `'a'` up to 8 for `'z'`.
pub fn polygon_sides(value: u8) -> usize {
    let sides = map_range(
        f64::from(value),
        0.0,
        f64::from(MAX_VALUE),
        MIN_SIDES as f64,
        MAX_SIDES as f64,
    );
    (sides.round() as usize).clamp(MIN_SIDES, MAX_SIDES)
}

/// Vertices of a regular `sides`-gon around `center`, rotated by `rotation` radians.
///
/// Vertex `k` sits at local angle `2πk/sides`; the returned ring is implicitly closed (the last
/// vertex connects back to the first).
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let step = std::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|k| {
            let a = rotation + step * k as f64;
            point(center.x + a.cos() * radius, center.y + a.sin() * radius)
        })
        .collect()
}
