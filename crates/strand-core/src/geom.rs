#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Box2D = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Axis-aligned bounds of `points`, or `None` when the iterator is empty.
///
/// Unlike `Box2D::from_points`, a single point (or collinear points) yields a zero-area box
/// instead of an "empty" one, which is what recentring needs.
pub fn bounds_of(points: impl IntoIterator<Item = Point>) -> Option<Box2D> {
    let mut it = points.into_iter();
    let p0 = it.next()?;
    let mut b = Box2D::new(p0, p0);
    for p in it {
        b.min.x = b.min.x.min(p.x);
        b.min.y = b.min.y.min(p.y);
        b.max.x = b.max.x.max(p.x);
        b.max.y = b.max.y.max(p.y);
    }
    Some(b)
}
