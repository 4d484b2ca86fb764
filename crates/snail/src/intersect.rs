use crate::geom::{Circle, Point, point};

/// Outcome of intersecting two circle outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// Separate circles, or one strictly inside the other.
    None,
    /// The outlines touch in a single point.
    Tangent(Point),
    /// Two crossing points, `+h` offset first.
    Crossing(Point, Point),
    /// Same center and same radius: every point is shared.
    Coincident,
}

impl Intersection {
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (first, second) = match *self {
            Self::Tangent(p) => (Some(p), None),
            Self::Crossing(p, q) => (Some(p), Some(q)),
            Self::None | Self::Coincident => (None, None),
        };
        first.into_iter().chain(second)
    }
}

/// Intersects the outlines of `a` and `b`.
///
/// `tolerance` absorbs floating point noise: circles that miss each other by less than it are
/// treated as touching, and a half chord shorter than it collapses to a single tangent point. For
/// radii below 1 the half chord threshold shrinks with the larger radius, so small circles that
/// genuinely cross still yield two points.
pub fn intersect(a: &Circle, b: &Circle, tolerance: f64) -> Intersection {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d = dx.hypot(dy);

    if d > a.r + b.r + tolerance {
        return Intersection::None;
    }
    if d < (a.r - b.r).abs() - tolerance {
        return Intersection::None;
    }
    if d == 0.0 {
        // Radii agree within tolerance here, otherwise the containment test above fired.
        return Intersection::Coincident;
    }

    // Distance from `a` to the chord midpoint along the a -> b axis.
    let along = (a.r * a.r - b.r * b.r + d * d) / (2.0 * d);
    let mid_x = a.x + dx * along / d;
    let mid_y = a.y + dy * along / d;

    let h_sq = a.r * a.r - along * along;
    let h = if h_sq > 0.0 { h_sq.sqrt() } else { 0.0 };
    if h < tolerance * a.r.max(b.r).min(1.0) {
        return Intersection::Tangent(point(mid_x, mid_y));
    }

    let rx = -dy * (h / d);
    let ry = dx * (h / d);
    Intersection::Crossing(
        point(mid_x + rx, mid_y + ry),
        point(mid_x - rx, mid_y - ry),
    )
}
