use crate::geom::{Circle, TOLERANCE, Vector};

/// Translation that moves every circle into the non-negative quadrant.
///
/// Each component is `min(0, min(c - r))`, so layouts that are already non-negative on an axis
/// are not shifted on it. Components within `TOLERANCE` of zero count as zero, which keeps the
/// rounding left behind by a previous shift from triggering another one.
pub fn positive_offset<'a>(circles: impl IntoIterator<Item = &'a Circle>) -> Vector {
    let (min_x, min_y) = circles
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(min_x, min_y), c| {
            (min_x.min(c.x - c.r), min_y.min(c.y - c.r))
        });
    let snap = |v: f64| if v > -TOLERANCE { 0.0 } else { v };
    euclid::vec2(snap(min_x), snap(min_y))
}

/// Shifts all circles so the smallest `x - r` and `y - r` become at least zero.
pub fn move_to_positive_coordinates<'a>(circles: impl IntoIterator<Item = &'a mut Circle>) {
    let circles: Vec<&mut Circle> = circles.into_iter().collect();
    let offset = positive_offset(circles.iter().map(|c| &**c));
    if offset == Vector::zero() {
        return;
    }
    for c in circles {
        c.translate(-offset);
    }
}
