//! Great-circle geometry used by the continuity negotiation.

use geo::{Distance, Haversine, Point};

/// Great-circle distance in metres between two `(lon, lat)` points.
pub fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}

/// Great-circle distance rounded to centimetres, the precision at which
/// segment lengths are stored.
pub fn segment_length(a: Point<f64>, b: Point<f64>) -> f64 {
    (distance(a, b) * 100.0).round() / 100.0
}

/// Angle in degrees at `pivot` between `pivot -> neighbor` and `pivot -> anchor`.
///
/// Uses the law of cosines over great-circle side lengths:
/// `cos θ = (a² + b² - c²) / 2ab` with `a = |neighbor, pivot|`,
/// `b = |pivot, anchor|` and `c = |neighbor, anchor|`. The cosine is clamped
/// to `[-1, 1]` so rounding noise never leaves the domain of `acos`.
///
/// Returns `None` when one of the sides adjacent to the pivot has zero length,
/// since the angle is undefined there.
pub fn turn_angle(neighbor: Point<f64>, pivot: Point<f64>, anchor: Point<f64>) -> Option<f64> {
    let a = distance(neighbor, pivot);
    let b = distance(pivot, anchor);
    let c = distance(neighbor, anchor);

    if a <= 0.0 || b <= 0.0 {
        return None;
    }

    let cos_law = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    let angle = cos_law.acos().to_degrees();

    angle.is_finite().then_some(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-47.89, -22.01);
        let b = Point::new(-47.88, -22.02);
        assert!(approx_eq(distance(a, b), distance(b, a), 1e-9));
        assert!(distance(a, b) > 0.0);
    }

    #[test]
    fn one_degree_along_equator() {
        let d = distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!(approx_eq(d, 111_195.0, 5.0), "got {d}");
    }

    #[test]
    fn segment_length_rounds_to_centimetres() {
        let d = segment_length(Point::new(0.0, 0.0), Point::new(0.001, 0.0));
        assert!(approx_eq(d * 100.0, (d * 100.0).round(), 1e-6));
    }

    #[test]
    fn colinear_points_make_straight_angle() {
        let angle = turn_angle(
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        )
        .unwrap();
        assert!(approx_eq(angle, 180.0, 1e-4), "got {angle}");
    }

    #[test]
    fn right_angle_near_equator() {
        let angle = turn_angle(
            Point::new(0.001, 0.001),
            Point::new(0.001, 0.0),
            Point::new(0.0, 0.0),
        )
        .unwrap();
        assert!(approx_eq(angle, 90.0, 0.01), "got {angle}");
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point::new(10.0, 10.0);
        assert!(turn_angle(p, p, Point::new(11.0, 10.0)).is_none());
        assert!(turn_angle(Point::new(11.0, 10.0), p, p).is_none());
    }

    #[test]
    fn neighbor_on_anchor_folds_back() {
        let angle = turn_angle(
            Point::new(0.0, 0.0),
            Point::new(0.001, 0.0),
            Point::new(0.0, 0.0),
        )
        .unwrap();
        assert!(approx_eq(angle, 0.0, 1e-3), "got {angle}");
    }
}
