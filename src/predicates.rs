//! Epsilon-aware geometric predicates.
//!
//! All functions take explicit tolerance parameters. No hidden epsilons
//! are used.

use crate::primitives::Point2;
use num_traits::Float;

/// Computes twice the signed area of triangle `abc`.
///
/// Positive when the vertices wind counter-clockwise, negative when
/// clockwise, zero when collinear.
#[inline]
pub fn signed_area_doubled<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Computes the (unsigned) area of triangle `abc`.
#[inline]
pub fn triangle_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let two = F::one() + F::one();
    signed_area_doubled(a, b, c).abs() / two
}

/// Tests whether point `p` lies inside triangle `abc` (boundary included).
///
/// Solves `p = a + w1·(b - a) + w2·(c - a)` for the barycentric weights
/// and checks `w1 ≥ 0`, `w2 ≥ 0`, `w1 + w2 ≤ 1`. Since the boundary counts
/// as contained, a point exactly on a shared edge is claimed by whichever
/// triangle is tested first — insertion scans triangles in storage order,
/// making that tie-break deterministic.
///
/// When the triangle is degenerate (`|denominator| <= eps`) the point is
/// reported as not contained rather than letting NaN leak into the
/// caller's decision.
///
/// # Example
///
/// ```
/// use lawson::predicates::point_in_triangle;
/// use lawson::primitives::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(4.0, 0.0);
/// let c = Point2::new(0.0, 4.0);
///
/// assert!(point_in_triangle(Point2::new(1.0, 1.0), a, b, c, 1e-12));
/// assert!(point_in_triangle(Point2::new(2.0, 0.0), a, b, c, 1e-12)); // on edge
/// assert!(!point_in_triangle(Point2::new(5.0, 5.0), a, b, c, 1e-12));
/// ```
pub fn point_in_triangle<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> bool {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let den = ab.cross(ac);
    if den.abs() <= eps {
        return false;
    }

    let w1 = ap.cross(ac) / den;
    let w2 = ab.cross(ap) / den;

    w1 >= F::zero() && w2 >= F::zero() && (w1 + w2) <= F::one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-12;

    fn unit_right_triangle() -> (Point2<f64>, Point2<f64>, Point2<f64>) {
        (
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
    }

    #[test]
    fn test_point_inside() {
        let (a, b, c) = unit_right_triangle();
        assert!(point_in_triangle(Point2::new(1.0, 1.0), a, b, c, EPS));
    }

    #[test]
    fn test_point_outside() {
        let (a, b, c) = unit_right_triangle();
        assert!(!point_in_triangle(Point2::new(5.0, 5.0), a, b, c, EPS));
        assert!(!point_in_triangle(Point2::new(-1.0, 1.0), a, b, c, EPS));
        assert!(!point_in_triangle(Point2::new(3.0, 3.0), a, b, c, EPS));
    }

    #[test]
    fn test_vertices_and_edges_count_as_inside() {
        let (a, b, c) = unit_right_triangle();
        assert!(point_in_triangle(a, a, b, c, EPS));
        assert!(point_in_triangle(b, a, b, c, EPS));
        assert!(point_in_triangle(c, a, b, c, EPS));
        assert!(point_in_triangle(Point2::new(2.0, 0.0), a, b, c, EPS)); // edge ab
        assert!(point_in_triangle(Point2::new(2.0, 2.0), a, b, c, EPS)); // edge bc
    }

    #[test]
    fn test_degenerate_triangle_is_never_containing() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        // The query point even lies on the degenerate "triangle".
        assert!(!point_in_triangle(Point2::new(1.5, 1.5), a, b, c, EPS));
    }

    #[test]
    fn test_winding_independent() {
        let (a, b, c) = unit_right_triangle();
        let p = Point2::new(1.0, 1.0);
        assert!(point_in_triangle(p, a, b, c, EPS));
        assert!(point_in_triangle(p, a, c, b, EPS)); // clockwise winding
    }

    #[test]
    fn test_signed_area() {
        let (a, b, c) = unit_right_triangle();
        assert_relative_eq!(signed_area_doubled(a, b, c), 16.0);
        assert_relative_eq!(signed_area_doubled(a, c, b), -16.0);
        assert_relative_eq!(triangle_area(a, b, c), 8.0);
        assert_relative_eq!(triangle_area(a, c, b), 8.0);
    }
}
