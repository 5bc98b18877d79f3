//! 2D circle type.

use super::{Line2, Point2};
use crate::error::TriangulationError;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use lawson::primitives::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point2::new(0.5, 0.0)));
/// assert!(!circle.contains(Point2::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Constructs the circumcircle of a triangle.
    ///
    /// The center is the intersection of the perpendicular bisectors of
    /// edges `ab` and `bc`; the radius is the distance from the center to
    /// `a`. Returns [`TriangulationError::DegenerateTriangle`] when the
    /// three points are collinear within `eps` (the bisectors are
    /// parallel).
    ///
    /// # Example
    ///
    /// ```
    /// use lawson::primitives::{Circle2, Point2};
    ///
    /// // Right triangle: the circumcenter sits on the hypotenuse midpoint.
    /// let c: Circle2<f64> = Circle2::circumscribing(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.0, 1.0),
    ///     1e-12,
    /// )
    /// .unwrap();
    /// assert_eq!(c.center, Point2::new(0.5, 0.5));
    /// ```
    pub fn circumscribing(
        a: Point2<F>,
        b: Point2<F>,
        c: Point2<F>,
        eps: F,
    ) -> Result<Self, TriangulationError> {
        let ab = Line2::through(a, b);
        let bc = Line2::through(b, c);

        let bisector_ab = ab.perpendicular_through(a.midpoint(b));
        let bisector_bc = bc.perpendicular_through(b.midpoint(c));

        let center = bisector_ab
            .intersect(&bisector_bc, eps)
            .map_err(|_| TriangulationError::DegenerateTriangle)?;

        Ok(Self {
            center,
            radius: center.distance(a),
        })
    }

    /// Checks if a point is inside the circle (closed disk, boundary
    /// included).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Checks if a point is strictly inside the circle (boundary
    /// excluded).
    #[inline]
    pub fn contains_strict(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }

    /// Returns the signed distance from a point to the circle boundary.
    ///
    /// Negative inside, positive outside. Legalization tests the opposite
    /// vertex with `signed_distance(p) < -eps` so that points on or near
    /// the boundary count as outside, which keeps near-cocircular
    /// configurations from flipping back and forth.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_new() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        assert_eq!(c.center.x, 1.0);
        assert_eq!(c.center.y, 2.0);
        assert_eq!(c.radius, 3.0);
    }

    #[test]
    fn test_contains() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert!(c.contains(Point2::new(0.0, 0.0))); // Center
        assert!(c.contains(Point2::new(1.0, 0.0))); // On boundary
        assert!(c.contains(Point2::new(0.5, 0.5))); // Inside
        assert!(!c.contains(Point2::new(1.0, 1.0))); // Outside
    }

    #[test]
    fn test_contains_strict() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert!(c.contains_strict(Point2::new(0.0, 0.0)));
        assert!(!c.contains_strict(Point2::new(1.0, 0.0))); // On boundary
    }

    #[test]
    fn test_signed_distance() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert_relative_eq!(c.signed_distance(Point2::new(0.0, 0.0)), -1.0);
        assert_relative_eq!(
            c.signed_distance(Point2::new(1.0, 0.0)),
            0.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(c.signed_distance(Point2::new(2.0, 0.0)), 1.0);
    }

    #[test]
    fn test_circumscribing_right_triangle() {
        let c: Circle2<f64> = Circle2::circumscribing(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
            EPS,
        )
        .unwrap();

        assert_relative_eq!(c.center.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(c.center.y, 1.0, epsilon = 1e-10);
        assert_relative_eq!(c.radius, 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_circumscribing_passes_through_all_vertices() {
        let a = Point2::new(3.0_f64, 1.0);
        let b = Point2::new(7.0, 2.0);
        let c = Point2::new(5.0, 6.0);
        let circle = Circle2::circumscribing(a, b, c, EPS).unwrap();

        assert_relative_eq!(circle.center.distance(a), circle.radius, epsilon = 1e-9);
        assert_relative_eq!(circle.center.distance(b), circle.radius, epsilon = 1e-9);
        assert_relative_eq!(circle.center.distance(c), circle.radius, epsilon = 1e-9);
    }

    #[test]
    fn test_circumscribing_collinear() {
        let result: Result<Circle2<f64>, _> = Circle2::circumscribing(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            EPS,
        );
        assert_eq!(result, Err(TriangulationError::DegenerateTriangle));
    }

    #[test]
    fn test_f32_support() {
        let c: Circle2<f32> = Circle2::circumscribing(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
            1e-6,
        )
        .unwrap();
        assert!(c.contains(Point2::new(1.0, 1.0)));
    }
}
