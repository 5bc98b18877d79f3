//! 2D infinite line in implicit form.

use super::Point2;
use crate::error::TriangulationError;
use num_traits::Float;

/// A 2D infinite line in implicit form: `a·x + b·y = c`.
///
/// The coefficients are not normalized. This representation makes
/// perpendiculars and line-line intersections cheap, which is all the
/// circumcircle construction needs.
///
/// # Example
///
/// ```
/// use lawson::primitives::{Line2, Point2};
///
/// // Horizontal line through y = 3
/// let line: Line2<f64> = Line2::through(Point2::new(0.0, 3.0), Point2::new(1.0, 3.0));
/// assert_eq!(line.eval(Point2::new(7.0, 3.0)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// Coefficient of x.
    pub a: F,
    /// Coefficient of y.
    pub b: F,
    /// Constant term.
    pub c: F,
}

impl<F: Float> Line2<F> {
    /// Creates a line directly from implicit coefficients.
    #[inline]
    pub fn new(a: F, b: F, c: F) -> Self {
        Self { a, b, c }
    }

    /// Creates the line passing through two points.
    ///
    /// Uses `a = Δy`, `b = -Δx`, `c = a·p.x + b·p.y`. Coincident points
    /// produce the degenerate all-zero line; callers must not pass a
    /// zero-length segment.
    #[inline]
    pub fn through(p: Point2<F>, q: Point2<F>) -> Self {
        let a = q.y - p.y;
        let b = -(q.x - p.x);
        Self {
            a,
            b,
            c: a * p.x + b * p.y,
        }
    }

    /// Creates the line perpendicular to `self` passing through `p`.
    #[inline]
    pub fn perpendicular_through(&self, p: Point2<F>) -> Self {
        // Rotating the normal (a, b) by 90 degrees gives (-b, a).
        Self {
            a: -self.b,
            b: self.a,
            c: -self.b * p.x + self.a * p.y,
        }
    }

    /// Evaluates the implicit equation at a point.
    ///
    /// Returns `a·x + b·y - c`; zero exactly on the line.
    #[inline]
    pub fn eval(&self, p: Point2<F>) -> F {
        self.a * p.x + self.b * p.y - self.c
    }

    /// Intersects this line with another line.
    ///
    /// Solves the 2×2 linear system by Cramer's rule. Returns
    /// [`TriangulationError::NearParallel`] when the determinant is within
    /// `eps` of zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lawson::primitives::{Line2, Point2};
    ///
    /// let vertical: Line2<f64> = Line2::through(Point2::new(2.0, 0.0), Point2::new(2.0, 5.0));
    /// let horizontal = Line2::through(Point2::new(0.0, 3.0), Point2::new(1.0, 3.0));
    ///
    /// let p = vertical.intersect(&horizontal, 1e-12).unwrap();
    /// assert_eq!(p.x, 2.0);
    /// assert_eq!(p.y, 3.0);
    /// ```
    pub fn intersect(&self, other: &Line2<F>, eps: F) -> Result<Point2<F>, TriangulationError> {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() <= eps {
            return Err(TriangulationError::NearParallel);
        }

        let dx = self.c * other.b - other.c * self.b;
        let dy = self.a * other.c - other.a * self.c;
        Ok(Point2::new(dx / det, dy / det))
    }
}
