//! Serpentine grid ordering for insertion locality.
//!
//! Incremental insertion locates each pending point by scanning triangles,
//! so consecutive insertions that land near each other tend to hit
//! recently split triangles sooner. Sorting the input points along a
//! serpentine (boustrophedon) grid walk — left-to-right on even rows,
//! right-to-left on odd rows — keeps consecutive points spatially close.
//! The ordering is purely a locality optimization; triangulation results
//! stay correct for any insertion order.

use crate::primitives::Point2;
use num_traits::Float;

/// Computes the serpentine bucket index of a point on a fixed grid.
///
/// The grid covers `[0, extent)` per axis with square cells of size
/// `cell`. A cell's index is its column plus row × columns, except that
/// odd rows are traversed in reverse column order.
///
/// # Example
///
/// ```
/// use lawson::spatial::bucket_index;
/// use lawson::primitives::Point2;
///
/// // 10×10 grid of cell size 10: row 0 runs left-to-right …
/// assert!(bucket_index(Point2::new(5.0_f64, 5.0), 100.0, 10.0)
///     < bucket_index(Point2::new(95.0_f64, 5.0), 100.0, 10.0));
/// // … and row 1 runs right-to-left.
/// assert!(bucket_index(Point2::new(95.0_f64, 15.0), 100.0, 10.0)
///     < bucket_index(Point2::new(5.0_f64, 15.0), 100.0, 10.0));
/// ```
pub fn bucket_index<F: Float>(p: Point2<F>, extent: F, cell: F) -> isize {
    let columns = (extent / cell).floor().to_isize().unwrap_or(0);
    let mut col = (p.x / cell).floor().to_isize().unwrap_or(0);
    let row = (p.y / cell).floor().to_isize().unwrap_or(0);

    if row.rem_euclid(2) == 1 {
        col = columns - col;
    }

    col + row * columns
}

/// Sorts points in place by their serpentine bucket index.
///
/// The sort is stable, so points within one cell keep their input order.
pub fn serpentine_sort<F: Float>(points: &mut [Point2<F>], extent: F, cell: F) {
    points.sort_by_key(|&p| bucket_index(p, extent, cell));
}
