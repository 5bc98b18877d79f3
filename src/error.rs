//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building or legalizing a triangulation.
///
/// Every fault is recoverable at `step()` granularity: the mesh is left in
/// its last consistent state and the caller decides whether to keep
/// stepping, reset, or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Two lines are parallel (or nearly so) and have no usable
    /// intersection point.
    #[error("lines are nearly parallel")]
    NearParallel,

    /// Three points are collinear (or nearly so); no circumcircle exists.
    #[error("degenerate triangle: vertices are collinear")]
    DegenerateTriangle,

    /// A pending point was not found inside any triangle. The point is
    /// skipped and the insertion cursor still advances.
    #[error("point {index} is not contained in any triangle")]
    PointNotLocated {
        /// Index of the skipped point in the point sequence.
        index: usize,
    },

    /// Two triangles recorded as neighbors share all three vertices, so no
    /// opposite vertex exists. Indicates mesh corruption.
    #[error("triangles {triangle} and {neighbor} have no non-shared vertex")]
    BrokenAdjacency {
        /// The triangle whose neighbor list is inconsistent.
        triangle: usize,
        /// The offending neighbor.
        neighbor: usize,
    },

    /// More than 3 edge-neighbors were found for one triangle, which is
    /// impossible in a valid planar triangulation.
    #[error("triangle {triangle} has more than 3 edge-neighbors")]
    TooManyNeighbors {
        /// The triangle with too many neighbors.
        triangle: usize,
    },

    /// Legalization did not reach a stable state within the configured
    /// pass limit. Usually caused by near-cocircular points and a
    /// tolerance too small for the coordinate scale.
    #[error("legalization failed to converge after {iterations} passes")]
    ConvergenceFailed {
        /// Number of worklist passes performed before giving up.
        iterations: usize,
    },
}
