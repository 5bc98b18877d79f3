//! lawson - Incremental 2D Delaunay triangulation with Lawson edge flips
//!
//! A small, correctness-first triangulation engine built to be *stepped*:
//! every [`DelaunayMesh::step`] call inserts exactly one point and
//! legalizes the mesh before returning, so a consumer (typically a
//! visualizer) can read a valid Delaunay triangulation between any two
//! steps.
//!
//! The mesh bootstraps from a super-triangle whose 3 synthetic vertices
//! permanently occupy point indices `0..3`; filter them with
//! [`is_synthetic`] when reporting results.
//!
//! # Example
//!
//! ```
//! use lawson::{DelaunayMesh, StepStatus};
//! use lawson::primitives::Point2;
//!
//! let points = vec![
//!     Point2::new(100.0_f64, 100.0),
//!     Point2::new(200.0, 100.0),
//!     Point2::new(100.0, 200.0),
//!     Point2::new(200.0, 200.0),
//! ];
//!
//! let mut mesh = DelaunayMesh::new(&points).unwrap();
//! while mesh.step().unwrap() == StepStatus::Inserted {}
//!
//! assert_eq!(mesh.triangles().len(), 1 + 2 * points.len());
//! ```

pub mod error;
pub mod predicates;
pub mod primitives;
pub mod spatial;
pub mod triangulation;

pub use error::TriangulationError;
pub use primitives::{Circle2, Line2, Point2, Vec2};
pub use triangulation::{
    is_synthetic, DelaunayMesh, StepStatus, Triangle, TriangulationConfig, SUPER_VERTEX_COUNT,
};
