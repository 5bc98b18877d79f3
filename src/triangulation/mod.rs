//! Incremental Delaunay triangulation engine.
//!
//! [`mesh`] holds triangle storage and adjacency maintenance; [`delaunay`]
//! drives point insertion and Lawson-flip legalization.

pub mod delaunay;
pub mod mesh;

pub use delaunay::{
    is_synthetic, DelaunayMesh, StepStatus, TriangulationConfig, SUPER_VERTEX_COUNT,
};
pub use mesh::{rebuild_all, rebuild_neighbors, Triangle};
