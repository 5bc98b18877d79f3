//! Incremental Delaunay triangulation stepped one insertion at a time.
//!
//! The mesh starts as a single super-triangle large enough to contain
//! every input point. Each [`DelaunayMesh::step`] call inserts the next
//! pending point: the containing triangle is split into three, and Lawson
//! edge flips run until every edge is legal again (no opposite vertex
//! strictly inside a neighboring circumcircle). Between steps the mesh is
//! always a valid Delaunay triangulation of the points inserted so far,
//! which is what makes the engine convenient to drive from a visualizer.
//!
//! # Algorithm
//!
//! 1. Presort input points along a serpentine grid walk for insertion
//!    locality.
//! 2. Locate the triangle containing the pending point (storage-order
//!    scan; first hit wins, so edge ties are deterministic).
//! 3. Split it into three triangles around the new point.
//! 4. Drain a deduplicating worklist of candidate triangles, flipping
//!    illegal edges until stable.
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
//!     Point2::new(150.0, 180.0),
//! ];
//!
//! let mut mesh = DelaunayMesh::new(&points).unwrap();
//! while mesh.step().unwrap() == StepStatus::Inserted {}
//!
//! // One super-triangle plus two extra triangles per inserted point.
//! assert_eq!(mesh.triangles().len(), 7);
//! ```

use super::mesh::{rebuild_all, Triangle};
use crate::error::TriangulationError;
use crate::predicates::point_in_triangle;
use crate::primitives::{Circle2, Point2};
use crate::spatial::serpentine_sort;
use num_traits::Float;
use std::collections::HashSet;

/// Number of synthetic super-triangle vertices at the front of the point
/// sequence.
///
/// Point indices `0..SUPER_VERTEX_COUNT` are reserved for the
/// super-triangle and never correspond to caller-supplied points.
pub const SUPER_VERTEX_COUNT: usize = 3;

/// Classifies a point index as a synthetic super-triangle vertex.
///
/// Consumers rendering or reporting results should filter these out.
#[inline]
pub fn is_synthetic(index: usize) -> bool {
    index < SUPER_VERTEX_COUNT
}

/// Tuning parameters for a [`DelaunayMesh`].
///
/// The defaults mirror a 2000-unit scene: the super-triangle spans
/// `(extent/2, -extent)`, `(extent, extent)`, `(-extent, extent)`, and the
/// presort grid uses `cell`-sized buckets. Containment is only guaranteed
/// for points inside that super-triangle, not the full `[0, extent]²`
/// square; points outside it are skipped with
/// [`TriangulationError::PointNotLocated`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig<F> {
    /// Scale of the super-triangle and of the presort grid.
    pub extent: F,
    /// Presort grid cell size.
    pub cell: F,
    /// Tolerance used by all predicates (degenerate denominators,
    /// near-parallel bisectors, in-circle legality).
    pub epsilon: F,
    /// Upper bound on legalization worklist passes per insertion; a guard
    /// against cycling on degenerate input rather than a knob to tune.
    pub max_flip_passes: usize,
}

impl<F: Float> Default for TriangulationConfig<F> {
    fn default() -> Self {
        Self {
            extent: F::from(2000.0).unwrap(),
            cell: F::from(50.0).unwrap(),
            epsilon: F::from(1e-6).unwrap(),
            max_flip_passes: 10_000,
        }
    }
}

/// Outcome of a [`DelaunayMesh::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// One point was inserted and the mesh legalized.
    Inserted,
    /// All pending points have been processed; the call was a no-op.
    Done,
}

/// Deduplicating LIFO worklist of triangle indices.
///
/// The stack gives a deterministic processing order; the membership set
/// keeps a triangle from being queued twice.
#[derive(Debug, Default)]
struct Worklist {
    stack: Vec<usize>,
    queued: HashSet<usize>,
}

impl Worklist {
    fn push(&mut self, index: usize) {
        if self.queued.insert(index) {
            self.stack.push(index);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.stack.pop()?;
        self.queued.remove(&index);
        Some(index)
    }
}

/// An incrementally built planar Delaunay triangulation.
///
/// Both backing sequences are append-only: points are never moved and
/// triangles are never removed (flips rewrite vertex indices in place), so
/// indices remain stable across steps. The first
/// [`SUPER_VERTEX_COUNT`] points are synthetic.
#[derive(Debug, Clone)]
pub struct DelaunayMesh<F> {
    points: Vec<Point2<F>>,
    triangles: Vec<Triangle<F>>,
    cursor: usize,
    config: TriangulationConfig<F>,
}

impl<F: Float> DelaunayMesh<F> {
    /// Creates a mesh from the given points with default configuration.
    ///
    /// Copies the points, presorts them along the serpentine grid, prepends
    /// the 3 synthetic super-triangle vertices and initializes the single
    /// super-triangle. No real point is triangulated yet; call [`step`]
    /// repeatedly to insert them.
    ///
    /// [`step`]: DelaunayMesh::step
    pub fn new(points: &[Point2<F>]) -> Result<Self, TriangulationError> {
        Self::with_config(points, TriangulationConfig::default())
    }

    /// Creates a mesh with an explicit configuration.
    pub fn with_config(
        points: &[Point2<F>],
        config: TriangulationConfig<F>,
    ) -> Result<Self, TriangulationError> {
        let mut real = points.to_vec();
        serpentine_sort(&mut real, config.extent, config.cell);

        let extent = config.extent;
        let two = F::one() + F::one();
        let s0 = Point2::new(extent / two, -extent);
        let s1 = Point2::new(extent, extent);
        let s2 = Point2::new(-extent, extent);
        let circle = Circle2::circumscribing(s0, s1, s2, config.epsilon)?;

        let mut all = Vec::with_capacity(SUPER_VERTEX_COUNT + real.len());
        all.push(s0);
        all.push(s1);
        all.push(s2);
        all.extend(real);

        Ok(Self {
            points: all,
            triangles: vec![Triangle::new(0, 1, 2, circle)],
            cursor: SUPER_VERTEX_COUNT,
            config,
        })
    }

    /// The full point sequence, synthetic vertices first.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// The triangle sequence in storage order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// Index of the next pending point.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of points still waiting to be inserted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.points.len() - self.cursor
    }

    /// True once every pending point has been processed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.points.len()
    }

    /// The configuration this mesh was built with.
    #[inline]
    pub fn config(&self) -> &TriangulationConfig<F> {
        &self.config
    }

    /// Performs one insertion-and-legalize cycle.
    ///
    /// Locates the triangle containing the next pending point, splits it
    /// into three, legalizes with Lawson flips until stable and advances
    /// the cursor. Returns [`StepStatus::Done`] (a no-op) once all points
    /// are processed.
    ///
    /// Faults are recoverable: a point that cannot be located or would
    /// produce a degenerate split is skipped (the cursor still advances),
    /// and legalization diagnostics leave the mesh in its last consistent
    /// state. The caller decides whether to keep stepping.
    pub fn step(&mut self) -> Result<StepStatus, TriangulationError> {
        if self.is_done() {
            return Ok(StepStatus::Done);
        }

        let pending_index = self.cursor;
        let pending = self.points[pending_index];

        let Some(target) = self.locate(pending) else {
            tracing::warn!(
                "point {} is outside every triangle, skipping it",
                pending_index
            );
            self.cursor += 1;
            return Err(TriangulationError::PointNotLocated {
                index: pending_index,
            });
        };

        let seeds = match self.split(target, pending_index) {
            Ok(seeds) => seeds,
            Err(fault) => {
                tracing::warn!("split at point {} failed ({}), skipping it", pending_index, fault);
                self.cursor += 1;
                return Err(fault);
            }
        };
        self.cursor += 1;

        rebuild_all(&mut self.triangles, &self.points, self.config.epsilon)?;
        self.legalize(&seeds)?;

        Ok(StepStatus::Inserted)
    }

    /// Finds the first triangle (in storage order) containing `p`.
    ///
    /// First hit wins, so a point exactly on a shared edge goes to the
    /// earliest triangle.
    fn locate(&self, p: Point2<F>) -> Option<usize> {
        let eps = self.config.epsilon;
        self.triangles.iter().position(|tri| {
            point_in_triangle(
                p,
                self.points[tri.a],
                self.points[tri.b],
                self.points[tri.c],
                eps,
            )
        })
    }

    /// Splits `target` into three triangles around point `p`.
    ///
    /// The target's slot is reused for `(i1, p, i3)`; `(i1, i2, p)` and
    /// `(i2, i3, p)` are appended. Returns the legalization seeds: the
    /// three result indices plus the target's pre-split neighbors.
    ///
    /// All three circumcircles are computed before the first mutation, so
    /// a degenerate split (the point collinear with an edge) fails without
    /// touching the mesh.
    fn split(&mut self, target: usize, p: usize) -> Result<Vec<usize>, TriangulationError> {
        let eps = self.config.epsilon;
        let tri = self.triangles[target];
        let (i1, i2, i3) = (tri.a, tri.b, tri.c);
        let (pa, pb, pc) = (self.points[i1], self.points[i2], self.points[i3]);
        let pp = self.points[p];

        let first = Circle2::circumscribing(pa, pb, pp, eps)?;
        let second = Circle2::circumscribing(pb, pc, pp, eps)?;
        let reused = Circle2::circumscribing(pa, pp, pc, eps)?;

        self.triangles[target].b = p;
        self.triangles[target].circumcircle = reused;
        self.triangles.push(Triangle::new(i1, i2, p, first));
        self.triangles.push(Triangle::new(i2, i3, p, second));

        let count = self.triangles.len();
        let mut seeds = vec![target, count - 2, count - 1];
        seeds.extend(tri.neighbor_indices());
        Ok(seeds)
    }

    /// Drains the worklist, flipping illegal edges until stable.
    ///
    /// For each popped triangle, its neighbors' opposite vertices are
    /// tested against the popped triangle's cached circumcircle; the first
    /// illegal edge found is flipped and the two affected triangles'
    /// neighbors are re-queued. A missing opposite vertex is a
    /// [`TriangulationError::BrokenAdjacency`] diagnostic: it stops the
    /// neighbor examination for that triangle only, and the first such
    /// fault is reported after the worklist drains.
    fn legalize(&mut self, seeds: &[usize]) -> Result<(), TriangulationError> {
        let eps = self.config.epsilon;
        let mut worklist = Worklist::default();
        for &index in seeds {
            worklist.push(index);
        }

        let mut first_fault = None;
        let mut passes = 0_usize;
        let mut flips = 0_usize;

        while let Some(current) = worklist.pop() {
            passes += 1;
            if passes > self.config.max_flip_passes {
                tracing::warn!(
                    "legalization still unstable after {} passes, giving up",
                    passes
                );
                return Err(TriangulationError::ConvergenceFailed { iterations: passes });
            }

            let tri = self.triangles[current];
            for neighbor_index in tri.neighbor_indices() {
                let neighbor = self.triangles[neighbor_index];

                let Some(opposite) = neighbor.opposite_vertex(&tri) else {
                    tracing::warn!(
                        "triangles {} and {} share all three vertices",
                        current,
                        neighbor_index
                    );
                    first_fault.get_or_insert(TriangulationError::BrokenAdjacency {
                        triangle: current,
                        neighbor: neighbor_index,
                    });
                    break;
                };

                // Outside or on the circle within tolerance: the edge is
                // legal.
                if tri.circumcircle.signed_distance(self.points[opposite]) >= -eps {
                    continue;
                }

                self.flip(current, neighbor_index)?;
                flips += 1;

                for index in [current, neighbor_index] {
                    for n in self.triangles[index].neighbor_indices() {
                        worklist.push(n);
                    }
                }
                break; // at most one flip per popped triangle
            }
        }

        tracing::debug!("legalization settled after {} passes, {} flips", passes, flips);

        match first_fault {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    /// Flips the edge shared by two adjacent triangles.
    ///
    /// Each triangle gives up one end of the old shared edge and gains the
    /// other triangle's opposite vertex, so the new shared edge connects
    /// the two opposite vertices — the other diagonal of the quadrilateral
    /// the pair covers.
    fn flip(&mut self, current: usize, neighbor: usize) -> Result<(), TriangulationError> {
        let broken = TriangulationError::BrokenAdjacency {
            triangle: current,
            neighbor,
        };

        let tri = self.triangles[current];
        let nbr = self.triangles[neighbor];

        let apex_current = tri.opposite_vertex(&nbr).ok_or(broken)?;
        let apex_neighbor = nbr.opposite_vertex(&tri).ok_or(broken)?;

        let (first_shared, second_shared) = nbr.common_vertices(&tri);
        let first_shared = first_shared.ok_or(broken)?;
        let second_shared = second_shared.ok_or(broken)?;

        self.triangles[neighbor].replace_vertex(first_shared, apex_current);
        self.triangles[current].replace_vertex(second_shared, apex_neighbor);

        rebuild_all(&mut self.triangles, &self.points, self.config.epsilon)?;
        Ok(())
    }
}
