//! Triangle storage and adjacency maintenance.
//!
//! Triangles reference points by index and carry a cached circumcircle
//! plus up to 3 neighbor slots. The triangle sequence is append-only: an
//! edge flip mutates the two triangles' vertex indices in place instead of
//! deleting and recreating them, so triangle indices stay valid for the
//! lifetime of the mesh (the *content* at an index may change).

use crate::error::TriangulationError;
use crate::primitives::{Circle2, Point2};
use num_traits::Float;

/// A triangle in the mesh: three point indices, a cached circumcircle and
/// up to 3 neighbor triangle indices (`None` = boundary).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
    /// Cached circumcircle of the three vertices.
    pub circumcircle: Circle2<F>,
    /// Neighboring triangle indices, one per shared edge.
    pub neighbors: [Option<usize>; 3],
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle with no neighbors recorded yet.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize, circumcircle: Circle2<F>) -> Self {
        Self {
            a,
            b,
            c,
            circumcircle,
            neighbors: [None; 3],
        }
    }

    /// Returns the three vertex indices in storage order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges as pairs of vertex indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle uses a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Counts the vertices this triangle has in common with another.
    #[inline]
    pub fn common_vertex_count(&self, other: &Self) -> usize {
        self.vertices()
            .iter()
            .filter(|&&v| other.contains_vertex(v))
            .count()
    }

    /// Checks if two triangles share exactly two vertices (an edge).
    #[inline]
    pub fn shares_edge_with(&self, other: &Self) -> bool {
        self.common_vertex_count(other) == 2
    }

    /// Returns the vertices shared with `other`, in this triangle's
    /// storage order.
    pub fn common_vertices(&self, other: &Self) -> (Option<usize>, Option<usize>) {
        let mut first = None;
        let mut second = None;
        for v in self.vertices() {
            if other.contains_vertex(v) {
                if first.is_none() {
                    first = Some(v);
                } else if second.is_none() {
                    second = Some(v);
                }
            }
        }
        (first, second)
    }

    /// Returns the first vertex of this triangle not used by `other`, or
    /// `None` when all three are shared (a broken adjacency).
    pub fn opposite_vertex(&self, other: &Self) -> Option<usize> {
        self.vertices()
            .into_iter()
            .find(|&v| !other.contains_vertex(v))
    }

    /// Replaces one vertex index with another.
    ///
    /// Returns `false` when `from` is not a vertex of this triangle.
    pub fn replace_vertex(&mut self, from: usize, to: usize) -> bool {
        if self.a == from {
            self.a = to;
        } else if self.b == from {
            self.b = to;
        } else if self.c == from {
            self.c = to;
        } else {
            return false;
        }
        true
    }

    /// Iterates over the recorded neighbor indices.
    #[inline]
    pub fn neighbor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().flatten().copied()
    }
}

/// Recomputes the neighbor slots of one triangle by scanning the whole
/// triangle sequence for triangles sharing exactly two vertices.
///
/// A fourth edge-neighbor cannot occur in a valid planar triangulation;
/// finding one reports [`TriangulationError::TooManyNeighbors`] and leaves
/// the target's slots untouched.
pub fn rebuild_neighbors<F: Float>(
    triangles: &mut [Triangle<F>],
    target: usize,
) -> Result<(), TriangulationError> {
    let tri = triangles[target];
    let mut found: [Option<usize>; 3] = [None; 3];
    let mut count = 0;

    for (ix, other) in triangles.iter().enumerate() {
        if ix == target || !tri.shares_edge_with(other) {
            continue;
        }
        if count == 3 {
            return Err(TriangulationError::TooManyNeighbors { triangle: target });
        }
        found[count] = Some(ix);
        count += 1;
    }

    triangles[target].neighbors = found;
    Ok(())
}

/// Recomputes neighbor slots and cached circumcircles for every triangle.
///
/// Deliberately conservative: O(T²) over the whole mesh after any
/// structural change, instead of tracking which triangles a split or flip
/// touched. Fine at the mesh sizes this engine targets; a large-N
/// implementation would update only the affected triangles.
pub fn rebuild_all<F: Float>(
    triangles: &mut [Triangle<F>],
    points: &[Point2<F>],
    eps: F,
) -> Result<(), TriangulationError> {
    for ix in 0..triangles.len() {
        rebuild_neighbors(triangles, ix)?;

        let tri = &triangles[ix];
        let circle =
            Circle2::circumscribing(points[tri.a], points[tri.b], points[tri.c], eps)?;
        triangles[ix].circumcircle = circle;
    }
    Ok(())
}
