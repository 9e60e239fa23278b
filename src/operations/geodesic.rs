use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{MeshError, QueryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::mesh::{TriangleMesh, VertexAdjacency};

/// Weight applied to the normal-divergence heuristic term.
const NORMAL_HEURISTIC_WEIGHT: f64 = 10.0;

/// One recorded vertex of a [`DistanceMap`].
#[derive(Debug, Clone, Copy)]
struct DistanceEntry {
    distance: f64,
    parent: Option<u32>,
}

/// Result of a geodesic distance search.
///
/// Maps each reached vertex to the shortest accumulated edge-length path
/// cost found from the start vertex, together with its predecessor on that
/// path. Vertices not reached within the bound are absent.
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    entries: HashMap<u32, DistanceEntry>,
}

impl DistanceMap {
    /// Returns the recorded distance to `vertex`, if it was reached.
    #[must_use]
    pub fn distance(&self, vertex: u32) -> Option<f64> {
        self.entries.get(&vertex).map(|entry| entry.distance)
    }

    /// Returns the predecessor of `vertex` on its recorded path. The start
    /// vertex has no predecessor.
    #[must_use]
    pub fn parent(&self, vertex: u32) -> Option<u32> {
        self.entries.get(&vertex).and_then(|entry| entry.parent)
    }

    /// Returns true if `vertex` was reached.
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.entries.contains_key(&vertex)
    }

    /// Returns the number of reached vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no vertex was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(vertex, distance)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().map(|(&vertex, entry)| (vertex, entry.distance))
    }

    /// Reconstructs the recorded path from the start vertex to `vertex`,
    /// inclusive, or `None` if `vertex` was not reached.
    ///
    /// Recorded distances decrease strictly along the predecessor chain, so
    /// the walk always terminates at the start vertex.
    #[must_use]
    pub fn path_to(&self, vertex: u32) -> Option<Vec<u32>> {
        if !self.contains(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Records `distance` for `vertex` if it improves on any prior record.
    /// Returns true if the record was taken.
    fn record(&mut self, vertex: u32, distance: f64, parent: Option<u32>) -> bool {
        match self.entries.get(&vertex) {
            Some(entry) if entry.distance <= distance => false,
            _ => {
                self.entries.insert(vertex, DistanceEntry { distance, parent });
                true
            }
        }
    }
}

/// A frontier entry, min-ordered by f = g + h.
///
/// Stale entries left behind by later improvements are discarded on pop
/// via the closed set (lazy deletion; no decrease-key).
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    vertex: u32,
    g_cost: f64,
    h_cost: f64,
}

impl SearchNode {
    fn f_cost(self) -> f64 {
        self.g_cost + self.h_cost
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, the frontier needs min-first.
        other
            .f_cost()
            .partial_cmp(&self.f_cost())
            .unwrap_or(Ordering::Equal)
    }
}

/// Heuristic actually in effect for a search, after fallback resolution.
#[derive(Debug, Clone, Copy)]
enum Heuristic {
    Zero,
    EuclideanTo(Point3),
    NormalAlignment(Vector3),
}

impl Heuristic {
    fn estimate(self, position: Point3, normal: &Vector3) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::EuclideanTo(target) => (position - target).norm(),
            Self::NormalAlignment(reference) => {
                NORMAL_HEURISTIC_WEIGHT * (1.0 - reference.dot(normal))
            }
        }
    }
}

/// Computes approximate on-surface distances from a start vertex.
///
/// Runs a best-first search over the mesh's vertex-adjacency graph (two
/// vertices are adjacent if they share a triangle) with Euclidean edge
/// costs. Unbounded and without the normal heuristic this is Dijkstra's
/// algorithm and yields shortest adjacency-graph path lengths; the
/// Euclidean-target heuristic preserves that (it never overestimates the
/// remaining cost). The normal-alignment heuristic is not consistent with
/// the edge metric, so with it enabled the search is ordering-only
/// best-first and recorded distances may exceed the true shortest path.
/// It is never used to prune.
#[derive(Debug, Clone)]
pub struct GeodesicDistances {
    start: u32,
    max_distance: Option<f64>,
    target: Option<Point3>,
    reference_normal: Option<Vector3>,
}

impl GeodesicDistances {
    /// Creates an unbounded search from `start` with no heuristic.
    #[must_use]
    pub fn new(start: u32) -> Self {
        Self {
            start,
            max_distance: None,
            target: None,
            reference_normal: None,
        }
    }

    /// Bounds the accumulated path cost. Vertices whose tentative cost
    /// would exceed `max_distance` are never recorded, and vertices at the
    /// bound are not expanded further.
    #[must_use]
    pub fn bounded(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Orders the frontier by straight-line distance to `target` in
    /// addition to accumulated cost.
    #[must_use]
    pub fn toward(mut self, target: Point3) -> Self {
        self.target = Some(target);
        self
    }

    /// Orders the frontier by normal divergence from `reference`: zero for
    /// a vertex whose normal matches the reference exactly, growing as the
    /// normals diverge. A degenerate (near-zero) reference silently falls
    /// back to the Euclidean heuristic.
    #[must_use]
    pub fn along_normal(mut self, reference: Vector3) -> Self {
        self.reference_normal = Some(reference);
        self
    }

    /// Executes the search, building the adjacency index on demand.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] for a vertexless mesh and
    /// [`QueryError::VertexOutOfRange`] if the start index is invalid.
    pub fn execute(&self, mesh: &TriangleMesh) -> Result<DistanceMap> {
        let adjacency = VertexAdjacency::from_mesh(mesh);
        self.execute_with(mesh, &adjacency)
    }

    /// Executes the search against a prebuilt adjacency index, for reuse
    /// across repeated searches over the same mesh.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] for a vertexless mesh and
    /// [`QueryError::VertexOutOfRange`] if the start index is invalid.
    pub fn execute_with(
        &self,
        mesh: &TriangleMesh,
        adjacency: &VertexAdjacency,
    ) -> Result<DistanceMap> {
        if mesh.vertex_count() == 0 {
            return Err(MeshError::EmptyMesh.into());
        }
        if self.start as usize >= mesh.vertex_count() {
            return Err(QueryError::VertexOutOfRange {
                index: self.start,
                vertex_count: mesh.vertex_count(),
            }
            .into());
        }

        let heuristic = self.resolve_heuristic();
        let vertices = mesh.vertices();

        let mut map = DistanceMap::default();
        let mut closed: HashSet<u32> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        map.record(self.start, 0.0, None);
        frontier.push(SearchNode {
            vertex: self.start,
            g_cost: 0.0,
            h_cost: 0.0,
        });

        while let Some(node) = frontier.pop() {
            if !closed.insert(node.vertex) {
                // Stale entry from a since-improved cost.
                continue;
            }

            // At the bound: keep the record, stop expanding here.
            if self.max_distance.is_some_and(|max| node.g_cost > max) {
                continue;
            }

            let current_position = vertices[node.vertex as usize].position;
            for &neighbor in adjacency.neighbors(node.vertex) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let candidate = &vertices[neighbor as usize];
                let edge_cost = (candidate.position - current_position).norm();
                let tentative = node.g_cost + edge_cost;

                if self.max_distance.is_some_and(|max| tentative > max) {
                    continue;
                }
                if !map.record(neighbor, tentative, Some(node.vertex)) {
                    continue;
                }

                frontier.push(SearchNode {
                    vertex: neighbor,
                    g_cost: tentative,
                    h_cost: heuristic.estimate(candidate.position, &candidate.normal),
                });
            }
        }

        Ok(map)
    }

    fn resolve_heuristic(&self) -> Heuristic {
        if let Some(reference) = self.reference_normal {
            if reference.norm() >= TOLERANCE {
                return Heuristic::NormalAlignment(reference);
            }
        }
        match self.target {
            Some(target) => Heuristic::EuclideanTo(target),
            None => Heuristic::Zero,
        }
    }
}
