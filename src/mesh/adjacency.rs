use crate::mesh::TriangleMesh;

/// Precomputed vertex-adjacency index for a mesh.
///
/// For each vertex, the sorted, deduplicated list of vertices sharing at
/// least one triangle with it. Built in a single pass over the triangles;
/// reusable across any number of searches as long as the mesh is unchanged.
#[derive(Debug, Clone)]
pub struct VertexAdjacency {
    neighbors: Vec<Vec<u32>>,
}

impl VertexAdjacency {
    /// Builds the adjacency index from a mesh.
    #[must_use]
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let mut neighbors: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertex_count()];

        for corners in mesh.triangles() {
            for i in 0..3 {
                let list = &mut neighbors[corners[i] as usize];
                list.push(corners[(i + 1) % 3]);
                list.push(corners[(i + 2) % 3]);
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Self { neighbors }
    }

    /// Returns the number of vertices covered by the index.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the neighbors of `vertex`, or an empty slice if out of range.
    #[must_use]
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        self.neighbors
            .get(vertex as usize)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::mesh::MeshVertex;

    fn flat_vertex(x: f64, y: f64) -> MeshVertex {
        MeshVertex::new(Point3::new(x, y, 0.0), Vector3::z())
    }

    #[test]
    fn single_triangle() {
        let mesh = TriangleMesh::new(
            vec![flat_vertex(0.0, 0.0), flat_vertex(1.0, 0.0), flat_vertex(0.5, 1.0)],
            vec![[0, 1, 2]],
        )
        .unwrap();

        let adjacency = VertexAdjacency::from_mesh(&mesh);

        assert_eq!(adjacency.vertex_count(), 3);
        assert_eq!(adjacency.neighbors(0), &[1, 2]);
        assert_eq!(adjacency.neighbors(1), &[0, 2]);
        assert_eq!(adjacency.neighbors(2), &[0, 1]);
    }

    #[test]
    fn shared_edge_deduplicated() {
        // Two triangles sharing the edge 0-2: neighbors seen twice must
        // appear once.
        let mesh = TriangleMesh::new(
            vec![
                flat_vertex(0.0, 0.0),
                flat_vertex(1.0, 0.0),
                flat_vertex(1.0, 1.0),
                flat_vertex(0.0, 1.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .unwrap();

        let adjacency = VertexAdjacency::from_mesh(&mesh);

        assert_eq!(adjacency.neighbors(0), &[1, 2, 3]);
        assert_eq!(adjacency.neighbors(2), &[0, 1, 3]);
        // Opposite corners of the quad share no triangle edge.
        assert_eq!(adjacency.neighbors(1), &[0, 2]);
        assert_eq!(adjacency.neighbors(3), &[0, 2]);
    }

    #[test]
    fn empty_mesh() {
        let mesh = TriangleMesh::new(Vec::new(), Vec::new()).unwrap();
        let adjacency = VertexAdjacency::from_mesh(&mesh);

        assert_eq!(adjacency.vertex_count(), 0);
        assert!(adjacency.neighbors(0).is_empty());
    }

    #[test]
    fn isolated_vertex_has_no_neighbors() {
        let mesh = TriangleMesh::new(
            vec![
                flat_vertex(0.0, 0.0),
                flat_vertex(1.0, 0.0),
                flat_vertex(0.5, 1.0),
                flat_vertex(5.0, 5.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();

        let adjacency = VertexAdjacency::from_mesh(&mesh);
        assert!(adjacency.neighbors(3).is_empty());
    }
}
