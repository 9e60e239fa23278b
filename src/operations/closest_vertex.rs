use crate::error::{MeshError, Result};
use crate::math::Point3;
use crate::mesh::TriangleMesh;

/// Finds the mesh vertex nearest to a query point.
///
/// Linear scan over all vertex positions; ties are broken by the lowest
/// index (strict improvement, first encountered wins).
pub struct ClosestVertex {
    point: Point3,
}

impl ClosestVertex {
    /// Creates a new `ClosestVertex` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query, returning the index of the nearest vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::EmptyMesh`] if the mesh has no vertices.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32, meshes with more vertices than
    // that are unsupported.
    pub fn execute(&self, mesh: &TriangleMesh) -> Result<u32> {
        let vertices = mesh.vertices();
        let first = vertices.first().ok_or(MeshError::EmptyMesh)?;

        let mut closest = 0u32;
        let mut min_distance = (first.position - self.point).norm();

        for (index, vertex) in vertices.iter().enumerate().skip(1) {
            let distance = (vertex.position - self.point).norm();
            if distance < min_distance {
                min_distance = distance;
                closest = index as u32;
            }
        }

        Ok(closest)
    }
}
