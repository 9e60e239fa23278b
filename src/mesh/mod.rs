pub mod adjacency;

pub use adjacency::VertexAdjacency;

use crate::error::{MeshError, QueryError};
use crate::math::{Point3, Vector3};

/// A mesh vertex: a position and a precomputed (unit or near-unit) normal.
///
/// Normals are consumed as-is; the kernel never computes or renormalizes them.
#[derive(Debug, Clone, Copy)]
pub struct MeshVertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// The outward surface normal at the vertex.
    pub normal: Vector3,
}

impl MeshVertex {
    /// Creates a new vertex from a position and a normal.
    #[must_use]
    pub fn new(position: Point3, normal: Vector3) -> Self {
        Self { position, normal }
    }
}

/// An indexed triangle mesh, immutable once constructed.
///
/// Triangles are triples of indices into the vertex list. The mesh is not
/// required to be manifold: two vertices are considered adjacent if they
/// co-occur in at least one triangle, and nothing more is validated.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    vertices: Vec<MeshVertex>,
    triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates a mesh from a vertex list and a triangle index list.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidTriangle`] if any triangle references a
    /// vertex index outside the vertex list.
    pub fn new(
        vertices: Vec<MeshVertex>,
        triangles: Vec<[u32; 3]>,
    ) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (triangle, corners) in triangles.iter().enumerate() {
            for &index in corners {
                if index as usize >= vertex_count {
                    return Err(MeshError::InvalidTriangle {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the vertex list.
    #[must_use]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Returns the triangle index list.
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at `index`, or an error if out of range.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::VertexOutOfRange`] if `index` does not name a
    /// vertex of this mesh.
    pub fn vertex(&self, index: u32) -> Result<&MeshVertex, QueryError> {
        self.vertices
            .get(index as usize)
            .ok_or(QueryError::VertexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
    }
}
