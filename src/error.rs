use thiserror::Error;

/// Top-level error type for the Geopick selection kernel.
#[derive(Debug, Error)]
pub enum GeopickError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Errors related to mesh construction and validation.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh has no vertices")]
    EmptyMesh,

    #[error(
        "triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices"
    )]
    InvalidTriangle {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Errors related to queries over a mesh.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("vertex index {index} is out of range for a mesh with {vertex_count} vertices")]
    VertexOutOfRange { index: u32, vertex_count: usize },
}

/// Convenience type alias for results using [`GeopickError`].
pub type Result<T> = std::result::Result<T, GeopickError>;
