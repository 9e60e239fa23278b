pub mod closest_vertex;
pub mod geodesic;

pub use closest_vertex::ClosestVertex;
pub use geodesic::{DistanceMap, GeodesicDistances};
