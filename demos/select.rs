//! Sphere-selection walkthrough on a generated grid mesh.
//!
//! Builds a flat triangulated grid, clicks its center vertex, and prints
//! the geodesic neighborhood and the resulting selection set.

use std::collections::HashSet;

use geopick::math::{Point3, Vector3};
use geopick::mesh::{MeshVertex, TriangleMesh};
use geopick::operations::GeodesicDistances;
use geopick::selection::SphereSelection;

fn grid_mesh(n: u32) -> geopick::Result<TriangleMesh> {
    let mut vertices = Vec::new();
    for j in 0..n {
        for i in 0..n {
            vertices.push(MeshVertex::new(
                Point3::new(f64::from(i), f64::from(j), 0.0),
                Vector3::z(),
            ));
        }
    }

    let mut triangles = Vec::new();
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let v0 = j * n + i;
            let v1 = v0 + 1;
            let v2 = v0 + n + 1;
            let v3 = v0 + n;
            triangles.push([v0, v1, v2]);
            triangles.push([v0, v2, v3]);
        }
    }

    Ok(TriangleMesh::new(vertices, triangles)?)
}

fn main() -> geopick::Result<()> {
    let n = 9u32;
    let mesh = grid_mesh(n)?;
    let clicked = (n / 2) * n + n / 2;
    let center = mesh.vertex(clicked)?.position;

    println!(
        "grid mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let distances = GeodesicDistances::new(clicked)
        .bounded(2.5)
        .toward(center)
        .execute(&mesh)?;
    println!(
        "geodesic neighborhood of vertex {clicked} within 2.5: {} vertices",
        distances.len()
    );

    let corner = 0;
    let far = GeodesicDistances::new(clicked).execute(&mesh)?;
    if let (Some(distance), Some(path)) = (far.distance(corner), far.path_to(corner)) {
        println!("distance to corner {corner}: {distance:.3} via {path:?}");
    }

    let mut tool = SphereSelection::new();
    tool.place(center, 2.0);
    tool.set_adding(true);
    tool.set_active(true);

    let mut selected = HashSet::new();
    tool.apply(&mesh, clicked, &mut selected)?;
    println!("selected {} vertices with radius {}", selected.len(), tool.radius());

    tool.set_adding(false);
    tool.set_radius(1.0);
    tool.apply(&mesh, clicked, &mut selected)?;
    println!("after removal pass: {} vertices", selected.len());

    Ok(())
}
