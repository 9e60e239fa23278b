use std::collections::HashSet;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::TriangleMesh;
use crate::operations::{ClosestVertex, GeodesicDistances};

/// Smallest selectable sphere radius.
pub const MIN_RADIUS: f64 = 0.1;

/// Largest selectable sphere radius.
pub const MAX_RADIUS: f64 = 5.0;

const DEFAULT_RADIUS: f64 = 0.6;

/// Interactive sphere-selection tool state.
///
/// Owned by the session that created it: a center the user drags around, a
/// radius the scroll wheel resizes, and the add/remove and visibility
/// flags. The tool holds no mesh data; both containment predicates borrow
/// the mesh for the duration of the call only.
#[derive(Debug, Clone)]
pub struct SphereSelection {
    center: Point3,
    radius: f64,
    is_adding: bool,
    is_active: bool,
}

impl Default for SphereSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SphereSelection {
    /// Creates a tool at the origin with the default radius, inactive and
    /// in removal mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            center: Point3::origin(),
            radius: DEFAULT_RADIUS,
            is_adding: false,
            is_active: false,
        }
    }

    /// Returns the sphere center.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the sphere radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets both center and radius, clamping the radius.
    pub fn place(&mut self, center: Point3, radius: f64) {
        self.center = center;
        self.set_radius(radius);
    }

    /// Moves the sphere center (drag interaction).
    pub fn update_center(&mut self, center: Point3) {
        self.center = center;
    }

    /// Sets the radius, clamped to `[MIN_RADIUS, MAX_RADIUS]`.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// Grows or shrinks the radius by `delta` (scroll-wheel interaction),
    /// clamped to `[MIN_RADIUS, MAX_RADIUS]`.
    pub fn update_radius(&mut self, delta: f64) {
        self.set_radius(self.radius + delta);
    }

    /// Returns true if the tool adds to the selection, false if it removes.
    #[must_use]
    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    /// Switches between adding and removing mode.
    pub fn set_adding(&mut self, adding: bool) {
        self.is_adding = adding;
    }

    /// Returns true if the tool gizmo is displayed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Shows or hides the tool gizmo.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Euclidean containment: true iff the straight-line distance from
    /// `point` to the center is at most the radius (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (point - self.center).norm() <= self.radius
    }

    /// Geodesic containment: maps `point` to its nearest mesh vertex, runs
    /// a distance search from `clicked_vertex` bounded by the radius, and
    /// returns true iff that vertex was reached within the radius.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty mesh or an out-of-range
    /// `clicked_vertex`.
    pub fn contains_geodesic(
        &self,
        mesh: &TriangleMesh,
        point: &Point3,
        clicked_vertex: u32,
    ) -> Result<bool> {
        let nearest = ClosestVertex::new(*point).execute(mesh)?;
        let distances = self.geodesic_neighborhood(clicked_vertex).execute(mesh)?;

        Ok(distances
            .distance(nearest)
            .is_some_and(|distance| distance <= self.radius))
    }

    /// Applies the tool to a selection set: every vertex within geodesic
    /// radius of `clicked_vertex` is inserted into or removed from
    /// `selected`, per the adding flag.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty mesh or an out-of-range
    /// `clicked_vertex`.
    pub fn apply(
        &self,
        mesh: &TriangleMesh,
        clicked_vertex: u32,
        selected: &mut HashSet<u32>,
    ) -> Result<()> {
        let distances = self.geodesic_neighborhood(clicked_vertex).execute(mesh)?;

        for (vertex, distance) in distances.iter() {
            if distance > self.radius {
                continue;
            }
            if self.is_adding {
                selected.insert(vertex);
            } else {
                selected.remove(&vertex);
            }
        }

        Ok(())
    }

    /// The radius-bounded search used by both geodesic operations, ordered
    /// toward the tool center.
    fn geodesic_neighborhood(&self, clicked_vertex: u32) -> GeodesicDistances {
        GeodesicDistances::new(clicked_vertex)
            .bounded(self.radius)
            .toward(self.center)
    }
}
