use crate::error::{GeometryError, Result};
use crate::geometry::Plane;
use crate::math::{Point3, Vector3, TOLERANCE};

/// One planar polygonal face of a 3D surface mesh: an ordered loop of at
/// least three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    vertices: Vec<Point3>,
}

impl Facet {
    /// Creates a facet from an ordered vertex loop.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InsufficientPoints` if fewer than 3 vertices
    /// are supplied.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InsufficientPoints {
                needed: 3,
                got: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// Returns the ordered vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Number of vertices in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a facet holds at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The supporting plane through the loop's first three vertices.
    ///
    /// Orientation of the loop determines the coefficient signs.
    #[must_use]
    pub fn supporting_plane(&self) -> Plane {
        Plane::from_points(&self.vertices[0], &self.vertices[1], &self.vertices[2])
    }

    /// Centroid of the vertex loop.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |sum, vertex| sum + vertex.coords);
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Unit normal by Newell's method; zero for a degenerate loop.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        let newell = self.newell_sum();
        let norm = newell.norm();
        if norm < TOLERANCE {
            Vector3::zeros()
        } else {
            newell / norm
        }
    }

    /// Area of the (planar) vertex loop.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.newell_sum().norm()
    }

    fn newell_sum(&self) -> Vector3 {
        let origin = &self.vertices[0];
        let mut sum = Vector3::zeros();
        for window in self.vertices.windows(2) {
            sum += (window[0] - origin).cross(&(window[1] - origin));
        }
        sum
    }

    /// Applies a point transformation to every vertex.
    pub(crate) fn map_vertices(&mut self, transform: impl Fn(&Point3) -> Point3) {
        for vertex in &mut self.vertices {
            *vertex = transform(vertex);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square_facet() -> Facet {
        Facet::new(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_short_loops() {
        assert!(Facet::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]).is_err());
    }

    #[test]
    fn supporting_plane_of_horizontal_facet() {
        let plane = unit_square_facet().supporting_plane();
        assert!(!plane.is_vertical());
        assert!((plane.height_at(&crate::math::Point2::new(0.5, 0.5))).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square() {
        let centroid = unit_square_facet().centroid();
        assert!((centroid.x - 0.5).abs() < TOLERANCE);
        assert!((centroid.y - 0.5).abs() < TOLERANCE);
        assert!(centroid.z.abs() < TOLERANCE);
    }

    #[test]
    fn normal_of_ccw_square_points_up() {
        let normal = unit_square_facet().normal();
        assert!((normal.z - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn area_of_non_triangular_facet() {
        assert!((unit_square_facet().area() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_loop_has_zero_normal() {
        let sliver = Facet::new(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 1.0, 1.0),
            p(2.0, 2.0, 2.0),
        ])
        .unwrap();
        assert!(sliver.normal().norm() < TOLERANCE);
        assert!(sliver.area() < TOLERANCE);
    }
}
