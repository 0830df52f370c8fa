use crate::geometry::{Plane, Polygon};
use crate::math::bbox_2d::Bbox2;
use crate::math::{Point2, TOLERANCE};
use crate::mesh::FacetId;

/// The ground-plane projection of one 3D facet.
///
/// Holds the projected polygon together with the facet's supporting plane,
/// by composition. Occlusion resolution may replace a print with several
/// fragments; every fragment keeps the originating facet's id and plane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacePrint {
    id: FacetId,
    polygon: Polygon,
    plane: Plane,
}

impl FacePrint {
    /// Creates a print from a projected polygon and its supporting plane.
    #[must_use]
    pub fn new(id: FacetId, polygon: Polygon, plane: Plane) -> Self {
        Self { id, polygon, plane }
    }

    /// The empty sentinel: no polygon, null id, zero plane.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The originating facet's id.
    #[must_use]
    pub fn id(&self) -> FacetId {
        self.id
    }

    /// The projected polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// The supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns `true` if there is no projected boundary at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// Returns `true` if the projected area is numerically zero.
    ///
    /// All edges of one print lie on the same supporting plane, so a null
    /// area is the complete degeneracy test; no separate coincident-edge
    /// check is needed.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.polygon.area() < TOLERANCE
    }

    /// Returns `true` if the supporting plane is vertical; such a facet
    /// contributes no footprint area.
    #[must_use]
    pub fn is_perpendicular(&self) -> bool {
        self.plane.is_vertical()
    }

    /// Height of the supporting plane over `point`, whether or not the
    /// point lies inside the print.
    #[must_use]
    pub fn plane_height_at(&self, point: &Point2) -> f64 {
        self.plane.height_at(point)
    }

    /// Containment-gated height: the supporting plane's height if `point`
    /// is inside the print, zero otherwise.
    #[must_use]
    pub fn height_at(&self, point: &Point2) -> f64 {
        if self.contains(point) {
            self.plane.height_at(point)
        } else {
            0.0
        }
    }

    /// Returns `true` if `point` lies inside the projected polygon.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.polygon.contains(point)
    }

    /// Projected area, holes subtracted.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    /// Bounding box of the projected outer boundary.
    #[must_use]
    pub fn bbox(&self) -> Bbox2 {
        self.polygon.bbox()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_print_at(z: f64) -> FacePrint {
        let plane = Plane::from_points(
            &Point3::new(0.0, 0.0, z),
            &Point3::new(1.0, 0.0, z),
            &Point3::new(0.0, 1.0, z),
        );
        let polygon =
            Polygon::from_outer(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]);
        FacePrint::new(FacetId::default(), polygon, plane)
    }

    #[test]
    fn empty_sentinel_classifies() {
        let sentinel = FacePrint::empty();
        assert!(sentinel.is_empty());
        assert!(sentinel.is_degenerate());
        assert!(sentinel.is_perpendicular());
    }

    #[test]
    fn height_is_containment_gated() {
        let print = unit_print_at(3.0);
        assert!((print.height_at(&p(0.5, 0.5)) - 3.0).abs() < TOLERANCE);
        assert!(print.height_at(&p(5.0, 5.0)).abs() < TOLERANCE);
        // The raw plane height ignores containment.
        assert!((print.plane_height_at(&p(5.0, 5.0)) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn segment_print_is_degenerate() {
        let print = FacePrint::new(
            FacetId::default(),
            Polygon::from_outer(vec![p(0.0, 0.0), p(2.0, 0.0)]),
            Plane::new(0.0, 0.0, 1.0, 0.0),
        );
        assert!(!print.is_empty());
        assert!(print.is_degenerate());
    }

    #[test]
    fn wall_print_is_perpendicular() {
        let plane = Plane::from_points(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 1.0),
        );
        let print = FacePrint::new(FacetId::default(), Polygon::empty(), plane);
        assert!(print.is_perpendicular());
    }
}
