use super::Point3;

/// Axis-aligned 3D bounding box, with the same empty-state convention as
/// [`Bbox2`](super::bbox_2d::Bbox2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox3 {
    min: Point3,
    max: Point3,
}

impl Bbox3 {
    /// Creates an empty bounding box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Creates the tightest box around the given points.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.include(point);
        }
        bbox
    }

    /// Returns `true` if no point has been included yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Returns the lower corner.
    #[must_use]
    pub fn min(&self) -> &Point3 {
        &self.min
    }

    /// Returns the upper corner.
    #[must_use]
    pub fn max(&self) -> &Point3 {
        &self.max
    }

    /// Grows the box to include `point`.
    pub fn include(&mut self, point: &Point3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Grows the box to include `other`.
    pub fn merge(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.include(&other.min);
        self.include(&other.max);
    }
}

impl Default for Bbox3 {
    fn default() -> Self {
        Self::empty()
    }
}
