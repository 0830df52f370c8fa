use super::Point2;

/// Axis-aligned 2D bounding box.
///
/// An empty box is represented by inverted infinite bounds so that merging
/// starts from a neutral element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox2 {
    min: Point2,
    max: Point2,
}

impl Bbox2 {
    /// Creates an empty bounding box (neutral element for [`merge`](Self::merge)).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Creates the tightest box around the given points.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
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

    /// Returns the lower-left corner.
    #[must_use]
    pub fn min(&self) -> &Point2 {
        &self.min
    }

    /// Returns the upper-right corner.
    #[must_use]
    pub fn max(&self) -> &Point2 {
        &self.max
    }

    /// Grows the box to include `point`.
    pub fn include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Grows the box to include `other`. The result never shrinks.
    pub fn merge(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.include(&other.min);
        self.include(&other.max);
    }

    /// Closed-interval overlap test. Boxes touching on an edge overlap.
    ///
    /// Empty boxes overlap nothing.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        !self.is_empty()
            && point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns `true` if `other` lies entirely inside this box.
    ///
    /// An empty box is contained in every box.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }
}

impl Default for Bbox2 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn empty_box_overlaps_nothing() {
        let empty = Bbox2::empty();
        let unit = Bbox2::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&unit));
        assert!(!unit.overlaps(&empty));
    }

    #[test]
    fn merge_is_monotonic() {
        let mut bbox = Bbox2::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let before = bbox;
        bbox.merge(&Bbox2::from_points(&[p(2.0, -1.0)]));
        assert!(bbox.contains(&before));
        assert!((bbox.max().x - 2.0).abs() < f64::EPSILON);
        assert!((bbox.min().y + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut bbox = Bbox2::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let before = bbox;
        bbox.merge(&Bbox2::empty());
        assert_eq!(bbox, before);
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Bbox2::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let b = Bbox2::from_points(&[p(1.0, 0.0), p(2.0, 1.0)]);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = Bbox2::from_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let b = Bbox2::from_points(&[p(3.0, 3.0), p(4.0, 4.0)]);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn containment() {
        let outer = Bbox2::from_points(&[p(0.0, 0.0), p(4.0, 4.0)]);
        let inner = Bbox2::from_points(&[p(1.0, 1.0), p(2.0, 2.0)]);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&Bbox2::empty()));
    }
}
