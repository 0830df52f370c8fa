use crate::math::bbox_2d::Bbox2;
use crate::math::polygon_2d::{edge_lengths, ensure_ccw, ensure_cw, signed_area};
use crate::math::{Point2, TOLERANCE};

/// A simple planar region: one outer boundary plus zero or more holes.
///
/// Construction normalizes orientation: the outer ring is counter-clockwise
/// and every hole is clockwise. A polygon with no rings is the empty
/// sentinel produced by degenerate projections and empty boolean results.
///
/// A two-point "ring" is allowed as the reduced form of a collinear facet
/// projection; it has zero area and never reaches the boolean algebra.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    outer: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
}

impl Polygon {
    /// Creates a polygon from an outer ring and holes, normalizing winding.
    #[must_use]
    pub fn new(outer: Vec<Point2>, holes: Vec<Vec<Point2>>) -> Self {
        Self {
            outer: ensure_ccw(&outer),
            holes: holes.iter().map(|hole| ensure_cw(hole)).collect(),
        }
    }

    /// Creates a hole-free polygon.
    #[must_use]
    pub fn from_outer(outer: Vec<Point2>) -> Self {
        Self::new(outer, Vec::new())
    }

    /// Creates the empty sentinel.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the outer boundary, counter-clockwise.
    #[must_use]
    pub fn outer(&self) -> &[Point2] {
        &self.outer
    }

    /// Returns the hole rings, clockwise.
    #[must_use]
    pub fn holes(&self) -> &[Vec<Point2>] {
        &self.holes
    }

    /// Returns `true` if the polygon has no boundary at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Area of the outer boundary minus the area of the holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|hole| signed_area(hole).abs()).sum();
        signed_area(&self.outer).abs() - holes
    }

    /// Ray-casting containment test: inside the outer boundary and outside
    /// every hole.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        ring_contains(&self.outer, point) && !self.holes.iter().any(|hole| ring_contains(hole, point))
    }

    /// Tightest bounding box of the outer boundary.
    #[must_use]
    pub fn bbox(&self) -> Bbox2 {
        Bbox2::from_points(&self.outer)
    }

    /// Lengths of the outer-boundary edges.
    #[must_use]
    pub fn outer_edge_lengths(&self) -> Vec<f64> {
        edge_lengths(&self.outer)
    }

    /// Perimeter of the outer boundary.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.outer_edge_lengths().iter().sum()
    }

    /// Returns `true` if the area is numerically zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.area() < TOLERANCE
    }
}

/// Crossing-parity containment for a single ring, winding-agnostic.
fn ring_contains(ring: &[Point2], point: &Point2) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &ring[i];
        let pj = &ring[j];
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
