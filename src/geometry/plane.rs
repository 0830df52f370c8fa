use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// A plane in implicit form: `a·x + b·y + c·z + d = 0`.
///
/// Built from three ordered vertices of the originating facet, so the
/// coefficient signs encode the facet normal direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Plane {
    /// Creates a plane from its implicit coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates the plane through three ordered points.
    ///
    /// Collinear points yield all-zero coefficients; such a plane classifies
    /// as vertical and is filtered out by the projection pipeline rather
    /// than reported as an error.
    #[must_use]
    pub fn from_points(p: &Point3, q: &Point3, r: &Point3) -> Self {
        let normal = (q - p).cross(&(r - p));
        Self {
            a: normal.x,
            b: normal.y,
            c: normal.z,
            d: -(normal.x * p.x + normal.y * p.y + normal.z * p.z),
        }
    }

    /// The `a` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The `b` coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `c` coefficient.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The `d` coefficient.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// The (unnormalized) plane normal.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Returns `true` if the plane is numerically perpendicular to the
    /// ground plane and therefore contributes no footprint area.
    ///
    /// The test is scale-free: `c` is compared against the normal's length,
    /// so a large steep facet and a small one classify the same way. A
    /// zero-normal plane (collinear construction points) counts as vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        let norm = self.normal().norm();
        norm < TOLERANCE || self.c.abs() < TOLERANCE * norm
    }

    /// Solves the plane equation for z at the given ground-plane point.
    ///
    /// Precondition: the plane is not vertical. Perpendicular facets are
    /// excluded before any height comparison, so this is never evaluated on
    /// a `c ≈ 0` plane by the projection pipeline.
    #[must_use]
    pub fn height_at(&self, point: &Point2) -> f64 {
        -(self.a * point.x + self.b * point.y + self.d) / self.c
    }
}
