use crate::error::{GeometryError, Result};

use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise, zero below
/// 3 points.
#[must_use]
pub fn signed_area(ring: &[Point2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += ring[i].x * ring[j].y - ring[j].x * ring[i].y;
    }
    sum * 0.5
}

/// Returns the ring with counter-clockwise winding, reversing if needed.
#[must_use]
pub fn ensure_ccw(ring: &[Point2]) -> Vec<Point2> {
    if signed_area(ring) < 0.0 {
        ring.iter().rev().copied().collect()
    } else {
        ring.to_vec()
    }
}

/// Returns the ring with clockwise winding (hole convention).
#[must_use]
pub fn ensure_cw(ring: &[Point2]) -> Vec<Point2> {
    if signed_area(ring) > 0.0 {
        ring.iter().rev().copied().collect()
    } else {
        ring.to_vec()
    }
}

/// Checks whether a projected vertex loop is collinear.
///
/// Since all vertices of one facet lie on the same supporting plane, it
/// suffices to check the first three points.
///
/// # Errors
///
/// Returns `GeometryError::InsufficientPoints` if fewer than 3 points are
/// supplied. Callers validate facet loops, so this is defensive only.
pub fn check_collinearity(points: &[Point2]) -> Result<bool> {
    if points.len() < 3 {
        return Err(GeometryError::InsufficientPoints {
            needed: 3,
            got: points.len(),
        }
        .into());
    }
    let ab = points[1] - points[0];
    let ac = points[2] - points[0];
    Ok((ab.x * ac.y - ab.y * ac.x).abs() < TOLERANCE)
}

/// Reduces a collinear point set to its two most-separated points.
///
/// A collinear loop has no footprint area; keeping only the extremes avoids
/// retaining a zero-area polygon with redundant vertices.
///
/// # Errors
///
/// Returns `GeometryError::InsufficientPoints` if fewer than 2 points are
/// supplied.
pub fn extreme_points(points: &[Point2]) -> Result<(Point2, Point2)> {
    if points.len() < 2 {
        return Err(GeometryError::InsufficientPoints {
            needed: 2,
            got: points.len(),
        }
        .into());
    }
    let mut a = points[0];
    let mut b = points[1];
    for &c in &points[2..] {
        let ab = (b - a).norm_squared();
        let ac = (c - a).norm_squared();
        let bc = (c - b).norm_squared();
        // Keep whichever pair among {a, b, c} is widest.
        if ac > ab && ac >= bc {
            b = c;
        } else if bc > ab && bc > ac {
            a = b;
            b = c;
        }
    }
    Ok((a, b))
}

/// Deterministic interior sample point of a ring: the centroid of its first
/// three vertices.
///
/// Only valid for convex or triangle-like rings; overlap pieces produced by
/// polygon intersection are assumed convex enough for the height duel. Kept
/// as its own strategy function so that assumption is testable in isolation.
///
/// # Errors
///
/// Returns `GeometryError::InsufficientPoints` if the ring has fewer than
/// 3 vertices.
pub fn representative_point(ring: &[Point2]) -> Result<Point2> {
    if ring.len() < 3 {
        return Err(GeometryError::InsufficientPoints {
            needed: 3,
            got: ring.len(),
        }
        .into());
    }
    let x = (ring[0].x + ring[1].x + ring[2].x) / 3.0;
    let y = (ring[0].y + ring[1].y + ring[2].y) / 3.0;
    Ok(Point2::new(x, y))
}

/// Lengths of the edges of a closed ring, in vertex order.
#[must_use]
pub fn edge_lengths(ring: &[Point2]) -> Vec<f64> {
    let n = ring.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| (ring[(i + 1) % n] - ring[i]).norm())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area(&unit_square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let cw: Vec<Point2> = unit_square().into_iter().rev().collect();
        assert!((signed_area(&cw) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[p(0.0, 0.0), p(1.0, 1.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn ensure_ccw_reverses_cw_ring() {
        let cw: Vec<Point2> = unit_square().into_iter().rev().collect();
        assert!(signed_area(&ensure_ccw(&cw)) > 0.0);
    }

    #[test]
    fn ensure_cw_reverses_ccw_ring() {
        assert!(signed_area(&ensure_cw(&unit_square())) < 0.0);
    }

    #[test]
    fn collinearity_detected() {
        let points = vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)];
        assert!(check_collinearity(&points).unwrap());
    }

    #[test]
    fn non_collinear_triangle() {
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(!check_collinearity(&points).unwrap());
    }

    #[test]
    fn collinearity_requires_three_points() {
        assert!(check_collinearity(&[p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn extreme_points_of_collinear_run() {
        let points = vec![p(1.0, 1.0), p(3.0, 3.0), p(0.0, 0.0), p(2.0, 2.0)];
        let (a, b) = extreme_points(&points).unwrap();
        let span = (b - a).norm_squared();
        assert!((span - 18.0).abs() < TOLERANCE);
    }

    #[test]
    fn extreme_points_of_coincident_points() {
        let points = vec![p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)];
        let (a, b) = extreme_points(&points).unwrap();
        assert!((b - a).norm_squared() < TOLERANCE);
    }

    #[test]
    fn representative_point_of_triangle() {
        let ring = vec![p(0.0, 0.0), p(3.0, 0.0), p(0.0, 3.0)];
        let point = representative_point(&ring).unwrap();
        assert!((point.x - 1.0).abs() < TOLERANCE);
        assert!((point.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn representative_point_uses_first_three_vertices_only() {
        let ring = vec![p(0.0, 0.0), p(3.0, 0.0), p(0.0, 3.0), p(-100.0, -100.0)];
        let point = representative_point(&ring).unwrap();
        assert!((point.x - 1.0).abs() < TOLERANCE);
        assert!((point.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn representative_point_lies_inside_convex_ring() {
        let point = representative_point(&unit_square()).unwrap();
        assert!(point.x > 0.0 && point.x < 1.0);
        assert!(point.y > 0.0 && point.y < 1.0);
    }

    #[test]
    fn representative_point_requires_three_vertices() {
        assert!(representative_point(&[p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn edge_lengths_of_square() {
        let lengths = edge_lengths(&unit_square());
        assert_eq!(lengths.len(), 4);
        for length in lengths {
            assert!((length - 1.0).abs() < TOLERANCE);
        }
    }
}
