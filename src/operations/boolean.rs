//! 2D boolean algebra on polygons-with-holes, delegated to `i_overlay`.
//!
//! Outer rings are counter-clockwise and holes clockwise; the even-odd fill
//! rule makes the winding uncritical but the convention is kept so results
//! round-trip through [`Polygon`] unchanged. Boolean results are zero, one,
//! or several disjoint pieces; never assume a single connected output.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::error::{AlgebraError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::signed_area;
use crate::math::Point2;

/// Result pieces with less area than this are numerical noise and dropped.
const MIN_AREA: f64 = 1e-10;

/// Unions a set of polygons into disjoint pieces.
///
/// Folds one polygon at a time into the accumulated union, so inputs may
/// overlap each other arbitrarily.
///
/// # Errors
///
/// Returns `AlgebraError::MalformedRing` for any ring with 1 or 2 points.
pub fn union_all(polygons: &[Polygon]) -> Result<Vec<Polygon>> {
    let mut live = polygons.iter().filter(|polygon| !polygon.is_empty());
    let Some(first) = live.next() else {
        return Ok(Vec::new());
    };
    let mut accumulated = to_paths(first)?;
    let mut shapes = vec![accumulated.clone()];
    for polygon in live {
        let clip = to_paths(polygon)?;
        shapes = accumulated.overlay(&clip, OverlayRule::Union, FillRule::EvenOdd);
        accumulated = shapes.iter().flatten().cloned().collect();
    }
    Ok(from_shapes(shapes))
}

/// Intersects two polygons. An empty operand yields an empty result.
///
/// # Errors
///
/// Returns `AlgebraError::MalformedRing` for any ring with 1 or 2 points.
pub fn intersection(lhs: &Polygon, rhs: &Polygon) -> Result<Vec<Polygon>> {
    if lhs.is_empty() || rhs.is_empty() {
        return Ok(Vec::new());
    }
    let subject = to_paths(lhs)?;
    let clip = to_paths(rhs)?;
    let shapes = subject.overlay(&clip, OverlayRule::Intersect, FillRule::EvenOdd);
    Ok(from_shapes(shapes))
}

/// Intersects `clip` with the union of `subject`: the union-then-intersect
/// query the accumulator uses for its overlap and containment tests.
///
/// The subject polygons must have pairwise disjoint interiors (the
/// accumulator's no-overlap invariant); overlapping subjects would cancel
/// under the even-odd rule.
///
/// # Errors
///
/// Returns `AlgebraError::MalformedRing` for any ring with 1 or 2 points.
pub fn intersection_with_union(subject: &[Polygon], clip: &Polygon) -> Result<Vec<Polygon>> {
    if clip.is_empty() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for polygon in subject {
        if !polygon.is_empty() {
            paths.append(&mut to_paths(polygon)?);
        }
    }
    if paths.is_empty() {
        return Ok(Vec::new());
    }
    let clip = to_paths(clip)?;
    let shapes = paths.overlay(&clip, OverlayRule::Intersect, FillRule::EvenOdd);
    Ok(from_shapes(shapes))
}

/// Subtracts the union of `removals` from `subject`, producing the
/// surviving fragments. Removal regions must have pairwise disjoint
/// interiors (occlusion removal pieces always do).
///
/// # Errors
///
/// Returns `AlgebraError::MalformedRing` for any ring with 1 or 2 points.
pub fn difference(subject: &Polygon, removals: &[Polygon]) -> Result<Vec<Polygon>> {
    if subject.is_empty() {
        return Ok(Vec::new());
    }
    let mut clip = Vec::new();
    for removal in removals {
        if !removal.is_empty() {
            clip.append(&mut to_paths(removal)?);
        }
    }
    if clip.is_empty() {
        return Ok(vec![subject.clone()]);
    }
    let paths = to_paths(subject)?;
    let shapes = paths.overlay(&clip, OverlayRule::Difference, FillRule::EvenOdd);
    Ok(from_shapes(shapes))
}

/// Converts a polygon into `i_overlay` path lists, validating every ring.
fn to_paths(polygon: &Polygon) -> Result<Vec<Vec<[f64; 2]>>> {
    let mut paths = Vec::with_capacity(1 + polygon.holes().len());
    paths.push(ring_to_path(polygon.outer())?);
    for hole in polygon.holes() {
        paths.push(ring_to_path(hole)?);
    }
    Ok(paths)
}

fn ring_to_path(ring: &[Point2]) -> Result<Vec<[f64; 2]>> {
    if ring.len() < 3 {
        return Err(AlgebraError::MalformedRing(ring.len()).into());
    }
    Ok(ring.iter().map(|point| [point.x, point.y]).collect())
}

/// Converts `i_overlay` result shapes back into polygons, dropping
/// sub-threshold noise. Each shape's first contour is the outer boundary,
/// the rest are holes.
fn from_shapes(shapes: Vec<Vec<Vec<[f64; 2]>>>) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let Some((outer, hole_contours)) = shape.split_first() else {
            continue;
        };
        let outer: Vec<Point2> = outer.iter().map(|p| Point2::new(p[0], p[1])).collect();
        if signed_area(&outer).abs() < MIN_AREA {
            continue;
        }
        let mut holes = Vec::new();
        for contour in hole_contours {
            let hole: Vec<Point2> = contour.iter().map(|p| Point2::new(p[0], p[1])).collect();
            if signed_area(&hole).abs() >= MIN_AREA {
                holes.push(hole);
            }
        }
        // Polygon construction normalizes the winding of every ring.
        polygons.push(Polygon::new(outer, holes));
    }
    polygons
}
