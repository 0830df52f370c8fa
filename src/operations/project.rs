//! Ground-plane projection: facets to prints, bricks to footprints.

use tracing::debug;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::polygon_2d::{check_collinearity, extreme_points};
use crate::math::{Point2, Point3};
use crate::mesh::{Brick, Facet, FacetId, DEFAULT_EPSG};
use crate::projection::{BrickPrint, FacePrint};

/// Projects one facet onto the ground plane.
///
/// A facet whose supporting plane is vertical contributes no footprint area
/// and projects to the empty sentinel, regardless of its 3D extent. A loop
/// whose projected vertices are collinear is reduced to its two
/// most-separated points, a degenerate segment print rather than a
/// zero-area polygon. Otherwise the projected outer boundary is normalized
/// counter-clockwise.
///
/// # Errors
///
/// Propagates the defensive under-3-points error from the collinearity
/// check; a [`Facet`] always carries at least 3 vertices, so projecting
/// mesh facets cannot hit it.
pub fn project_facet(id: FacetId, facet: &Facet) -> Result<FacePrint> {
    let plane = facet.supporting_plane();
    if plane.is_vertical() {
        return Ok(FacePrint::empty());
    }
    let points: Vec<Point2> = facet
        .vertices()
        .iter()
        .map(|vertex| Point2::new(vertex.x, vertex.y))
        .collect();
    if check_collinearity(&points)? {
        let (a, b) = extreme_points(&points)?;
        return Ok(FacePrint::new(id, Polygon::from_outer(vec![a, b]), plane));
    }
    Ok(FacePrint::new(id, Polygon::from_outer(points), plane))
}

/// Projects every facet of a brick, keeping only prints that can carry
/// footprint area. Degenerate segment prints survive here; the accumulator
/// drops them on insertion.
///
/// # Errors
///
/// Propagates projection failures.
pub fn project_brick(brick: &Brick) -> Result<Vec<FacePrint>> {
    let mut prints = Vec::with_capacity(brick.facet_count());
    for (id, facet) in brick.facets() {
        prints.push(project_facet(id, facet)?);
    }
    let total = prints.len();
    prints.retain(|print| !print.is_empty() && !print.is_perpendicular());
    debug!(
        brick = brick.name(),
        total,
        kept = prints.len(),
        "projected brick facets"
    );
    Ok(prints)
}

/// Projects a whole brick into its footprint, folding each print through
/// occlusion-resolving insertion.
///
/// # Errors
///
/// Propagates projection and polygon-algebra failures; a failure during one
/// insertion aborts the whole projection.
pub fn project(brick: &Brick) -> Result<BrickPrint> {
    let mut footprint = BrickPrint::new(brick.name(), *brick.reference_point(), brick.epsg());
    for print in project_brick(brick)? {
        footprint.insert(print)?;
    }
    Ok(footprint)
}

/// Projects every brick of a scene independently.
///
/// # Errors
///
/// Propagates the first failing brick projection.
pub fn orthoproject(bricks: &[Brick]) -> Result<Vec<BrickPrint>> {
    bricks.iter().map(project).collect()
}

/// Sums per-building footprints into one scene-level footprint.
///
/// The reference point and coordinate-system code are taken from the first
/// footprint; merging is order-dependent in its intermediate fragmentation
/// but not in covered area.
///
/// # Errors
///
/// Propagates polygon-algebra failures during merging.
pub fn scene_print(name: impl Into<String>, prints: Vec<BrickPrint>) -> Result<BrickPrint> {
    let (reference_point, epsg) = prints
        .first()
        .map_or((Point3::origin(), DEFAULT_EPSG), |print| {
            (*print.reference_point(), print.epsg())
        });
    let mut scene = BrickPrint::new(name, reference_point, epsg);
    for print in prints {
        scene.merge(print)?;
    }
    Ok(scene)
}
