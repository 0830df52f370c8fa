//! Occlusion resolution between a new print and previously accepted prints.
//!
//! An iterative painter's algorithm: every insertion may fragment both
//! itself and any number of already-stored prints, so that only the higher
//! (visible-from-above) surface keeps each overlap region.

use tracing::trace;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::polygon_2d::representative_point;
use crate::projection::FacePrint;

use super::boolean::{difference, intersection};

/// Resolves `lhs` against a list of stored candidate prints.
///
/// For each candidate in order: degenerate candidates pass through
/// untouched; a bounding-box miss keeps both sides unchanged (cheaper than
/// boolean algebra for the common non-overlapping case); otherwise every
/// intersection piece is awarded to the side whose plane is higher at the
/// piece's representative interior point, and the loser's polygon has the
/// piece subtracted. Candidates are mutually disjoint, so the pieces `lhs`
/// loses to different candidates are disjoint too and are subtracted in one
/// final difference.
///
/// Returns `(lhs_fragments, updated_candidates)`: the surviving fragments
/// of `lhs` to be placed, and the candidate list with each fragmented
/// candidate replaced by its survivors. Fragments keep the original print's
/// id and plane; a difference may produce zero, one, or several fragments.
///
/// Height ties go to the stored candidate: the strict `>` duel means an
/// incoming print at exactly equal height yields the piece. This is a
/// documented policy, asserted by a test, not an accident of comparison
/// direction.
///
/// # Errors
///
/// Propagates polygon-algebra failures; an error is fatal to the enclosing
/// insertion, never retried.
pub fn resolve(
    lhs: FacePrint,
    candidates: Vec<FacePrint>,
) -> Result<(Vec<FacePrint>, Vec<FacePrint>)> {
    let lhs_bbox = lhs.bbox();
    let mut lhs_losses: Vec<Polygon> = Vec::new();
    let mut updated: Vec<FacePrint> = Vec::with_capacity(candidates.len());

    for rhs in candidates {
        if rhs.is_degenerate() {
            updated.push(rhs);
            continue;
        }
        if !lhs_bbox.overlaps(&rhs.bbox()) {
            updated.push(rhs);
            continue;
        }
        let pieces = intersection(lhs.polygon(), rhs.polygon())?;
        if pieces.is_empty() {
            // Bounding boxes touched but the shapes did not.
            updated.push(rhs);
            continue;
        }

        let mut rhs_losses: Vec<Polygon> = Vec::new();
        for piece in pieces {
            let sample = representative_point(piece.outer())?;
            if lhs.plane_height_at(&sample) > rhs.plane_height_at(&sample) {
                rhs_losses.push(piece);
            } else {
                lhs_losses.push(piece);
            }
        }
        trace!(
            lhs_losses = lhs_losses.len(),
            rhs_losses = rhs_losses.len(),
            "occlusion duel"
        );

        if rhs_losses.is_empty() {
            updated.push(rhs);
        } else {
            for fragment in difference(rhs.polygon(), &rhs_losses)? {
                updated.push(FacePrint::new(rhs.id(), fragment, *rhs.plane()));
            }
        }
    }

    let placed = if lhs_losses.is_empty() {
        vec![lhs]
    } else {
        difference(lhs.polygon(), &lhs_losses)?
            .into_iter()
            .map(|fragment| FacePrint::new(lhs.id(), fragment, *lhs.plane()))
            .collect()
    };
    Ok((placed, updated))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Plane;
    use crate::math::{Point2, Point3};
    use crate::mesh::FacetId;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rect_print(x0: f64, y0: f64, x1: f64, y1: f64, z: f64) -> FacePrint {
        let plane = Plane::from_points(
            &Point3::new(x0, y0, z),
            &Point3::new(x1, y0, z),
            &Point3::new(x0, y1, z),
        );
        FacePrint::new(
            FacetId::default(),
            Polygon::from_outer(vec![p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)]),
            plane,
        )
    }

    fn total_area(prints: &[FacePrint]) -> f64 {
        prints.iter().map(FacePrint::area).sum()
    }

    #[test]
    fn disjoint_prints_pass_through() {
        let lhs = rect_print(0.0, 0.0, 1.0, 1.0, 0.0);
        let rhs = rect_print(5.0, 5.0, 6.0, 6.0, 1.0);
        let (placed, updated) = resolve(lhs.clone(), vec![rhs.clone()]).unwrap();
        assert_eq!(placed, vec![lhs]);
        assert_eq!(updated, vec![rhs]);
    }

    #[test]
    fn degenerate_candidate_is_skipped() {
        let lhs = rect_print(0.0, 0.0, 1.0, 1.0, 0.0);
        let segment = FacePrint::new(
            FacetId::default(),
            Polygon::from_outer(vec![p(0.0, 0.0), p(1.0, 1.0)]),
            Plane::new(0.0, 0.0, 1.0, 0.0),
        );
        let (placed, updated) = resolve(lhs.clone(), vec![segment.clone()]).unwrap();
        assert_eq!(placed, vec![lhs]);
        assert_eq!(updated, vec![segment]);
    }

    #[test]
    fn higher_incoming_print_cuts_the_stored_one() {
        let stored = rect_print(-1.0, 0.0, 1.0, 1.0, 0.0);
        let incoming = rect_print(0.0, 0.0, 1.0, 1.0, 2.0);
        let (placed, updated) = resolve(incoming, vec![stored]).unwrap();
        // Incoming survives whole; stored keeps only its left half.
        assert_eq!(placed.len(), 1);
        assert!((placed[0].area() - 1.0).abs() < 1e-9);
        assert_eq!(updated.len(), 1);
        assert!((updated[0].area() - 1.0).abs() < 1e-9);
        assert!(updated[0].polygon().contains(&p(-0.5, 0.5)));
        assert!(!updated[0].polygon().contains(&p(0.5, 0.5)));
    }

    #[test]
    fn lower_incoming_print_is_cut() {
        let stored = rect_print(0.0, 0.0, 1.0, 1.0, 2.0);
        let incoming = rect_print(-1.0, 0.0, 1.0, 1.0, 0.0);
        let (placed, updated) = resolve(incoming, vec![stored]).unwrap();
        assert_eq!(updated.len(), 1);
        assert!((updated[0].area() - 1.0).abs() < 1e-9);
        assert_eq!(placed.len(), 1);
        assert!((placed[0].area() - 1.0).abs() < 1e-9);
        assert!(placed[0].polygon().contains(&p(-0.5, 0.5)));
    }

    #[test]
    fn fully_covered_incoming_print_vanishes() {
        let stored = rect_print(0.0, 0.0, 4.0, 4.0, 5.0);
        let incoming = rect_print(1.0, 1.0, 2.0, 2.0, 0.0);
        let (placed, updated) = resolve(incoming, vec![stored.clone()]).unwrap();
        assert!(placed.is_empty());
        assert_eq!(updated, vec![stored]);
    }

    #[test]
    fn incoming_print_can_fragment_into_pieces() {
        // A low bar crossed by a high bar: the low bar splits in two.
        let stored = rect_print(1.0, -1.0, 2.0, 2.0, 5.0);
        let incoming = rect_print(0.0, 0.0, 3.0, 1.0, 0.0);
        let (placed, updated) = resolve(incoming, vec![stored]).unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(placed.len(), 2);
        assert!((total_area(&placed) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn equal_height_tie_goes_to_stored() {
        // Same plane on both sides: the incoming print must yield.
        let stored = rect_print(0.0, 0.0, 2.0, 1.0, 3.0);
        let incoming = rect_print(1.0, 0.0, 3.0, 1.0, 3.0);
        let (placed, updated) = resolve(incoming, vec![stored]).unwrap();
        assert_eq!(updated.len(), 1);
        assert!((updated[0].area() - 2.0).abs() < 1e-9);
        assert_eq!(placed.len(), 1);
        assert!((placed[0].area() - 1.0).abs() < 1e-9);
        assert!(placed[0].polygon().contains(&p(2.5, 0.5)));
        assert!(!placed[0].polygon().contains(&p(1.5, 0.5)));
    }

    #[test]
    fn area_is_conserved_across_resolution() {
        let stored = rect_print(-1.0, 0.0, 1.0, 1.0, 0.0);
        let incoming = rect_print(0.0, 0.0, 1.0, 1.0, 2.0);
        let overlap = 1.0;
        let (placed, updated) = resolve(incoming.clone(), vec![stored.clone()]).unwrap();
        assert!((total_area(&updated) + overlap - stored.area()).abs() < 1e-9);
        assert!(
            (total_area(&placed) + total_area(&updated) - (stored.area() + incoming.area() - overlap))
                .abs()
                < 1e-9
        );
    }
}
