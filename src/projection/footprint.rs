use std::mem;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::bbox_2d::Bbox2;
use crate::math::polygon_2d::representative_point;
use crate::math::{Point2, Point3};
use crate::operations::boolean::{intersection_with_union, union_all};
use crate::operations::occlusion::resolve;

use super::FacePrint;

/// Relative slack for area comparisons: boolean results come back through
/// inexact arithmetic, so containment is decided by measure, not by vertex
/// equality.
const AREA_TOLERANCE: f64 = 1e-9;

/// The footprint of one building: an ordered collection of mutually
/// non-overlapping face prints.
///
/// Invariants: after any sequence of insertions no two stored prints'
/// polygons have positive-area intersection, and the bounding box never
/// shrinks. The bounding box also grows for prints that end up dropped, so
/// it may be larger than the covered region, a conservative bound
/// downstream consumers rely on.
#[derive(Debug, Clone)]
pub struct BrickPrint {
    name: String,
    bounding_box: Bbox2,
    reference_point: Point3,
    epsg: u32,
    facets: Vec<FacePrint>,
}

impl BrickPrint {
    /// Creates an empty footprint.
    #[must_use]
    pub fn new(name: impl Into<String>, reference_point: Point3, epsg: u32) -> Self {
        Self {
            name: name.into(),
            bounding_box: Bbox2::empty(),
            reference_point,
            epsg,
            facets: Vec::new(),
        }
    }

    /// The building name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bounding box over every print ever inserted, dropped or not.
    #[must_use]
    pub fn bbox(&self) -> &Bbox2 {
        &self.bounding_box
    }

    /// The reference point coordinates are relative to.
    #[must_use]
    pub fn reference_point(&self) -> &Point3 {
        &self.reference_point
    }

    /// The coordinate-system code.
    #[must_use]
    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    /// Number of stored prints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns `true` if no print is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Iterates over the stored prints in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FacePrint> {
        self.facets.iter()
    }

    /// Returns `true` if `point` lies inside any stored print.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.facets.iter().any(|facet| facet.contains(point))
    }

    /// Bounding-box test: is `point` inside the footprint's domain?
    #[must_use]
    pub fn in_domain(&self, point: &Point2) -> bool {
        self.bounding_box.contains_point(point)
    }

    /// Surface height over `point`: the sum of containment-gated heights.
    /// At most one stored print contains any point, so this is the height
    /// of the covering print, or zero outside the footprint.
    #[must_use]
    pub fn height_at(&self, point: &Point2) -> f64 {
        self.facets.iter().map(|facet| facet.height_at(point)).sum()
    }

    /// Returns `true` if `polygon` shares positive area with the stored
    /// prints, tested against their union.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn overlaps(&self, polygon: &Polygon) -> Result<bool> {
        Ok(!intersection_with_union(&self.stored_polygons(), polygon)?.is_empty())
    }

    /// Returns `true` if `facet`'s polygon shares positive area with the
    /// stored prints.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn overlaps_print(&self, facet: &FacePrint) -> Result<bool> {
        self.overlaps(facet.polygon())
    }

    /// Returns `true` if `facet`'s polygon lies entirely inside the covered
    /// region: the intersection with the stored union has the same measure
    /// as the polygon itself.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn contains_print(&self, facet: &FacePrint) -> Result<bool> {
        let pieces = intersection_with_union(&self.stored_polygons(), facet.polygon())?;
        let covered: f64 = pieces.iter().map(Polygon::area).sum();
        let target = facet.area();
        Ok((target - covered).abs() < AREA_TOLERANCE * target.max(1.0))
    }

    /// Returns `true` if `facet` would contribute nothing: it is contained
    /// in the covered region and no higher than the surface at its
    /// representative point. Degenerate and perpendicular prints are always
    /// under.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn is_under(&self, facet: &FacePrint) -> Result<bool> {
        if facet.is_perpendicular() || facet.is_degenerate() {
            return Ok(true);
        }
        let sample = representative_point(facet.polygon().outer())?;
        Ok(self.contains_print(facet)? && facet.height_at(&sample) <= self.height_at(&sample))
    }

    /// Area of every stored print, in storage order.
    #[must_use]
    pub fn areas(&self) -> Vec<f64> {
        self.facets.iter().map(FacePrint::area).collect()
    }

    /// Covered area: the sum of stored print areas (valid because stored
    /// prints never overlap).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.areas().iter().sum()
    }

    /// Edge lengths of the merged outline. All stored polygons are unioned
    /// first so boundaries shared between adjacent prints cancel; only the
    /// merged shape's outer boundaries contribute.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn edge_lengths(&self) -> Result<Vec<f64>> {
        let merged = union_all(&self.stored_polygons())?;
        Ok(merged
            .iter()
            .flat_map(Polygon::outer_edge_lengths)
            .collect())
    }

    /// Perimeter of the merged outline, never the sum of per-print
    /// perimeters.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn circumference(&self) -> Result<f64> {
        Ok(self.edge_lengths()?.iter().sum())
    }

    /// Inserts one face print, maintaining the no-overlap invariant.
    ///
    /// The bounding box grows by the print's bounding box first, even when
    /// the print is then dropped as degenerate or fully occluded.
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures; a failed insertion is fatal and
    /// leaves no partial state behind beyond the bounding-box growth.
    pub fn insert(&mut self, facet: FacePrint) -> Result<()> {
        self.bounding_box.merge(&facet.bbox());
        if facet.is_empty() || facet.is_degenerate() {
            debug!(name = %self.name, "degenerate print dropped");
            return Ok(());
        }
        if self.facets.is_empty() {
            self.facets.push(facet);
            return Ok(());
        }
        if !self.overlaps_print(&facet)? {
            self.facets.push(facet);
            return Ok(());
        }
        if self.is_under(&facet)? {
            debug!(name = %self.name, "fully occluded print dropped");
            return Ok(());
        }
        let stored = mem::take(&mut self.facets);
        let (placed, mut updated) = resolve(facet, stored)?;
        debug!(
            name = %self.name,
            placed = placed.len(),
            kept = updated.len(),
            "print resolved against stored collection"
        );
        updated.extend(placed);
        self.facets = updated;
        Ok(())
    }

    /// Folds every print of `other` into this footprint, filtering
    /// degenerate and empty entries on both sides.
    ///
    /// The intermediate fragment decomposition depends on insertion order;
    /// the covered area does not (absent height ties).
    ///
    /// # Errors
    ///
    /// Propagates polygon-algebra failures.
    pub fn merge(&mut self, other: BrickPrint) -> Result<()> {
        self.filter();
        for facet in other.facets {
            if !facet.is_empty() && !facet.is_degenerate() {
                self.insert(facet)?;
            }
        }
        self.filter();
        Ok(())
    }

    /// Removes empty and degenerate prints.
    fn filter(&mut self) {
        self.facets
            .retain(|facet| !facet.is_empty() && !facet.is_degenerate());
    }

    /// Set equality of stored prints, ignoring storage order.
    #[must_use]
    pub fn facets_equal(&self, other: &Self) -> bool {
        if self.facets.len() != other.facets.len() {
            return false;
        }
        let mut matched = vec![false; other.facets.len()];
        for facet in &self.facets {
            let Some(slot) = other
                .facets
                .iter()
                .enumerate()
                .position(|(i, candidate)| !matched[i] && candidate == facet)
            else {
                return false;
            };
            matched[slot] = true;
        }
        true
    }

    fn stored_polygons(&self) -> Vec<Polygon> {
        self.facets
            .iter()
            .map(|facet| facet.polygon().clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a BrickPrint {
    type Item = &'a FacePrint;
    type IntoIter = std::slice::Iter<'a, FacePrint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
