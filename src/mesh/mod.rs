//! In-memory building surface models.
//!
//! A [`Brick`] is the mesh surface the projection pipeline consumes: a named
//! collection of planar facets with a reference point and coordinate-system
//! code. File parsing lives with external collaborators; bricks are
//! assembled facet by facet.

mod facet;

pub use facet::Facet;

use nalgebra::Rotation3;
use slotmap::SlotMap;

use crate::math::bbox_3d::Bbox3;
use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a facet in a brick. Projections keep this id
    /// through fragmentation; the null key marks the empty sentinel.
    pub struct FacetId;
}

/// Default coordinate-system code (EPSG:2154, Lambert-93).
pub const DEFAULT_EPSG: u32 = 2154;

/// A 3D building surface model.
#[derive(Debug, Clone)]
pub struct Brick {
    name: String,
    reference_point: Point3,
    epsg: u32,
    facets: SlotMap<FacetId, Facet>,
    bounding_box: Bbox3,
}

impl Brick {
    /// Creates an empty brick.
    #[must_use]
    pub fn new(name: impl Into<String>, reference_point: Point3, epsg: u32) -> Self {
        Self {
            name: name.into(),
            reference_point,
            epsg,
            facets: SlotMap::with_key(),
            bounding_box: Bbox3::empty(),
        }
    }

    /// The brick name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reference point all vertex coordinates are relative to.
    #[must_use]
    pub fn reference_point(&self) -> &Point3 {
        &self.reference_point
    }

    /// The coordinate-system code.
    #[must_use]
    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    /// The bounding box of every vertex added so far.
    #[must_use]
    pub fn bbox(&self) -> &Bbox3 {
        &self.bounding_box
    }

    /// Number of facets.
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Total vertex count over all facet loops.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.facets.values().map(Facet::len).sum()
    }

    /// Returns `true` if the brick holds no facets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Adds a facet, growing the bounding box over its vertices.
    pub fn add_facet(&mut self, facet: Facet) -> FacetId {
        for vertex in facet.vertices() {
            self.bounding_box.include(vertex);
        }
        self.facets.insert(facet)
    }

    /// Looks up a facet by id.
    #[must_use]
    pub fn facet(&self, id: FacetId) -> Option<&Facet> {
        self.facets.get(id)
    }

    /// Iterates over all facets with their ids.
    pub fn facets(&self) -> impl Iterator<Item = (FacetId, &Facet)> {
        self.facets.iter()
    }

    /// Translates every vertex.
    pub fn translate(&mut self, offset: &Vector3) {
        self.map_vertices(|vertex| vertex + offset);
    }

    /// Scales every vertex about the origin.
    pub fn scale(&mut self, factor: f64) {
        self.map_vertices(|vertex| Point3::from(vertex.coords * factor));
    }

    /// Rotates every vertex about the origin.
    pub fn rotate(&mut self, rotation: &Rotation3<f64>) {
        self.map_vertices(|vertex| rotation * vertex);
    }

    fn map_vertices(&mut self, transform: impl Fn(&Point3) -> Point3 + Copy) {
        for facet in self.facets.values_mut() {
            facet.map_vertices(transform);
        }
        let mut bbox = Bbox3::empty();
        for facet in self.facets.values() {
            for vertex in facet.vertices() {
                bbox.include(vertex);
            }
        }
        self.bounding_box = bbox;
    }
}
