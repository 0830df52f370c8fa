use nalgebra::{Rotation3, Unit};

use crate::error::{GeometryError, Result};

use super::{Vector3, TOLERANCE};

/// Composes an ordered list of `(angle, axis)` rotations into a single
/// rotation.
///
/// Composition is an explicit fold over rotation multiplication, applied in
/// list order: the first entry is applied first.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if any axis has zero length.
pub fn rotation_from_angle_axes(rotations: &[(f64, Vector3)]) -> Result<Rotation3<f64>> {
    rotations
        .iter()
        .try_fold(Rotation3::identity(), |composed, &(angle, axis)| {
            if axis.norm() < TOLERANCE {
                return Err(GeometryError::ZeroVector.into());
            }
            let step = Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle);
            Ok(step * composed)
        })
}
