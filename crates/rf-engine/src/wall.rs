//! Engine wall layers.

use crate::material::Material;
use rf_core::AxialField;

/// One solid wall layer. A wall stack is an ordered `Vec<Wall>` from the
/// hot-gas side (index 0) to the coolant side (last index).
#[derive(Debug, Clone)]
pub struct Wall {
    pub material: Material,
    thickness: AxialField,
}

impl Wall {
    /// Create a wall from a material and a thickness (m), constant or a
    /// profile of axial position.
    pub fn new(material: Material, thickness: impl Into<AxialField>) -> Self {
        Self {
            material,
            thickness: thickness.into(),
        }
    }

    /// Wall thickness at x (m).
    pub fn thickness(&self, x: f64) -> f64 {
        self.thickness.at(x)
    }
}
