//! Axial profile values: constants or functions of position.

use std::fmt;
use std::sync::Arc;

/// A scalar quantity that may vary along the engine axis.
///
/// Wall thickness, channel height, blockage ratio, pitch and roughness can
/// all be given either as a constant or as a profile f(x). Profiles must be
/// pure: the solver queries them repeatedly at the same stations.
#[derive(Clone)]
pub enum AxialField {
    Constant(f64),
    Profile(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl AxialField {
    /// Wrap a profile function f(x).
    pub fn profile<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        AxialField::Profile(Arc::new(f))
    }

    /// Evaluate the field at an axial position x (m).
    pub fn at(&self, x: f64) -> f64 {
        match self {
            AxialField::Constant(v) => *v,
            AxialField::Profile(f) => f(x),
        }
    }

    /// True if the field is a constant equal to `v`.
    pub fn is_constant(&self) -> bool {
        matches!(self, AxialField::Constant(_))
    }
}

impl From<f64> for AxialField {
    fn from(v: f64) -> Self {
        AxialField::Constant(v)
    }
}

impl fmt::Debug for AxialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxialField::Constant(v) => write!(f, "AxialField::Constant({v})"),
            AxialField::Profile(_) => write!(f, "AxialField::Profile(..)"),
        }
    }
}
