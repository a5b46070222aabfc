//! Package type with pickup and delivery locations.

use serde::{Deserialize, Serialize};

use super::ModelError;

/// A package to transport from a pickup location to a delivery location.
///
/// Locations are positions on a one-dimensional axis; the distance between
/// two locations is the absolute difference of their positions. Locations may
/// be negative, weight may not.
///
/// # Examples
///
/// ```
/// use van_routing::models::Package;
///
/// let pkg = Package::new(-1, 5, 4).unwrap();
/// assert_eq!(pkg.pickup(), -1);
/// assert_eq!(pkg.delivery(), 5);
/// assert_eq!(pkg.weight(), 4);
///
/// assert!(Package::new(0, 0, -2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPackage")]
pub struct Package {
    pickup: i64,
    delivery: i64,
    weight: i64,
}

/// Unvalidated mirror of [`Package`]; deserialization goes through
/// [`Package::new`] so invalid values are rejected at the boundary.
#[derive(Deserialize)]
struct RawPackage {
    pickup: i64,
    delivery: i64,
    weight: i64,
}

impl TryFrom<RawPackage> for Package {
    type Error = ModelError;

    fn try_from(raw: RawPackage) -> Result<Self, Self::Error> {
        Package::new(raw.pickup, raw.delivery, raw.weight)
    }
}

impl Package {
    /// Creates a package.
    ///
    /// Returns an error if the weight is negative.
    pub fn new(pickup: i64, delivery: i64, weight: i64) -> Result<Self, ModelError> {
        if weight < 0 {
            return Err(ModelError::NegativeWeight(weight));
        }
        Ok(Self {
            pickup,
            delivery,
            weight,
        })
    }

    /// Location where this package is collected.
    pub fn pickup(&self) -> i64 {
        self.pickup
    }

    /// Location where this package is dropped off.
    pub fn delivery(&self) -> i64 {
        self.delivery
    }

    /// Weight of this package.
    pub fn weight(&self) -> i64 {
        self.weight
    }
}
