//! Van type with capacity and fuel rate.

use serde::{Deserialize, Serialize};

use super::ModelError;

/// A delivery van with a carrying capacity and a fuel rate.
///
/// The fuel rate is the cost per unit distance traveled, so a route of total
/// distance `d` driven by this van burns `d * fuel_rate` fuel. A fuel rate of
/// zero is valid and yields zero-cost routes.
///
/// # Examples
///
/// ```
/// use van_routing::models::Van;
///
/// let van = Van::new(10, 8).unwrap();
/// assert_eq!(van.capacity(), 10);
/// assert_eq!(van.fuel_rate(), 8);
///
/// assert!(Van::new(-1, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVan")]
pub struct Van {
    capacity: i64,
    fuel_rate: i64,
}

/// Unvalidated mirror of [`Van`]; deserialization goes through
/// [`Van::new`] so invalid values are rejected at the boundary.
#[derive(Deserialize)]
struct RawVan {
    capacity: i64,
    fuel_rate: i64,
}

impl TryFrom<RawVan> for Van {
    type Error = ModelError;

    fn try_from(raw: RawVan) -> Result<Self, Self::Error> {
        Van::new(raw.capacity, raw.fuel_rate)
    }
}

impl Van {
    /// Creates a van with the given capacity and fuel rate.
    ///
    /// Returns an error if either value is negative.
    pub fn new(capacity: i64, fuel_rate: i64) -> Result<Self, ModelError> {
        if capacity < 0 {
            return Err(ModelError::NegativeCapacity(capacity));
        }
        if fuel_rate < 0 {
            return Err(ModelError::NegativeFuelRate(fuel_rate));
        }
        Ok(Self {
            capacity,
            fuel_rate,
        })
    }

    /// Maximum total weight this van can carry at once.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Fuel consumed per unit distance traveled.
    pub fn fuel_rate(&self) -> i64 {
        self.fuel_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_van_new() {
        let v = Van::new(10, 8).unwrap();
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.fuel_rate(), 8);
    }

    #[test]
    fn test_van_zero_values() {
        let v = Van::new(0, 0).unwrap();
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.fuel_rate(), 0);
    }

    #[test]
    fn test_van_negative_capacity() {
        assert_eq!(Van::new(-3, 8), Err(ModelError::NegativeCapacity(-3)));
    }

    #[test]
    fn test_van_negative_fuel_rate() {
        assert_eq!(Van::new(10, -1), Err(ModelError::NegativeFuelRate(-1)));
    }
}
