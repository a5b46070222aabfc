//! Optimization result types.

use serde::{Deserialize, Serialize};

use super::{Route, Van};

/// The best route found for a specific van, with its cost figures.
///
/// # Examples
///
/// ```
/// use van_routing::models::{ActionEvent, Route, RouteResult, Van};
///
/// let van = Van::new(9, 8).unwrap();
/// let route = Route::new(vec![ActionEvent::start(), ActionEvent::end()]);
/// let result = RouteResult::new(van, route, 0, 0);
/// assert_eq!(result.total_fuel(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    van: Van,
    route: Route,
    total_distance: i64,
    total_fuel: i64,
}

impl RouteResult {
    /// Creates a result for the given van and route trace.
    pub fn new(van: Van, route: Route, total_distance: i64, total_fuel: i64) -> Self {
        Self {
            van,
            route,
            total_distance,
            total_fuel,
        }
    }

    /// The van that drives this route.
    pub fn van(&self) -> &Van {
        &self.van
    }

    /// The full event trace from origin back to origin.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Sum of absolute location differences over consecutive events.
    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }

    /// `total_distance * van.fuel_rate()`, the optimization objective.
    pub fn total_fuel(&self) -> i64 {
        self.total_fuel
    }
}

/// The outcome of a fleet optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizationOutcome {
    /// The globally best feasible (van, route) pair.
    Found(RouteResult),
    /// No van and action ordering satisfies the constraints.
    Infeasible,
}

impl OptimizationOutcome {
    /// The contained result, or `None` for [`OptimizationOutcome::Infeasible`].
    pub fn found(&self) -> Option<&RouteResult> {
        match self {
            OptimizationOutcome::Found(result) => Some(result),
            OptimizationOutcome::Infeasible => None,
        }
    }
}
