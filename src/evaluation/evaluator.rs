//! Route evaluator that simulates an ordering into a costed route.

use crate::models::{ActionEvent, Package, Route, RouteResult, Van};
use crate::sequence::{Step, StepKind};

/// Simulates action orderings for one van, computing the event trace, total
/// distance, and fuel cost, and rejecting orderings that overload the van.
///
/// # Examples
///
/// ```
/// use van_routing::evaluation::RouteEvaluator;
/// use van_routing::models::{Package, Van};
/// use van_routing::sequence::Step;
///
/// let van = Van::new(10, 2).unwrap();
/// let packages = vec![Package::new(3, 7, 5).unwrap()];
/// let evaluator = RouteEvaluator::new(&van, &packages);
///
/// let result = evaluator.evaluate(&[Step::pickup(0), Step::delivery(0)]).unwrap();
/// // 0 -> 3 -> 7 -> 0
/// assert_eq!(result.total_distance(), 14);
/// assert_eq!(result.total_fuel(), 28);
/// ```
pub struct RouteEvaluator<'a> {
    van: &'a Van,
    packages: &'a [Package],
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for the given van and package set.
    pub fn new(van: &'a Van, packages: &'a [Package]) -> Self {
        Self { van, packages }
    }

    /// Simulates `ordering` from the origin, returning the costed route.
    ///
    /// Returns `None` when a pickup would exceed the van's capacity (a
    /// weight sum past `i64::MAX` counts as exceeding it). That is an
    /// expected, frequent outcome of the search, not an error. Steps
    /// referencing package indices outside the package set also yield
    /// `None`; orderings that deliver before picking up trip a debug
    /// assertion. Distances and fuel accumulate in plain `i64`, so locations
    /// and fuel rates must be small enough that
    /// `total_distance * fuel_rate` fits.
    pub fn evaluate(&self, ordering: &[Step]) -> Option<RouteResult> {
        let mut events = Vec::with_capacity(ordering.len() + 2);
        events.push(ActionEvent::start());

        let mut location: i64 = 0;
        let mut carried: i64 = 0;
        let mut total_distance: i64 = 0;

        for step in ordering {
            let package = *self.packages.get(step.package)?;
            let event = match step.kind {
                StepKind::Pickup => {
                    match carried.checked_add(package.weight()) {
                        Some(loaded) if loaded <= self.van.capacity() => carried = loaded,
                        _ => return None,
                    }
                    ActionEvent::pick(package)
                }
                StepKind::Delivery => {
                    carried -= package.weight();
                    debug_assert!(carried >= 0, "delivery without an outstanding pickup");
                    ActionEvent::drop(package)
                }
            };
            total_distance += (event.location - location).abs();
            location = event.location;
            events.push(event);
        }

        // Final leg back to the origin.
        total_distance += location.abs();
        events.push(ActionEvent::end());

        let total_fuel = total_distance * self.van.fuel_rate();
        Some(RouteResult::new(
            *self.van,
            Route::new(events),
            total_distance,
            total_fuel,
        ))
    }
}
