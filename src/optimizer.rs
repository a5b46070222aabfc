//! Exhaustive search for the minimum-fuel (van, route) pair.

use tracing::{debug, trace};

use crate::evaluation::RouteEvaluator;
use crate::models::{OptimizationOutcome, Package, RouteResult, Van};
use crate::sequence::feasible_orderings;

/// Finds the single van and action sequence with the lowest fuel cost.
///
/// Every van is evaluated independently against the full package set: for
/// each order-feasible ordering of pickups and deliveries, the route is
/// simulated from the origin and back, orderings that would overload the van
/// are skipped, and the result with strictly smaller fuel than the best seen
/// so far is retained. Ties keep the first result found, so the enumeration
/// order (vans in input order, orderings in the generator's lexicographic
/// order) makes the search fully deterministic.
///
/// Returns [`OptimizationOutcome::Infeasible`] when no van can serve the
/// package set at all — for example a package heavier than every van's
/// capacity, or an empty fleet with packages to move.
///
/// # Examples
///
/// ```
/// use van_routing::models::{OptimizationOutcome, Package, Van};
/// use van_routing::optimizer::optimize;
///
/// let vans = vec![Van::new(10, 10).unwrap(), Van::new(9, 8).unwrap()];
/// let packages = vec![
///     Package::new(-1, 5, 4).unwrap(),
///     Package::new(6, 2, 9).unwrap(),
///     Package::new(-2, 9, 3).unwrap(),
/// ];
///
/// match optimize(&vans, &packages) {
///     OptimizationOutcome::Found(best) => {
///         assert_eq!(best.van().fuel_rate(), 8);
///     }
///     OptimizationOutcome::Infeasible => unreachable!(),
/// }
/// ```
pub fn optimize(vans: &[Van], packages: &[Package]) -> OptimizationOutcome {
    let mut best: Option<RouteResult> = None;

    for van in vans {
        debug!(
            capacity = van.capacity(),
            fuel_rate = van.fuel_rate(),
            "evaluating van"
        );
        let evaluator = RouteEvaluator::new(van, packages);
        for ordering in feasible_orderings(packages.len()) {
            let Some(result) = evaluator.evaluate(&ordering) else {
                continue;
            };
            let improved = best
                .as_ref()
                .map_or(true, |b| result.total_fuel() < b.total_fuel());
            if improved {
                trace!(
                    fuel = result.total_fuel(),
                    distance = result.total_distance(),
                    "new best route"
                );
                best = Some(result);
            }
        }
    }

    match best {
        Some(result) => OptimizationOutcome::Found(result),
        None => OptimizationOutcome::Infeasible,
    }
}
