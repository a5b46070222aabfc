//! Property-based checks for the optimizer against small brute-forced
//! instances.

use std::collections::HashMap;

use proptest::prelude::*;

use van_routing::evaluation::RouteEvaluator;
use van_routing::models::{ActionKind, OptimizationOutcome, Package, RouteResult, Van};
use van_routing::optimizer::optimize;
use van_routing::sequence::{all_orderings, is_order_feasible};

fn van_strategy() -> impl Strategy<Value = Van> {
    (0i64..=25, 0i64..=15).prop_map(|(capacity, rate)| Van::new(capacity, rate).unwrap())
}

fn package_strategy() -> impl Strategy<Value = Package> {
    (-10i64..=10, -10i64..=10, 0i64..=12)
        .prop_map(|(pickup, delivery, weight)| Package::new(pickup, delivery, weight).unwrap())
}

/// Minimum fuel over every (van, permutation) pair, filtering permutations
/// through the validator instead of generating feasible orderings directly.
fn brute_force_best_fuel(vans: &[Van], packages: &[Package]) -> Option<i64> {
    let mut best: Option<i64> = None;
    for van in vans {
        let evaluator = RouteEvaluator::new(van, packages);
        for ordering in all_orderings(packages.len()) {
            if !is_order_feasible(&ordering, packages.len()) {
                continue;
            }
            if let Some(result) = evaluator.evaluate(&ordering) {
                let fuel = result.total_fuel();
                if best.map_or(true, |b| fuel < b) {
                    best = Some(fuel);
                }
            }
        }
    }
    best
}

/// Asserts the returned route's invariants: start/end at the origin,
/// pickup before delivery, capacity respected at every prefix, and cost
/// figures consistent with the event trace.
fn assert_route_invariants(result: &RouteResult, packages: &[Package]) {
    let events = result.route().events();
    assert!(events.len() >= 2);
    let first = &events[0];
    let last = &events[events.len() - 1];
    assert_eq!(first.kind, ActionKind::Start);
    assert_eq!(first.location, 0);
    assert_eq!(last.kind, ActionKind::End);
    assert_eq!(last.location, 0);

    let mut outstanding: HashMap<Package, i64> = HashMap::new();
    let mut carried: i64 = 0;
    let mut distance: i64 = 0;
    let mut prev_location: i64 = 0;

    for event in &events[1..] {
        distance += (event.location - prev_location).abs();
        prev_location = event.location;
        match event.kind {
            ActionKind::Pick => {
                let package = event.package.expect("pick event carries a package");
                carried += package.weight();
                assert!(carried <= result.van().capacity());
                *outstanding.entry(package).or_insert(0) += 1;
            }
            ActionKind::Drop => {
                let package = event.package.expect("drop event carries a package");
                carried -= package.weight();
                let count = outstanding.entry(package).or_insert(0);
                assert!(*count > 0, "delivery without an outstanding pickup");
                *count -= 1;
            }
            ActionKind::Start | ActionKind::End => {}
        }
    }

    assert!(outstanding.values().all(|&c| c == 0));
    assert_eq!(events.len(), 2 * packages.len() + 2);
    assert_eq!(result.total_distance(), distance);
    assert_eq!(
        result.total_fuel(),
        result.total_distance() * result.van().fuel_rate()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn optimize_is_optimal(
        vans in prop::collection::vec(van_strategy(), 0..=3),
        packages in prop::collection::vec(package_strategy(), 0..=3),
    ) {
        let outcome = optimize(&vans, &packages);
        let expected = brute_force_best_fuel(&vans, &packages);
        match (&outcome, expected) {
            (OptimizationOutcome::Found(result), Some(best_fuel)) => {
                prop_assert_eq!(result.total_fuel(), best_fuel);
            }
            (OptimizationOutcome::Infeasible, None) => {}
            (got, want) => {
                return Err(TestCaseError::fail(format!(
                    "feasibility mismatch: got {got:?}, brute force {want:?}"
                )));
            }
        }
    }

    #[test]
    fn returned_route_satisfies_invariants(
        vans in prop::collection::vec(van_strategy(), 1..=3),
        packages in prop::collection::vec(package_strategy(), 0..=3),
    ) {
        if let OptimizationOutcome::Found(result) = optimize(&vans, &packages) {
            assert_route_invariants(&result, &packages);
        }
    }

    #[test]
    fn optimize_is_deterministic(
        vans in prop::collection::vec(van_strategy(), 0..=3),
        packages in prop::collection::vec(package_strategy(), 0..=3),
    ) {
        let first = optimize(&vans, &packages);
        let second = optimize(&vans, &packages);
        prop_assert_eq!(first, second);
    }
}
