//! Order-feasibility predicate.

use super::{Step, StepKind};

/// Returns `true` if every delivery in `ordering` is preceded by an
/// outstanding pickup of the same package.
///
/// Pickups and deliveries are paired by package index, so two packages with
/// identical pickup, delivery, and weight are still matched to their own
/// actions. Returns `false` as soon as a delivery appears for a package that
/// is not currently picked. Pure function; `ordering` must only reference
/// package indices below `num_packages`.
///
/// # Examples
///
/// ```
/// use van_routing::sequence::{is_order_feasible, Step};
///
/// let good = [Step::pickup(0), Step::delivery(0)];
/// let bad = [Step::delivery(0), Step::pickup(0)];
/// assert!(is_order_feasible(&good, 1));
/// assert!(!is_order_feasible(&bad, 1));
/// ```
pub fn is_order_feasible(ordering: &[Step], num_packages: usize) -> bool {
    let mut outstanding = vec![false; num_packages];
    for step in ordering {
        match step.kind {
            StepKind::Pickup => outstanding[step.package] = true,
            StepKind::Delivery => {
                if !outstanding[step.package] {
                    return false;
                }
                outstanding[step.package] = false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_feasible() {
        assert!(is_order_feasible(&[], 0));
    }

    #[test]
    fn test_pick_before_drop() {
        let seq = [
            Step::pickup(0),
            Step::pickup(1),
            Step::delivery(1),
            Step::delivery(0),
        ];
        assert!(is_order_feasible(&seq, 2));
    }

    #[test]
    fn test_drop_before_pick_rejected() {
        let seq = [
            Step::pickup(0),
            Step::delivery(1),
            Step::pickup(1),
            Step::delivery(0),
        ];
        assert!(!is_order_feasible(&seq, 2));
    }

    #[test]
    fn test_drop_of_other_package_rejected() {
        // picking package 0 does not license dropping package 1
        let seq = [Step::pickup(0), Step::delivery(1)];
        assert!(!is_order_feasible(&seq, 2));
    }
}
