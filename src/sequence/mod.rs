//! Action-sequence generation and ordering feasibility.
//!
//! - [`generator`] — lazy enumeration of pickup/delivery orderings
//! - [`validator`] — the pickup-before-delivery predicate

pub mod generator;
pub mod validator;

pub use generator::{
    all_orderings, base_steps, feasible_orderings, FeasibleOrderings, Permutations, Step, StepKind,
};
pub use validator::is_order_feasible;
