//! Route simulation and cost evaluation.

mod evaluator;

pub use evaluator::RouteEvaluator;
