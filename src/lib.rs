//! # van-routing
//!
//! Exact route optimization for a fleet of delivery vans: given packages with
//! pickup/delivery locations on a one-dimensional axis and weights, find the
//! single van and action sequence with the lowest fuel cost, subject to
//! per-van carrying capacity and pickup-before-delivery ordering.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Van, Package, Route, RouteResult, outcomes)
//! - [`sequence`] — Lazy action-ordering generation and feasibility checking
//! - [`evaluation`] — Route simulation, capacity checking, and cost computing
//! - [`optimizer`] — The exhaustive minimum-fuel search
//!
//! ## Example
//!
//! ```
//! use van_routing::models::{OptimizationOutcome, Package, Van};
//! use van_routing::optimizer::optimize;
//!
//! let vans = vec![Van::new(9, 8).unwrap()];
//! let packages = vec![Package::new(3, 7, 5).unwrap()];
//!
//! let outcome = optimize(&vans, &packages);
//! assert!(matches!(outcome, OptimizationOutcome::Found(_)));
//! ```

pub mod evaluation;
pub mod models;
pub mod optimizer;
pub mod sequence;
