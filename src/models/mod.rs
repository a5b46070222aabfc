//! Domain model types for single-van pickup-and-delivery routing.
//!
//! Provides the core abstractions: vans with capacity and fuel rate, packages
//! with pickup/delivery locations on a one-dimensional axis, route traces as
//! ordered action events, and the optimization outcome types.

mod error;
mod outcome;
mod package;
mod route;
mod van;

pub use error::ModelError;
pub use outcome::{OptimizationOutcome, RouteResult};
pub use package::Package;
pub use route::{ActionEvent, ActionKind, Route};
pub use van::Van;
