//! Route trace types.

use serde::{Deserialize, Serialize};

use super::Package;

/// The kind of a route event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Departure from the origin.
    Start,
    /// Collecting a package at its pickup location.
    Pick,
    /// Dropping a package at its delivery location.
    Drop,
    /// Return to the origin.
    End,
}

/// A single event in a route trace.
///
/// `Start` and `End` events carry no package and are always at location 0;
/// `Pick` and `Drop` events record the package being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// What happened at this stop.
    pub kind: ActionKind,
    /// Position on the axis where the event occurred.
    pub location: i64,
    /// The package picked or dropped, if any.
    pub package: Option<Package>,
}

impl ActionEvent {
    /// The departure event at the origin.
    pub fn start() -> Self {
        Self {
            kind: ActionKind::Start,
            location: 0,
            package: None,
        }
    }

    /// The return event at the origin.
    pub fn end() -> Self {
        Self {
            kind: ActionKind::End,
            location: 0,
            package: None,
        }
    }

    /// A pickup event for the given package.
    pub fn pick(package: Package) -> Self {
        Self {
            kind: ActionKind::Pick,
            location: package.pickup(),
            package: Some(package),
        }
    }

    /// A delivery event for the given package.
    pub fn drop(package: Package) -> Self {
        Self {
            kind: ActionKind::Drop,
            location: package.delivery(),
            package: Some(package),
        }
    }
}

/// An ordered trace of events from the origin back to the origin.
///
/// # Examples
///
/// ```
/// use van_routing::models::{ActionEvent, ActionKind, Route};
///
/// let route = Route::new(vec![ActionEvent::start(), ActionEvent::end()]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.events()[0].kind, ActionKind::Start);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    events: Vec<ActionEvent>,
}

impl Route {
    /// Creates a route from its event trace.
    pub fn new(events: Vec<ActionEvent>) -> Self {
        Self { events }
    }

    /// The ordered event trace.
    pub fn events(&self) -> &[ActionEvent] {
        &self.events
    }

    /// Number of events, including `Start` and `End`.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the trace holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The locations visited, in order.
    pub fn locations(&self) -> Vec<i64> {
        self.events.iter().map(|e| e.location).collect()
    }
}
