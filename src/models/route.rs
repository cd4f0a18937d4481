//! Route and stop types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AutomobileId;

/// The action performed at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopAction {
    /// Load an automobile onto the carrier.
    Pickup,
    /// Unload an automobile from the carrier.
    Dropoff,
}

impl fmt::Display for StopAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopAction::Pickup => write!(f, "pickup"),
            StopAction::Dropoff => write!(f, "dropoff"),
        }
    }
}

/// A single stop on the route: one action applied to one automobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stop {
    /// Whether the automobile is loaded or unloaded here.
    pub action: StopAction,
    /// The automobile the action applies to.
    pub automobile: AutomobileId,
}

impl Stop {
    /// Creates a pickup stop.
    pub fn pickup(automobile: AutomobileId) -> Self {
        Self {
            action: StopAction::Pickup,
            automobile,
        }
    }

    /// Creates a dropoff stop.
    pub fn dropoff(automobile: AutomobileId) -> Self {
        Self {
            action: StopAction::Dropoff,
            automobile,
        }
    }
}

/// An ordered sequence of stops the carrier must serve.
///
/// Every automobile must be picked up exactly once before it is dropped off
/// exactly once; [`LoadingProblem`](super::LoadingProblem) validates this at
/// construction.
///
/// # Examples
///
/// ```
/// use u_loading::models::{Route, Stop};
///
/// let route = Route::from_stops(vec![
///     Stop::pickup(1),
///     Stop::pickup(2),
///     Stop::dropoff(1),
///     Stop::dropoff(2),
/// ]);
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.stops()[0], Stop::pickup(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route from an ordered list of stops.
    pub fn from_stops(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Appends a stop to the end of the route.
    pub fn push(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// The ordered stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
