//! Application state for the Benefits Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::CostModel;
use crate::clock::Clock;
use crate::roster::Roster;

/// Shared application state.
///
/// Holds the read-only roster, the date source used for age checks, and
/// the benefits cost model. Everything is behind `Arc`, so cloning per
/// request is cheap.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<dyn Roster>,
    clock: Arc<dyn Clock>,
    cost_model: Arc<CostModel>,
}

impl AppState {
    /// Creates application state using the default cost model.
    pub fn new<R, C>(roster: R, clock: C) -> Self
    where
        R: Roster + 'static,
        C: Clock + 'static,
    {
        Self {
            roster: Arc::new(roster),
            clock: Arc::new(clock),
            cost_model: Arc::new(CostModel::default()),
        }
    }

    /// Replaces the cost model.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = Arc::new(cost_model);
        self
    }

    /// Returns the roster.
    pub fn roster(&self) -> &dyn Roster {
        self.roster.as_ref()
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns the cost model.
    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::roster::InMemoryRoster;
    use chrono::NaiveDate;

    #[test]
    fn test_app_state_is_clone_send_sync() {
        // axum state must be Clone + Send + Sync + 'static
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_with_cost_model_overrides_default() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        let state = AppState::new(InMemoryRoster::default(), clock).with_cost_model(CostModel {
            periods_per_year: 52,
            ..CostModel::default()
        });

        assert_eq!(state.cost_model().periods_per_year, 52);
        assert_eq!(state.clock().today(), NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert!(state.roster().list_employees().is_empty());
    }
}
