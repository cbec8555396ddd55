//! Calculation logic for the Benefits Engine.
//!
//! This module contains the benefits cost model, whole-year age
//! calculation for dependents, and the per-pay-period paycheck calculation
//! that combines them.

mod age;
mod cost_model;
mod paycheck;

pub use age::age_on;
pub use cost_model::{CostModel, DEPENDENT_SURCHARGE_AGE, MONTHS_PER_YEAR};
pub use paycheck::calculate_paycheck;
