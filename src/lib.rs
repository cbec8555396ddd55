//! Benefits Engine
//!
//! This crate serves a read-only roster of employees and their dependents
//! and calculates each employee's per-pay-period paycheck after benefit
//! deductions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
