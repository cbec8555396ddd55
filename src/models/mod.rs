//! Core data models for the Benefits Engine.
//!
//! This module contains the roster records and the paycheck breakdown
//! used throughout the engine.

mod employee;
mod paycheck;

pub use employee::{Dependent, Employee, Relationship};
pub use paycheck::Paycheck;
