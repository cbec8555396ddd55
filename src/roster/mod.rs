//! Read-only access to the employee roster.
//!
//! The [`Roster`] trait is the capability handed to the HTTP layer; the
//! bundled implementation is [`InMemoryRoster`], populated once at startup.
//! Lookups return `Option` and never fail.

mod memory;

pub use memory::InMemoryRoster;

use crate::models::{Dependent, Employee};

/// Read-only queries over employees and their dependents.
pub trait Roster: Send + Sync {
    /// Finds an employee by id.
    fn find_employee(&self, id: i32) -> Option<&Employee>;

    /// Returns all employees in insertion order.
    fn list_employees(&self) -> &[Employee];

    /// Finds a dependent by id, searching every employee's dependents.
    fn find_dependent(&self, id: i32) -> Option<&Dependent> {
        self.list_employees()
            .iter()
            .flat_map(|employee| employee.dependents.iter())
            .find(|dependent| dependent.id == id)
    }

    /// Returns every dependent, in employee order and then enrolment order.
    fn list_dependents(&self) -> Vec<&Dependent> {
        self.list_employees()
            .iter()
            .flat_map(|employee| employee.dependents.iter())
            .collect()
    }
}
