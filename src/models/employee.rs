//! Employee and dependent models.
//!
//! This module defines the Employee and Dependent structs and the
//! Relationship enum for representing the benefits roster.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a dependent is related to the employee who covers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Relationship {
    /// Married partner of the employee.
    Spouse,
    /// Child of the employee.
    Child,
    /// Unmarried partner sharing a household with the employee.
    DomesticPartner,
}

/// A person covered by an employee's benefits.
///
/// Dependent ids are unique across the whole roster, not only within the
/// owning employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dependent {
    /// Unique identifier for the dependent.
    pub id: i32,
    /// The dependent's first name.
    pub first_name: String,
    /// The dependent's last name.
    pub last_name: String,
    /// How the dependent is related to the employee.
    pub relationship: Relationship,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
}

/// Represents an employee enrolled in benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i32,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual salary.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Dependents covered by this employee, in enrolment order.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Employee {
    /// Returns the name shown on a paycheck, `"{first} {last}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "LeBron".to_string(),
    ///     last_name: "James".to_string(),
    ///     salary: Decimal::new(7542099, 2),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
    ///     dependents: vec![],
    /// };
    /// assert_eq!(employee.display_name(), "LeBron James");
    /// ```
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
