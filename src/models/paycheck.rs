//! Paycheck breakdown model.
//!
//! This module contains the [`Paycheck`] type returned by the paycheck
//! calculation: one pay period's gross pay, the four benefit deductions,
//! their total, and the resulting net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single pay period's paycheck for one employee.
///
/// Every amount is rounded to cents and carries exactly two fractional
/// digits, so it serializes as e.g. `"461.54"` or `"0.00"`.
///
/// # Invariants
///
/// - `total_deductions` is the sum of the four deduction fields.
/// - `net_pay` is `gross_pay - total_deductions`.
///
/// # Example
///
/// ```
/// use benefits_engine::models::Paycheck;
/// use rust_decimal::Decimal;
///
/// let paycheck = Paycheck {
///     employee_id: 1,
///     employee_name: "LeBron James".to_string(),
///     gross_pay: Decimal::new(290081, 2),
///     employee_deductions: Decimal::new(46154, 2),
///     dependent_deductions: Decimal::new(0, 2),
///     dependent_over_50_deductions: Decimal::new(0, 2),
///     high_earner_deductions: Decimal::new(0, 2),
///     total_deductions: Decimal::new(46154, 2),
///     net_pay: Decimal::new(243927, 2),
/// };
/// assert_eq!(paycheck.net_pay, paycheck.gross_pay - paycheck.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paycheck {
    /// The employee this paycheck belongs to.
    pub employee_id: i32,
    /// Display name, `"{first} {last}"`.
    pub employee_name: String,
    /// Salary for one pay period.
    pub gross_pay: Decimal,
    /// Per-period share of the employee's own benefit cost.
    pub employee_deductions: Decimal,
    /// Per-period share of the dependents' benefit cost.
    pub dependent_deductions: Decimal,
    /// Per-period share of the surcharge for dependents over 50.
    #[serde(rename = "dependentOver50Deductions")]
    pub dependent_over_50_deductions: Decimal,
    /// Per-period share of the high-earner surcharge.
    pub high_earner_deductions: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}
