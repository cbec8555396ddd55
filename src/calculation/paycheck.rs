//! Paycheck calculation.
//!
//! Converts an employee's annual salary and the annual benefit costs of
//! the employee and their dependents into one pay period's breakdown.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Employee, Paycheck};

use super::age::age_on;
use super::cost_model::{CostModel, DEPENDENT_SURCHARGE_AGE};

/// Rounds to cents and fixes the scale at two digits so zero renders as `0.00`.
fn round_to_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    cents.rescale(2);
    cents
}

/// Splits an annual amount into one pay period, rounded to cents.
fn per_period(annual: Decimal, cost_model: &CostModel) -> Decimal {
    round_to_cents(annual / cost_model.periods())
}

/// Calculates one pay period's paycheck for an employee.
///
/// Annual amounts are accumulated in full and divided by the number of pay
/// periods only at the end; each component is rounded to cents on its own,
/// and the total is the sum of the rounded components.
///
/// - Every dependent costs `dependent_monthly_cost` per month.
/// - Dependents whose age on `today` is strictly greater than
///   [`DEPENDENT_SURCHARGE_AGE`] add `over_50_monthly_cost` per month.
/// - A salary strictly greater than `high_earner_threshold` adds
///   `high_earner_rate` of the salary per year.
///
/// # Arguments
///
/// * `employee` - The employee to pay
/// * `cost_model` - Benefit costs and thresholds
/// * `today` - The date against which dependent ages are evaluated
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::{calculate_paycheck, CostModel};
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::from_str("75420.99").unwrap(),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
///
/// let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let paycheck = calculate_paycheck(&employee, &CostModel::default(), today);
/// assert_eq!(paycheck.gross_pay, Decimal::from_str("2900.81").unwrap());
/// assert_eq!(paycheck.net_pay, Decimal::from_str("2439.27").unwrap());
/// ```
pub fn calculate_paycheck(
    employee: &Employee,
    cost_model: &CostModel,
    today: NaiveDate,
) -> Paycheck {
    let employee_annual = CostModel::annual(cost_model.employee_monthly_cost);

    let mut dependent_annual = Decimal::ZERO;
    let mut over_50_annual = Decimal::ZERO;
    for dependent in &employee.dependents {
        dependent_annual += CostModel::annual(cost_model.dependent_monthly_cost);
        if age_on(dependent.date_of_birth, today) > DEPENDENT_SURCHARGE_AGE {
            over_50_annual += CostModel::annual(cost_model.over_50_monthly_cost);
        }
    }

    let high_earner_annual = if employee.salary > cost_model.high_earner_threshold {
        employee.salary * cost_model.high_earner_rate
    } else {
        Decimal::ZERO
    };

    let gross_pay = per_period(employee.salary, cost_model);
    let employee_deductions = per_period(employee_annual, cost_model);
    let dependent_deductions = per_period(dependent_annual, cost_model);
    let dependent_over_50_deductions = per_period(over_50_annual, cost_model);
    let high_earner_deductions = per_period(high_earner_annual, cost_model);

    let total_deductions = employee_deductions
        + dependent_deductions
        + dependent_over_50_deductions
        + high_earner_deductions;

    Paycheck {
        employee_id: employee.id,
        employee_name: employee.display_name(),
        gross_pay,
        employee_deductions,
        dependent_deductions,
        dependent_over_50_deductions,
        high_earner_deductions,
        total_deductions,
        net_pay: gross_pay - total_deductions,
    }
}
