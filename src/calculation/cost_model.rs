//! The benefits cost model.
//!
//! Costs are quoted per month and converted to per-period amounts by the
//! paycheck calculation. The values are fixed at compile time.

use rust_decimal::Decimal;

/// Number of months used to annualise a monthly cost.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Dependents strictly older than this many whole years attract the
/// over-50 surcharge. A dependent aged exactly 50 does not.
pub const DEPENDENT_SURCHARGE_AGE: i32 = 50;

/// Benefit costs and thresholds applied to every paycheck.
///
/// # Example
///
/// ```
/// use benefits_engine::calculation::CostModel;
/// use rust_decimal::Decimal;
///
/// let model = CostModel::default();
/// assert_eq!(model.periods_per_year, 26);
/// assert_eq!(model.high_earner_threshold, Decimal::from(80_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostModel {
    /// Paychecks issued per year.
    pub periods_per_year: u32,
    /// Monthly benefit cost for the employee.
    pub employee_monthly_cost: Decimal,
    /// Monthly benefit cost for each dependent.
    pub dependent_monthly_cost: Decimal,
    /// Extra monthly cost for each dependent over [`DEPENDENT_SURCHARGE_AGE`].
    pub over_50_monthly_cost: Decimal,
    /// Annual salary above which the high-earner surcharge applies.
    pub high_earner_threshold: Decimal,
    /// Fraction of annual salary charged to high earners (0.02 = 2%).
    pub high_earner_rate: Decimal,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            periods_per_year: 26,
            employee_monthly_cost: Decimal::from(1000),
            dependent_monthly_cost: Decimal::from(600),
            over_50_monthly_cost: Decimal::from(200),
            high_earner_threshold: Decimal::from(80_000),
            high_earner_rate: Decimal::new(2, 2),
        }
    }
}

impl CostModel {
    /// Returns `periods_per_year` as a decimal divisor.
    pub fn periods(&self) -> Decimal {
        Decimal::from(self.periods_per_year)
    }

    /// Annualises a monthly cost.
    pub fn annual(monthly: Decimal) -> Decimal {
        monthly * Decimal::from(MONTHS_PER_YEAR)
    }
}
