//! In-memory roster implementation.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Dependent, Employee};

use super::Roster;

const SALARY_SCALE: u32 = 2;

/// A fixed list of employees with id indexes for lookups.
///
/// # Example
///
/// ```
/// use benefits_engine::models::Employee;
/// use benefits_engine::roster::{InMemoryRoster, Roster};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let roster = InMemoryRoster::new(vec![Employee {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::new(7542099, 2),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// }])?;
///
/// assert!(roster.find_employee(1).is_some());
/// assert!(roster.find_employee(2).is_none());
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    employees: Vec<Employee>,
    employee_index: HashMap<i32, usize>,
    // dependent id -> (employee position, dependent position)
    dependent_index: HashMap<i32, (usize, usize)>,
}

impl InMemoryRoster {
    /// Builds a roster, checking its integrity.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmployeeId` if two employees share an id
    /// - `DuplicateDependentId` if two dependents anywhere in the roster share an id
    /// - `InvalidEmployee` if a salary is negative or has more than two
    ///   fractional digits
    ///
    /// Salaries are rescaled to exactly two fractional digits, so `80000`
    /// is served as `80000.00`.
    pub fn new(mut employees: Vec<Employee>) -> EngineResult<Self> {
        let mut employee_index = HashMap::with_capacity(employees.len());
        let mut dependent_index = HashMap::new();

        for (employee_pos, employee) in employees.iter_mut().enumerate() {
            if employee.salary < Decimal::ZERO {
                return Err(EngineError::InvalidEmployee {
                    id: employee.id,
                    field: "salary".to_string(),
                    message: format!("must not be negative, got {}", employee.salary),
                });
            }
            if employee.salary.scale() > SALARY_SCALE {
                return Err(EngineError::InvalidEmployee {
                    id: employee.id,
                    field: "salary".to_string(),
                    message: format!("must be in whole cents, got {}", employee.salary),
                });
            }
            employee.salary.rescale(SALARY_SCALE);

            if employee_index.insert(employee.id, employee_pos).is_some() {
                return Err(EngineError::DuplicateEmployeeId { id: employee.id });
            }

            for (dependent_pos, dependent) in employee.dependents.iter().enumerate() {
                if dependent_index
                    .insert(dependent.id, (employee_pos, dependent_pos))
                    .is_some()
                {
                    return Err(EngineError::DuplicateDependentId { id: dependent.id });
                }
            }
        }

        Ok(Self {
            employees,
            employee_index,
            dependent_index,
        })
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Roster for InMemoryRoster {
    fn find_employee(&self, id: i32) -> Option<&Employee> {
        self.employee_index
            .get(&id)
            .map(|&position| &self.employees[position])
    }

    fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    fn find_dependent(&self, id: i32) -> Option<&Dependent> {
        self.dependent_index
            .get(&id)
            .map(|&(employee_pos, dependent_pos)| {
                &self.employees[employee_pos].dependents[dependent_pos]
            })
    }
}
