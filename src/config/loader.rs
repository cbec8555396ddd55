//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading the employee
//! roster from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::roster::InMemoryRoster;

use super::types::RosterConfig;

/// Loads the employee roster from YAML.
///
/// # File Structure
///
/// ```text
/// employees:
///   - id: 2
///     firstName: Ja
///     lastName: Morant
///     salary: "92365.22"      # quoted so the decimal is exact
///     dateOfBirth: 1999-08-10
///     dependents:
///       - id: 1
///         firstName: Spouse
///         lastName: Morant
///         relationship: Spouse  # Spouse | Child | DomesticPartner
///         dateOfBirth: 1998-03-03
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::RosterLoader;
/// use benefits_engine::roster::Roster;
///
/// let roster = RosterLoader::load("./config/roster.yaml")?;
/// println!("Loaded {} employees", roster.list_employees().len());
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Loads and validates the roster file at `path`.
    ///
    /// # Returns
    ///
    /// Returns an `InMemoryRoster` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or field values (`ConfigParseError`)
    /// - The roster fails integrity checks (duplicate ids, negative salary)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<InMemoryRoster> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses and validates roster YAML held in memory.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<InMemoryRoster> {
        let config: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            source = source,
            employees = config.employees.len(),
            "Parsed roster file"
        );

        InMemoryRoster::new(config.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Relationship;
    use crate::roster::Roster;
    use chrono::NaiveDate;

    const SAMPLE_YAML: &str = r#"
employees:
  - id: 1
    firstName: LeBron
    lastName: James
    salary: "75420.99"
    dateOfBirth: 1984-12-30
  - id: 3
    firstName: Michael
    lastName: Jordan
    salary: "143211.12"
    dateOfBirth: 1963-02-17
    dependents:
      - id: 4
        firstName: DP
        lastName: Jordan
        relationship: DomesticPartner
        dateOfBirth: 1975-05-15
"#;

    #[test]
    fn test_from_yaml_str_builds_roster() {
        let roster = RosterLoader::from_yaml_str(SAMPLE_YAML, "inline").unwrap();

        let ids: Vec<i32> = roster.list_employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let dependent = roster.find_dependent(4).unwrap();
        assert_eq!(dependent.relationship, Relationship::DomesticPartner);
        assert_eq!(
            dependent.date_of_birth,
            NaiveDate::from_ymd_opt(1975, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_whole_dollar_salary_serializes_with_cents() {
        let yaml = r#"
employees:
  - id: 1
    firstName: Employee1
    lastName: Last1
    salary: "80000"
    dateOfBirth: 1988-03-14
"#;
        let roster = RosterLoader::from_yaml_str(yaml, "inline").unwrap();
        let json = serde_json::to_value(roster.find_employee(1).unwrap()).unwrap();
        assert_eq!(json["salary"], "80000.00");
    }

    #[test]
    fn test_sub_cent_salary_is_invalid_employee() {
        let yaml = r#"
employees:
  - id: 2
    firstName: Employee2
    lastName: Last2
    salary: "52000.125"
    dateOfBirth: 1988-03-14
"#;
        let result = RosterLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { id: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_reports_source() {
        let result = RosterLoader::from_yaml_str("employees: [ { id: ", "broken.yaml");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "broken.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_relationship_is_parse_error() {
        let yaml = r#"
employees:
  - id: 1
    firstName: A
    lastName: B
    salary: "1000.00"
    dateOfBirth: 1990-01-01
    dependents:
      - id: 1
        firstName: C
        lastName: B
        relationship: Cousin
        dateOfBirth: 2010-01-01
"#;
        let result = RosterLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_integrity_errors_pass_through() {
        let yaml = r#"
employees:
  - id: 1
    firstName: A
    lastName: B
    salary: "1000.00"
    dateOfBirth: 1990-01-01
  - id: 1
    firstName: C
    lastName: D
    salary: "2000.00"
    dateOfBirth: 1991-01-01
"#;
        let result = RosterLoader::from_yaml_str(yaml, "inline");
        assert!(matches!(
            result,
            Err(EngineError::DuplicateEmployeeId { id: 1 })
        ));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = RosterLoader::load("/nonexistent/roster.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert_eq!(path, "/nonexistent/roster.yaml")
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_bundled_roster_loads() {
        let roster = RosterLoader::load("./config/roster.yaml").unwrap();
        assert_eq!(roster.list_employees().len(), 6);
        assert_eq!(roster.list_dependents().len(), 11);
    }
}
