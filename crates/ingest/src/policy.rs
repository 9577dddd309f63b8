use std::fs;
use std::path::Path;

use sentinel_core::Policy;

use crate::error::IngestError;

/// Load and validate a policy document.
///
/// Both failure modes are fatal: the engine must not run with a partially
/// valid policy.
pub fn load_policy(path: &Path) -> Result<Policy, IngestError> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let policy: Policy =
        serde_json::from_str(&content).map_err(|source| IngestError::PolicyParse {
            path: path.to_path_buf(),
            source,
        })?;

    policy
        .validate()
        .map_err(|source| IngestError::PolicyInvalid {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_policy(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_policy() {
        let file = write_policy(
            r#"{
                "work_start": 9,
                "work_end": 17,
                "action_threshold": 2,
                "role_permissions": {
                    "admin": ["*"],
                    "intern": ["public_docs"]
                }
            }"#,
        );

        let policy = load_policy(file.path()).unwrap();
        assert_eq!(policy.work_start, 9);
        assert!(policy.allows("admin", "anything"));
        assert!(!policy.allows("intern", "payroll.zip"));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let file = write_policy(r#"{"work_start": 9, "work_end": 17}"#);
        assert!(matches!(
            load_policy(file.path()).unwrap_err(),
            IngestError::PolicyParse { .. }
        ));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let file = write_policy(
            r#"{"work_start": "nine", "work_end": 17, "action_threshold": 2, "role_permissions": {}}"#,
        );
        assert!(matches!(
            load_policy(file.path()).unwrap_err(),
            IngestError::PolicyParse { .. }
        ));
    }

    #[test]
    fn zero_threshold_fails_validation() {
        let file = write_policy(
            r#"{"work_start": 9, "work_end": 17, "action_threshold": 0, "role_permissions": {}}"#,
        );
        assert!(matches!(
            load_policy(file.path()).unwrap_err(),
            IngestError::PolicyInvalid { .. }
        ));
    }
}
