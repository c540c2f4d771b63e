//! Rule table fixtures.
//!
//! A fixture lists the rules a test configures, in table order:
//!
//! ```yaml
//! rules:
//!   - type_of_rule: Deny
//!     position: 3
//!     source_subnet: 10.0.0.0/8
//!     destination_port: All
//!   - type_of_rule: Auto Discover
//!     optimization_policy: Compression-Only
//!     auto_kickoff: true
//! ```
//!
//! Files ending in `.json` are read as JSON, anything else as YAML.

use crate::dispatch::expected_table;
use crate::error::{ExpectError, ExpectResult};
use crate::params::RuleEntry;
use crate::row::ExpectedData;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The rules of one in-path rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

impl RuleTable {
    /// Parse a YAML fixture
    pub fn from_yaml_str(s: &str) -> ExpectResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse a JSON fixture
    pub fn from_json_str(s: &str) -> ExpectResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a fixture file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> ExpectResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExpectError::Fixture {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let table = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };

        info!(
            path = %path.display(),
            rules = table.rules.len(),
            "Loaded in-path rule fixture"
        );
        Ok(table)
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Builds the expected data of every rule.
    pub fn expected_data(&self) -> ExpectResult<Vec<ExpectedData>> {
        expected_table(&self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inpath_types::{DisplayValue, RuleType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_yaml_fixture() {
        let table = RuleTable::from_yaml_str(
            r#"
rules:
  - type_of_rule: Deny
    position: 3
    source_subnet: 10.0.0.0/8
    destination_port: All
  - type_of_rule: Auto Discover
    vlan_id: 10
    auto_kickoff: true
"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rules[0].rule_type, RuleType::Deny);
        assert_eq!(table.rules[0].params.position, Some(DisplayValue::from("3")));
        assert_eq!(table.rules[1].params.vlan_id, Some(DisplayValue::from("10")));
        assert_eq!(table.rules[1].params.auto_kickoff, Some(true));
    }

    #[test]
    fn test_json_fixture() {
        let table = RuleTable::from_json_str(
            r#"{"rules": [{"type_of_rule": "Discard", "protocol": "UDP"}]}"#,
        )
        .unwrap();
        assert_eq!(table.rules[0].rule_type, RuleType::Discard);
        assert_eq!(table.rules[0].params.protocol, Some(DisplayValue::from("UDP")));
    }

    #[test]
    fn test_empty_fixture() {
        let table = RuleTable::from_yaml_str("rules: []").unwrap();
        assert!(table.is_empty());
        assert!(table.expected_data().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_rule_type_fails_to_parse() {
        let err = RuleTable::from_yaml_str("rules:\n  - type_of_rule: Allow\n").unwrap_err();
        assert!(matches!(err, ExpectError::Yaml(_)));
        assert!(err.to_string().contains("Allow"));
    }

    #[test]
    fn test_unknown_top_level_key() {
        assert!(RuleTable::from_yaml_str("rule: []").is_err());
    }
}
