//! Rule parameters: the semantic settings of one in-path rule.
//!
//! Every field is optional. What an absent field renders as depends on the
//! rule type (see [`crate::policy`]).

use crate::error::{ExpectError, ExpectResult};
use inpath_types::{is_truthy, DisplayValue, RuleType};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Name of the rule type entry in a parameter bag.
pub const TYPE_OF_RULE: &str = "type_of_rule";

/// Settings of one in-path rule, as a test configured it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleParameters {
    /// Position in the rule table. Falls back to the rule count.
    pub position: Option<DisplayValue>,
    pub source_subnet: Option<DisplayValue>,
    pub source_port: Option<DisplayValue>,
    pub destination_subnet: Option<DisplayValue>,
    pub destination_port: Option<DisplayValue>,
    pub vlan_id: Option<DisplayValue>,
    pub preoptimization_policy: Option<DisplayValue>,
    pub optimization_policy: Option<DisplayValue>,
    pub latency_optimization_policy: Option<DisplayValue>,
    pub protocol: Option<DisplayValue>,
    pub auto_kickoff: Option<bool>,
    pub status: Option<DisplayValue>,
    pub cloud_acceleration: Option<DisplayValue>,
    /// Free text shown in a row of its own under the rule.
    pub description: Option<DisplayValue>,
}

impl RuleParameters {
    /// Names accepted in a parameter bag.
    pub const FIELDS: [&'static str; 14] = [
        "position",
        "source_subnet",
        "source_port",
        "destination_subnet",
        "destination_port",
        "vlan_id",
        "preoptimization_policy",
        "optimization_policy",
        "latency_optimization_policy",
        "protocol",
        "auto_kickoff",
        "status",
        "cloud_acceleration",
        "description",
    ];

    /// Create an empty parameter set (every field at its rule-type default)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from a name/value bag.
    ///
    /// Names must be in [`RuleParameters::FIELDS`]. `auto_kickoff` is read
    /// as a truthy string.
    pub fn from_fields<I, K, V>(fields: I) -> ExpectResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<DisplayValue>,
    {
        let mut params = Self::new();
        for (name, value) in fields {
            params.set(name.as_ref(), value.into())?;
        }
        Ok(params)
    }

    /// Set one field by name.
    pub fn set(&mut self, name: &str, value: DisplayValue) -> ExpectResult<()> {
        let slot = match name {
            "position" => &mut self.position,
            "source_subnet" => &mut self.source_subnet,
            "source_port" => &mut self.source_port,
            "destination_subnet" => &mut self.destination_subnet,
            "destination_port" => &mut self.destination_port,
            "vlan_id" => &mut self.vlan_id,
            "preoptimization_policy" => &mut self.preoptimization_policy,
            "optimization_policy" => &mut self.optimization_policy,
            "latency_optimization_policy" => &mut self.latency_optimization_policy,
            "protocol" => &mut self.protocol,
            "status" => &mut self.status,
            "cloud_acceleration" => &mut self.cloud_acceleration,
            "description" => &mut self.description,
            "auto_kickoff" => {
                self.auto_kickoff = Some(is_truthy(value.as_str()));
                return Ok(());
            }
            _ => return Err(ExpectError::unknown_parameter(name)),
        };
        *slot = Some(value);
        Ok(())
    }

    /// Set the table position
    pub fn with_position(mut self, position: impl Into<DisplayValue>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the source subnet
    pub fn with_source_subnet(mut self, subnet: impl Into<DisplayValue>) -> Self {
        self.source_subnet = Some(subnet.into());
        self
    }

    /// Set the source port
    pub fn with_source_port(mut self, port: impl Into<DisplayValue>) -> Self {
        self.source_port = Some(port.into());
        self
    }

    /// Set the destination subnet
    pub fn with_destination_subnet(mut self, subnet: impl Into<DisplayValue>) -> Self {
        self.destination_subnet = Some(subnet.into());
        self
    }

    /// Set the destination port
    pub fn with_destination_port(mut self, port: impl Into<DisplayValue>) -> Self {
        self.destination_port = Some(port.into());
        self
    }

    /// Set the VLAN tag
    pub fn with_vlan_id(mut self, vlan_id: impl Into<DisplayValue>) -> Self {
        self.vlan_id = Some(vlan_id.into());
        self
    }

    /// Set the pre-optimization policy (None, JInitiator, JInitiator+SSL, SSL)
    pub fn with_preoptimization_policy(mut self, policy: impl Into<DisplayValue>) -> Self {
        self.preoptimization_policy = Some(policy.into());
        self
    }

    /// Set the optimization policy (None, SDR-Only, Compression-Only, Normal)
    pub fn with_optimization_policy(mut self, policy: impl Into<DisplayValue>) -> Self {
        self.optimization_policy = Some(policy.into());
        self
    }

    /// Set the latency optimization policy (None, HTTP, Normal)
    pub fn with_latency_optimization_policy(mut self, policy: impl Into<DisplayValue>) -> Self {
        self.latency_optimization_policy = Some(policy.into());
        self
    }

    /// Set the protocol
    pub fn with_protocol(mut self, protocol: impl Into<DisplayValue>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set whether the rule auto-kicks existing connections
    pub fn with_auto_kickoff(mut self, auto_kickoff: bool) -> Self {
        self.auto_kickoff = Some(auto_kickoff);
        self
    }

    /// Set the rule status
    pub fn with_status(mut self, status: impl Into<DisplayValue>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the cloud acceleration mode
    pub fn with_cloud_acceleration(mut self, mode: impl Into<DisplayValue>) -> Self {
        self.cloud_acceleration = Some(mode.into());
        self
    }

    /// Set the rule description
    pub fn with_description(mut self, description: impl Into<DisplayValue>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One rule of a fixture: its type plus its parameters.
///
/// Deserializes from a flat mapping that carries `type_of_rule` next to the
/// parameter names. Null values count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Option<DisplayValue>>")]
pub struct RuleEntry {
    pub rule_type: RuleType,
    pub params: RuleParameters,
}

impl RuleEntry {
    /// Pair a rule type with its parameters
    pub fn new(rule_type: RuleType, params: RuleParameters) -> Self {
        Self { rule_type, params }
    }

    /// Build a rule from a name/value bag that includes `type_of_rule`.
    pub fn from_fields<I, K, V>(fields: I) -> ExpectResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<DisplayValue>,
    {
        let mut rule_type = None;
        let mut params = RuleParameters::new();

        for (name, value) in fields {
            let name = name.as_ref();
            let value = value.into();
            if name == TYPE_OF_RULE {
                rule_type = Some(value.as_str().parse::<RuleType>()?);
            } else {
                params.set(name, value)?;
            }
        }

        let rule_type = rule_type.ok_or_else(|| ExpectError::missing_parameter(TYPE_OF_RULE))?;
        Ok(Self { rule_type, params })
    }
}

impl TryFrom<BTreeMap<String, Option<DisplayValue>>> for RuleEntry {
    type Error = ExpectError;

    fn try_from(fields: BTreeMap<String, Option<DisplayValue>>) -> Result<Self, Self::Error> {
        Self::from_fields(
            fields
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_sets_fields() {
        let params = RuleParameters::new()
            .with_position(3)
            .with_source_subnet("10.0.0.0/8")
            .with_destination_port("All")
            .with_auto_kickoff(true);

        assert_eq!(params.position, Some(DisplayValue::from("3")));
        assert_eq!(params.source_subnet, Some(DisplayValue::from("10.0.0.0/8")));
        assert_eq!(params.destination_port, Some(DisplayValue::from("All")));
        assert_eq!(params.auto_kickoff, Some(true));
        assert_eq!(params.vlan_id, None);
    }

    #[test]
    fn test_from_fields() {
        let params = RuleParameters::from_fields([
            ("vlan_id", "corp"),
            ("optimization_policy", "SDR-Only"),
            ("auto_kickoff", "1"),
        ])
        .unwrap();

        assert_eq!(params.vlan_id, Some(DisplayValue::from("corp")));
        assert_eq!(params.optimization_policy, Some(DisplayValue::from("SDR-Only")));
        assert_eq!(params.auto_kickoff, Some(true));
    }

    #[test]
    fn test_from_fields_falsy_kickoff() {
        let params = RuleParameters::from_fields([("auto_kickoff", "0")]).unwrap();
        assert_eq!(params.auto_kickoff, Some(false));
    }

    #[test]
    fn test_from_fields_rejects_unknown_name() {
        let err = RuleParameters::from_fields([("vlan", "10")]).unwrap_err();
        assert!(matches!(err, ExpectError::UnknownParameter { ref name } if name == "vlan"));
    }

    #[test]
    fn test_every_field_name_is_settable() {
        let mut params = RuleParameters::new();
        for name in RuleParameters::FIELDS {
            params.set(name, DisplayValue::from("1")).unwrap();
        }
        assert_eq!(params.description, Some(DisplayValue::from("1")));
        assert_eq!(params.auto_kickoff, Some(true));
    }

    #[test]
    fn test_rule_entry_requires_type() {
        let err = RuleEntry::from_fields([("position", "1")]).unwrap_err();
        assert!(matches!(
            err,
            ExpectError::MissingParameter { ref name } if name == TYPE_OF_RULE
        ));
    }

    #[test]
    fn test_rule_entry_rejects_unknown_type() {
        let err = RuleEntry::from_fields([(TYPE_OF_RULE, "Allow")]).unwrap_err();
        assert!(matches!(
            err,
            ExpectError::UnknownRuleType { ref type_of_rule } if type_of_rule == "Allow"
        ));
    }

    #[test]
    fn test_rule_entry_deserialize() {
        let entry: RuleEntry = serde_json::from_str(
            r#"{"type_of_rule": "Pass Through", "position": 2, "vlan_id": null, "auto_kickoff": true}"#,
        )
        .unwrap();

        assert_eq!(entry.rule_type, RuleType::PassThrough);
        assert_eq!(entry.params.position, Some(DisplayValue::from("2")));
        assert_eq!(entry.params.vlan_id, None);
        assert_eq!(entry.params.auto_kickoff, Some(true));
    }

    #[test]
    fn test_rule_entry_deserialize_rejects_unknown_field() {
        let result = serde_json::from_str::<RuleEntry>(r#"{"type_of_rule": "Deny", "vlan": 10}"#);
        assert!(result.is_err());
    }
}
