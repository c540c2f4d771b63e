//! Per-rule-type column policy.
//!
//! Each rule type shows live values in some columns and the `--` placeholder
//! in the rest. This table is the single place that decides which; the row
//! builder only reads it.

use inpath_types::{DisplayValue, RuleType, PLACEHOLDER};

/// Policy for one display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Show the supplied value, or this default when none was supplied.
    Value { default: &'static str },
    /// Always show the placeholder, whatever was supplied.
    Placeholder,
}

impl Cell {
    /// Renders the column for an optionally supplied value.
    pub fn render(self, supplied: Option<&DisplayValue>) -> String {
        match self {
            Cell::Value { default } => supplied
                .map(DisplayValue::as_str)
                .unwrap_or(default)
                .to_string(),
            Cell::Placeholder => PLACEHOLDER.to_string(),
        }
    }

    /// Returns true if this column never shows a live value.
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Cell::Placeholder)
    }
}

/// Policy for the kickoff column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kickoff {
    /// `Yes` when auto-kickoff is set, `No` otherwise.
    Toggle,
    /// Always the placeholder.
    Placeholder,
}

/// Column policy of one rule type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulePolicy {
    pub rule_type: RuleType,
    pub preoptimization_policy: Cell,
    pub optimization_policy: Cell,
    pub latency_optimization_policy: Cell,
    pub protocol: Cell,
    pub cloud_acceleration: Cell,
    pub kickoff: Kickoff,
    pub status: Cell,
}

/// Source and destination default to any IPv4 host on any port.
pub const DEFAULT_SUBNET: &str = "all-IPv4";
pub const DEFAULT_PORT: &str = "*";

const ENABLED: Cell = Cell::Value { default: "Enabled" };
const NO_PROTOCOL: Cell = Cell::Value {
    default: PLACEHOLDER,
};

const AUTO_DISCOVER: RulePolicy = RulePolicy {
    rule_type: RuleType::AutoDiscover,
    preoptimization_policy: Cell::Value { default: "None" },
    optimization_policy: Cell::Value { default: "Normal" },
    latency_optimization_policy: Cell::Value { default: "Normal" },
    protocol: NO_PROTOCOL,
    cloud_acceleration: Cell::Value { default: "Auto" },
    kickoff: Kickoff::Toggle,
    status: ENABLED,
};

// Fixed-target rules have no cloud acceleration setting in the UI.
const FIXED_TARGET: RulePolicy = RulePolicy {
    rule_type: RuleType::FixedTarget,
    cloud_acceleration: Cell::Placeholder,
    ..AUTO_DISCOVER
};

const PASS_THROUGH: RulePolicy = RulePolicy {
    rule_type: RuleType::PassThrough,
    preoptimization_policy: Cell::Placeholder,
    optimization_policy: Cell::Placeholder,
    latency_optimization_policy: Cell::Placeholder,
    protocol: Cell::Value { default: "TCP" },
    cloud_acceleration: Cell::Value { default: "Auto" },
    kickoff: Kickoff::Placeholder,
    status: ENABLED,
};

const DISCARD: RulePolicy = RulePolicy {
    rule_type: RuleType::Discard,
    preoptimization_policy: Cell::Placeholder,
    optimization_policy: Cell::Placeholder,
    latency_optimization_policy: Cell::Placeholder,
    protocol: NO_PROTOCOL,
    cloud_acceleration: Cell::Placeholder,
    kickoff: Kickoff::Placeholder,
    status: ENABLED,
};

const DENY: RulePolicy = RulePolicy {
    rule_type: RuleType::Deny,
    ..DISCARD
};

impl RulePolicy {
    /// Returns the column policy for a rule type.
    pub fn for_rule_type(rule_type: RuleType) -> &'static RulePolicy {
        match rule_type {
            RuleType::AutoDiscover => &AUTO_DISCOVER,
            RuleType::FixedTarget => &FIXED_TARGET,
            RuleType::PassThrough => &PASS_THROUGH,
            RuleType::Discard => &DISCARD,
            RuleType::Deny => &DENY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_render() {
        let cell = Cell::Value { default: "Normal" };
        assert_eq!(cell.render(None), "Normal");
        assert_eq!(cell.render(Some(&DisplayValue::from("HTTP"))), "HTTP");
        assert_eq!(
            Cell::Placeholder.render(Some(&DisplayValue::from("HTTP"))),
            PLACEHOLDER
        );
    }

    #[test]
    fn test_policy_matches_rule_type() {
        for rule_type in RuleType::ALL {
            assert_eq!(RulePolicy::for_rule_type(rule_type).rule_type, rule_type);
        }
    }

    #[test]
    fn test_only_optimizing_rules_have_policies() {
        for rule_type in RuleType::ALL {
            let policy = RulePolicy::for_rule_type(rule_type);
            let optimizing = matches!(rule_type, RuleType::AutoDiscover | RuleType::FixedTarget);
            assert_eq!(!policy.preoptimization_policy.is_placeholder(), optimizing);
            assert_eq!(!policy.optimization_policy.is_placeholder(), optimizing);
            assert_eq!(!policy.latency_optimization_policy.is_placeholder(), optimizing);
            assert_eq!(policy.kickoff == Kickoff::Toggle, optimizing);
        }
    }

    #[test]
    fn test_cloud_acceleration_support() {
        let supported: Vec<RuleType> = RuleType::ALL
            .into_iter()
            .filter(|rule_type| {
                !RulePolicy::for_rule_type(*rule_type)
                    .cloud_acceleration
                    .is_placeholder()
            })
            .collect();
        assert_eq!(supported, vec![RuleType::AutoDiscover, RuleType::PassThrough]);
    }

    #[test]
    fn test_protocol_defaults() {
        assert_eq!(RulePolicy::for_rule_type(RuleType::PassThrough).protocol.render(None), "TCP");
        assert_eq!(RulePolicy::for_rule_type(RuleType::Deny).protocol.render(None), "--");
        assert_eq!(
            RulePolicy::for_rule_type(RuleType::Discard)
                .protocol
                .render(Some(&DisplayValue::from("UDP"))),
            "UDP"
        );
    }
}
