//! In-path rule type definitions.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an in-path rule.
///
/// The category decides which columns of the rule table carry live values
/// and which are shown as the `--` placeholder.
///
/// # Examples
///
/// ```
/// use inpath_types::RuleType;
///
/// let rule_type: RuleType = "Fixed-Target".parse().unwrap();
/// assert_eq!(rule_type, RuleType::FixedTarget);
/// assert_eq!(rule_type.to_string(), "Fixed-Target");
///
/// // Labels are matched exactly, as the UI renders them
/// assert!("fixed-target".parse::<RuleType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleType {
    /// Optimize traffic to a peer found through auto-discovery.
    AutoDiscover,
    /// Optimize traffic to a configured target appliance.
    FixedTarget,
    /// Forward traffic unoptimized.
    PassThrough,
    /// Drop packets silently.
    Discard,
    /// Drop packets and reset the connection.
    Deny,
}

impl RuleType {
    /// All rule types, in the order the UI offers them.
    pub const ALL: [RuleType; 5] = [
        RuleType::AutoDiscover,
        RuleType::FixedTarget,
        RuleType::PassThrough,
        RuleType::Discard,
        RuleType::Deny,
    ];

    /// Returns the label shown in the rule table's type column.
    pub const fn label(&self) -> &'static str {
        match self {
            RuleType::AutoDiscover => "Auto Discover",
            RuleType::FixedTarget => "Fixed-Target",
            RuleType::PassThrough => "Pass Through",
            RuleType::Discard => "Discard",
            RuleType::Deny => "Deny",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RuleType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::ALL
            .into_iter()
            .find(|rule_type| rule_type.label() == s)
            .ok_or_else(|| ParseError::UnknownRuleType(s.to_string()))
    }
}

impl TryFrom<String> for RuleType {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> String {
        rule_type.label().to_string()
    }
}
