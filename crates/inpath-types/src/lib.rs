//! Display types for appliance in-path rule tables.
//!
//! This crate provides the values an in-path rule table shows in the
//! management UI, independent of how a test obtains them:
//!
//! - [`RuleType`]: the five in-path rule categories and their UI labels
//! - [`display`]: UI normalization (VLAN casing, `All` port wildcard,
//!   policy abbreviations, the `--` placeholder)
//! - [`DisplayValue`]: a scalar coerced to its display string

pub mod display;
mod rule_type;
mod scalar;

pub use display::{
    abbreviate_optimization_policy, capitalize, kickoff_label, normalize_port, translate_vlan,
    KICKOFF_FALSE, KICKOFF_NONE, KICKOFF_TRUE, PLACEHOLDER,
};
pub use rule_type::RuleType;
pub use scalar::{is_truthy, DisplayValue};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown rule type: {0:?} (expected one of Auto Discover, Fixed-Target, Pass Through, Discard, Deny)")]
    UnknownRuleType(String),
}
