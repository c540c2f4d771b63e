//! Rule-type dispatch and description rows.

use crate::builder::{
    expected_auto_discover_rule, expected_deny_rule, expected_discard_rule,
    expected_fixed_target_rule, expected_pass_through_rule,
};
use crate::error::{ExpectError, ExpectResult};
use crate::params::{RuleParameters, RuleEntry};
use crate::row::ExpectedData;
use inpath_types::{DisplayValue, RuleType};
use tracing::warn;

/// Builds the expected table data of one rule.
///
/// `number_of_rules` is the position used when the parameters carry none.
/// A description, when present, adds a `Description: ...` row.
pub fn expected_rule(
    rule_type: RuleType,
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedData> {
    let row = match rule_type {
        RuleType::AutoDiscover => expected_auto_discover_rule(params, number_of_rules)?,
        RuleType::FixedTarget => expected_fixed_target_rule(params, number_of_rules)?,
        RuleType::PassThrough => expected_pass_through_rule(params, number_of_rules)?,
        RuleType::Discard => expected_discard_rule(params, number_of_rules)?,
        RuleType::Deny => expected_deny_rule(params, number_of_rules)?,
    };

    let data = ExpectedData::new(row);
    Ok(match &params.description {
        Some(description) => data.with_description(description.as_str()),
        None => data,
    })
}

/// Like [`expected_rule`], with the rule type given by its UI label.
pub fn expected_rule_by_name(
    type_of_rule: &str,
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedData> {
    let rule_type: RuleType = type_of_rule.parse().map_err(|_| {
        warn!(type_of_rule, "Not a valid in-path rule type");
        ExpectError::unknown_rule_type(type_of_rule)
    })?;
    expected_rule(rule_type, params, number_of_rules)
}

/// Like [`expected_rule`], from a name/value bag that includes
/// `type_of_rule`.
pub fn expected_rule_from_fields<I, K, V>(
    fields: I,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedData>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<DisplayValue>,
{
    let entry = RuleEntry::from_fields(fields).inspect_err(|err| {
        if let ExpectError::UnknownRuleType { type_of_rule } = err {
            warn!(type_of_rule = %type_of_rule, "Not a valid in-path rule type");
        }
    })?;
    expected_rule(entry.rule_type, &entry.params, number_of_rules)
}

/// Builds the expected data of every rule in a table, in order.
///
/// A rule without a position takes its 1-based place in the table.
pub fn expected_table(rules: &[RuleEntry]) -> ExpectResult<Vec<ExpectedData>> {
    rules
        .iter()
        .enumerate()
        .map(|(index, entry)| expected_rule(entry.rule_type, &entry.params, Some(index + 1)))
        .collect()
}
