//! Row builders for the five in-path rule types.
//!
//! All rule types share one builder: the four leading columns come from
//! [`expected_rule_prefix`], the remaining eight are rendered from the rule
//! type's [`RulePolicy`].

use crate::error::{ExpectError, ExpectResult};
use crate::params::RuleParameters;
use crate::policy::{Kickoff, RulePolicy, DEFAULT_PORT, DEFAULT_SUBNET};
use crate::row::{ExpectedRow, COLUMN_COUNT};
use inpath_types::{
    abbreviate_optimization_policy, kickoff_label, normalize_port, translate_vlan, DisplayValue,
    RuleType, KICKOFF_NONE,
};
use tracing::debug;

/// Number of leading columns shared by every rule type.
pub const PREFIX_COLUMNS: usize = 4;

/// Renders the position, type, source and destination columns.
///
/// A port named `all` in any case is shown as `*`, the way the UI formats
/// it. Endpoints are shown as `subnet:port` with no other checks.
pub fn expected_rule_prefix(
    rule_type: RuleType,
    position: &str,
    source_subnet: &str,
    source_port: &str,
    destination_subnet: &str,
    destination_port: &str,
) -> [String; PREFIX_COLUMNS] {
    [
        position.to_string(),
        rule_type.label().to_string(),
        format!("{}:{}", source_subnet, normalize_port(source_port)),
        format!("{}:{}", destination_subnet, normalize_port(destination_port)),
    ]
}

/// Resolves the position column: the explicit position, else the rule count.
fn resolve_position(
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<DisplayValue> {
    params
        .position
        .clone()
        .or_else(|| number_of_rules.map(DisplayValue::from))
        .ok_or_else(|| ExpectError::missing_parameter("position"))
}

fn value_or<'a>(value: &'a Option<DisplayValue>, default: &'a str) -> &'a str {
    value.as_ref().map(DisplayValue::as_str).unwrap_or(default)
}

/// Builds the expected row of a rule of any type.
pub fn expected_row(
    rule_type: RuleType,
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedRow> {
    let policy = RulePolicy::for_rule_type(rule_type);
    let position = resolve_position(params, number_of_rules)?;

    let [position, type_label, source, destination] = expected_rule_prefix(
        rule_type,
        position.as_str(),
        value_or(&params.source_subnet, DEFAULT_SUBNET),
        value_or(&params.source_port, DEFAULT_PORT),
        value_or(&params.destination_subnet, DEFAULT_SUBNET),
        value_or(&params.destination_port, DEFAULT_PORT),
    );

    let optimization_policy = policy
        .optimization_policy
        .render(params.optimization_policy.as_ref());
    let kickoff = match policy.kickoff {
        Kickoff::Toggle => kickoff_label(params.auto_kickoff.unwrap_or(false)),
        Kickoff::Placeholder => KICKOFF_NONE,
    };

    let cells: [String; COLUMN_COUNT] = [
        position,
        type_label,
        source,
        destination,
        translate_vlan(params.vlan_id.as_ref()),
        policy.protocol.render(params.protocol.as_ref()),
        policy
            .preoptimization_policy
            .render(params.preoptimization_policy.as_ref()),
        policy
            .latency_optimization_policy
            .render(params.latency_optimization_policy.as_ref()),
        abbreviate_optimization_policy(&optimization_policy).to_string(),
        policy
            .cloud_acceleration
            .render(params.cloud_acceleration.as_ref()),
        kickoff.to_string(),
        policy.status.render(params.status.as_ref()),
    ];

    debug!(
        rule_type = %rule_type,
        position = %cells[0],
        "built expected in-path rule row"
    );

    Ok(ExpectedRow::from_cells(cells))
}

/// Builds the expected row of an Auto Discover rule.
///
/// Defaults: pre-optimization `None`, optimization and latency optimization
/// `Normal`, protocol `--`, cloud acceleration `Auto`, status `Enabled`.
/// `Compression-Only` is shown as `Compr-Only`; kickoff is `Yes` or `No`.
pub fn expected_auto_discover_rule(
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedRow> {
    expected_row(RuleType::AutoDiscover, params, number_of_rules)
}

/// Builds the expected row of a Fixed-Target rule.
///
/// Same as Auto Discover, except cloud acceleration is always `--`.
pub fn expected_fixed_target_rule(
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedRow> {
    expected_row(RuleType::FixedTarget, params, number_of_rules)
}

/// Builds the expected row of a Pass Through rule.
///
/// Protocol defaults to `TCP`; policies and kickoff are always `--`.
pub fn expected_pass_through_rule(
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedRow> {
    expected_row(RuleType::PassThrough, params, number_of_rules)
}

/// Builds the expected row of a Discard rule.
pub fn expected_discard_rule(
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedRow> {
    expected_row(RuleType::Discard, params, number_of_rules)
}

/// Builds the expected row of a Deny rule.
pub fn expected_deny_rule(
    params: &RuleParameters,
    number_of_rules: Option<usize>,
) -> ExpectResult<ExpectedRow> {
    expected_row(RuleType::Deny, params, number_of_rules)
}
