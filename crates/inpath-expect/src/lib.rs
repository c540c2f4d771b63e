//! Expected in-path rule table rows for appliance UI verification.
//!
//! A UI test configures in-path rules on an appliance and then compares the
//! rule table the management UI renders against what it expects. This crate
//! computes the expected side: for each rule, the exact strings every column
//! should show, after the UI's own formatting.
//!
//! - [`RuleParameters`] / [`RuleEntry`]: what a test configured
//! - [`RulePolicy`]: which columns each rule type fills and their defaults
//! - [`expected_rule`]: dispatch to the per-type row builders
//! - [`RuleTable`]: rule tables loaded from YAML/JSON fixtures
//!
//! # Example
//!
//! ```
//! use inpath_expect::{expected_rule, RuleParameters};
//! use inpath_types::RuleType;
//!
//! let params = RuleParameters::new()
//!     .with_position(3)
//!     .with_source_subnet("10.0.0.0/8")
//!     .with_destination_port("All");
//! let data = expected_rule(RuleType::Deny, &params, None).unwrap();
//!
//! assert_eq!(
//!     data.row.cells(),
//!     ["3", "Deny", "10.0.0.0/8:*", "all-IPv4:*", "All", "--", "--", "--", "--", "--", "--", "Enabled"]
//! );
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod fixtures;
pub mod params;
pub mod policy;
pub mod row;

// Re-export commonly used items at crate root
pub use builder::{
    expected_auto_discover_rule, expected_deny_rule, expected_discard_rule,
    expected_fixed_target_rule, expected_pass_through_rule, expected_row, expected_rule_prefix,
};
pub use dispatch::{expected_rule, expected_rule_by_name, expected_rule_from_fields, expected_table};
pub use error::{ExpectError, ExpectResult};
pub use fixtures::RuleTable;
pub use params::{RuleEntry, RuleParameters};
pub use policy::{Cell, Kickoff, RulePolicy};
pub use row::{Column, ExpectedData, ExpectedRow, COLUMN_COUNT};

pub use inpath_types::translate_vlan;
