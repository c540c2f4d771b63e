//! UI display normalization for in-path rule table cells.
//!
//! The management UI does not echo configured values verbatim: ports named
//! `all` are shown as `*`, VLAN labels are capitalized and some policy names
//! are abbreviated to fit the column. These helpers apply the same rules so an
//! expected row can be compared against the rendered table as-is.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

/// Cell value for a column that does not apply to a rule type.
pub const PLACEHOLDER: &str = "--";

/// Kickoff cell for a rule that auto-kicks connections.
pub const KICKOFF_TRUE: &str = "Yes";

/// Kickoff cell for a rule that does not auto-kick connections.
pub const KICKOFF_FALSE: &str = "No";

/// Kickoff cell for rule types without a kickoff setting.
pub const KICKOFF_NONE: &str = PLACEHOLDER;

/// VLAN cell when the rule matches every VLAN.
pub const VLAN_ALL: &str = "All";

/// Port shown for a rule that matches every port.
pub const PORT_WILDCARD: &str = "*";

/// Optimization policy name as configured.
pub const COMPRESSION_ONLY: &str = "Compression-Only";

/// Optimization policy name as the table column shows it.
pub const COMPRESSION_ONLY_SHORT: &str = "Compr-Only";

/// Matches a port named `all` in any letter case, and nothing else.
static ALL_PORTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\Aall\z").expect("Invalid regex pattern"));

/// Upper-cases the first character and lower-cases the rest.
///
/// # Example
///
/// ```
/// use inpath_types::capitalize;
///
/// assert_eq!(capitalize("corp"), "Corp");
/// assert_eq!(capitalize("ENG-lab"), "Eng-lab");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Renders the VLAN column.
///
/// No VLAN means the rule matches all VLANs and is shown as `All`; any other
/// value is shown through its display string, capitalized.
///
/// # Example
///
/// ```
/// use inpath_types::translate_vlan;
///
/// assert_eq!(translate_vlan::<u16>(None), "All");
/// assert_eq!(translate_vlan(Some("corp")), "Corp");
/// assert_eq!(translate_vlan(Some(7)), "7");
/// ```
pub fn translate_vlan<T: Display>(vlan: Option<T>) -> String {
    match vlan {
        None => VLAN_ALL.to_string(),
        Some(vlan) => capitalize(&vlan.to_string()),
    }
}

/// Replaces a port named `all` (any case) with the `*` wildcard.
///
/// Only a whole-string match is replaced; everything else passes through.
pub fn normalize_port(port: &str) -> &str {
    if ALL_PORTS_RE.is_match(port) {
        PORT_WILDCARD
    } else {
        port
    }
}

/// Shortens optimization policy names the table column truncates.
pub fn abbreviate_optimization_policy(policy: &str) -> &str {
    if policy == COMPRESSION_ONLY {
        COMPRESSION_ONLY_SHORT
    } else {
        policy
    }
}

/// Renders the kickoff column for rule types that support auto-kickoff.
pub const fn kickoff_label(auto_kickoff: bool) -> &'static str {
    if auto_kickoff {
        KICKOFF_TRUE
    } else {
        KICKOFF_FALSE
    }
}
