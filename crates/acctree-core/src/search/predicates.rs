use regex::Regex;

use crate::node::{Accessible, NodeError};

/// Matches nodes whose name contains `needle`, ignoring case.
pub fn name_contains(needle: &str) -> impl Fn(&Accessible) -> Result<bool, NodeError> {
    let needle = needle.to_lowercase();
    move |node| {
        Ok(node
            .name()?
            .is_some_and(|name| name.to_lowercase().contains(&needle)))
    }
}

/// Matches nodes whose name matches `pattern`. Unnamed nodes never match.
pub fn name_matches(pattern: Regex) -> impl Fn(&Accessible) -> Result<bool, NodeError> {
    move |node| Ok(node.name()?.is_some_and(|name| pattern.is_match(&name)))
}

/// Matches nodes with the numeric role `role`.
pub fn has_role(role: u32) -> impl Fn(&Accessible) -> Result<bool, NodeError> {
    move |node| Ok(node.role()?.code() == Some(role))
}

/// Matches nodes with every bit of `bits` set.
pub fn has_state(bits: u64) -> impl Fn(&Accessible) -> Result<bool, NodeError> {
    move |node| Ok(node.state()? & bits == bits)
}
