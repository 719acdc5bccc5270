use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Accessible;
use super::errors::NodeError;
use crate::lookup;
use crate::provider::{Location, RoleValue};

/// Decoded state names, in ascending bit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSet(Vec<String>);

impl StateSet {
    /// Decode every set bit of `state` through `name`, lowest bit first.
    pub fn decode(state: u64, name: impl Fn(u64) -> String) -> Self {
        Self(lookup::set_bits(state).map(name).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl IntoIterator for StateSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Informational attributes reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Description,
    Value,
    Help,
    KeyboardShortcut,
    DefaultAction,
    Location,
    Parent,
    Role,
    RoleName,
    LocalizedRoleName,
    State,
    StateSet,
    LocalizedStateSet,
    ChildCount,
    Focus,
    Selection,
}

impl Attribute {
    pub const ALL: [Attribute; 17] = [
        Attribute::Name,
        Attribute::Description,
        Attribute::Value,
        Attribute::Help,
        Attribute::KeyboardShortcut,
        Attribute::DefaultAction,
        Attribute::Location,
        Attribute::Parent,
        Attribute::Role,
        Attribute::RoleName,
        Attribute::LocalizedRoleName,
        Attribute::State,
        Attribute::StateSet,
        Attribute::LocalizedStateSet,
        Attribute::ChildCount,
        Attribute::Focus,
        Attribute::Selection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Description => "description",
            Attribute::Value => "value",
            Attribute::Help => "help",
            Attribute::KeyboardShortcut => "keyboard_shortcut",
            Attribute::DefaultAction => "default_action",
            Attribute::Location => "location",
            Attribute::Parent => "parent",
            Attribute::Role => "role",
            Attribute::RoleName => "role_name",
            Attribute::LocalizedRoleName => "localized_role_name",
            Attribute::State => "state",
            Attribute::StateSet => "state_set",
            Attribute::LocalizedStateSet => "localized_state_set",
            Attribute::ChildCount => "child_count",
            Attribute::Focus => "focus",
            Attribute::Selection => "selection",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| NodeError::Unsupported {
                attribute: s.to_string(),
            })
    }
}

/// Result of a by-name attribute lookup.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    Text(Option<String>),
    Location(Location),
    Node(Option<Accessible>),
    Nodes(Vec<Accessible>),
    Role(RoleValue),
    RoleName(String),
    State(u64),
    States(StateSet),
    Count(usize),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => text.as_deref(),
            AttributeValue::RoleName(name) => Some(name),
            _ => None,
        }
    }
}
