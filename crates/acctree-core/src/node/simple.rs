use super::children::Children;
use super::errors::NodeError;
use super::facade::{Accessible, Node};
use super::types::{Attribute, AttributeValue};
use crate::provider::ChildId;

type Forward = fn(&Node, ChildId) -> Result<AttributeValue, NodeError>;

/// Attributes a simple child answers, each forwarded to its parent with the child's ID.
/// Anything absent here is unsupported.
static FORWARDS: &[(Attribute, Forward)] = &[
    (Attribute::Name, |node, id| Ok(AttributeValue::Text(node.name(id)?))),
    (Attribute::Description, |node, id| {
        Ok(AttributeValue::Text(node.description(id)?))
    }),
    (Attribute::Value, |node, id| Ok(AttributeValue::Text(node.value(id)?))),
    (Attribute::Help, |node, id| Ok(AttributeValue::Text(node.help(id)?))),
    (Attribute::KeyboardShortcut, |node, id| {
        Ok(AttributeValue::Text(node.keyboard_shortcut(id)?))
    }),
    (Attribute::DefaultAction, |node, id| {
        Ok(AttributeValue::Text(node.default_action(id)?))
    }),
    (Attribute::Location, |node, id| {
        Ok(AttributeValue::Location(node.location(id)?))
    }),
    (Attribute::Parent, |node, _| {
        Ok(AttributeValue::Node(Some(Accessible::Full(node.clone()))))
    }),
    (Attribute::Role, |node, id| Ok(AttributeValue::Role(node.role(id)?))),
    (Attribute::RoleName, |node, id| {
        Ok(AttributeValue::RoleName(node.role_name(id)?))
    }),
    (Attribute::LocalizedRoleName, |node, id| {
        Ok(AttributeValue::RoleName(node.localized_role_name(id)?))
    }),
    (Attribute::State, |node, id| Ok(AttributeValue::State(node.state(id)?))),
    (Attribute::StateSet, |node, id| {
        Ok(AttributeValue::States(node.state_set(id)?))
    }),
    (Attribute::LocalizedStateSet, |node, id| {
        Ok(AttributeValue::States(node.localized_state_set(id)?))
    }),
];

/// A child that exists only as an integer ID on its parent.
///
/// It has no children of its own. Informational calls go to the parent with
/// this child's ID.
#[derive(Debug, Clone)]
pub struct SimpleChild {
    parent: Node,
    id: ChildId,
}

impl SimpleChild {
    pub fn new(parent: Node, id: ChildId) -> Self {
        Self { parent, id }
    }

    pub fn parent(&self) -> &Node {
        &self.parent
    }

    pub fn id(&self) -> ChildId {
        self.id
    }

    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    pub fn iter(&self) -> Children {
        Children::empty()
    }

    /// Whether `attr` is answered for simple children.
    pub fn supports(attr: Attribute) -> bool {
        FORWARDS.iter().any(|(forwarded, _)| *forwarded == attr)
    }

    pub fn attribute(&self, attr: Attribute) -> Result<AttributeValue, NodeError> {
        let (_, forward) = FORWARDS
            .iter()
            .find(|(forwarded, _)| *forwarded == attr)
            .ok_or_else(|| NodeError::Unsupported {
                attribute: attr.to_string(),
            })?;
        forward(&self.parent, self.id)
    }
}
