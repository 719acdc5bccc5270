use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::children::Children;
use super::errors::NodeError;
use super::simple::SimpleChild;
use super::types::{Attribute, AttributeValue, StateSet};
use crate::lookup::{self, UNKNOWN_NAME};
use crate::provider::{
    ChildId, ChildSlot, Location, NavDirection, NoLocalization, ProviderError, RawAccessible,
    RoleValue, TextResolver,
};

/// Rendered in place of `[role | name]` when a node can no longer answer.
pub const DEAD_NODE: &str = "[DEAD]";

fn unusable(operation: &'static str) -> impl FnOnce(ProviderError) -> NodeError {
    move |source| {
        debug!(
            event = "acctree.node.call_failed",
            operation = operation,
            error_code = source.code(),
            error = %source
        );
        NodeError::Unusable { operation, source }
    }
}

/// A full tree node: one provider object plus the text resolver used to
/// localize its roles and states.
///
/// Accessors take the child ID they address; [`ChildId::SELF`] addresses the
/// node itself. Nothing is cached: every call goes back to the provider.
#[derive(Debug, Clone)]
pub struct Node {
    raw: Rc<dyn RawAccessible>,
    text: Rc<dyn TextResolver>,
}

impl Node {
    pub fn new(raw: Rc<dyn RawAccessible>, text: Rc<dyn TextResolver>) -> Self {
        Self { raw, text }
    }

    /// Wrap a provider object without OS text resolution.
    pub fn unlocalized(raw: Rc<dyn RawAccessible>) -> Self {
        Self::new(raw, Rc::new(NoLocalization))
    }

    pub fn raw(&self) -> &Rc<dyn RawAccessible> {
        &self.raw
    }

    pub fn text_resolver(&self) -> &Rc<dyn TextResolver> {
        &self.text
    }

    /// Whether both facades wrap the same provider object.
    pub fn same_object(&self, other: &Node) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.raw), Rc::as_ptr(&other.raw))
    }

    /// Wrap another provider object reached from this node, sharing its text resolver.
    pub(crate) fn adopt(&self, raw: Rc<dyn RawAccessible>) -> Node {
        Node::new(raw, Rc::clone(&self.text))
    }

    /// Turn a slot answered relative to this node into a facade.
    fn wrap_slot(&self, slot: ChildSlot) -> Accessible {
        match slot {
            ChildSlot::Id(id) if id.is_self() => Accessible::Full(self.clone()),
            ChildSlot::Id(id) => Accessible::Simple(SimpleChild::new(self.clone(), id)),
            ChildSlot::Object(raw) => Accessible::Full(self.adopt(raw)),
        }
    }

    pub fn child_count(&self) -> Result<usize, NodeError> {
        self.raw.child_count().map_err(unusable("accChildCount"))
    }

    pub fn children(&self) -> Children {
        Children::new(self.clone())
    }

    pub fn name(&self, child: ChildId) -> Result<Option<String>, NodeError> {
        self.raw.name(child).map_err(unusable("accName"))
    }

    pub fn description(&self, child: ChildId) -> Result<Option<String>, NodeError> {
        self.raw.description(child).map_err(unusable("accDescription"))
    }

    pub fn value(&self, child: ChildId) -> Result<Option<String>, NodeError> {
        self.raw.value(child).map_err(unusable("accValue"))
    }

    pub fn help(&self, child: ChildId) -> Result<Option<String>, NodeError> {
        self.raw.help(child).map_err(unusable("accHelp"))
    }

    pub fn keyboard_shortcut(&self, child: ChildId) -> Result<Option<String>, NodeError> {
        self.raw
            .keyboard_shortcut(child)
            .map_err(unusable("accKeyboardShortcut"))
    }

    pub fn default_action(&self, child: ChildId) -> Result<Option<String>, NodeError> {
        self.raw
            .default_action(child)
            .map_err(unusable("accDefaultAction"))
    }

    pub fn location(&self, child: ChildId) -> Result<Location, NodeError> {
        self.raw.location(child).map_err(unusable("accLocation"))
    }

    pub fn navigate(
        &self,
        direction: NavDirection,
        start: ChildId,
    ) -> Result<Option<Accessible>, NodeError> {
        let slot = self
            .raw
            .navigate(direction, start)
            .map_err(unusable("accNavigate"))?;
        Ok(slot.map(|slot| self.wrap_slot(slot)))
    }

    pub fn parent(&self) -> Result<Option<Accessible>, NodeError> {
        let raw = self.raw.parent().map_err(unusable("accParent"))?;
        Ok(raw.map(|raw| Accessible::Full(self.adopt(raw))))
    }

    pub fn focus(&self) -> Result<Option<Accessible>, NodeError> {
        let slot = self.raw.focus().map_err(unusable("accFocus"))?;
        Ok(slot.map(|slot| self.wrap_slot(slot)))
    }

    pub fn selection(&self) -> Result<Vec<Accessible>, NodeError> {
        let slots = self.raw.selection().map_err(unusable("accSelection"))?;
        Ok(slots.into_iter().map(|slot| self.wrap_slot(slot)).collect())
    }

    pub fn do_default_action(&self, child: ChildId) -> Result<(), NodeError> {
        self.raw
            .do_default_action(child)
            .map_err(unusable("accDoDefaultAction"))
    }

    pub fn role(&self, child: ChildId) -> Result<RoleValue, NodeError> {
        self.raw.role(child).map_err(unusable("accRole"))
    }

    /// Unlocalized role name; textual roles pass through unchanged.
    pub fn role_name(&self, child: ChildId) -> Result<String, NodeError> {
        Ok(match self.role(child)? {
            RoleValue::Code(code) => lookup::role_name(code).unwrap_or(UNKNOWN_NAME).to_string(),
            RoleValue::Text(text) => text,
        })
    }

    /// OS-localized role name (empty when the OS has none); textual roles pass through.
    pub fn localized_role_name(&self, child: ChildId) -> Result<String, NodeError> {
        Ok(match self.role(child)? {
            RoleValue::Code(code) => self.text.role_text(code).unwrap_or_default(),
            RoleValue::Text(text) => text,
        })
    }

    pub fn state(&self, child: ChildId) -> Result<u64, NodeError> {
        self.raw.state(child).map_err(unusable("accState"))
    }

    pub fn state_set(&self, child: ChildId) -> Result<StateSet, NodeError> {
        let state = self.state(child)?;
        Ok(StateSet::decode(state, |bit| {
            lookup::state_name(bit).unwrap_or(UNKNOWN_NAME).to_string()
        }))
    }

    pub fn localized_state_set(&self, child: ChildId) -> Result<StateSet, NodeError> {
        let state = self.state(child)?;
        Ok(StateSet::decode(state, |bit| {
            self.text.state_text(bit).unwrap_or_default()
        }))
    }

    /// Role text for display: localized when the OS provides it, unlocalized otherwise.
    fn display_role(&self, child: ChildId) -> Result<String, NodeError> {
        let localized = self.localized_role_name(child)?;
        if localized.is_empty() {
            self.role_name(child)
        } else {
            Ok(localized)
        }
    }

    /// Look up an attribute of `child` by name.
    pub fn attribute(&self, attr: Attribute, child: ChildId) -> Result<AttributeValue, NodeError> {
        Ok(match attr {
            Attribute::Name => AttributeValue::Text(self.name(child)?),
            Attribute::Description => AttributeValue::Text(self.description(child)?),
            Attribute::Value => AttributeValue::Text(self.value(child)?),
            Attribute::Help => AttributeValue::Text(self.help(child)?),
            Attribute::KeyboardShortcut => AttributeValue::Text(self.keyboard_shortcut(child)?),
            Attribute::DefaultAction => AttributeValue::Text(self.default_action(child)?),
            Attribute::Location => AttributeValue::Location(self.location(child)?),
            Attribute::Parent => AttributeValue::Node(self.parent()?),
            Attribute::Role => AttributeValue::Role(self.role(child)?),
            Attribute::RoleName => AttributeValue::RoleName(self.role_name(child)?),
            Attribute::LocalizedRoleName => {
                AttributeValue::RoleName(self.localized_role_name(child)?)
            }
            Attribute::State => AttributeValue::State(self.state(child)?),
            Attribute::StateSet => AttributeValue::States(self.state_set(child)?),
            Attribute::LocalizedStateSet => {
                AttributeValue::States(self.localized_state_set(child)?)
            }
            Attribute::ChildCount => AttributeValue::Count(self.child_count()?),
            Attribute::Focus => AttributeValue::Node(self.focus()?),
            Attribute::Selection => AttributeValue::Nodes(self.selection()?),
        })
    }
}

/// One element of the accessibility tree.
///
/// `Full` nodes have their own provider object and can enumerate children.
/// `Simple` children exist only as an ID on their parent: they answer the
/// same informational calls (forwarded to the parent) but never have children.
#[derive(Debug, Clone)]
pub enum Accessible {
    Full(Node),
    Simple(SimpleChild),
}

impl Accessible {
    /// The node that answers protocol calls for this element, and the child ID to pass it.
    fn target(&self) -> (&Node, ChildId) {
        match self {
            Accessible::Full(node) => (node, ChildId::SELF),
            Accessible::Simple(simple) => (simple.parent(), simple.id()),
        }
    }

    /// Child ID of this element relative to the node answering for it.
    pub fn child_id(&self) -> ChildId {
        self.target().1
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Accessible::Simple(_))
    }

    /// Whether both facades address the same element of the same provider object.
    pub fn same_as(&self, other: &Accessible) -> bool {
        let (node, child) = self.target();
        let (other_node, other_child) = other.target();
        child == other_child && node.same_object(other_node)
    }

    /// Current child count. Re-queried on every call.
    pub fn len(&self) -> Result<usize, NodeError> {
        match self {
            Accessible::Full(node) => node.child_count(),
            Accessible::Simple(simple) => Ok(simple.len()),
        }
    }

    pub fn is_empty(&self) -> Result<bool, NodeError> {
        Ok(self.len()? == 0)
    }

    /// Child at `index`; negative indices count from the end.
    ///
    /// Children are produced by the same enumeration as [`Accessible::iter`]
    /// and selected by position, because some providers misbehave when asked
    /// for a single child of a container directly.
    pub fn get(&self, index: isize) -> Result<Accessible, NodeError> {
        let len = self.len()?;
        let position = normalize_index(index, len)?;
        self.iter()
            .nth(position)
            .ok_or(NodeError::IndexOutOfRange { index, len })
    }

    /// Lazy, single-pass enumeration of the current children.
    pub fn iter(&self) -> Children {
        match self {
            Accessible::Full(node) => node.children(),
            Accessible::Simple(simple) => simple.iter(),
        }
    }

    pub fn name(&self) -> Result<Option<String>, NodeError> {
        let (node, child) = self.target();
        node.name(child)
    }

    pub fn description(&self) -> Result<Option<String>, NodeError> {
        let (node, child) = self.target();
        node.description(child)
    }

    pub fn value(&self) -> Result<Option<String>, NodeError> {
        let (node, child) = self.target();
        node.value(child)
    }

    pub fn help(&self) -> Result<Option<String>, NodeError> {
        let (node, child) = self.target();
        node.help(child)
    }

    pub fn keyboard_shortcut(&self) -> Result<Option<String>, NodeError> {
        let (node, child) = self.target();
        node.keyboard_shortcut(child)
    }

    pub fn default_action(&self) -> Result<Option<String>, NodeError> {
        let (node, child) = self.target();
        node.default_action(child)
    }

    pub fn location(&self) -> Result<Location, NodeError> {
        let (node, child) = self.target();
        node.location(child)
    }

    pub fn navigate(&self, direction: NavDirection) -> Result<Option<Accessible>, NodeError> {
        let (node, child) = self.target();
        node.navigate(direction, child)
    }

    pub fn role(&self) -> Result<RoleValue, NodeError> {
        let (node, child) = self.target();
        node.role(child)
    }

    pub fn role_name(&self) -> Result<String, NodeError> {
        let (node, child) = self.target();
        node.role_name(child)
    }

    pub fn localized_role_name(&self) -> Result<String, NodeError> {
        let (node, child) = self.target();
        node.localized_role_name(child)
    }

    pub fn state(&self) -> Result<u64, NodeError> {
        let (node, child) = self.target();
        node.state(child)
    }

    pub fn state_set(&self) -> Result<StateSet, NodeError> {
        let (node, child) = self.target();
        node.state_set(child)
    }

    pub fn localized_state_set(&self) -> Result<StateSet, NodeError> {
        let (node, child) = self.target();
        node.localized_state_set(child)
    }

    pub fn do_default_action(&self) -> Result<(), NodeError> {
        let (node, child) = self.target();
        node.do_default_action(child)
    }

    /// Parent element. A simple child's parent is the node it is addressed through.
    pub fn parent(&self) -> Result<Option<Accessible>, NodeError> {
        match self {
            Accessible::Full(node) => node.parent(),
            Accessible::Simple(simple) => Ok(Some(Accessible::Full(simple.parent().clone()))),
        }
    }

    pub fn focus(&self) -> Result<Option<Accessible>, NodeError> {
        match self {
            Accessible::Full(node) => node.focus(),
            Accessible::Simple(_) => Err(NodeError::Unsupported {
                attribute: Attribute::Focus.to_string(),
            }),
        }
    }

    pub fn selection(&self) -> Result<Vec<Accessible>, NodeError> {
        match self {
            Accessible::Full(node) => node.selection(),
            Accessible::Simple(_) => Err(NodeError::Unsupported {
                attribute: Attribute::Selection.to_string(),
            }),
        }
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, attr: Attribute) -> Result<AttributeValue, NodeError> {
        match self {
            Accessible::Full(node) => node.attribute(attr, ChildId::SELF),
            Accessible::Simple(simple) => simple.attribute(attr),
        }
    }

    fn summary(&self) -> Result<String, NodeError> {
        let (node, child) = self.target();
        let role = node.display_role(child)?;
        let name = node.name(child)?.unwrap_or_default();
        Ok(format!("[{} | {}]", role, name))
    }
}

impl fmt::Display for Accessible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.summary() {
            Ok(summary) => f.write_str(&summary),
            Err(e) => {
                debug!(event = "acctree.node.display_dead", error = %e);
                f.write_str(DEAD_NODE)
            }
        }
    }
}

impl IntoIterator for &Accessible {
    type Item = Accessible;
    type IntoIter = Children;

    fn into_iter(self) -> Children {
        self.iter()
    }
}

/// Map a possibly negative index onto `0..len`.
fn normalize_index(index: isize, len: usize) -> Result<usize, NodeError> {
    let out_of_range = NodeError::IndexOutOfRange { index, len };
    let Ok(signed_len) = isize::try_from(len) else {
        return Err(out_of_range);
    };
    let position = if index < 0 { index + signed_len } else { index };
    if position < 0 || position >= signed_len {
        return Err(out_of_range);
    }
    usize::try_from(position).map_err(|_| out_of_range)
}
