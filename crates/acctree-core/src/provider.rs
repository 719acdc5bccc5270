//! The capability boundary with the accessibility provider.
//!
//! [`RawAccessible`] is the minimal set of protocol calls one tree node answers.
//! The facade in [`crate::node`] composes over it; platform backends and test
//! fixtures implement it.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::AccError;

/// Integer child identifier relative to a parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChildId(pub i32);

impl ChildId {
    /// Addresses the node itself.
    pub const SELF: ChildId = ChildId(CHILDID_SELF);

    pub fn is_self(self) -> bool {
        self == Self::SELF
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A failed protocol call. `code` carries the provider's status (an HRESULT on Windows).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (code {code:#010x})")]
pub struct ProviderError {
    code: u32,
    message: String,
}

impl ProviderError {
    /// `E_FAIL`
    pub const FAILED: u32 = 0x8000_4005;
    /// `E_NOTIMPL`
    pub const NOT_IMPLEMENTED: u32 = 0x8000_4001;
    /// `RPC_E_DISCONNECTED`: the object's server went away.
    pub const DISCONNECTED: u32 = 0x8001_0108;
    /// `E_ACCESSDENIED`
    pub const ACCESS_DENIED: u32 = 0x8007_0005;
    /// `E_INVALIDARG`
    pub const INVALID_ARGUMENT: u32 = 0x8007_0057;

    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn disconnected() -> Self {
        Self::new(Self::DISCONNECTED, "object is no longer connected to its server")
    }

    pub fn not_implemented(operation: &str) -> Self {
        Self::new(
            Self::NOT_IMPLEMENTED,
            format!("{} is not implemented by this provider", operation),
        )
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl AccError for ProviderError {
    fn error_code(&self) -> &'static str {
        match self.code {
            Self::DISCONNECTED => "PROVIDER_DISCONNECTED",
            Self::ACCESS_DENIED => "PROVIDER_ACCESS_DENIED",
            Self::NOT_IMPLEMENTED => "PROVIDER_NOT_IMPLEMENTED",
            _ => "PROVIDER_CALL_FAILED",
        }
    }
}

/// A node's role as reported by the provider.
///
/// Most providers answer with a numeric code; some return a string instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleValue {
    Code(u32),
    Text(String),
}

impl RoleValue {
    pub fn code(&self) -> Option<u32> {
        match self {
            RoleValue::Code(code) => Some(*code),
            RoleValue::Text(_) => None,
        }
    }
}

/// Screen rectangle of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
    Next,
    Previous,
    FirstChild,
    LastChild,
}

impl NavDirection {
    pub fn code(self) -> i32 {
        match self {
            NavDirection::Up => NAVDIR_UP,
            NavDirection::Down => NAVDIR_DOWN,
            NavDirection::Left => NAVDIR_LEFT,
            NavDirection::Right => NAVDIR_RIGHT,
            NavDirection::Next => NAVDIR_NEXT,
            NavDirection::Previous => NAVDIR_PREVIOUS,
            NavDirection::FirstChild => NAVDIR_FIRSTCHILD,
            NavDirection::LastChild => NAVDIR_LASTCHILD,
        }
    }
}

/// One slot of a batched child enumeration.
#[derive(Debug, Clone)]
pub enum ChildSlot {
    /// A simple child: only addressable through its parent.
    Id(ChildId),
    /// A full child with its own object reference.
    Object(Rc<dyn RawAccessible>),
}

/// Raw protocol calls for one accessibility-tree node.
///
/// Every call may fail at any time: the remote UI element can be destroyed
/// between two calls. Optional accessors default to "no value" or
/// `E_NOTIMPL` the way most providers answer them.
pub trait RawAccessible: fmt::Debug {
    fn child_count(&self) -> Result<usize, ProviderError>;

    /// Enumerate up to `count` children starting at `start`, in provider order.
    fn children(&self, start: usize, count: usize) -> Result<Vec<ChildSlot>, ProviderError>;

    fn role(&self, child: ChildId) -> Result<RoleValue, ProviderError>;

    fn state(&self, child: ChildId) -> Result<u64, ProviderError>;

    fn name(&self, child: ChildId) -> Result<Option<String>, ProviderError>;

    fn description(&self, _child: ChildId) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    fn value(&self, _child: ChildId) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    fn help(&self, _child: ChildId) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    fn keyboard_shortcut(&self, _child: ChildId) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    fn default_action(&self, _child: ChildId) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    fn location(&self, _child: ChildId) -> Result<Location, ProviderError> {
        Err(ProviderError::not_implemented("accLocation"))
    }

    fn navigate(
        &self,
        _direction: NavDirection,
        _start: ChildId,
    ) -> Result<Option<ChildSlot>, ProviderError> {
        Err(ProviderError::not_implemented("accNavigate"))
    }

    fn parent(&self) -> Result<Option<Rc<dyn RawAccessible>>, ProviderError> {
        Ok(None)
    }

    /// The focused object within this node; `ChildId::SELF` means the node itself.
    fn focus(&self) -> Result<Option<ChildSlot>, ProviderError> {
        Err(ProviderError::not_implemented("accFocus"))
    }

    fn selection(&self) -> Result<Vec<ChildSlot>, ProviderError> {
        Err(ProviderError::not_implemented("accSelection"))
    }

    fn do_default_action(&self, _child: ChildId) -> Result<(), ProviderError> {
        Err(ProviderError::not_implemented("accDoDefaultAction"))
    }
}

/// OS text resolution for roles and single state bits.
pub trait TextResolver: fmt::Debug {
    fn role_text(&self, role: u32) -> Option<String>;

    fn state_text(&self, bit: u64) -> Option<String>;
}

/// Resolver for hosts without localized text. Every lookup is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalization;

impl TextResolver for NoLocalization {
    fn role_text(&self, _role: u32) -> Option<String> {
        None
    }

    fn state_text(&self, _bit: u64) -> Option<String> {
        None
    }
}
