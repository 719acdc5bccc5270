//! Entry points into the tree from OS windows and events.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::ROLE_SYSTEM_CLIENT;
use crate::node::{Accessible, NodeError};
use crate::provider::{ChildId, ProviderError};

/// Opaque OS window handle (an `HWND` on Windows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves windows and event coordinates to tree nodes.
pub trait WindowResolver: fmt::Debug {
    /// The accessible object of a window, or `None` when the window has none.
    fn from_window(&self, window: WindowHandle) -> Result<Option<Accessible>, ProviderError>;

    /// The object an event refers to. `None` when the window is gone.
    fn from_event(
        &self,
        window: WindowHandle,
        object_id: i32,
        child_id: ChildId,
    ) -> Result<Option<Accessible>, ProviderError>;

    fn desktop_window(&self) -> WindowHandle;
}

/// The desktop's client area: the first child of the desktop window's object
/// whose role is `ROLE_SYSTEM_CLIENT`.
pub fn desktop(resolver: &dyn WindowResolver) -> Result<Option<Accessible>, NodeError> {
    let window = resolver.desktop_window();
    let root = resolver
        .from_window(window)
        .map_err(|source| NodeError::Unusable {
            operation: "AccessibleObjectFromWindow",
            source,
        })?;
    let Some(root) = root else {
        debug!(event = "acctree.resolve.desktop_missing", window = %window);
        return Ok(None);
    };

    for child in root.iter() {
        match child.role() {
            Ok(role) if role.code() == Some(ROLE_SYSTEM_CLIENT) => return Ok(Some(child)),
            Ok(_) => {}
            Err(e) => debug!(
                event = "acctree.resolve.desktop_child_skipped",
                error = %e
            ),
        }
    }
    Ok(None)
}
