use std::error::Error;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use super::errors::RegistryError;
use crate::event::{Event, EventRecord};

/// Opaque OS token for one installed event hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookHandle(pub isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

pub type ListenerResult = Result<(), Box<dyn Error>>;

type Callback = dyn Fn(&Event) -> ListenerResult;

/// An event callback with a stable identity.
///
/// Clones share the identity, so a clone can be used to deregister.
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    label: String,
    callback: Rc<Callback>,
}

impl Listener {
    pub fn new(
        label: impl Into<String>,
        callback: impl Fn(&Event) -> ListenerResult + 'static,
    ) -> Self {
        Self {
            id: ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed)),
            label: label.into(),
            callback: Rc::new(callback),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&self, event: &Event) -> ListenerResult {
        (self.callback)(event)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Cross-thread stop flag checked by the run loop between pumps.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Raw events collected by one pump call, each tagged with the hook that delivered it.
#[derive(Debug, Clone, Default)]
pub struct Pumped {
    pub events: Vec<(HookHandle, EventRecord)>,
    /// The host received a quit request.
    pub quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Installs OS event hooks and pumps their deliveries.
pub trait EventHookHost: fmt::Debug {
    /// Install a hook for one event kind. `None` when the OS refuses.
    fn install(&self, kind: u32) -> Option<HookHandle>;

    fn uninstall(&self, handle: HookHandle) -> bool;

    /// Wait up to `timeout` for events and return what arrived.
    fn pump(&self, timeout: Duration) -> Result<Pumped, RegistryError>;
}
