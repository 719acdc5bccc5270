use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::errors::RegistryError;
use super::types::{EventHookHost, HookHandle, Interrupt, Listener, LoopControl};
use crate::config::WatchConfig;
use crate::event::{Event, EventRecord};
use crate::events;
use crate::lookup;
use crate::resolve::WindowResolver;

#[derive(Debug)]
struct Subscription {
    listener: Listener,
    kind: u32,
    handle: HookHandle,
}

/// Display name for an event kind in log fields.
fn kind_label(kind: u32) -> String {
    lookup::event_name(kind)
        .map(str::to_string)
        .unwrap_or_else(|| kind.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Table of (listener, event kind) subscriptions, each backed by one OS hook.
///
/// Dropping the registry uninstalls every remaining hook.
#[derive(Debug)]
pub struct Registry {
    host: Rc<dyn EventHookHost>,
    resolver: Rc<dyn WindowResolver>,
    config: WatchConfig,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl Registry {
    pub fn new(
        host: Rc<dyn EventHookHost>,
        resolver: Rc<dyn WindowResolver>,
        config: WatchConfig,
    ) -> Self {
        Self {
            host,
            resolver,
            config,
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.borrow().is_empty()
    }

    pub fn is_registered(&self, listener: &Listener, kind: u32) -> bool {
        self.subscriptions
            .borrow()
            .iter()
            .any(|s| s.listener.id() == listener.id() && s.kind == kind)
    }

    /// Subscribe `listener` to each kind it is not already subscribed to.
    ///
    /// Returns the number of hooks installed. Kinds the OS refuses are logged and skipped.
    pub fn register(&self, listener: &Listener, kinds: &[u32]) -> usize {
        let mut installed = 0;
        for &kind in kinds {
            if self.is_registered(listener, kind) {
                debug!(
                    event = "acctree.registry.register_skipped",
                    listener = listener.label(),
                    kind = %kind_label(kind)
                );
                continue;
            }

            let Some(handle) = self.host.install(kind) else {
                warn!(
                    event = "acctree.registry.hook_install_failed",
                    listener = listener.label(),
                    kind = %kind_label(kind)
                );
                continue;
            };

            self.subscriptions.borrow_mut().push(Subscription {
                listener: listener.clone(),
                kind,
                handle,
            });
            installed += 1;
            info!(
                event = "acctree.registry.hook_installed",
                listener = listener.label(),
                kind = %kind_label(kind),
                handle = handle.0
            );
        }
        installed
    }

    /// Unsubscribe `listener` from each kind. Kinds it was not subscribed to are ignored.
    pub fn deregister(&self, listener: &Listener, kinds: &[u32]) -> usize {
        let mut removed = 0;
        for &kind in kinds {
            let subscription = {
                let mut subscriptions = self.subscriptions.borrow_mut();
                subscriptions
                    .iter()
                    .position(|s| s.listener.id() == listener.id() && s.kind == kind)
                    .map(|index| subscriptions.remove(index))
            };
            let Some(subscription) = subscription else {
                continue;
            };
            self.uninstall(&subscription);
            removed += 1;
        }
        removed
    }

    /// Uninstall and remove every subscription, newest first.
    pub fn clear(&self) -> usize {
        let mut removed = 0;
        loop {
            let last = self.subscriptions.borrow_mut().pop();
            let Some(subscription) = last else {
                break;
            };
            self.uninstall(&subscription);
            removed += 1;
        }
        if removed > 0 {
            info!(event = "acctree.registry.clear_completed", removed = removed);
        }
        removed
    }

    fn uninstall(&self, subscription: &Subscription) {
        if self.host.uninstall(subscription.handle) {
            debug!(
                event = "acctree.registry.hook_uninstalled",
                listener = subscription.listener.label(),
                kind = %kind_label(subscription.kind),
                handle = subscription.handle.0
            );
        } else {
            warn!(
                event = "acctree.registry.hook_uninstall_failed",
                listener = subscription.listener.label(),
                kind = %kind_label(subscription.kind),
                handle = subscription.handle.0
            );
        }
    }

    /// Deliver one raw event to every listener subscribed to its kind, in
    /// subscription order. Returns the number of listeners invoked.
    ///
    /// A failing or panicking listener is logged and does not affect the others.
    pub fn dispatch(&self, record: EventRecord) -> usize {
        // Snapshot first: listeners may re-enter register/deregister.
        let listeners: Vec<Listener> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.kind == record.kind)
            .map(|s| s.listener.clone())
            .collect();
        if listeners.is_empty() {
            return 0;
        }

        let event = Event::new(record, Rc::clone(&self.resolver));
        for listener in &listeners {
            match panic::catch_unwind(AssertUnwindSafe(|| listener.invoke(&event))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(
                        event = "acctree.registry.listener_failed",
                        listener = listener.label(),
                        kind = %kind_label(record.kind),
                        error = %e
                    );
                }
                Err(payload) => {
                    error!(
                        event = "acctree.registry.listener_panicked",
                        listener = listener.label(),
                        kind = %kind_label(record.kind),
                        message = %panic_message(payload.as_ref())
                    );
                }
            }
        }
        listeners.len()
    }

    /// First hook installed for each kind. Every hook for a kind receives the
    /// same OS event; only deliveries through this one are dispatched.
    fn primary_hooks(&self) -> HashMap<u32, HookHandle> {
        let mut primaries = HashMap::new();
        for subscription in self.subscriptions.borrow().iter() {
            primaries
                .entry(subscription.kind)
                .or_insert(subscription.handle);
        }
        primaries
    }

    /// Pump once for up to `timeout` and dispatch whatever arrived.
    pub fn iter_loop(&self, timeout: Duration) -> Result<LoopControl, RegistryError> {
        let pumped = self.host.pump(timeout)?;
        // Fixed for the whole batch: listeners may deregister mid-dispatch.
        let primaries = self.primary_hooks();
        for (handle, record) in pumped.events {
            if primaries.get(&record.kind) == Some(&handle) {
                self.dispatch(record);
            }
        }
        Ok(if pumped.quit {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        })
    }

    /// Pump once using the configured interactive poll timeout.
    pub fn poll(&self) -> Result<LoopControl, RegistryError> {
        self.iter_loop(self.config.poll_timeout())
    }

    /// Pump and dispatch until `interrupt` fires or the host reports a quit,
    /// then uninstall every hook.
    pub fn run(&self, interrupt: &Interrupt) {
        info!(
            event = "acctree.registry.run_started",
            subscriptions = self.len(),
            pump_timeout_ms = self.config.pump_timeout_ms
        );

        while !interrupt.is_triggered() {
            match self.iter_loop(self.config.pump_timeout()) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Quit) => {
                    info!(event = "acctree.registry.quit_received");
                    break;
                }
                Err(e) => events::log_app_error(&e),
            }
        }

        let removed = self.clear();
        info!(event = "acctree.registry.run_completed", removed = removed);
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        self.clear();
    }
}
