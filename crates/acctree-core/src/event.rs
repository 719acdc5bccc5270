//! The envelope handed to event listeners.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lookup;
use crate::node::Accessible;
use crate::provider::ChildId;
use crate::resolve::{WindowHandle, WindowResolver};

/// The raw tuple delivered by an OS event hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub kind: u32,
    pub window: WindowHandle,
    pub object_id: i32,
    pub child_id: i32,
    pub thread_id: u32,
    pub timestamp: u32,
}

/// One accessibility event. The record is immutable; the source node is
/// resolved on first access and cached, absence included.
pub struct Event {
    record: EventRecord,
    resolver: Rc<dyn WindowResolver>,
    source: OnceCell<Option<Accessible>>,
}

impl Event {
    pub fn new(record: EventRecord, resolver: Rc<dyn WindowResolver>) -> Self {
        Self {
            record,
            resolver,
            source: OnceCell::new(),
        }
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    pub fn kind(&self) -> u32 {
        self.record.kind
    }

    pub fn window(&self) -> WindowHandle {
        self.record.window
    }

    pub fn object_id(&self) -> i32 {
        self.record.object_id
    }

    pub fn child_id(&self) -> ChildId {
        ChildId(self.record.child_id)
    }

    pub fn thread_id(&self) -> u32 {
        self.record.thread_id
    }

    pub fn timestamp(&self) -> u32 {
        self.record.timestamp
    }

    /// Display name of the event kind, when it has one.
    pub fn name(&self) -> Option<&'static str> {
        lookup::event_name(self.record.kind)
    }

    /// The node the event refers to, if it can still be resolved.
    pub fn source(&self) -> Option<&Accessible> {
        self.source.get_or_init(|| self.resolve_source()).as_ref()
    }

    fn resolve_source(&self) -> Option<Accessible> {
        let record = &self.record;
        match self
            .resolver
            .from_event(record.window, record.object_id, ChildId(record.child_id))
        {
            Ok(source) => source,
            Err(e) => {
                debug!(
                    event = "acctree.event.source_unresolved",
                    kind = record.kind,
                    window = %record.window,
                    error = %e
                );
                None
            }
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("record", &self.record)
            .field("source_resolved", &self.source.get().is_some())
            .finish()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => writeln!(f, "{}", name)?,
            None => writeln!(f, "{}", self.record.kind)?,
        }
        match self.source() {
            Some(source) => writeln!(f, "\tsource: {}", source)?,
            None => writeln!(f, "\tsource: (none)")?,
        }
        writeln!(f, "\twindow: {}", self.record.window)?;
        writeln!(f, "\tthread: {}", self.record.thread_id)?;
        write!(f, "\ttstamp: {}", self.record.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::testing::{MockNode, MockResolver};

    fn record(kind: u32, window: isize, child_id: i32) -> EventRecord {
        EventRecord {
            kind,
            window: WindowHandle(window),
            object_id: OBJID_CLIENT,
            child_id,
            thread_id: 4242,
            timestamp: 123456,
        }
    }

    #[test]
    fn test_display_with_source() {
        let raw = MockNode::new("Save").role(ROLE_SYSTEM_PUSHBUTTON).build();
        let resolver = Rc::new(MockResolver::new().window(WindowHandle(77), &raw));
        let event = Event::new(record(EVENT_OBJECT_FOCUS, 77, 0), resolver);
        assert_eq!(
            event.to_string(),
            "gainFocus\n\tsource: [PUSH BUTTON | Save]\n\twindow: 77\n\tthread: 4242\n\ttstamp: 123456"
        );
    }

    #[test]
    fn test_display_unknown_kind_without_source() {
        let resolver = Rc::new(MockResolver::new());
        let event = Event::new(record(0x7777, 5, 0), resolver);
        assert!(event.name().is_none());
        assert_eq!(
            event.to_string(),
            "30583\n\tsource: (none)\n\twindow: 5\n\tthread: 4242\n\ttstamp: 123456"
        );
    }

    #[test]
    fn test_source_is_resolved_once() {
        let raw = MockNode::new("Save").build();
        let resolver = Rc::new(MockResolver::new().window(WindowHandle(77), &raw));
        let event = Event::new(record(EVENT_OBJECT_FOCUS, 77, 0), resolver.clone());
        assert!(event.source().is_some());
        assert!(event.source().is_some());
        let _ = event.to_string();
        assert_eq!(resolver.event_lookups(), 1);
    }

    #[test]
    fn test_absent_source_is_cached() {
        let resolver = Rc::new(MockResolver::new());
        let event = Event::new(record(EVENT_OBJECT_FOCUS, 99, 0), resolver.clone());
        assert!(event.source().is_none());
        assert!(event.source().is_none());
        assert_eq!(resolver.event_lookups(), 1);
    }

    #[test]
    fn test_failed_resolution_is_absent() {
        let resolver = Rc::new(MockResolver::new().failing());
        let event = Event::new(record(EVENT_OBJECT_FOCUS, 77, 0), resolver.clone());
        assert!(event.source().is_none());
        assert_eq!(resolver.event_lookups(), 1);
    }

    #[test]
    fn test_child_id_source_is_simple_child() {
        let raw = MockNode::new("list")
            .simple(3, "third", ROLE_SYSTEM_LISTITEM, 0)
            .build();
        let resolver = Rc::new(MockResolver::new().window(WindowHandle(77), &raw));
        let event = Event::new(record(EVENT_OBJECT_SELECTION, 77, 3), resolver);
        let source = event.source().unwrap();
        assert!(source.is_simple());
        assert_eq!(source.name().unwrap().as_deref(), Some("third"));
        assert_eq!(event.child_id(), ChildId(3));
    }

    #[test]
    fn test_dead_source_renders_dead() {
        let raw = MockNode::new("Save").build();
        let resolver = Rc::new(MockResolver::new().window(WindowHandle(77), &raw));
        let event = Event::new(record(EVENT_OBJECT_DESTROY, 77, 0), resolver);
        raw.kill();
        assert!(event.to_string().contains("\tsource: [DEAD]\n"));
    }
}
