//! In-memory fixtures shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::constants::*;
use crate::event::EventRecord;
use crate::lookup;
use crate::node::{Accessible, Node, SimpleChild};
use crate::provider::{
    ChildId, ChildSlot, Location, NavDirection, ProviderError, RawAccessible, RoleValue,
    TextResolver,
};
use crate::registry::{EventHookHost, HookHandle, Interrupt, Pumped, RegistryError};
use crate::resolve::{WindowHandle, WindowResolver};


#[derive(Debug, Clone)]
struct SimpleInfo {
    id: i32,
    name: String,
    role: u32,
    state: u64,
}

#[derive(Debug, Clone)]
enum MockSlot {
    Simple(i32),
    Full(Rc<MockNode>),
}

/// A provider object backed by plain data, with failure injection.
#[derive(Debug)]
pub(crate) struct MockNode {
    name: Option<String>,
    role: RoleValue,
    state: Cell<u64>,
    slots: RefCell<Vec<MockSlot>>,
    simple: RefCell<Vec<SimpleInfo>>,
    parent: RefCell<Weak<MockNode>>,
    focus: Cell<Option<ChildId>>,
    dead: Cell<bool>,
    fail_enumeration: Cell<bool>,
    reported_count: Cell<Option<usize>>,
    enumerations: Cell<usize>,
    actions: RefCell<Vec<ChildId>>,
}

impl MockNode {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            role: RoleValue::Code(ROLE_SYSTEM_CLIENT),
            state: Cell::new(0),
            slots: RefCell::new(Vec::new()),
            simple: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            focus: Cell::new(None),
            dead: Cell::new(false),
            fail_enumeration: Cell::new(false),
            reported_count: Cell::new(None),
            enumerations: Cell::new(0),
            actions: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn role(mut self, role: u32) -> Self {
        self.role = RoleValue::Code(role);
        self
    }

    pub(crate) fn text_role(mut self, role: &str) -> Self {
        self.role = RoleValue::Text(role.to_string());
        self
    }

    pub(crate) fn state(self, state: u64) -> Self {
        self.state.set(state);
        self
    }

    pub(crate) fn unnamed(mut self) -> Self {
        self.name = None;
        self
    }

    pub(crate) fn child(self, child: MockNode) -> Self {
        let child = child.build();
        self.slots.borrow_mut().push(MockSlot::Full(child));
        self
    }

    pub(crate) fn simple(self, id: i32, name: &str, role: u32, state: u64) -> Self {
        self.simple.borrow_mut().push(SimpleInfo {
            id,
            name: name.to_string(),
            role,
            state,
        });
        self.slots.borrow_mut().push(MockSlot::Simple(id));
        self
    }

    /// Freeze the node and point its full children back at it.
    pub(crate) fn build(self) -> Rc<MockNode> {
        let node = Rc::new(self);
        for slot in node.slots.borrow().iter() {
            if let MockSlot::Full(child) = slot {
                *child.parent.borrow_mut() = Rc::downgrade(&node);
            }
        }
        node
    }

    /// Append an existing node as a full child after building, e.g. to form a cycle.
    pub(crate) fn adopt(&self, child: &Rc<MockNode>) {
        self.slots.borrow_mut().push(MockSlot::Full(Rc::clone(child)));
    }

    /// Full child at `index` of the built tree.
    pub(crate) fn full_child(&self, index: usize) -> Rc<MockNode> {
        match &self.slots.borrow()[index] {
            MockSlot::Full(child) => Rc::clone(child),
            MockSlot::Simple(id) => panic!("slot {} is simple child {}", index, id),
        }
    }

    pub(crate) fn kill(&self) {
        self.dead.set(true);
    }

    pub(crate) fn fail_enumeration(&self) {
        self.fail_enumeration.set(true);
    }

    pub(crate) fn misreport_count(&self, count: usize) {
        self.reported_count.set(Some(count));
    }

    pub(crate) fn set_focus(&self, child: ChildId) {
        self.focus.set(Some(child));
    }

    pub(crate) fn enumerations(&self) -> usize {
        self.enumerations.get()
    }

    pub(crate) fn actions(&self) -> Vec<ChildId> {
        self.actions.borrow().clone()
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.dead.get() {
            Err(ProviderError::disconnected())
        } else {
            Ok(())
        }
    }

    fn info(&self, child: ChildId) -> Result<Option<SimpleInfo>, ProviderError> {
        self.check()?;
        if child.is_self() {
            return Ok(None);
        }
        self.simple
            .borrow()
            .iter()
            .find(|info| info.id == child.0)
            .cloned()
            .map(Some)
            .ok_or_else(|| ProviderError::new(ProviderError::INVALID_ARGUMENT, "no such child"))
    }

    fn to_slot(slot: &MockSlot) -> ChildSlot {
        match slot {
            MockSlot::Simple(id) => ChildSlot::Id(ChildId(*id)),
            MockSlot::Full(child) => ChildSlot::Object(Rc::clone(child) as Rc<dyn RawAccessible>),
        }
    }
}

impl RawAccessible for MockNode {
    fn child_count(&self) -> Result<usize, ProviderError> {
        self.check()?;
        Ok(self
            .reported_count
            .get()
            .unwrap_or_else(|| self.slots.borrow().len()))
    }

    fn children(&self, start: usize, count: usize) -> Result<Vec<ChildSlot>, ProviderError> {
        self.check()?;
        if self.fail_enumeration.get() {
            return Err(ProviderError::new(ProviderError::FAILED, "enumeration failed"));
        }
        self.enumerations.set(self.enumerations.get() + 1);
        Ok(self
            .slots
            .borrow()
            .iter()
            .skip(start)
            .take(count)
            .map(Self::to_slot)
            .collect())
    }

    fn role(&self, child: ChildId) -> Result<RoleValue, ProviderError> {
        Ok(match self.info(child)? {
            Some(info) => RoleValue::Code(info.role),
            None => self.role.clone(),
        })
    }

    fn state(&self, child: ChildId) -> Result<u64, ProviderError> {
        Ok(match self.info(child)? {
            Some(info) => info.state,
            None => self.state.get(),
        })
    }

    fn name(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        Ok(match self.info(child)? {
            Some(info) => Some(info.name),
            None => self.name.clone(),
        })
    }

    fn description(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        let name = self.name(child)?;
        Ok(name.map(|name| format!("{} description", name)))
    }

    fn location(&self, child: ChildId) -> Result<Location, ProviderError> {
        Ok(match self.info(child)? {
            Some(info) => Location {
                left: info.id * 10,
                top: 0,
                width: 10,
                height: 10,
            },
            None => Location {
                left: 0,
                top: 0,
                width: 100,
                height: 100,
            },
        })
    }

    fn navigate(
        &self,
        direction: NavDirection,
        start: ChildId,
    ) -> Result<Option<ChildSlot>, ProviderError> {
        self.check()?;
        let slots = self.slots.borrow();
        Ok(match direction {
            NavDirection::FirstChild if start.is_self() => slots.first().map(Self::to_slot),
            NavDirection::LastChild if start.is_self() => slots.last().map(Self::to_slot),
            NavDirection::Next if !start.is_self() => {
                let position = slots
                    .iter()
                    .position(|slot| matches!(slot, MockSlot::Simple(id) if *id == start.0));
                position.and_then(|p| slots.get(p + 1)).map(Self::to_slot)
            }
            _ => None,
        })
    }

    fn parent(&self) -> Result<Option<Rc<dyn RawAccessible>>, ProviderError> {
        self.check()?;
        Ok(self
            .parent
            .borrow()
            .upgrade()
            .map(|parent| parent as Rc<dyn RawAccessible>))
    }

    fn focus(&self) -> Result<Option<ChildSlot>, ProviderError> {
        self.check()?;
        Ok(self.focus.get().map(ChildSlot::Id))
    }

    fn selection(&self) -> Result<Vec<ChildSlot>, ProviderError> {
        self.check()?;
        Ok(self
            .simple
            .borrow()
            .iter()
            .filter(|info| info.state & STATE_SYSTEM_SELECTED != 0)
            .map(|info| ChildSlot::Id(ChildId(info.id)))
            .collect())
    }

    fn do_default_action(&self, child: ChildId) -> Result<(), ProviderError> {
        self.info(child)?;
        self.actions.borrow_mut().push(child);
        Ok(())
    }
}

/// Localizes by upper-casing the unlocalized names, so tests can tell the two apart.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShoutingText;

impl TextResolver for ShoutingText {
    fn role_text(&self, role: u32) -> Option<String> {
        lookup::role_name(role).map(str::to_uppercase)
    }

    fn state_text(&self, bit: u64) -> Option<String> {
        lookup::state_name(bit).map(str::to_uppercase)
    }
}

pub(crate) fn node(raw: &Rc<MockNode>) -> Node {
    Node::new(Rc::clone(raw) as Rc<dyn RawAccessible>, Rc::new(ShoutingText))
}

pub(crate) fn accessible(raw: &Rc<MockNode>) -> Accessible {
    Accessible::Full(node(raw))
}

/// Names of `nodes`, with empty strings for unnamed or failing ones.
pub(crate) fn names(nodes: &[Accessible]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| node.name().ok().flatten().unwrap_or_default())
        .collect()
}

/// Resolves windows registered up front; unknown windows resolve to nothing.
#[derive(Debug)]
pub(crate) struct MockResolver {
    windows: HashMap<WindowHandle, Rc<MockNode>>,
    failing: bool,
    event_lookups: Cell<usize>,
}

impl MockResolver {
    pub(crate) const DESKTOP: WindowHandle = WindowHandle(0x10010);

    pub(crate) fn new() -> Self {
        Self {
            windows: HashMap::new(),
            failing: false,
            event_lookups: Cell::new(0),
        }
    }

    pub(crate) fn window(mut self, window: WindowHandle, raw: &Rc<MockNode>) -> Self {
        self.windows.insert(window, Rc::clone(raw));
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub(crate) fn event_lookups(&self) -> usize {
        self.event_lookups.get()
    }

    fn lookup(&self, window: WindowHandle) -> Result<Option<Node>, ProviderError> {
        if self.failing {
            return Err(ProviderError::new(ProviderError::ACCESS_DENIED, "access denied"));
        }
        Ok(self.windows.get(&window).map(node))
    }
}

impl WindowResolver for MockResolver {
    fn from_window(&self, window: WindowHandle) -> Result<Option<Accessible>, ProviderError> {
        Ok(self.lookup(window)?.map(Accessible::Full))
    }

    fn from_event(
        &self,
        window: WindowHandle,
        _object_id: i32,
        child_id: ChildId,
    ) -> Result<Option<Accessible>, ProviderError> {
        self.event_lookups.set(self.event_lookups.get() + 1);
        Ok(self.lookup(window)?.map(|node| {
            if child_id.is_self() {
                Accessible::Full(node)
            } else {
                Accessible::Simple(SimpleChild::new(node, child_id))
            }
        }))
    }

    fn desktop_window(&self) -> WindowHandle {
        Self::DESKTOP
    }
}

/// Hook host that records installs and replays queued deliveries.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    next_handle: Cell<isize>,
    active: RefCell<Vec<(HookHandle, u32)>>,
    install_calls: RefCell<Vec<u32>>,
    uninstalled: RefCell<Vec<HookHandle>>,
    rejected: Vec<u32>,
    batches: RefCell<VecDeque<Pumped>>,
    pumps: Cell<usize>,
    failing_pumps: Cell<usize>,
    interrupt: RefCell<Option<(usize, Interrupt)>>,
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Refuse hooks for `kind`.
    pub(crate) fn reject(mut self, kind: u32) -> Self {
        self.rejected.push(kind);
        self
    }

    pub(crate) fn active(&self) -> usize {
        self.active.borrow().len()
    }

    pub(crate) fn install_calls(&self) -> Vec<u32> {
        self.install_calls.borrow().clone()
    }

    pub(crate) fn uninstalled(&self) -> Vec<HookHandle> {
        self.uninstalled.borrow().clone()
    }

    pub(crate) fn pump_count(&self) -> usize {
        self.pumps.get()
    }

    /// Queue one OS event, delivered through every active hook for its kind.
    pub(crate) fn deliver(&self, record: EventRecord) {
        let events = self
            .active
            .borrow()
            .iter()
            .filter(|(_, kind)| *kind == record.kind)
            .map(|(handle, _)| (*handle, record))
            .collect();
        self.batches.borrow_mut().push_back(Pumped {
            events,
            quit: false,
        });
    }

    pub(crate) fn quit(&self) {
        self.batches.borrow_mut().push_back(Pumped {
            events: Vec::new(),
            quit: true,
        });
    }

    pub(crate) fn fail_next_pump(&self) {
        self.failing_pumps.set(self.failing_pumps.get() + 1);
    }

    /// Trigger `interrupt` during the `pumps`-th pump call.
    pub(crate) fn interrupt_after(&self, pumps: usize, interrupt: &Interrupt) {
        *self.interrupt.borrow_mut() = Some((pumps, interrupt.clone()));
    }
}

impl EventHookHost for RecordingHost {
    fn install(&self, kind: u32) -> Option<HookHandle> {
        self.install_calls.borrow_mut().push(kind);
        if self.rejected.contains(&kind) {
            return None;
        }
        let handle = HookHandle(0x100 + self.next_handle.get());
        self.next_handle.set(self.next_handle.get() + 1);
        self.active.borrow_mut().push((handle, kind));
        Some(handle)
    }

    fn uninstall(&self, handle: HookHandle) -> bool {
        self.uninstalled.borrow_mut().push(handle);
        let mut active = self.active.borrow_mut();
        match active.iter().position(|(h, _)| *h == handle) {
            Some(index) => {
                active.remove(index);
                true
            }
            None => false,
        }
    }

    fn pump(&self, _timeout: Duration) -> Result<Pumped, RegistryError> {
        self.pumps.set(self.pumps.get() + 1);
        if let Some((after, interrupt)) = self.interrupt.borrow().as_ref() {
            if self.pumps.get() >= *after {
                interrupt.trigger();
            }
        }
        if self.failing_pumps.get() > 0 {
            self.failing_pumps.set(self.failing_pumps.get() - 1);
            return Err(RegistryError::PumpFailed {
                message: "injected failure".to_string(),
            });
        }
        Ok(self.batches.borrow_mut().pop_front().unwrap_or_default())
    }
}
