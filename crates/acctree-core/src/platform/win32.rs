//! MSAA over COM: `IAccessible`, `oleacc` lookups and WinEvent hooks.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::c_void;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use windows::Win32::Foundation::{BOOL, FALSE, HMODULE, HWND, TRUE, WAIT_FAILED, WAIT_TIMEOUT};
use windows::Win32::System::Com::{COINIT_APARTMENTTHREADED, CoInitializeEx, IDispatch};
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::Win32::System::Ole::IEnumVARIANT;
use windows::Win32::UI::Accessibility::{
    AccessibleChildren, AccessibleObjectFromEvent, AccessibleObjectFromWindow, GetRoleTextW,
    GetStateTextW, HWINEVENTHOOK, IAccessible, SetWinEventHook, UnhookWinEvent,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetDesktopWindow, IsWindow, MSG, MsgWaitForMultipleObjects, PM_REMOVE,
    PeekMessageW, QS_ALLINPUT, TranslateMessage, WM_QUIT,
};
use windows::core::{BSTR, IUnknown, Interface, VARIANT};

use crate::config::WatchConfig;
use crate::constants::{CHILDID_SELF, OBJID_WINDOW};
use crate::event::EventRecord;
use crate::node::{Accessible, Node, NodeError, SimpleChild};
use crate::provider::{
    ChildId, ChildSlot, Location, NavDirection, ProviderError, RawAccessible, RoleValue,
    TextResolver,
};
use crate::registry::{EventHookHost, HookHandle, Interrupt, Pumped, Registry, RegistryError};
use crate::resolve::{self, WindowHandle, WindowResolver};

fn provider_error(error: windows::core::Error) -> ProviderError {
    ProviderError::new(error.code().0 as u32, error.message())
}

fn child_variant(child: ChildId) -> VARIANT {
    VARIANT::from(child.0)
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut c_void)
}

/// `AccessibleChildren` takes a signed start offset.
fn child_offset(start: usize) -> Result<i32, ProviderError> {
    i32::try_from(start).map_err(|_| {
        ProviderError::new(
            ProviderError::INVALID_ARGUMENT,
            format!("child offset {} out of range", start),
        )
    })
}

fn text(value: BSTR) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// `IAccessible` wrapped as a [`RawAccessible`].
#[derive(Debug, Clone)]
pub struct ComAccessible {
    inner: IAccessible,
}

impl ComAccessible {
    pub fn new(inner: IAccessible) -> Self {
        Self { inner }
    }

    fn from_dispatch(dispatch: &IDispatch) -> Option<Rc<dyn RawAccessible>> {
        match dispatch.cast::<IAccessible>() {
            Ok(inner) => Some(Rc::new(Self::new(inner))),
            Err(e) => {
                debug!(event = "acctree.win32.cast_failed", error = %e);
                None
            }
        }
    }

    /// Decode a child slot: an object reference or an integer child ID.
    fn slot(variant: &VARIANT) -> Option<ChildSlot> {
        if variant.is_empty() {
            return None;
        }
        if let Ok(dispatch) = IDispatch::try_from(variant) {
            return Self::from_dispatch(&dispatch).map(ChildSlot::Object);
        }
        i32::try_from(variant)
            .ok()
            .map(|id| ChildSlot::Id(ChildId(id)))
    }

    fn slots_from_enumerator(unknown: &IUnknown) -> Result<Vec<ChildSlot>, ProviderError> {
        let enumerator = unknown.cast::<IEnumVARIANT>().map_err(provider_error)?;
        let mut slots = Vec::new();
        loop {
            let mut item = [VARIANT::default()];
            let mut fetched = 0u32;
            let status = unsafe { enumerator.Next(&mut item, &mut fetched) };
            if status.is_err() || fetched == 0 {
                break;
            }
            slots.extend(Self::slot(&item[0]));
        }
        Ok(slots)
    }
}

impl RawAccessible for ComAccessible {
    fn child_count(&self) -> Result<usize, ProviderError> {
        let count = unsafe { self.inner.accChildCount() }.map_err(provider_error)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn children(&self, start: usize, count: usize) -> Result<Vec<ChildSlot>, ProviderError> {
        let start = child_offset(start)?;
        let mut buffer = vec![VARIANT::default(); count];
        let mut obtained = 0i32;
        unsafe {
            AccessibleChildren(&self.inner, start, &mut buffer, &mut obtained)
        }
        .map_err(provider_error)?;
        buffer.truncate(usize::try_from(obtained).unwrap_or(0));
        Ok(buffer.iter().filter_map(Self::slot).collect())
    }

    fn role(&self, child: ChildId) -> Result<RoleValue, ProviderError> {
        let role = unsafe { self.inner.accRole(&child_variant(child)) }.map_err(provider_error)?;
        if let Ok(code) = i32::try_from(&role) {
            return Ok(RoleValue::Code(code as u32));
        }
        let name = BSTR::try_from(&role).map_err(provider_error)?;
        Ok(RoleValue::Text(name.to_string()))
    }

    fn state(&self, child: ChildId) -> Result<u64, ProviderError> {
        let state = unsafe { self.inner.accState(&child_variant(child)) }.map_err(provider_error)?;
        let bits = i32::try_from(&state).map_err(provider_error)?;
        Ok(u64::from(bits as u32))
    }

    fn name(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        unsafe { self.inner.accName(&child_variant(child)) }
            .map(text)
            .map_err(provider_error)
    }

    fn description(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        unsafe { self.inner.accDescription(&child_variant(child)) }
            .map(text)
            .map_err(provider_error)
    }

    fn value(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        unsafe { self.inner.accValue(&child_variant(child)) }
            .map(text)
            .map_err(provider_error)
    }

    fn help(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        unsafe { self.inner.accHelp(&child_variant(child)) }
            .map(text)
            .map_err(provider_error)
    }

    fn keyboard_shortcut(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        unsafe { self.inner.accKeyboardShortcut(&child_variant(child)) }
            .map(text)
            .map_err(provider_error)
    }

    fn default_action(&self, child: ChildId) -> Result<Option<String>, ProviderError> {
        unsafe { self.inner.accDefaultAction(&child_variant(child)) }
            .map(text)
            .map_err(provider_error)
    }

    fn location(&self, child: ChildId) -> Result<Location, ProviderError> {
        let mut location = Location::default();
        unsafe {
            self.inner.accLocation(
                &mut location.left,
                &mut location.top,
                &mut location.width,
                &mut location.height,
                &child_variant(child),
            )
        }
        .map_err(provider_error)?;
        Ok(location)
    }

    fn navigate(
        &self,
        direction: NavDirection,
        start: ChildId,
    ) -> Result<Option<ChildSlot>, ProviderError> {
        let target = unsafe { self.inner.accNavigate(direction.code(), &child_variant(start)) }
            .map_err(provider_error)?;
        Ok(Self::slot(&target))
    }

    fn parent(&self) -> Result<Option<Rc<dyn RawAccessible>>, ProviderError> {
        match unsafe { self.inner.accParent() } {
            Ok(dispatch) => Ok(Self::from_dispatch(&dispatch)),
            // The desktop window has no parent and answers with a null pointer.
            Err(e) if e.code().is_ok() => Ok(None),
            Err(e) => Err(provider_error(e)),
        }
    }

    fn focus(&self) -> Result<Option<ChildSlot>, ProviderError> {
        let focus = unsafe { self.inner.accFocus() }.map_err(provider_error)?;
        Ok(Self::slot(&focus))
    }

    fn selection(&self) -> Result<Vec<ChildSlot>, ProviderError> {
        let selection = unsafe { self.inner.accSelection() }.map_err(provider_error)?;
        if selection.is_empty() {
            return Ok(Vec::new());
        }
        // Several selected children arrive as an IEnumVARIANT.
        if let Ok(unknown) = IUnknown::try_from(&selection) {
            if unknown.cast::<IAccessible>().is_err() {
                return Self::slots_from_enumerator(&unknown);
            }
        }
        Ok(Self::slot(&selection).into_iter().collect())
    }

    fn do_default_action(&self, child: ChildId) -> Result<(), ProviderError> {
        unsafe { self.inner.accDoDefaultAction(&child_variant(child)) }.map_err(provider_error)
    }
}

/// Localized role and state text from `oleacc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsText;

fn read_text(fetch: impl Fn(Option<&mut [u16]>) -> u32) -> Option<String> {
    let len = fetch(None);
    if len == 0 {
        return None;
    }
    let mut buffer = vec![0u16; len as usize + 1];
    let written = fetch(Some(&mut buffer)) as usize;
    if written == 0 {
        return None;
    }
    Some(String::from_utf16_lossy(&buffer[..written.min(len as usize)]))
}

impl TextResolver for OsText {
    fn role_text(&self, role: u32) -> Option<String> {
        read_text(|buffer| unsafe { GetRoleTextW(role, buffer) })
    }

    fn state_text(&self, bit: u64) -> Option<String> {
        let bit = u32::try_from(bit).ok()?;
        read_text(|buffer| unsafe { GetStateTextW(bit, buffer) })
    }
}

fn wrap(inner: IAccessible) -> Node {
    Node::new(Rc::new(ComAccessible::new(inner)), Rc::new(OsText))
}

/// Window and event lookups through `oleacc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsResolver;

impl WindowResolver for OsResolver {
    fn from_window(&self, window: WindowHandle) -> Result<Option<Accessible>, ProviderError> {
        let mut object: *mut c_void = std::ptr::null_mut();
        unsafe {
            AccessibleObjectFromWindow(
                hwnd(window),
                OBJID_WINDOW as u32,
                &IAccessible::IID,
                &mut object,
            )
        }
        .map_err(provider_error)?;
        if object.is_null() {
            return Ok(None);
        }
        // SAFETY: AccessibleObjectFromWindow returned an owned IAccessible reference for the IID we passed.
        let inner = unsafe { IAccessible::from_raw(object) };
        Ok(Some(Accessible::Full(wrap(inner))))
    }

    fn from_event(
        &self,
        window: WindowHandle,
        object_id: i32,
        child_id: ChildId,
    ) -> Result<Option<Accessible>, ProviderError> {
        if !unsafe { IsWindow(hwnd(window)) }.as_bool() {
            return Ok(None);
        }
        let mut object: Option<IAccessible> = None;
        let mut child = VARIANT::default();
        unsafe {
            AccessibleObjectFromEvent(
                hwnd(window),
                object_id as u32,
                child_id.0 as u32,
                &mut object,
                &mut child,
            )
        }
        .map_err(provider_error)?;

        let Some(inner) = object else {
            return Ok(None);
        };
        let node = wrap(inner);
        let child = i32::try_from(&child).unwrap_or(CHILDID_SELF);
        Ok(Some(if child == CHILDID_SELF {
            Accessible::Full(node)
        } else {
            Accessible::Simple(SimpleChild::new(node, ChildId(child)))
        }))
    }

    fn desktop_window(&self) -> WindowHandle {
        WindowHandle(unsafe { GetDesktopWindow() }.0 as isize)
    }
}

/// Deliveries held between pumps. Oldest entries are dropped past this.
pub const MAX_QUEUED_EVENTS: usize = 4096;

type Delivery = (HookHandle, EventRecord);

thread_local! {
    static DELIVERED: RefCell<VecDeque<Delivery>> = const { RefCell::new(VecDeque::new()) };
}

fn enqueue(queue: &mut VecDeque<Delivery>, delivery: Delivery) {
    if queue.len() >= MAX_QUEUED_EVENTS {
        if let Some((_, dropped)) = queue.pop_front() {
            debug!(
                event = "acctree.win32.queue_overflow",
                dropped_kind = dropped.kind,
                capacity = MAX_QUEUED_EVENTS
            );
        }
    }
    queue.push_back(delivery);
}

// Runs inside the OS callback: record the tuple and return. Listener code
// runs later, from `Registry::iter_loop`.
unsafe extern "system" fn queue_event(
    hook: HWINEVENTHOOK,
    event: u32,
    window: HWND,
    object_id: i32,
    child_id: i32,
    thread_id: u32,
    timestamp: u32,
) {
    let record = EventRecord {
        kind: event,
        window: WindowHandle(window.0 as isize),
        object_id,
        child_id,
        thread_id,
        timestamp,
    };
    let delivery = (HookHandle(hook.0 as isize), record);
    let queued = DELIVERED.try_with(|queue| match queue.try_borrow_mut() {
        Ok(mut queue) => {
            enqueue(&mut queue, delivery);
            true
        }
        Err(_) => false,
    });
    if !queued.unwrap_or(false) {
        debug!(
            event = "acctree.win32.event_dropped",
            kind = event,
            reason = "queue unavailable"
        );
    }
}

/// Out-of-context WinEvent hooks delivered through this thread's message queue.
///
/// The OS callback runs whenever this thread dispatches messages, including
/// inside cross-process COM calls made while walking a tree. Deliveries made
/// outside [`EventHookHost::pump`] wait in a thread-local queue until the next
/// pump, capped at [`MAX_QUEUED_EVENTS`] with the oldest dropped first.
#[derive(Debug, Clone, Copy)]
pub struct WinEventHost {
    flags: u32,
}

impl WinEventHost {
    pub fn new(config: &WatchConfig) -> Self {
        Self {
            flags: config.hook_flags(),
        }
    }
}

impl EventHookHost for WinEventHost {
    fn install(&self, kind: u32) -> Option<HookHandle> {
        let hook = unsafe {
            SetWinEventHook(
                kind,
                kind,
                HMODULE::default(),
                Some(queue_event),
                0,
                0,
                self.flags,
            )
        };
        if hook.is_invalid() {
            None
        } else {
            Some(HookHandle(hook.0 as isize))
        }
    }

    fn uninstall(&self, handle: HookHandle) -> bool {
        unsafe { UnhookWinEvent(HWINEVENTHOOK(handle.0 as *mut c_void)) }.as_bool()
    }

    /// Dispatch window messages until an event arrives, a quit is posted, or
    /// `timeout` elapses.
    fn pump(&self, timeout: Duration) -> Result<Pumped, RegistryError> {
        let deadline = Instant::now() + timeout;
        let mut quit = false;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let millis = u32::try_from(remaining.as_millis()).unwrap_or(u32::MAX);
            let wait = unsafe { MsgWaitForMultipleObjects(None, false, millis, QS_ALLINPUT) };
            if wait == WAIT_FAILED {
                return Err(RegistryError::PumpFailed {
                    message: windows::core::Error::from_win32().message(),
                });
            }

            let mut msg = MSG::default();
            while unsafe { PeekMessageW(&mut msg, HWND::default(), 0, 0, PM_REMOVE) }.as_bool() {
                if msg.message == WM_QUIT {
                    quit = true;
                    break;
                }
                unsafe {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                }
            }

            let delivered = DELIVERED.with(|queue| !queue.borrow().is_empty());
            if quit || delivered || wait == WAIT_TIMEOUT || remaining.is_zero() {
                break;
            }
        }

        let events = DELIVERED.with(|queue| Vec::from(std::mem::take(&mut *queue.borrow_mut())));
        Ok(Pumped { events, quit })
    }
}

static CONSOLE_INTERRUPT: OnceLock<Interrupt> = OnceLock::new();

unsafe extern "system" fn on_console_ctrl(ctrl_type: u32) -> BOOL {
    match CONSOLE_INTERRUPT.get() {
        Some(interrupt) if ctrl_type == CTRL_C_EVENT || ctrl_type == CTRL_BREAK_EVENT => {
            interrupt.trigger();
            TRUE
        }
        _ => FALSE,
    }
}

/// An [`Interrupt`] triggered by Ctrl+C or Ctrl+Break on the console.
///
/// The run loop notices it within one pump timeout.
pub fn install_console_interrupt() -> Result<Interrupt, RegistryError> {
    let interrupt = CONSOLE_INTERRUPT.get_or_init(Interrupt::new).clone();
    unsafe { SetConsoleCtrlHandler(Some(on_console_ctrl), true) }.map_err(|e| {
        RegistryError::InterruptHandlerFailed {
            message: e.message(),
        }
    })?;
    Ok(interrupt)
}

/// Initialize COM for this thread as a single-threaded apartment.
pub fn initialize_com() -> Result<(), ProviderError> {
    unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
        .ok()
        .map_err(provider_error)
}

/// A registry backed by WinEvent hooks and `oleacc` lookups.
pub fn registry(config: WatchConfig) -> Registry {
    Registry::new(
        Rc::new(WinEventHost::new(&config)),
        Rc::new(OsResolver),
        config,
    )
}

/// The desktop's client object.
pub fn desktop() -> Result<Option<Accessible>, NodeError> {
    let found = resolve::desktop(&OsResolver)?;
    if found.is_none() {
        warn!(event = "acctree.win32.desktop_not_found");
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EVENT_OBJECT_FOCUS;

    fn delivery(timestamp: u32) -> Delivery {
        (
            HookHandle(1),
            EventRecord {
                kind: EVENT_OBJECT_FOCUS,
                window: WindowHandle(7),
                object_id: 0,
                child_id: 0,
                thread_id: 1,
                timestamp,
            },
        )
    }

    #[test]
    fn test_child_offset_in_range() {
        assert_eq!(child_offset(0).unwrap(), 0);
        assert_eq!(child_offset(i32::MAX as usize).unwrap(), i32::MAX);
    }

    #[test]
    fn test_child_offset_overflow_is_an_error() {
        let err = child_offset(i32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.code(), ProviderError::INVALID_ARGUMENT);
    }

    #[test]
    fn test_enqueue_drops_oldest_past_capacity() {
        let mut queue = VecDeque::new();
        for timestamp in 0..MAX_QUEUED_EVENTS as u32 + 2 {
            enqueue(&mut queue, delivery(timestamp));
        }
        assert_eq!(queue.len(), MAX_QUEUED_EVENTS);
        assert_eq!(queue.front().map(|(_, r)| r.timestamp), Some(2));
        assert_eq!(
            queue.back().map(|(_, r)| r.timestamp),
            Some(MAX_QUEUED_EVENTS as u32 + 1)
        );
    }

    #[test]
    fn test_callback_while_queue_borrowed_drops_event() {
        let fire = || unsafe {
            queue_event(
                HWINEVENTHOOK(3 as *mut c_void),
                EVENT_OBJECT_FOCUS,
                HWND(7 as *mut c_void),
                0,
                0,
                1,
                2,
            )
        };
        DELIVERED.with(|queue| {
            let held = queue.borrow();
            fire();
            assert!(held.is_empty());
        });
        fire();
        let queued = DELIVERED.with(|queue| std::mem::take(&mut *queue.borrow_mut()));
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].0, HookHandle(3));
    }
}
