//! OS backends for the provider, resolver and hook-host traits.
//!
//! Only Windows has a native accessibility provider of this kind. Elsewhere
//! the crate still builds so trees can be driven through custom
//! [`RawAccessible`](crate::provider::RawAccessible) implementations.

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::{
    ComAccessible, MAX_QUEUED_EVENTS, OsResolver, OsText, WinEventHost, desktop, initialize_com,
    install_console_interrupt, registry,
};
