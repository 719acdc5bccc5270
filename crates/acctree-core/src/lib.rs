//! acctree-core: client-side layer over MSAA `IAccessible` trees
//!
//! This library provides:
//! - A node facade with indexing, single-pass child iteration and decoded
//!   role/state names over full and simple children
//! - Depth-first and breadth-first predicate search
//! - An event registry that subscribes listeners to WinEvent kinds and pumps
//!   deliveries
//! - Serializable subtree snapshots
//!
//! Protocol calls go through the [`provider::RawAccessible`] trait; the
//! Windows backend lives in [`platform`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod events;
pub mod logging;
pub mod lookup;
pub mod node;
pub mod platform;
pub mod provider;
pub mod registry;
pub mod resolve;
pub mod search;
pub mod snapshot;

#[cfg(test)]
mod testing;

// Re-export commonly used types at the crate root
pub use errors::{AccError, AccResult};
pub use logging::init_logging;

// Re-export node types
pub use node::{
    Accessible, Attribute, AttributeValue, Children, Node, NodeError, SimpleChild, StateSet,
};

// Re-export provider types
pub use provider::{ChildId, ChildSlot, ProviderError, RawAccessible, RoleValue, TextResolver};

// Re-export event and registry types
pub use event::{Event, EventRecord};
pub use registry::{EventHookHost, Interrupt, Listener, Registry, RegistryError};
pub use resolve::{WindowHandle, WindowResolver};

// Re-export search entry points
pub use search::{find_all_depth_first, find_first_breadth_first, find_first_depth_first};

pub use config::{ConfigError, WatchConfig};
