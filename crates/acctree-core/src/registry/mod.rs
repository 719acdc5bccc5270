mod errors;
mod handler;
mod types;

pub use errors::RegistryError;
pub use handler::Registry;
pub use types::{
    EventHookHost, HookHandle, Interrupt, Listener, ListenerId, ListenerResult, LoopControl,
    Pumped,
};
