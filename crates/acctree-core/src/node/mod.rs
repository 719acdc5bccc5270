mod children;
mod errors;
mod facade;
mod simple;
mod types;

pub use children::Children;
pub use errors::NodeError;
pub use facade::{Accessible, DEAD_NODE, Node};
pub use simple::SimpleChild;
pub use types::{Attribute, AttributeValue, StateSet};
