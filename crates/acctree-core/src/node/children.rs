use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::debug;

use super::facade::{Accessible, Node};
use super::simple::SimpleChild;
use crate::provider::ChildSlot;

/// Single-pass cursor over the children of one node.
///
/// Enumeration is deferred to the first `next()` and fetched in one batch.
/// An exhausted cursor stays exhausted; call `iter()` again for a fresh pass
/// over the live tree.
#[derive(Debug)]
pub struct Children {
    parent: Option<Node>,
    batch: Option<VecDeque<ChildSlot>>,
    exhausted: bool,
}

impl Children {
    pub(crate) fn new(parent: Node) -> Self {
        Self {
            parent: Some(parent),
            batch: None,
            exhausted: false,
        }
    }

    /// A cursor that yields nothing, for elements that cannot have children.
    pub(crate) fn empty() -> Self {
        Self {
            parent: None,
            batch: None,
            exhausted: true,
        }
    }
}

/// Fetch every current child of `parent`. Failures end the enumeration quietly.
fn enumerate(parent: &Node) -> VecDeque<ChildSlot> {
    let count = match parent.raw().child_count() {
        Ok(count) => count,
        Err(e) => {
            debug!(
                event = "acctree.node.enumeration_failed",
                stage = "count",
                error = %e
            );
            return VecDeque::new();
        }
    };
    if count == 0 {
        return VecDeque::new();
    }

    match parent.raw().children(0, count) {
        Ok(slots) => {
            debug!(
                event = "acctree.node.enumeration_completed",
                reported = count,
                returned = slots.len()
            );
            slots.into()
        }
        Err(e) => {
            debug!(
                event = "acctree.node.enumeration_failed",
                stage = "children",
                reported = count,
                error = %e
            );
            VecDeque::new()
        }
    }
}

impl Iterator for Children {
    type Item = Accessible;

    fn next(&mut self) -> Option<Accessible> {
        if self.exhausted {
            return None;
        }
        let Some(parent) = self.parent.as_ref() else {
            self.exhausted = true;
            return None;
        };

        let batch = self.batch.get_or_insert_with(|| enumerate(parent));
        if let Some(slot) = batch.pop_front() {
            // Enumerated IDs always address children, never the parent itself.
            return Some(match slot {
                ChildSlot::Id(id) => Accessible::Simple(SimpleChild::new(parent.clone(), id)),
                ChildSlot::Object(raw) => Accessible::Full(parent.adopt(raw)),
            });
        }

        self.exhausted = true;
        self.parent = None;
        self.batch = None;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match &self.batch {
            Some(batch) => (batch.len(), Some(batch.len())),
            None => (0, None),
        }
    }
}

impl FusedIterator for Children {}
