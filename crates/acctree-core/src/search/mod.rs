//! Predicate search over accessibility trees.
//!
//! The root is never tested, only its descendants. Predicates may return
//! `bool` or `Result<bool, E>`; an error or a panic counts as "no match" for
//! that node and the search carries on.

mod predicates;

pub use predicates::{has_role, has_state, name_contains, name_matches};

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::node::{Accessible, Children};

/// Deepest level whose children are still enumerated. Guards against
/// providers that report cyclic trees.
pub const MAX_SEARCH_DEPTH: usize = 256;

/// Anything that can enumerate its children.
pub trait TreeNode: Clone {
    type Children: Iterator<Item = Self>;

    fn children(&self) -> Self::Children;
}

impl TreeNode for Accessible {
    type Children = Children;

    fn children(&self) -> Children {
        self.iter()
    }
}

/// The outcome of one predicate call.
pub trait Verdict {
    fn into_verdict(self) -> Result<bool, String>;
}

impl Verdict for bool {
    fn into_verdict(self) -> Result<bool, String> {
        Ok(self)
    }
}

impl<E: fmt::Display> Verdict for Result<bool, E> {
    fn into_verdict(self) -> Result<bool, String> {
        self.map_err(|e| e.to_string())
    }
}

fn accepts<N, P, V>(node: &N, predicate: &mut P) -> bool
where
    P: FnMut(&N) -> V,
    V: Verdict,
{
    match panic::catch_unwind(AssertUnwindSafe(|| predicate(node).into_verdict())) {
        Ok(Ok(matched)) => matched,
        Ok(Err(reason)) => {
            debug!(event = "acctree.search.predicate_failed", reason = %reason);
            false
        }
        Err(_) => {
            debug!(event = "acctree.search.predicate_panic_caught");
            false
        }
    }
}

fn may_descend(depth: usize) -> bool {
    if depth < MAX_SEARCH_DEPTH {
        return true;
    }
    warn!(
        event = "acctree.search.depth_limit_reached",
        max_depth = MAX_SEARCH_DEPTH
    );
    false
}

/// First descendant matching `predicate`, exploring each child's subtree
/// completely before the next sibling.
pub fn find_first_depth_first<N, P, V>(root: &N, mut predicate: P) -> Option<N>
where
    N: TreeNode,
    P: FnMut(&N) -> V,
    V: Verdict,
{
    root.children()
        .find_map(|child| depth_first(child, &mut predicate, 1))
}

fn depth_first<N, P, V>(node: N, predicate: &mut P, depth: usize) -> Option<N>
where
    N: TreeNode,
    P: FnMut(&N) -> V,
    V: Verdict,
{
    if accepts(&node, predicate) {
        return Some(node);
    }
    if !may_descend(depth) {
        return None;
    }
    node.children()
        .find_map(|child| depth_first(child, predicate, depth + 1))
}

/// First descendant matching `predicate`, testing all direct children of a
/// node before descending into any of them.
pub fn find_first_breadth_first<N, P, V>(root: &N, mut predicate: P) -> Option<N>
where
    N: TreeNode,
    P: FnMut(&N) -> V,
    V: Verdict,
{
    breadth_first(root, &mut predicate, 0)
}

fn breadth_first<N, P, V>(node: &N, predicate: &mut P, depth: usize) -> Option<N>
where
    N: TreeNode,
    P: FnMut(&N) -> V,
    V: Verdict,
{
    if !may_descend(depth) {
        return None;
    }
    // One enumeration serves both the tests and the descent.
    let mut children: Vec<N> = node.children().collect();
    if let Some(position) = children.iter().position(|child| accepts(child, predicate)) {
        return Some(children.swap_remove(position));
    }
    children
        .iter()
        .find_map(|child| breadth_first(child, predicate, depth + 1))
}

/// Every descendant matching `predicate`, in pre-order.
///
/// Descends through matches and failures alike.
pub fn find_all_depth_first<N, P, V>(root: &N, mut predicate: P) -> Vec<N>
where
    N: TreeNode,
    P: FnMut(&N) -> V,
    V: Verdict,
{
    let mut matches = Vec::new();
    collect_all(root, &mut predicate, 0, &mut matches);
    matches
}

fn collect_all<N, P, V>(node: &N, predicate: &mut P, depth: usize, matches: &mut Vec<N>)
where
    N: TreeNode,
    P: FnMut(&N) -> V,
    V: Verdict,
{
    if !may_descend(depth) {
        return;
    }
    for child in node.children() {
        if accepts(&child, predicate) {
            matches.push(child.clone());
        }
        collect_all(&child, predicate, depth + 1, matches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::node::NodeError;
    use crate::testing::{MockNode, accessible, names};
    use std::cell::Cell;
    use std::rc::Rc;

    // root
    // ├── a
    // │   ├── a1
    // │   │   └── target (deep)
    // │   └── a2
    // ├── b
    // │   └── item 1 (simple)
    // └── target (shallow)
    fn tree() -> Rc<MockNode> {
        MockNode::new("root")
            .child(
                MockNode::new("a")
                    .child(MockNode::new("a1").child(
                        MockNode::new("target").role(ROLE_SYSTEM_PUSHBUTTON),
                    ))
                    .child(MockNode::new("a2")),
            )
            .child(MockNode::new("b").simple(1, "item 1", ROLE_SYSTEM_LISTITEM, 0))
            .child(
                MockNode::new("target")
                    .role(ROLE_SYSTEM_PUSHBUTTON)
                    .state(STATE_SYSTEM_FOCUSED),
            )
            .build()
    }

    fn named(name: &'static str) -> impl FnMut(&Accessible) -> Result<bool, NodeError> {
        move |node| Ok(node.name()?.as_deref() == Some(name))
    }

    #[test]
    fn test_depth_first_prefers_deep_match() {
        let root = accessible(&tree());
        let found = find_first_depth_first(&root, named("target")).unwrap();
        assert_eq!(found.state().unwrap(), 0);
    }

    #[test]
    fn test_breadth_first_prefers_shallow_match() {
        let root = accessible(&tree());
        let found = find_first_breadth_first(&root, named("target")).unwrap();
        assert_eq!(found.state().unwrap(), STATE_SYSTEM_FOCUSED);
    }

    #[test]
    fn test_root_is_never_tested() {
        let root = accessible(&tree());
        assert!(find_first_depth_first(&root, named("root")).is_none());
        assert!(find_first_breadth_first(&root, named("root")).is_none());
        assert!(find_all_depth_first(&root, named("root")).is_empty());
    }

    #[test]
    fn test_find_all_pre_order() {
        let root = accessible(&tree());
        let all = find_all_depth_first(&root, |_: &Accessible| true);
        assert_eq!(
            names(&all),
            ["a", "a1", "target", "a2", "b", "item 1", "target"]
        );
    }

    #[test]
    fn test_find_all_keeps_descending_through_matches() {
        let root = accessible(&tree());
        let found = find_all_depth_first(&root, |node: &Accessible| {
            node.name().map(|name| name.is_some_and(|name| name.starts_with('a')))
        });
        assert_eq!(names(&found), ["a", "a1", "a2"]);
    }

    #[test]
    fn test_always_failing_predicate_visits_everything() {
        let root = accessible(&tree());
        let calls = Cell::new(0);
        let found = find_all_depth_first(&root, |_: &Accessible| -> Result<bool, String> {
            calls.set(calls.get() + 1);
            Err("provider hiccup".to_string())
        });
        assert!(found.is_empty());
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn test_panicking_predicate_is_a_non_match() {
        let root = accessible(&tree());
        let found = find_first_depth_first(&root, |node: &Accessible| {
            let name = node.name().unwrap().unwrap_or_default();
            if name == "a1" {
                panic!("predicate bug");
            }
            name == "a2"
        });
        assert_eq!(found.unwrap().name().unwrap().as_deref(), Some("a2"));
    }

    #[test]
    fn test_breadth_first_failing_predicate_is_a_non_match() {
        let root = accessible(&tree());
        let failures = Cell::new(0);
        let found = find_first_breadth_first(&root, |node: &Accessible| {
            let name = node.name()?.unwrap_or_default();
            if name == "a" {
                failures.set(failures.get() + 1);
                return Err(NodeError::Unsupported { attribute: name });
            }
            Ok(name == "target")
        });
        assert_eq!(failures.get(), 1);
        assert_eq!(found.unwrap().state().unwrap(), STATE_SYSTEM_FOCUSED);
    }

    #[test]
    fn test_breadth_first_panicking_predicate_is_a_non_match() {
        let root = accessible(&tree());
        let found = find_first_breadth_first(&root, |node: &Accessible| {
            let name = node.name().unwrap().unwrap_or_default();
            if name == "a" {
                panic!("predicate bug");
            }
            name == "b"
        });
        assert_eq!(found.unwrap().name().unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_dead_subtree_is_skipped() {
        let raw = tree();
        raw.full_child(0).kill();
        let root = accessible(&raw);
        let found = find_first_depth_first(&root, named("target")).unwrap();
        assert_eq!(found.state().unwrap(), STATE_SYSTEM_FOCUSED);

        let all = find_all_depth_first(&root, |_: &Accessible| true);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_breadth_first_enumerates_each_level_once() {
        let raw = tree();
        let root = accessible(&raw);
        assert!(find_first_breadth_first(&root, named("missing")).is_none());
        assert_eq!(raw.enumerations(), 1);
        assert_eq!(raw.full_child(0).enumerations(), 1);
    }

    #[test]
    fn test_cyclic_tree_stops_at_depth_limit() {
        let raw = MockNode::new("loop").build();
        raw.adopt(&raw);
        let root = accessible(&raw);

        let all = find_all_depth_first(&root, |_: &Accessible| true);
        assert_eq!(all.len(), MAX_SEARCH_DEPTH);
        assert!(find_first_depth_first(&root, named("missing")).is_none());
        assert!(find_first_breadth_first(&root, named("missing")).is_none());
    }

    #[test]
    fn test_plain_bool_predicate() {
        let root = accessible(&tree());
        let found = find_first_breadth_first(&root, |node: &Accessible| node.is_simple());
        assert_eq!(found.unwrap().name().unwrap().as_deref(), Some("item 1"));
    }
}
