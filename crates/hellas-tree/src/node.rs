//! Path nodes built by naming children
//!
//! Provides [`PathNode`], one segment of an arbitrary path. Nothing is
//! pre-built: every call to [`PathNode::child`] materialises exactly one new
//! node pointing back at its parent.

use crate::dispatch::{Anchor, CallArgs};
use crate::error::{TreeError, TreeResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Name given to roots created without an explicit name
pub const DEFAULT_ROOT_NAME: &str = "root";

/// What a node points back at
#[derive(Clone)]
pub enum Parent {
    /// Another node of the same tree
    Node(PathNode),
    /// External owner terminating the chain
    Anchor(Arc<dyn Anchor>),
    /// Free-standing root
    None,
}

impl Parent {
    /// Get parent node, if the parent is part of the tree
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&PathNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl Debug for Parent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "Node({node})"),
            Self::Anchor(anchor) => write!(f, "Anchor({})", anchor.type_name()),
            Self::None => f.write_str("None"),
        }
    }
}

struct NodeInner {
    parent: Parent,
    name: Arc<str>,
}

impl Drop for NodeInner {
    // Unlink ancestors one by one so long chains do not drop recursively
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut self.parent, Parent::None);
        while let Parent::Node(node) = next {
            match Arc::into_inner(node.0) {
                Some(mut inner) => next = std::mem::replace(&mut inner.parent, Parent::None),
                None => break,
            }
        }
    }
}

/// One segment of a dynamically built path
///
/// Immutable and cheap to clone; a child keeps its parent alive, never the
/// other way round. Since a node can only be created below an existing
/// node, a chain can never loop back on itself.
///
/// # Examples
/// - `PathNode::root().child("foo").child("bar")` → `root/foo/bar`
/// - `PathNode::root_named("api").extend(["v1", "users"])` → `api/v1/users`
#[derive(Clone)]
pub struct PathNode(Arc<NodeInner>);

impl PathNode {
    /// Create node from its parent and name
    ///
    /// Nodes built from equal parts are equal and behave identically.
    #[inline]
    #[must_use]
    pub fn from_parts(parent: Parent, name: impl Into<Arc<str>>) -> Self {
        Self(Arc::new(NodeInner {
            parent,
            name: name.into(),
        }))
    }

    /// Free-standing root named [`DEFAULT_ROOT_NAME`]
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::from_parts(Parent::None, DEFAULT_ROOT_NAME)
    }

    /// Free-standing root with a custom name
    #[inline]
    #[must_use]
    pub fn root_named(name: impl Into<Arc<str>>) -> Self {
        Self::from_parts(Parent::None, name)
    }

    /// Root owned by an anchor, named [`DEFAULT_ROOT_NAME`]
    #[inline]
    #[must_use]
    pub fn anchored(anchor: Arc<dyn Anchor>) -> Self {
        Self::from_parts(Parent::Anchor(anchor), DEFAULT_ROOT_NAME)
    }

    /// Root owned by an anchor with a custom name
    #[inline]
    #[must_use]
    pub fn anchored_named(anchor: Arc<dyn Anchor>, name: impl Into<Arc<str>>) -> Self {
        Self::from_parts(Parent::Anchor(anchor), name)
    }

    /// Segment name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Parent reference
    #[inline]
    #[must_use]
    pub fn parent(&self) -> &Parent {
        &self.0.parent
    }

    /// Create a child segment below this node
    #[inline]
    #[must_use]
    pub fn child(&self, name: impl Into<Arc<str>>) -> Self {
        Self::from_parts(Parent::Node(self.clone()), name)
    }

    /// Append several segments, returning the deepest node
    #[must_use]
    pub fn extend<I>(&self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<str>>,
    {
        names
            .into_iter()
            .fold(self.clone(), |node, name| node.child(name))
    }

    /// Iterator from this node up to the root (inclusive)
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Number of nodes above this one (0 for a root)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Check if this node starts its tree
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent().as_node().is_none()
    }

    /// Topmost node of the chain
    #[must_use]
    pub fn root_node(&self) -> &PathNode {
        self.ancestors().last().unwrap_or(self)
    }

    /// Anchor terminating the chain, if any
    #[must_use]
    pub fn anchor(&self) -> Option<&Arc<dyn Anchor>> {
        match self.root_node().parent() {
            Parent::Anchor(anchor) => Some(anchor),
            _ => None,
        }
    }

    /// Names from the root to this node joined by `separator`
    ///
    /// The root's own name is included.
    #[must_use]
    pub fn path(&self, separator: &str) -> String {
        let mut names: Vec<&str> = self.ancestors().map(PathNode::name).collect();
        names.reverse();
        names.join(separator)
    }

    /// Anchor and the names from just below the root down to this node
    ///
    /// The root's own name is excluded. The anchor is `None` for a
    /// free-standing tree.
    #[must_use]
    pub fn root_and_path(&self) -> (Option<Arc<dyn Anchor>>, Vec<String>) {
        let mut names: Vec<String> = self
            .ancestors()
            .filter(|node| !node.is_root())
            .map(|node| node.name().to_owned())
            .collect();
        names.reverse();
        (self.anchor().cloned(), names)
    }

    /// Invoke this path through the anchor's dispatcher
    ///
    /// The dispatcher receives this node and the arguments exactly once.
    ///
    /// # Errors
    /// - [`TreeError::Unsupported`] if the chain has no anchor or the anchor
    ///   exposes no dispatcher
    /// - [`TreeError::Dispatch`] if the dispatcher fails
    pub fn invoke(&self, args: CallArgs) -> TreeResult<Value> {
        let anchor = self
            .anchor()
            .ok_or_else(|| TreeError::unsupported("<none>"))?;
        let dispatcher = anchor
            .dispatcher()
            .ok_or_else(|| TreeError::unsupported(anchor.type_name()))?;

        tracing::debug!(path = %self, anchor = anchor.type_name(), "dispatching path");
        Ok(dispatcher.dispatch(self, args)?)
    }

    /// Detached form of this node: its names from the root down
    #[must_use]
    pub fn to_record(&self) -> NodeRecord {
        let mut names: Vec<String> = self.ancestors().map(|node| node.name().to_owned()).collect();
        names.reverse();
        NodeRecord { names }
    }

    /// Rebuild a node from its record, re-attaching an anchor to the root
    ///
    /// An empty record rebuilds a root named [`DEFAULT_ROOT_NAME`].
    #[must_use]
    pub fn from_record(record: &NodeRecord, anchor: Option<Arc<dyn Anchor>>) -> Self {
        let mut segments = record.names.iter().map(String::as_str);
        let root_name = segments.next().unwrap_or(DEFAULT_ROOT_NAME);
        let root = match anchor {
            Some(anchor) => Self::anchored_named(anchor, root_name),
            None => Self::root_named(root_name),
        };
        root.extend(segments)
    }

    /// Encode the record form as JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Decode a node from its JSON record
    ///
    /// # Errors
    /// Returns error if the JSON is not a valid record
    pub fn from_json(json: &str, anchor: Option<Arc<dyn Anchor>>) -> TreeResult<Self> {
        let record: NodeRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(&record, anchor))
    }
}

fn same_terminal(a: &Parent, b: &Parent) -> bool {
    match (a, b) {
        (Parent::Anchor(a), Parent::Anchor(b)) => {
            Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
        }
        (Parent::None, Parent::None) => true,
        _ => false,
    }
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.ancestors();
        let mut right = other.ancestors();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => {
                    if Arc::ptr_eq(&a.0, &b.0) {
                        return true;
                    }
                    if a.name() != b.name() {
                        return false;
                    }
                    if a.is_root() || b.is_root() {
                        return a.is_root() && b.is_root() && same_terminal(a.parent(), b.parent());
                    }
                }
                _ => return false,
            }
        }
    }
}

impl Eq for PathNode {}

impl Hash for PathNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.ancestors() {
            node.name().hash(state);
        }
    }
}

impl Display for PathNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path("/"))
    }
}

impl Debug for PathNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<PathNode: {}>", self.path("/"))
    }
}

/// Iterator walking from a node up to its root
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a PathNode>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent().as_node();
        Some(current)
    }
}

/// Serializable form of a node: every name from the root down to the node
///
/// The chain is stored flat, so records of any depth encode and decode
/// without nesting. Anchors are live objects and are not part of the
/// record; pass one to [`PathNode::from_record`] to re-attach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Names from the root (first) to the node (last)
    pub names: Vec<String>,
}

impl NodeRecord {
    /// Record of a root
    #[inline]
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    /// Name of the recorded node
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    /// Record of the parent, `None` at the root
    #[must_use]
    pub fn parent(&self) -> Option<NodeRecord> {
        match self.names.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(NodeRecord {
                names: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// Number of nodes above the recorded one
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.names.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{DispatchError, Dispatcher};
    use serde_json::json;
    use std::sync::Mutex;

    struct Silent;

    impl Anchor for Silent {}

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, CallArgs)>>,
    }

    impl Dispatcher for Recorder {
        fn dispatch(&self, node: &PathNode, args: CallArgs) -> Result<Value, DispatchError> {
            let path = node.path("/");
            self.calls
                .lock()
                .map_err(|e| DispatchError::Failed(e.to_string()))?
                .push((path.clone(), args));
            Ok(Value::String(path))
        }
    }

    impl Anchor for Recorder {
        fn dispatcher(&self) -> Option<&dyn Dispatcher> {
            Some(self)
        }
    }

    #[test]
    fn root_defaults() {
        let root = PathNode::root();
        assert_eq!(root.name(), "root");
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.path("/"), "root");
    }

    #[test]
    fn child_builds_path() {
        let node = PathNode::root().child("foo").child("bar");
        assert_eq!(node.path("/"), "root/foo/bar");
        assert_eq!(node.path("."), "root.foo.bar");
        assert_eq!(node.depth(), 2);
    }

    #[test]
    fn path_can_be_extended_further() {
        let base = PathNode::root().child("foo").child("bar");
        let extended = base.extend(["new_foo", "new_bar"]);
        assert_eq!(extended.to_string(), "root/foo/bar/new_foo/new_bar");
        // Base is untouched
        assert_eq!(base.to_string(), "root/foo/bar");
    }

    #[test]
    fn debug_shows_path() {
        let node = PathNode::root_named("api").child("v1");
        assert_eq!(format!("{node:?}"), "<PathNode: api/v1>");
    }

    #[test]
    fn ancestors_walk_to_root() {
        let node = PathNode::root().extend(["a", "b"]);
        let names: Vec<_> = node.ancestors().map(PathNode::name).collect();
        assert_eq!(names, vec!["b", "a", "root"]);
        assert_eq!(node.root_node().name(), "root");
    }

    #[test]
    fn root_and_path_without_anchor() {
        let node = PathNode::root().extend(["a", "b", "c"]);
        let (anchor, names) = node.root_and_path();
        assert!(anchor.is_none());
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn root_and_path_on_root_is_empty() {
        let (anchor, names) = PathNode::root().root_and_path();
        assert!(anchor.is_none());
        assert!(names.is_empty());
    }

    #[test]
    fn root_and_path_returns_anchor() {
        let anchor: Arc<dyn Anchor> = Arc::new(Silent);
        let node = PathNode::anchored(anchor.clone()).extend(["x", "y"]);
        let (found, names) = node.root_and_path();
        let found = found.unwrap();
        assert!(Arc::ptr_eq(&found, &anchor));
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn invoke_without_anchor_is_unsupported() {
        let err = PathNode::root().child("a").invoke(CallArgs::new()).unwrap_err();
        assert!(matches!(err, TreeError::Unsupported { ref anchor_type } if anchor_type == "<none>"));
    }

    #[test]
    fn invoke_without_dispatcher_names_anchor_type() {
        let node = PathNode::anchored(Arc::new(Silent)).child("a");
        let err = node.invoke(CallArgs::new()).unwrap_err();
        match err {
            TreeError::Unsupported { anchor_type } => assert!(anchor_type.ends_with("Silent")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invoke_dispatches_once_with_node_and_args() {
        let recorder = Arc::new(Recorder::default());
        let node = PathNode::anchored(recorder.clone()).extend(["users", "list"]);

        let out = node
            .invoke(CallArgs::new().arg(1).arg(2).kwarg("page", 3))
            .unwrap();
        assert_eq!(out, json!("root/users/list"));

        let calls = recorder.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "root/users/list");
        assert_eq!(calls[0].1.positional, vec![json!(1), json!(2)]);
        assert_eq!(calls[0].1.keyword.get("page"), Some(&json!(3)));
    }

    #[test]
    fn equal_parts_make_equal_nodes() {
        let parent = PathNode::root().child("a");
        let one = PathNode::from_parts(Parent::Node(parent.clone()), "b");
        let two = PathNode::from_parts(Parent::Node(parent), "b");
        assert_eq!(one, two);
        assert_eq!(one.path("/"), two.path("/"));
    }

    #[test]
    fn structurally_equal_chains_are_equal() {
        let a = PathNode::root().extend(["x", "y"]);
        let b = PathNode::root().extend(["x", "y"]);
        let c = PathNode::root().extend(["x", "z"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, PathNode::root().child("y"));
    }

    #[test]
    fn different_anchors_are_not_equal() {
        let a = PathNode::anchored(Arc::new(Silent)).child("x");
        let b = PathNode::anchored(Arc::new(Silent)).child("x");
        assert_ne!(a, b);
        assert_ne!(a, PathNode::root().child("x"));
    }

    #[test]
    fn record_round_trip() {
        let node = PathNode::root_named("api").extend(["v1", "users"]);
        let record = node.to_record();
        assert_eq!(record.name(), Some("users"));
        assert_eq!(record.names, vec!["api", "v1", "users"]);
        assert_eq!(record.depth(), 2);
        assert_eq!(record.parent().unwrap().names, vec!["api", "v1"]);
        assert_eq!(NodeRecord::root("api").parent(), None);

        let rebuilt = PathNode::from_record(&record, None);
        assert_eq!(rebuilt, node);
    }

    #[test]
    fn json_round_trip_reattaches_anchor() {
        let recorder = Arc::new(Recorder::default());
        let node = PathNode::anchored(recorder.clone()).child("ping");
        let json = node.to_json().unwrap();

        let rebuilt = PathNode::from_json(&json, Some(recorder.clone())).unwrap();
        assert_eq!(rebuilt, node);
        assert_eq!(rebuilt.invoke(CallArgs::new()).unwrap(), json!("root/ping"));
    }

    #[test]
    fn record_json_is_flat() {
        let node = PathNode::root().extend(["a", "b"]);
        assert_eq!(node.to_json().unwrap(), r#"{"names":["root","a","b"]}"#);
        let empty = PathNode::from_json(r#"{"names":[]}"#, None).unwrap();
        assert_eq!(empty, PathNode::root());
    }

    #[test]
    fn dropping_a_leaf_keeps_shared_ancestors() {
        let shared = PathNode::root().extend(["a", "b"]);
        let leaf = shared.extend(["c", "d"]);
        drop(leaf);
        assert_eq!(shared.path("/"), "root/a/b");
        assert_eq!(shared.child("e").depth(), 3);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let result = PathNode::from_json("{\"nope\": 1}", None);
        assert!(matches!(result, Err(TreeError::Serialization(_))));
    }
}
