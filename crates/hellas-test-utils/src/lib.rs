//! Testing utilities for Hellas workspace
//!
//! Shared test anchors, fixtures, and assertions.

#![allow(missing_docs)]

use hellas_attr::AttrMap;
use hellas_tree::{Anchor, CallArgs, DispatchError, Dispatcher, PathNode};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

/// One recorded dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub path: String,
    pub args: CallArgs,
}

/// Anchor that records every dispatch and answers with the dotted path
#[derive(Debug, Default)]
pub struct RecordingAnchor {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingAnchor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl Dispatcher for RecordingAnchor {
    fn dispatch(&self, node: &PathNode, args: CallArgs) -> Result<Value, DispatchError> {
        let path = node.path(".");
        self.calls.lock().push(RecordedCall {
            path: path.clone(),
            args,
        });
        Ok(Value::String(path))
    }
}

impl Anchor for RecordingAnchor {
    fn dispatcher(&self) -> Option<&dyn Dispatcher> {
        Some(self)
    }
}

/// Anchor without a dispatch hook
#[derive(Debug, Default)]
pub struct SilentAnchor;

impl Anchor for SilentAnchor {}

pub fn anchored_tree(anchor: Arc<dyn Anchor>, names: &[&str]) -> PathNode {
    PathNode::anchored(anchor).extend(names.iter().copied())
}

/// `{"a": 1, "b": {"c": 2}}`
pub fn sample_nested() -> Value {
    json!({ "a": 1, "b": { "c": 2 } })
}

pub fn sample_attr_map() -> AttrMap {
    AttrMap::try_from(sample_nested()).expect("sample is an object")
}

/// A parsed configuration document with three levels of nesting
pub fn sample_config() -> Value {
    json!({
        "service": {
            "name": "hellas",
            "limits": { "retries": 3, "timeout_secs": 30 }
        },
        "tags": ["a", "b"],
        "enabled": true
    })
}
