//! # Path Algebra
//!
//! Copy-on-write reads and writes on a [`Value`] tree.
//!
//! None of these functions fail. Lookups that miss return `None`; structural
//! edits that cannot apply (`remove_at`/`move_item` on a non-array or an
//! out-of-range index) return the input unchanged, i.e. a clone that is
//! [`Value::ptr_eq`] to it. Callers detect a no-op with `ptr_eq`.
//!
//! Every successful write shallow-copies only the containers on the path;
//! sibling subtrees are shared with the input.

use crate::path::{PropPath, Segment};
use crate::value::{Map, Value};
use std::sync::Arc;

/// Largest run of `Null` padding a single write may add past an array's end.
/// Writes further out land at the end of the array instead.
pub const MAX_ARRAY_GAP: usize = 1024;

/// Read the value at `path`, or `None` as soon as the walk misses
pub fn get<'a>(doc: &'a Value, path: impl Into<PropPath>) -> Option<&'a Value> {
    let path = path.into();
    let mut node = doc;

    for segment in path.segments() {
        node = match (node, segment) {
            (Value::Array(items), Segment::Index(index)) => items.get(*index)?,
            (Value::Object(map), Segment::Key(key)) => map.get(key.as_str())?,
            (Value::Object(map), index) => map.get(index.to_key().as_str())?,
            _ => return None,
        };
    }

    Some(node)
}

/// Return a new tree with `value` written at `path`.
///
/// An empty path returns `doc` itself. Missing or scalar intermediates are
/// replaced by an empty array when the following segment is an index, or
/// an empty object otherwise. An index past the end pads with `Null`, up to
/// [`MAX_ARRAY_GAP`] slots; anything further out is appended.
pub fn set(doc: &Value, path: impl Into<PropPath>, value: Value) -> Value {
    let path = path.into();
    if path.is_empty() {
        return doc.clone();
    }
    set_in(doc, path.segments(), value)
}

fn set_in(node: &Value, segments: &[Segment], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    match (node, head) {
        (Value::Array(items), Segment::Index(index)) => {
            let mut items = Vec::clone(items);
            let slot = if index.saturating_sub(items.len()) > MAX_ARRAY_GAP {
                items.len()
            } else {
                *index
            };
            if slot >= items.len() {
                items.resize(slot + 1, Value::Null);
            }
            items[slot] = set_in(&items[slot], rest, value);
            Value::Array(Arc::new(items))
        }
        (Value::Object(map), segment) => {
            let mut map = Map::clone(map);
            let key = segment.to_key();
            let child = map.get(&key).cloned().unwrap_or_default();
            map.insert(key, set_in(&child, rest, value));
            Value::Object(Arc::new(map))
        }
        (_, Segment::Index(_)) => set_in(&Value::array(), segments, value),
        (_, Segment::Key(_)) => set_in(&Value::object(), segments, value),
    }
}

/// Push `value` onto the array at `path` (a missing or non-array value
/// counts as empty)
pub fn append(doc: &Value, path: impl Into<PropPath>, value: Value) -> Value {
    let path = path.into();
    let mut items = get(doc, &path)
        .and_then(Value::as_array)
        .map(<[Value]>::to_vec)
        .unwrap_or_default();
    items.push(value);
    set(doc, path, Value::from(items))
}

/// Remove the element at `index` from the array at `path`
pub fn remove_at(doc: &Value, path: impl Into<PropPath>, index: usize) -> Value {
    let path = path.into();
    let Some(items) = get(doc, &path).and_then(Value::as_array) else {
        return doc.clone();
    };
    if index >= items.len() {
        return doc.clone();
    }

    let remaining: Vec<Value> = items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect();
    set(doc, path, Value::from(remaining))
}

/// Move the element at `from` to position `to` within the array at `path`
pub fn move_item(doc: &Value, path: impl Into<PropPath>, from: usize, to: usize) -> Value {
    let path = path.into();
    let Some(items) = get(doc, &path).and_then(Value::as_array) else {
        return doc.clone();
    };
    if from >= items.len() || to >= items.len() {
        return doc.clone();
    }

    let mut items = items.to_vec();
    let moved = items.remove(from);
    items.insert(to, moved);
    set(doc, path, Value::from(items))
}
