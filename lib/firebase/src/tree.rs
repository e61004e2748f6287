use serde_json::{Map, Value};

use crate::Path;

/// Local mirror of a listened node, rebuilt from `put` and `patch` events.
///
/// Follows the database's data model: `null` removes a value and objects
/// left without children disappear.
#[derive(Debug, Default)]
pub struct Tree {
    root: Value,
}

impl Tree {
    pub fn value(&self) -> &Value {
        &self.root
    }

    pub fn put(&mut self, path: &Path, data: Value) {
        set_at(&mut self.root, path.segments(), normalize(data));
    }

    pub fn patch(&mut self, path: &Path, data: Value) {
        match data {
            Value::Object(children) => {
                for (key, value) in children {
                    self.put(&path.child(&key), value);
                }
            }
            data => self.put(path, data),
        }
    }
}

fn set_at(node: &mut Value, segments: &[String], data: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = data;
        return;
    };

    if !node.is_object() {
        if data.is_null() {
            return;
        }

        *node = Value::Object(Map::new());
    }

    let is_empty = match node {
        Value::Object(children) => {
            let child = children.entry(head.clone()).or_insert(Value::Null);
            set_at(child, rest, data);

            if child.is_null() {
                children.remove(head);
            }

            children.is_empty()
        }
        _ => false,
    };

    if is_empty {
        *node = Value::Null;
    }
}

fn normalize(value: Value) -> Value {
    match value {
        Value::Object(children) => {
            let children: Map<String, Value> = children
                .into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .filter(|(_, value)| !value.is_null())
                .collect();

            if children.is_empty() {
                Value::Null
            } else {
                Value::Object(children)
            }
        }
        value => value,
    }
}
