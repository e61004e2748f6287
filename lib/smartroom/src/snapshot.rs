use serde_json::Value;

use crate::Field;

/// Value of the smartroom node as delivered by one notification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot(Value);

impl Snapshot {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Any JSON number. Other types count as absent.
    pub fn get_f64(&self, field: Field) -> Option<f64> {
        self.lookup(field, Value::as_f64)
    }

    /// JSON booleans only; `1` or `"true"` count as absent.
    pub fn get_bool(&self, field: Field) -> Option<bool> {
        self.lookup(field, Value::as_bool)
    }

    /// Keys that are neither a field nor a legacy alias of one.
    pub fn unknown_keys(&self) -> Vec<&str> {
        let Some(children) = self.0.as_object() else {
            return vec![];
        };

        children
            .keys()
            .map(String::as_str)
            .filter(|key| {
                !Field::VARIANTS.iter().any(|field| {
                    field.to_string() == *key || field.legacy_key() == Some(*key)
                })
            })
            .collect()
    }

    fn lookup<T>(&self, field: Field, read: fn(&Value) -> Option<T>) -> Option<T> {
        let children = self.0.as_object()?;

        children
            .get(&field.to_string())
            .and_then(read)
            .or_else(|| {
                let legacy = field.legacy_key()?;
                children.get(legacy).and_then(read)
            })
    }
}
