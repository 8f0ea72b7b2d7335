//! Record abstraction
//!
//! A record is anything that can hand out a string value by field name.
//! Records are borrowed by the engine and never modified.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Read-only field access used by the matcher
pub trait Record {
    /// String value of `name`, or `None` when the field is missing or not a string
    fn field(&self, name: &str) -> Option<&str>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

impl<S: BuildHasher> Record for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

/// Only objects have fields; any other JSON value matches nothing
impl Record for Value {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_object().and_then(|obj| obj.field(name))
    }
}
