//! Records that can be searched by field name.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// A record with named, textual fields.
///
/// `field` returns `None` when the field is absent or null. Such fields never
/// match a query and are never an error.
pub trait Record {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Textual form of a JSON scalar.
///
/// Strings are borrowed; numbers and booleans use their display form. Null,
/// arrays and objects have no textual form.
fn json_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_object()?.get(name).and_then(json_text)
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(json_text)
    }
}

impl<S: std::hash::BuildHasher> Record for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests;
