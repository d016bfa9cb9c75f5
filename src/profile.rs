//! Profile records built from positional and named values.
//!
//! Collects an arbitrary-length ordered list of positional values
//! (hobbies) and an arbitrary-size mapping of named values (extras),
//! the crate's rendering of variadic and keyword-argument collection.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// A profile with fixed fields, ordered extras and named extras.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    name: String,
    age: u32,
    hobbies: Vec<String>,
    extra: BTreeMap<String, Value>,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            hobbies: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Appends one positional value; order of insertion is kept.
    pub fn hobby(mut self, hobby: impl Into<String>) -> Self {
        self.hobbies.push(hobby.into());
        self
    }

    /// Adds one named value; any JSON-representable value is accepted.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn hobbies(&self) -> &[String] {
        &self.hobbies
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Renders the profile as a single `Profile: k=v, ...` line.
    ///
    /// Named extras follow the fixed fields in key order; string values
    /// render bare, other values as JSON.
    pub fn render(&self) -> String {
        let mut parts = vec![format!("name={}", self.name), format!("age={}", self.age)];
        if !self.hobbies.is_empty() {
            parts.push(format!("hobbies={}", self.hobbies.join("|")));
        }
        for (key, value) in &self.extra {
            parts.push(format!("{}={}", key, render_value(value)));
        }
        format!("Profile: {}", parts.join(", "))
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
