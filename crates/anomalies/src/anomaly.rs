// SPDX-License-Identifier: MIT OR Apache-2.0
//! The [`Anomaly`] record and its constructors.

use crate::category::Category;
use crate::status::Classify;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Caller-supplied payload merged into an anomaly.
pub type Fields = BTreeMap<String, Value>;

/// Data key under which an unrecognised payload `category` is kept.
pub const UNKNOWN_CATEGORY_KEY: &str = "unknown_category";

/// A structured description of why something failed.
///
/// Serialises to a flat object: `category`, `message`, then every entry of
/// [`Anomaly::data`] as a sibling key.
///
/// ```
/// use anomalies::{Anomaly, Category};
///
/// let a = Anomaly::new(Category::Forbidden, "read-only project")
///     .with_field("project_id", 42);
/// assert_eq!(
///     serde_json::to_value(&a).unwrap(),
///     serde_json::json!({"category": "forbidden", "message": "read-only project", "project_id": 42}),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Anomaly {
    /// Why it failed.
    pub category: Category,
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    data: Fields,
}

impl Anomaly {
    /// Create an anomaly with no extra fields.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            data: Fields::new(),
        }
    }

    /// Extra caller-supplied fields. Never contains `category` or `message`.
    pub fn data(&self) -> &Fields {
        &self.data
    }

    /// Merge one field into the record.
    ///
    /// The value is converted via [`serde_json::to_value`]; if that fails
    /// the entry is skipped. A `category` entry naming a known category
    /// replaces the category. Any other `category` entry turns the anomaly
    /// into a [`Category::Fault`] and is kept under [`UNKNOWN_CATEGORY_KEY`].
    /// A string `message` entry replaces the message; a non-string one is
    /// dropped.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.merge(key.into(), v);
        }
        self
    }

    /// Merge every entry of `fields`, in key order, as [`with_field`] does.
    ///
    /// [`with_field`]: Anomaly::with_field
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = (String, Value)>) -> Self {
        for (key, value) in fields {
            self.merge(key, value);
        }
        self
    }

    /// Parse a JSON value into an anomaly.
    ///
    /// Returns `None` unless [`is_anomaly`] holds. A missing or non-string
    /// `message` becomes empty; every other member lands in `data`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let category = value.category()?;
        let object = value.as_object()?;
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let data = object
            .iter()
            .filter(|(k, _)| !is_reserved(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Some(Self {
            category,
            message: message.to_string(),
            data,
        })
    }

    /// The flat JSON object form of this anomaly.
    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("category".into(), Value::from(self.category.as_str()));
        object.insert("message".into(), Value::from(self.message.as_str()));
        for (k, v) in &self.data {
            object.insert(k.clone(), v.clone());
        }
        Value::Object(object)
    }

    fn merge(&mut self, key: String, value: Value) {
        if key == "category" {
            match value.as_str().map(str::parse::<Category>) {
                Some(Ok(category)) => self.category = category,
                _ => {
                    warn!(%value, "payload category names no known category; classifying as fault");
                    self.category = Category::Fault;
                    self.data.insert(UNKNOWN_CATEGORY_KEY.to_string(), value);
                }
            }
        } else if key == "message" {
            match value {
                Value::String(message) => self.message = message,
                other => warn!(value = %other, "dropping non-string payload message"),
            }
        } else {
            self.data.insert(key, value);
        }
    }
}

impl Classify for Anomaly {
    fn category(&self) -> Option<Category> {
        Some(self.category)
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;
        if !self.data.is_empty() {
            if let Ok(data) = serde_json::to_string(&self.data) {
                write!(f, " {data}")?;
            }
        }
        Ok(())
    }
}

impl From<Anomaly> for Value {
    fn from(anomaly: Anomaly) -> Self {
        anomaly.to_value()
    }
}

fn is_reserved(key: &str) -> bool {
    key == "category" || key == "message"
}

/// Build an anomaly from a category, a message, and an optional payload.
///
/// Payload entries are merged on top of the base record, so a payload
/// `category` or `message` wins over the explicit argument. An unrecognised
/// payload category degrades to [`Category::Fault`] (see
/// [`Anomaly::with_field`] for the shape rules).
pub fn make_anomaly(
    category: Category,
    message: impl Into<String>,
    data: Option<Fields>,
) -> Anomaly {
    let anomaly = Anomaly::new(category, message);
    match data {
        Some(fields) => anomaly.with_fields(fields),
        None => anomaly,
    }
}

/// `true` iff `value` is a JSON object whose `category` member names one
/// of the known categories. Scalars, arrays and `null` are never anomalies.
pub fn is_anomaly(value: &Value) -> bool {
    value.category().is_some()
}
