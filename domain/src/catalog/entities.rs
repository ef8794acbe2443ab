//! Application catalog entities

use crate::core::json::first_present;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field priority used to derive the identifier passed to analysis tools.
pub const APP_ID_KEYS: [&str; 3] = ["id", "applicationId", "name"];

/// A managed application, normalized from whatever shape the
/// `applications` capability returned.
///
/// `id` and `name` are always non-empty. Any other fields from the source
/// record are kept in `attributes` so the renderer can show them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    /// Identifier exactly as the server sent it (a number stays a number).
    #[serde(skip)]
    raw_id: Option<Value>,
}

impl Application {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Map::new(),
            raw_id: None,
        }
    }

    /// Keep the server's own identifier value for [`Application::app_id`].
    pub fn with_raw_id(mut self, raw_id: Value) -> Self {
        self.raw_id = Some(raw_id);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key != "id" && key != "name" {
            self.attributes.insert(key, value);
        }
        self
    }

    /// The full record as a JSON object (`id`, `name` and every attribute).
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = self.attributes.clone();
        record.insert("id".to_string(), Value::String(self.id.clone()));
        record.insert("name".to_string(), Value::String(self.name.clone()));
        record
    }

    /// Identifier to pass as `app_id` to analysis tools.
    ///
    /// The raw server value when one was kept, otherwise the string id.
    pub fn app_id(&self) -> Value {
        self.raw_id
            .clone()
            .unwrap_or_else(|| Value::String(self.id.clone()))
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.id == self.name {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.id)
        }
    }
}

/// Application identifier of a raw record: `id`, then `applicationId`, then
/// `name`. Empty values are skipped.
pub fn normalize_app_id(record: &Map<String, Value>) -> Option<&Value> {
    first_present(record, &APP_ID_KEYS)
}
