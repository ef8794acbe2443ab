//! Normalization of raw `applications` results
//!
//! The raw catalog is classified once into a closed set of shapes
//! ([`RawCatalog`], [`CatalogEntry`]) and every entry is then converted into
//! an [`Application`]. Entries of unknown shape are degraded into synthetic
//! records rather than dropped.

use super::entities::{Application, normalize_app_id};
use crate::core::json::{first_scalar, scalar_to_string};
use serde_json::{Map, Value};

/// Mapping keys that wrap the actual list of applications.
const WRAPPER_KEYS: [&str; 3] = ["items", "applications", "data"];

/// Keys tried, in order, for a record's identifier.
const RECORD_ID_KEYS: [&str; 4] = ["id", "applicationId", "application_id", "name"];

/// Keys tried, in order, for a record's display name.
const RECORD_NAME_KEYS: [&str; 5] = ["name", "application", "displayName", "display_name", "id"];

/// Top-level shape of an `applications` result.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCatalog<'a> {
    /// A list of entries (possibly unwrapped from `items`/`applications`/`data`)
    Entries(Vec<&'a Value>),
    /// A `name:` / `delivery:` text block
    Text(&'a str),
    /// Nothing usable
    Empty,
}

impl<'a> RawCatalog<'a> {
    pub fn classify(raw: &'a Value) -> Self {
        match raw {
            Value::Null => RawCatalog::Empty,
            Value::Object(map) => {
                if let Some(inner) = WRAPPER_KEYS.iter().find_map(|key| map.get(*key)) {
                    RawCatalog::classify(inner)
                } else if map.is_empty() {
                    RawCatalog::Empty
                } else {
                    RawCatalog::Entries(vec![raw])
                }
            }
            Value::Array(items) => RawCatalog::Entries(items.iter().collect()),
            Value::String(text) if text.trim().is_empty() => RawCatalog::Empty,
            Value::String(text) => RawCatalog::Text(text),
            other => RawCatalog::Entries(vec![other]),
        }
    }
}

/// Shape of a single catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry<'a> {
    Record(&'a Map<String, Value>),
    /// `[id, name, ..]`
    Pair(&'a Value, &'a Value),
    /// Bare string used as both id and name
    Name(&'a str),
    Unrecognized(&'a Value),
}

impl<'a> CatalogEntry<'a> {
    pub fn classify(item: &'a Value) -> Self {
        match item {
            Value::Object(map) => CatalogEntry::Record(map),
            Value::Array(pair) if pair.len() >= 2 && is_scalar(&pair[0]) && is_scalar(&pair[1]) => {
                CatalogEntry::Pair(&pair[0], &pair[1])
            }
            Value::String(name) if !name.trim().is_empty() => CatalogEntry::Name(name.trim()),
            other => CatalogEntry::Unrecognized(other),
        }
    }

    /// Convert into an application; `index` is the entry's catalog position.
    pub fn into_application(self, index: usize) -> Application {
        match self {
            CatalogEntry::Record(map) => {
                let id = first_scalar(map, &RECORD_ID_KEYS).unwrap_or_else(|| positional_id(index));
                let name = first_scalar(map, &RECORD_NAME_KEYS).unwrap_or_else(|| id.clone());
                let mut app = Application::new(id, name);
                if let Some(raw_id) = normalize_app_id(map) {
                    app = app.with_raw_id(raw_id.clone());
                }
                for (key, value) in map {
                    app = app.with_attribute(key.clone(), value.clone());
                }
                app
            }
            CatalogEntry::Pair(raw_id, name) => match scalar_to_string(raw_id) {
                Some(id) => {
                    let name = scalar_to_string(name).unwrap_or_else(|| id.clone());
                    Application::new(id, name).with_raw_id(raw_id.clone())
                }
                None => {
                    let id = positional_id(index);
                    let name = scalar_to_string(name).unwrap_or_else(|| id.clone());
                    Application::new(id, name)
                }
            },
            CatalogEntry::Name(name) => Application::new(name, name),
            CatalogEntry::Unrecognized(value) => {
                let id = positional_id(index);
                let name = match value {
                    Value::Null => id.clone(),
                    other => other.to_string(),
                };
                Application::new(id, name)
            }
        }
    }
}

/// Normalize a raw `applications` result into uniform applications.
///
/// Every entry of a non-empty input yields exactly one application.
pub fn normalize_applications(raw: &Value) -> Vec<Application> {
    match RawCatalog::classify(raw) {
        RawCatalog::Empty => Vec::new(),
        RawCatalog::Text(text) => parse_text_block(text),
        RawCatalog::Entries(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| CatalogEntry::classify(item).into_application(index))
            .collect(),
    }
}

/// Parse the `name:` / `delivery:` text format.
///
/// Records are separated by `---` lines; a new `name:` line also starts a new
/// record. Lines outside these keys (headers, footers, counts) are ignored.
/// Text with no `name:` line at all is read as one application per line.
pub fn parse_text_block(text: &str) -> Vec<Application> {
    let mut parsed = Vec::new();
    let mut current = TextRecord::default();

    for line in text.lines().map(str::trim) {
        if line.starts_with("---") {
            current.flush_into(&mut parsed);
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "name" => {
                if current.name.is_some() {
                    current.flush_into(&mut parsed);
                }
                current.name = non_empty(value);
            }
            "id" => current.id = non_empty(value),
            "delivery" => current.delivery = non_empty(value),
            _ => {}
        }
    }
    current.flush_into(&mut parsed);

    if parsed.is_empty() {
        return text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("---"))
            .map(|line| Application::new(line, line))
            .collect();
    }
    parsed
}

#[derive(Debug, Default)]
struct TextRecord<'a> {
    name: Option<&'a str>,
    id: Option<&'a str>,
    delivery: Option<&'a str>,
}

impl TextRecord<'_> {
    fn flush_into(&mut self, out: &mut Vec<Application>) {
        let record = std::mem::take(self);
        let Some(name) = record.name else {
            return;
        };
        let mut app = Application::new(record.id.unwrap_or(name), name);
        if let Some(delivery) = record.delivery {
            app = app.with_attribute("delivery", Value::String(delivery.to_string()));
        }
        out.push(app);
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}

fn positional_id(index: usize) -> String {
    format!("app-{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids_and_names(apps: &[Application]) -> Vec<(&str, &str)> {
        apps.iter().map(|a| (a.id.as_str(), a.name.as_str())).collect()
    }

    #[test]
    fn test_mapping_with_items() {
        let raw = json!({"items": [{"id": "app1", "name": "Payments"}]});
        let apps = normalize_applications(&raw);
        assert_eq!(ids_and_names(&apps), vec![("app1", "Payments")]);
    }

    #[test]
    fn test_mapping_with_applications_or_data() {
        let raw = json!({"applications": [{"id": "a", "name": "A"}]});
        assert_eq!(normalize_applications(&raw).len(), 1);

        let raw = json!({"data": [{"id": "b", "name": "B"}, {"id": "c", "name": "C"}]});
        assert_eq!(normalize_applications(&raw).len(), 2);
    }

    #[test]
    fn test_list_of_mappings_keeps_attributes() {
        let raw = json!([
            {"applicationId": "A-7", "application": "Billing", "technologies": ["Java"]}
        ]);
        let apps = normalize_applications(&raw);
        assert_eq!(ids_and_names(&apps), vec![("A-7", "Billing")]);
        assert_eq!(apps[0].attributes["technologies"], json!(["Java"]));
        assert_eq!(apps[0].app_id(), json!("A-7"));
    }

    #[test]
    fn test_numeric_ids_are_stringified() {
        let raw = json!([{"id": 42, "name": "Legacy"}]);
        let apps = normalize_applications(&raw);
        assert_eq!(apps[0].id, "42");
    }

    #[test]
    fn test_numeric_ids_reach_tools_as_numbers() {
        let raw = json!([{"id": 42, "name": "Legacy"}, [7, "Billing"], "Payments"]);
        let apps = normalize_applications(&raw);
        assert_eq!(apps[0].app_id(), json!(42));
        assert_eq!(apps[1].app_id(), json!(7));
        assert_eq!(apps[2].app_id(), json!("Payments"));
    }

    #[test]
    fn test_app_id_falls_back_to_application_id() {
        let raw = json!([{"id": "", "applicationId": 9, "name": "Legacy"}]);
        let apps = normalize_applications(&raw);
        assert_eq!(apps[0].id, "9");
        assert_eq!(apps[0].app_id(), json!(9));
    }

    #[test]
    fn test_list_of_pairs() {
        let raw = json!([["app1", "Payments"], ["app2", "Billing"]]);
        let apps = normalize_applications(&raw);
        assert_eq!(
            ids_and_names(&apps),
            vec![("app1", "Payments"), ("app2", "Billing")]
        );
    }

    #[test]
    fn test_list_of_strings() {
        let raw = json!(["Payments", " Billing "]);
        let apps = normalize_applications(&raw);
        assert_eq!(
            ids_and_names(&apps),
            vec![("Payments", "Payments"), ("Billing", "Billing")]
        );
    }

    #[test]
    fn test_text_block() {
        let raw = json!(
            "Applications (2):\n\
             ---\n\
             name: Payments\n\
             delivery: 2024-R1\n\
             ---\n\
             name: Billing\n\
             delivery: 2023-R4\n\
             ---\n\
             End of list"
        );
        let apps = normalize_applications(&raw);
        assert_eq!(
            ids_and_names(&apps),
            vec![("Payments", "Payments"), ("Billing", "Billing")]
        );
        assert_eq!(apps[0].attributes["delivery"], json!("2024-R1"));
    }

    #[test]
    fn test_text_block_without_delimiters() {
        let apps = parse_text_block("name: A\nname: B\ndelivery: x");
        assert_eq!(ids_and_names(&apps), vec![("A", "A"), ("B", "B")]);
        assert!(apps[0].attributes.is_empty());
        assert_eq!(apps[1].attributes["delivery"], json!("x"));
    }

    #[test]
    fn test_unstructured_text_is_one_application_per_line() {
        let apps = parse_text_block("Payments\n\nBilling\n");
        assert_eq!(
            ids_and_names(&apps),
            vec![("Payments", "Payments"), ("Billing", "Billing")]
        );
    }

    #[test]
    fn test_unknown_items_are_degraded_not_dropped() {
        let raw = json!([{"id": "app1", "name": "Payments"}, 17, [1], null, true]);
        let apps = normalize_applications(&raw);
        assert_eq!(apps.len(), 5);
        assert_eq!(apps[1].id, "app-1");
        assert_eq!(apps[1].name, "17");
        assert_eq!(apps[2].name, "[1]");
        assert_eq!(apps[3].name, "app-3");
        assert_eq!(apps[4].name, "true");
        assert!(apps.iter().all(|a| !a.id.is_empty() && !a.name.is_empty()));
    }

    #[test]
    fn test_record_without_identity_gets_positional_id() {
        let raw = json!([{"owner": "team-a"}]);
        let apps = normalize_applications(&raw);
        assert_eq!(ids_and_names(&apps), vec![("app-0", "app-0")]);
        assert_eq!(apps[0].attributes["owner"], json!("team-a"));
    }

    #[test]
    fn test_bare_mapping_is_single_application() {
        let raw = json!({"id": "app1", "name": "Payments"});
        assert_eq!(normalize_applications(&raw).len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(normalize_applications(&json!(null)).is_empty());
        assert!(normalize_applications(&json!([])).is_empty());
        assert!(normalize_applications(&json!({})).is_empty());
        assert!(normalize_applications(&json!({"items": []})).is_empty());
        assert!(normalize_applications(&json!("  ")).is_empty());
    }
}
