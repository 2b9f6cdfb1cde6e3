use serde_json::{Map, Value};

use crate::catalog::CardCatalog;
use crate::types::{SlimCard, SlimCatalog};

/// Reduce a full catalog to its slim projection.
///
/// One output entry per input entry, keyed by the same identifier. `name`
/// and `pretty_name` are copied when present as strings; anything else
/// becomes null. The `id` field always echoes the catalog key.
pub fn project(catalog: &CardCatalog) -> SlimCatalog {
    catalog
        .iter()
        .map(|(id, record)| (id.clone(), slim_record(id, record)))
        .collect()
}

fn slim_record(id: &str, record: &Map<String, Value>) -> SlimCard {
    SlimCard {
        name: string_field(record, "name"),
        pretty_name: string_field(record, "pretty_name"),
        id: id.to_string(),
    }
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test records are objects"),
        }
    }

    #[test]
    fn test_slim_record_copies_both_fields() {
        let rec = record(json!({
            "name": "Fire",
            "pretty_name": "Fire Card",
            "cost": 3,
        }));
        let slim = slim_record("c1", &rec);
        assert_eq!(slim.name.as_deref(), Some("Fire"));
        assert_eq!(slim.pretty_name.as_deref(), Some("Fire Card"));
        assert_eq!(slim.id, "c1");
    }

    #[test]
    fn test_slim_record_missing_fields_become_none() {
        let rec = record(json!({ "rarity": "common" }));
        let slim = slim_record("c9", &rec);
        assert!(slim.name.is_none());
        assert!(slim.pretty_name.is_none());
        assert_eq!(slim.id, "c9");
    }

    #[test]
    fn test_slim_record_non_string_field_becomes_none() {
        let rec = record(json!({ "name": 42, "pretty_name": null }));
        let slim = slim_record("c2", &rec);
        assert!(slim.name.is_none());
        assert!(slim.pretty_name.is_none());
    }
}
