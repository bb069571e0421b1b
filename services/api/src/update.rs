//! Projection of partial payloads into targeted UPDATE clauses
//!
//! A static allow-list maps each mutable payload field to its storage
//! column and says whether the value is structured. The mapper walks the
//! table once, in order, and produces the bind-ready SET list. Values are
//! assumed already validated; the mapper only fails when nothing usable
//! was supplied.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

/// One entry in the allow-list of mutable fields
#[derive(Debug)]
pub struct FieldSpec {
    /// Field name as it appears in request payloads
    pub name: &'static str,
    /// Column name in the backing table
    pub column: &'static str,
    /// Structured values are flattened to a JSON text blob before binding
    pub json_encoded: bool,
}

const fn field(name: &'static str, column: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        column,
        json_encoded: false,
    }
}

const fn json_field(name: &'static str, column: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        column,
        json_encoded: true,
    }
}

/// Mutable game fields, in storage order
pub const GAME_UPDATE_FIELDS: &[FieldSpec] = &[
    field("title", "title"),
    field("price", "price"),
    field("originalPrice", "original_price"),
    field("discount", "discount"),
    field("image", "image"),
    field("category", "category"),
    json_field("platform", "platform"),
    field("rating", "rating"),
    field("description", "description"),
    json_field("requirements", "requirements"),
    json_field("features", "features"),
    field("releaseDate", "release_date"),
    field("publisher", "publisher"),
    field("featured", "featured"),
];

/// Mutable user fields
pub const USER_UPDATE_FIELDS: &[FieldSpec] = &[
    field("nombre", "nombre"),
    field("email", "email"),
    field("password", "password"),
];

/// Value ready to be bound into a SET clause
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

/// One `column = value` pair of the UPDATE statement
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub column: &'static str,
    pub value: BindValue,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UpdateError {
    /// The body had fields, but none from the allow-list
    #[error("No valid fields to update")]
    NoValidFields,
}

/// Project the allow-listed fields of `body` into an ordered SET list,
/// ending with the synthetic `updated_at` marker
pub fn project_update(
    body: &Map<String, Value>,
    fields: &'static [FieldSpec],
) -> Result<Vec<SetClause>, UpdateError> {
    let mut clauses = Vec::new();

    for spec in fields {
        let Some(value) = body.get(spec.name) else {
            continue;
        };

        let value = if spec.json_encoded {
            // Canonical JSON text of the structured value
            BindValue::Text(value.to_string())
        } else {
            match value {
                Value::String(s) => BindValue::Text(s.clone()),
                Value::Bool(b) => BindValue::Bool(*b),
                Value::Number(n) => BindValue::Number(n.as_f64().unwrap_or_default()),
                other => BindValue::Text(other.to_string()),
            }
        };

        clauses.push(SetClause {
            column: spec.column,
            value,
        });
    }

    if clauses.is_empty() {
        return Err(UpdateError::NoValidFields);
    }

    clauses.push(SetClause {
        column: "updated_at",
        value: BindValue::Timestamp(Utc::now()),
    });

    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_single_field_produces_data_pair_plus_marker() {
        let clauses = project_update(&body(json!({ "price": 10 })), GAME_UPDATE_FIELDS).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].column, "price");
        assert_eq!(clauses[0].value, BindValue::Number(10.0));
        assert_eq!(clauses[1].column, "updated_at");
        assert!(matches!(clauses[1].value, BindValue::Timestamp(_)));
    }

    #[test]
    fn test_unrecognized_fields_produce_no_pairs() {
        let result = project_update(&body(json!({ "unknownField": 1 })), GAME_UPDATE_FIELDS);
        assert_eq!(result, Err(UpdateError::NoValidFields));
    }

    #[test]
    fn test_external_names_map_to_storage_columns() {
        let clauses = project_update(
            &body(json!({ "originalPrice": 20, "releaseDate": "2024-01-01" })),
            GAME_UPDATE_FIELDS,
        )
        .unwrap();

        assert_eq!(clauses[0].column, "original_price");
        assert_eq!(clauses[1].column, "release_date");
        assert_eq!(clauses[1].value, BindValue::Text("2024-01-01".to_string()));
    }

    #[test]
    fn test_structured_fields_are_flattened_to_json_text() {
        let clauses = project_update(
            &body(json!({
                "platform": ["PC", "PS5"],
                "requirements": { "os": "Windows 11" }
            })),
            GAME_UPDATE_FIELDS,
        )
        .unwrap();

        assert_eq!(clauses[0].column, "platform");
        assert_eq!(clauses[0].value, BindValue::Text(r#"["PC","PS5"]"#.to_string()));
        assert_eq!(clauses[1].column, "requirements");
        assert_eq!(
            clauses[1].value,
            BindValue::Text(r#"{"os":"Windows 11"}"#.to_string())
        );
    }

    #[test]
    fn test_clauses_follow_table_order() {
        let clauses = project_update(
            &body(json!({ "featured": true, "title": "Hades", "rating": 4.5 })),
            GAME_UPDATE_FIELDS,
        )
        .unwrap();

        let columns: Vec<_> = clauses.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec!["title", "rating", "featured", "updated_at"]);
    }

    #[test]
    fn test_user_table_covers_mutable_fields_only() {
        let clauses = project_update(
            &body(json!({ "email": "ana@example.com", "id": "x", "createdAt": "y" })),
            USER_UPDATE_FIELDS,
        )
        .unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].column, "email");
        assert_eq!(clauses[1].column, "updated_at");
    }
}
