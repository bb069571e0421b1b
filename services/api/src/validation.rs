//! Payload validation for create, replace and modify operations
//!
//! Validation runs over the raw JSON map before any typed deserialization,
//! so field presence and shape can be checked independently. Every defect
//! is collected; the caller gets the full list in one pass.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// How strictly presence is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every field is required (create and replace)
    Full,
    /// Absent fields are skipped; present fields must still be valid (modify)
    Partial,
}

const REQUIREMENT_FIELDS: [&str; 5] = ["os", "processor", "memory", "graphics", "storage"];

fn release_date_regex() -> &'static Regex {
    static RELEASE_DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    RELEASE_DATE_REGEX.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile release date regex")
    })
}

/// Validate a game payload, returning every defect found
pub fn validate_game_payload(body: &Map<String, Value>, mode: ValidationMode) -> Vec<String> {
    let mut errors = Vec::new();

    check_text(body, "title", mode, &mut errors);
    check_number(body, "price", 0.0, None, mode, &mut errors);
    check_number(body, "originalPrice", 0.0, None, mode, &mut errors);
    check_number(body, "discount", 0.0, Some(100.0), mode, &mut errors);
    check_text(body, "image", mode, &mut errors);
    check_text(body, "category", mode, &mut errors);
    check_string_array(body, "platform", mode, &mut errors);
    check_number(body, "rating", 0.0, Some(5.0), mode, &mut errors);
    check_text(body, "description", mode, &mut errors);
    check_requirements(body, mode, &mut errors);
    check_string_array(body, "features", mode, &mut errors);
    check_release_date(body, mode, &mut errors);
    check_text(body, "publisher", mode, &mut errors);
    check_featured(body, mode, &mut errors);

    errors
}

/// Validate a user payload, returning every defect found
pub fn validate_user_payload(body: &Map<String, Value>, mode: ValidationMode) -> Vec<String> {
    let mut errors = Vec::new();

    check_text(body, "nombre", mode, &mut errors);
    check_text(body, "email", mode, &mut errors);
    check_text(body, "password", mode, &mut errors);

    errors
}

fn check_text(body: &Map<String, Value>, field: &str, mode: ValidationMode, errors: &mut Vec<String>) {
    match (body.get(field), mode) {
        (None, ValidationMode::Full) => {
            errors.push(format!("{field} is required and must be a non-empty string"));
        }
        (None, ValidationMode::Partial) => {}
        (Some(value), ValidationMode::Full) => {
            if !matches!(value, Value::String(s) if !s.is_empty()) {
                errors.push(format!("{field} is required and must be a non-empty string"));
            }
        }
        // Partial mode also rejects whitespace-only strings
        (Some(value), ValidationMode::Partial) => {
            if !matches!(value, Value::String(s) if !s.trim().is_empty()) {
                errors.push(format!("{field} must be a non-empty string"));
            }
        }
    }
}

fn check_number(
    body: &Map<String, Value>,
    field: &str,
    min: f64,
    max: Option<f64>,
    mode: ValidationMode,
    errors: &mut Vec<String>,
) {
    let rule = match max {
        Some(max) => format!("a number between {min} and {max}"),
        None => format!("a number greater than or equal to {min}"),
    };

    match body.get(field) {
        None => {
            if mode == ValidationMode::Full {
                errors.push(format!("{field} is required and must be {rule}"));
            }
        }
        Some(value) => match value.as_f64() {
            Some(n) if n >= min && max.is_none_or(|max| n <= max) => {}
            _ => errors.push(format!("{field} must be {rule}")),
        },
    }
}

fn check_string_array(
    body: &Map<String, Value>,
    field: &str,
    mode: ValidationMode,
    errors: &mut Vec<String>,
) {
    match body.get(field) {
        None => {
            if mode == ValidationMode::Full {
                errors.push(format!("{field} is required and must be an array of strings"));
            }
        }
        // An empty array passes the type check; it means "none"
        Some(Value::Array(items)) => {
            if !items.iter().all(Value::is_string) {
                errors.push(format!("{field} must be an array of strings"));
            }
        }
        Some(_) => errors.push(format!("{field} must be an array of strings")),
    }
}

fn check_requirements(body: &Map<String, Value>, mode: ValidationMode, errors: &mut Vec<String>) {
    match body.get("requirements") {
        None => {
            // One aggregate defect; the sub-field checks are skipped
            if mode == ValidationMode::Full {
                errors.push(
                    "requirements is required and must be an object with os, processor, memory, graphics and storage"
                        .to_string(),
                );
            }
        }
        Some(Value::Object(requirements)) => {
            for sub in REQUIREMENT_FIELDS {
                match mode {
                    ValidationMode::Full => {
                        if !matches!(requirements.get(sub), Some(Value::String(s)) if !s.is_empty())
                        {
                            errors.push(format!(
                                "requirements.{sub} is required and must be a non-empty string"
                            ));
                        }
                    }
                    ValidationMode::Partial => {
                        if let Some(value) = requirements.get(sub) {
                            if !value.is_string() {
                                errors.push(format!("requirements.{sub} must be a string"));
                            }
                        }
                    }
                }
            }
        }
        Some(_) => errors.push(
            "requirements must be an object with os, processor, memory, graphics and storage"
                .to_string(),
        ),
    }
}

fn check_release_date(body: &Map<String, Value>, mode: ValidationMode, errors: &mut Vec<String>) {
    match body.get("releaseDate") {
        None => {
            if mode == ValidationMode::Full {
                errors.push("releaseDate is required and must match the YYYY-MM-DD format".to_string());
            }
        }
        // Pattern check only; impossible calendar dates like 2024-13-40 pass
        Some(Value::String(s)) if release_date_regex().is_match(s) => {}
        Some(_) => errors.push("releaseDate must match the YYYY-MM-DD format".to_string()),
    }
}

fn check_featured(body: &Map<String, Value>, mode: ValidationMode, errors: &mut Vec<String>) {
    match body.get("featured") {
        None => {
            if mode == ValidationMode::Full {
                errors.push("featured is required and must be a boolean".to_string());
            }
        }
        Some(Value::Bool(_)) => {}
        Some(_) => errors.push("featured must be a boolean".to_string()),
    }
}
