//! Game catalog models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum system requirements attached to every game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRequirements {
    pub os: String,
    pub processor: String,
    pub memory: String,
    pub graphics: String,
    pub storage: String,
}

/// Full game payload for create and replace operations.
///
/// Deserialized only after the payload has passed full validation, so
/// every field is known to be present with the right shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    pub title: String,
    pub price: f64,
    pub original_price: f64,
    pub discount: f64,
    pub image: String,
    pub category: String,
    pub platform: Vec<String>,
    pub rating: f64,
    pub description: String,
    pub requirements: GameRequirements,
    pub features: Vec<String>,
    /// Kept as text; the format check is pattern-only, not calendar-aware
    pub release_date: String,
    pub publisher: String,
    pub featured: bool,
}

/// Stored game record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub original_price: f64,
    pub discount: f64,
    pub image: String,
    pub category: String,
    pub platform: Vec<String>,
    pub rating: f64,
    pub description: String,
    pub requirements: GameRequirements,
    pub features: Vec<String>,
    pub release_date: String,
    pub publisher: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_uses_camel_case_names() {
        let payload: GamePayload = serde_json::from_value(json!({
            "title": "Elden Ring",
            "price": 59.99,
            "originalPrice": 69.99,
            "discount": 14.3,
            "image": "https://cdn.example.com/elden-ring.jpg",
            "category": "RPG",
            "platform": ["PC", "PS5"],
            "rating": 4.8,
            "description": "Open world action RPG",
            "requirements": {
                "os": "Windows 10",
                "processor": "i5-8400",
                "memory": "12 GB",
                "graphics": "GTX 1060",
                "storage": "60 GB"
            },
            "features": ["Singleplayer", "Online co-op"],
            "releaseDate": "2022-02-25",
            "publisher": "Bandai Namco",
            "featured": true
        }))
        .unwrap();

        assert_eq!(payload.original_price, 69.99);
        assert_eq!(payload.release_date, "2022-02-25");
        assert_eq!(payload.requirements.memory, "12 GB");
    }
}
