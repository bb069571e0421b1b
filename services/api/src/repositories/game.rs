//! Game repository for database operations

use anyhow::{Context, Result};
use sqlx::{MySql, MySqlPool, QueryBuilder, Row, mysql::MySqlRow};
use tracing::info;
use uuid::Uuid;

use crate::models::game::{Game, GamePayload};
use crate::update::SetClause;

use super::push_set_clauses;

/// Game repository for database operations
#[derive(Clone)]
pub struct GameRepository {
    pool: MySqlPool,
}

impl GameRepository {
    /// Create a new game repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new game and return the stored record
    pub async fn create(&self, payload: &GamePayload) -> Result<Game> {
        info!("Creating new game: {}", payload.title);

        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO games
                (id, title, price, original_price, discount, image, category,
                 platform, rating, description, requirements, features,
                 release_date, publisher, featured)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&payload.title)
        .bind(payload.price)
        .bind(payload.original_price)
        .bind(payload.discount)
        .bind(&payload.image)
        .bind(&payload.category)
        .bind(serde_json::to_string(&payload.platform)?)
        .bind(payload.rating)
        .bind(&payload.description)
        .bind(serde_json::to_string(&payload.requirements)?)
        .bind(serde_json::to_string(&payload.features)?)
        .bind(&payload.release_date)
        .bind(&payload.publisher)
        .bind(payload.featured)
        .execute(&self.pool)
        .await?;

        let game = self
            .find_by_id(id)
            .await?
            .context("game row missing after insert")?;

        Ok(game)
    }

    /// Get all games
    pub async fn get_all(&self) -> Result<Vec<Game>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, price, original_price, discount, image, category,
                   platform, rating, description, requirements, features,
                   release_date, publisher, featured, created_at, updated_at
            FROM games
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(game_from_row).collect()
    }

    /// Find a game by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, price, original_price, discount, image, category,
                   platform, rating, description, requirements, features,
                   release_date, publisher, featured, created_at, updated_at
            FROM games
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(game_from_row).transpose()
    }

    /// Replace every mutable field of a game
    pub async fn replace(&self, id: Uuid, payload: &GamePayload) -> Result<Option<Game>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r#"
            UPDATE games
            SET title = ?, price = ?, original_price = ?, discount = ?,
                image = ?, category = ?, platform = ?, rating = ?,
                description = ?, requirements = ?, features = ?,
                release_date = ?, publisher = ?, featured = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(&payload.title)
        .bind(payload.price)
        .bind(payload.original_price)
        .bind(payload.discount)
        .bind(&payload.image)
        .bind(&payload.category)
        .bind(serde_json::to_string(&payload.platform)?)
        .bind(payload.rating)
        .bind(&payload.description)
        .bind(serde_json::to_string(&payload.requirements)?)
        .bind(serde_json::to_string(&payload.features)?)
        .bind(&payload.release_date)
        .bind(&payload.publisher)
        .bind(payload.featured)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await
    }

    /// Apply a sparse SET list produced by the update mapper
    pub async fn apply_partial(&self, id: Uuid, clauses: &[SetClause]) -> Result<Option<Game>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut builder = QueryBuilder::<MySql>::new("UPDATE games SET ");
        push_set_clauses(&mut builder, clauses);
        builder.push(" WHERE id = ").push_bind(id.to_string());
        builder.build().execute(&self.pool).await?;

        self.find_by_id(id).await
    }

    /// Delete a game by ID
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn game_from_row(row: &MySqlRow) -> Result<Game> {
    let id: String = row.get("id");
    let platform: String = row.get("platform");
    let requirements: String = row.get("requirements");
    let features: String = row.get("features");

    Ok(Game {
        id: Uuid::parse_str(&id)?,
        title: row.get("title"),
        price: row.get("price"),
        original_price: row.get("original_price"),
        discount: row.get("discount"),
        image: row.get("image"),
        category: row.get("category"),
        platform: serde_json::from_str(&platform).context("malformed platform blob")?,
        rating: row.get("rating"),
        description: row.get("description"),
        requirements: serde_json::from_str(&requirements).context("malformed requirements blob")?,
        features: serde_json::from_str(&features).context("malformed features blob")?,
        release_date: row.get("release_date"),
        publisher: row.get("publisher"),
        featured: row.get("featured"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
