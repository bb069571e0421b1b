//! Integration test for the database infrastructure
//!
//! Verifies that the MySQL database is properly configured and accessible
//! from the application. Requires a reachable database; run with
//! `cargo test -- --ignored` against a live instance.

use common::database::{DatabaseConfig, health_check, init_pool};
use sqlx::Row;

#[tokio::test]
#[ignore = "requires a running MySQL instance"]
async fn test_database_integration() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;

    let result: i32 = row.get("result");
    assert_eq!(result, 1, "MySQL simple query test failed");

    Ok(())
}
