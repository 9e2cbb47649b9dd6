mod expense_repo;

use crate::expense_repo::ExpenseRepo;
use crate::sqlx_repo::expense_repo::SQLxExpenseRepo;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, Pool, Postgres};
use std::sync::Arc;
use tracing::info;

const CREATE_EXPENSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    amount INTEGER NOT NULL,
    note TEXT NOT NULL,
    tags TEXT[] NOT NULL
)";

pub async fn create_repo(
    database_url: &str,
    max_pool_size: u32,
) -> Result<Arc<dyn ExpenseRepo>, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;

    create_schema(&pool).await?;

    Ok(Arc::new(SQLxExpenseRepo::new(pool)))
}

async fn create_schema(pool: &Pool<Postgres>) -> Result<(), anyhow::Error> {
    query(CREATE_EXPENSES_TABLE)
        .execute(pool)
        .await
        .context("Unable to create expenses table")?;
    info!("expenses table ready");
    Ok(())
}
