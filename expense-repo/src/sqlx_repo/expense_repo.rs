use crate::expense_repo::ExpenseRepoError::ExpenseNotFound;
use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query_as, query_scalar, Pool, Postgres};
use tracing::{info, instrument};

#[derive(sqlx::FromRow)]
struct ExpenseEntry {
    id: i32,
    title: String,
    amount: i32,
    note: String,
    tags: Vec<String>,
}

impl From<ExpenseEntry> for Expense {
    fn from(value: ExpenseEntry) -> Self {
        Expense::new(value.id, value.title, value.amount, value.note, value.tags)
    }
}

pub struct SQLxExpenseRepo {
    pool: Pool<Postgres>,
}

impl SQLxExpenseRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxExpenseRepo {
        SQLxExpenseRepo { pool }
    }
}

#[async_trait]
impl ExpenseRepo for SQLxExpenseRepo {
    #[instrument(skip(self))]
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        let id = query_scalar::<_, i32>(
            "INSERT INTO expenses (title, amount, note, tags) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_expense.title)
        .bind(new_expense.amount)
        .bind(&new_expense.note)
        .bind(new_expense.tags.as_slice())
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert expense")?;

        Ok(new_expense.to_expense(id))
    }

    #[instrument(skip(self))]
    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        let expense_entry: Option<ExpenseEntry> = query_as::<_, ExpenseEntry>(
            "SELECT id, title, amount, note, tags FROM expenses WHERE id = $1",
        )
        .bind(expense_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get expense {}", expense_id))?;

        expense_entry
            .map(|e| e.into())
            .ok_or(ExpenseNotFound(expense_id))
    }

    #[instrument(skip(self))]
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        let expense_entries: Vec<ExpenseEntry> =
            query_as::<_, ExpenseEntry>("SELECT id, title, amount, note, tags FROM expenses")
                .fetch_all(&self.pool)
                .await
                .context("Unable to get expenses")?;

        Ok(expense_entries.into_iter().map(|e| e.into()).collect())
    }

    #[instrument(skip(self))]
    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError> {
        let expense_entry: Option<ExpenseEntry> = query_as::<_, ExpenseEntry>(
            "UPDATE expenses SET title = $2, amount = $3, note = $4, tags = $5 WHERE id = $1 RETURNING id, title, amount, note, tags",
        )
        .bind(expense_id)
        .bind(&updated_expense.title)
        .bind(updated_expense.amount)
        .bind(&updated_expense.note)
        .bind(updated_expense.tags.as_slice())
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to update expense {}", expense_id))?;

        expense_entry
            .map(|e| e.into())
            .ok_or(ExpenseNotFound(expense_id))
    }

    async fn close(&self) {
        info!("closing the database connection");
        self.pool.close().await;
    }
}
