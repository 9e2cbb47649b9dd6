use anyhow::anyhow;
use async_trait::async_trait;
use expense_repo::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};

/// Repo whose every call fails the way an unreachable database would.
pub struct FailingExpenseRepo;

fn unavailable() -> ExpenseRepoError {
    ExpenseRepoError::Other(anyhow!("database is unavailable"))
}

#[async_trait]
impl ExpenseRepo for FailingExpenseRepo {
    async fn create_expense(&self, _new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        Err(unavailable())
    }

    async fn get_expense(&self, _expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        Err(unavailable())
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        Err(unavailable())
    }

    async fn update_expense(
        &self,
        _expense_id: i32,
        _updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError> {
        Err(unavailable())
    }
}
