use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[async_trait]
pub trait ExpenseRepo: Sync + Send {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError>;

    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError>;

    /// Returns every expense in whatever order the storage engine produces.
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError>;

    /// Overwrites all fields of the expense with `updated_expense` and returns the stored result.
    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError>;

    /// Releases any connections held by the repo. Called once on shutdown.
    async fn close(&self) {}
}

#[derive(Error, Debug)]
pub enum ExpenseRepoError {
    #[error("Expense with id {0} not found")]
    ExpenseNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    pub amount: i32,
    pub note: String,
    pub tags: Vec<String>,
}

impl Expense {
    pub const fn new(
        id: i32,
        title: String,
        amount: i32,
        note: String,
        tags: Vec<String>,
    ) -> Expense {
        Expense {
            id,
            title,
            amount,
            note,
            tags,
        }
    }
}

/// Client supplied fields of an expense. Unknown fields (including `id`) are ignored, missing or
/// `null` ones take their zero value.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
#[serde(default)]
pub struct NewExpense {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewExpense {
    pub const fn new(title: String, amount: i32, note: String, tags: Vec<String>) -> NewExpense {
        NewExpense {
            title,
            amount,
            note,
            tags,
        }
    }

    pub fn to_expense(self, id: i32) -> Expense {
        Expense::new(id, self.title, self.amount, self.note, self.tags)
    }
}
