pub mod generator;

use expense_repo::expense_repo::ExpenseRepo;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repo(repo_type: RepoType) -> Arc<dyn ExpenseRepo> {
    match repo_type {
        RepoType::SQLx => {
            let config = fs::read_to_string("config_test.toml").unwrap();
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();
            expense_repo::sqlx_repo::create_repo(&config.database_url, 1)
                .await
                .unwrap()
        }
        RepoType::Mem => expense_repo::mem_repo::create_repo(),
    }
}
