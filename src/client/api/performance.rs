//! Performance service API trait

use async_trait::async_trait;

use crate::client::models::Evaluation;
use crate::error::Result;

/// Performance evaluation operations
#[async_trait]
pub trait PerformanceApi: Send + Sync {
    async fn list_evaluations(&self) -> Result<Vec<Evaluation>>;

    async fn get_evaluation(&self, id: i64) -> Result<Evaluation>;

    async fn list_evaluations_by_employee(&self, employee_id: i64) -> Result<Vec<Evaluation>>;

    async fn create_evaluation(&self, evaluation: &Evaluation) -> Result<Evaluation>;

    async fn update_evaluation(&self, id: i64, evaluation: &Evaluation) -> Result<Evaluation>;

    async fn delete_evaluation(&self, id: i64) -> Result<()>;
}
