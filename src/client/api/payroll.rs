//! Payroll service API trait

use async_trait::async_trait;

use crate::client::models::{Adjustment, Payroll};
use crate::error::Result;

/// Payroll service operations
#[async_trait]
pub trait PayrollApi: Send + Sync {
    async fn list_payrolls(&self) -> Result<Vec<Payroll>>;

    async fn get_payroll(&self, id: i64) -> Result<Payroll>;

    async fn list_payrolls_by_employee(&self, employee_id: i64) -> Result<Vec<Payroll>>;

    async fn list_adjustments(&self) -> Result<Vec<Adjustment>>;

    async fn create_adjustment(
        &self,
        payroll_id: i64,
        adjustment: &Adjustment,
    ) -> Result<Adjustment>;

    async fn delete_adjustment(&self, payroll_id: i64, adjustment_id: i64) -> Result<()>;
}
