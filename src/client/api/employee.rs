//! Employee service API trait: employees, positions, leave records

use async_trait::async_trait;

use crate::client::models::{Employee, LeaveRecord, Position};
use crate::error::Result;

/// Employee service operations
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn get_employee(&self, id: i64) -> Result<Employee>;

    /// Lookup by email; used during session resolution
    async fn get_employee_by_email(&self, email: &str) -> Result<Employee>;

    async fn create_employee(&self, employee: &Employee) -> Result<Employee>;

    async fn update_employee(&self, id: i64, employee: &Employee) -> Result<Employee>;

    async fn delete_employee(&self, id: i64) -> Result<()>;

    async fn list_positions(&self) -> Result<Vec<Position>>;

    async fn get_position(&self, id: i64) -> Result<Position>;

    async fn create_position(&self, position: &Position) -> Result<Position>;

    async fn update_position(&self, id: i64, position: &Position) -> Result<Position>;

    async fn delete_position(&self, id: i64) -> Result<()>;

    async fn list_leave(&self) -> Result<Vec<LeaveRecord>>;

    async fn get_leave(&self, id: i64) -> Result<LeaveRecord>;

    async fn create_leave(&self, record: &LeaveRecord) -> Result<LeaveRecord>;

    async fn update_leave(&self, id: i64, record: &LeaveRecord) -> Result<LeaveRecord>;

    async fn delete_leave(&self, id: i64) -> Result<()>;
}
