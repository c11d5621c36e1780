//! Schedule service API trait

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::client::models::{EmployeeSchedule, Schedule, WorkedHours};
use crate::error::Result;

/// Schedule service operations
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn list_schedules(&self) -> Result<Vec<Schedule>>;

    async fn get_schedule(&self, id: i64) -> Result<Schedule>;

    async fn get_schedule_by_date(&self, date: NaiveDate) -> Result<Schedule>;

    async fn create_schedule(&self, schedule: &Schedule) -> Result<Schedule>;

    async fn update_schedule(&self, id: i64, schedule: &Schedule) -> Result<Schedule>;

    async fn delete_schedule(&self, id: i64) -> Result<()>;

    async fn list_assignments(&self) -> Result<Vec<EmployeeSchedule>>;

    /// Find the assignment tying an employee to a schedule
    async fn find_assignment(
        &self,
        employee_id: i64,
        schedule_id: i64,
    ) -> Result<EmployeeSchedule>;

    async fn create_assignment(&self, assignment: &EmployeeSchedule) -> Result<EmployeeSchedule>;

    async fn delete_assignment(&self, id: i64) -> Result<()>;

    async fn list_worked_hours(&self) -> Result<Vec<WorkedHours>>;

    /// Register worked hours against an employee's open schedule
    async fn register_hours(&self, employee_id: i64, hours: f32) -> Result<()>;
}
