//! API trait definitions split by collaborator service
//!
//! One focused trait per remote service:
//! - [`AuthApi`] - sign-in
//! - [`EmployeeApi`] - employees, positions, leave records
//! - [`ScheduleApi`] - schedules, assignments, worked hours
//! - [`PayrollApi`] - payrolls and adjustments
//! - [`PerformanceApi`] - evaluations
//!
//! [`HrClient`](super::HrClient) implements all five.

mod auth;
mod employee;
mod payroll;
mod performance;
mod schedule;

pub use auth::AuthApi;
pub use employee::EmployeeApi;
pub use payroll::PayrollApi;
pub use performance::PerformanceApi;
pub use schedule::ScheduleApi;
