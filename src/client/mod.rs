//! HR platform API client

pub mod api;
pub mod hr;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, EmployeeApi, PayrollApi, PerformanceApi, ScheduleApi};
pub use hr::HrClient;

#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockHrClient;
