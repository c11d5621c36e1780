//! Wire models for the five collaborator services

mod auth;
mod employee;
mod payroll;
mod performance;
mod schedule;

pub use auth::{JwtToken, LoginRequest, LoginResponse, TokenClaims};
pub use employee::{Employee, LeaveRecord, Position};
pub use payroll::{Adjustment, AdjustmentType, Payroll};
pub use performance::Evaluation;
pub use schedule::{EmployeeSchedule, Schedule, WorkedHours};

#[cfg(test)]
pub(crate) use auth::encode_token;
