//! Mock HR API client for testing
//!
//! Implements the auth and employee traits with configurable responses,
//! one-shot error injection and call counting, for unit tests that
//! exercise the session lifecycle without a network.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, EmployeeApi};
use super::models::{Employee, JwtToken, LeaveRecord, Position};
use crate::error::{ApiError, Result};

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub get_employee_by_email: usize,
}

/// Mock API client. Configure responses via builder methods.
#[derive(Default)]
pub struct MockHrClient {
    jwt: Arc<Mutex<Option<JwtToken>>>,
    employees: Arc<Mutex<Vec<Employee>>>,
    positions: Arc<Mutex<Vec<Position>>>,
    leave: Arc<Mutex<Vec<LeaveRecord>>>,
    /// Error returned by the next login call, consumed on use
    login_error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by the next profile lookup, consumed on use
    lookup_error: Arc<Mutex<Option<ApiError>>>,
    calls: Arc<Mutex<CallCounts>>,
}

impl MockHrClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jwt(self, jwt: JwtToken) -> Self {
        *self.jwt.try_lock().unwrap() = Some(jwt);
        self
    }

    pub fn with_employee(self, employee: Employee) -> Self {
        self.employees.try_lock().unwrap().push(employee);
        self
    }

    pub fn with_login_error(self, error: ApiError) -> Self {
        *self.login_error.try_lock().unwrap() = Some(error);
        self
    }

    pub fn with_lookup_error(self, error: ApiError) -> Self {
        *self.lookup_error.try_lock().unwrap() = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl AuthApi for MockHrClient {
    async fn login(&self, _email: &str, _password: &str) -> Result<JwtToken> {
        self.calls.lock().await.login += 1;

        if let Some(error) = self.login_error.lock().await.take() {
            return Err(error.into());
        }

        self.jwt
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Request("no token configured".to_string()).into())
    }
}

#[async_trait]
impl EmployeeApi for MockHrClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.lock().await.clone())
    }

    async fn get_employee(&self, id: i64) -> Result<Employee> {
        self.employees
            .lock()
            .await
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::Request(format!("Employee {} not found", id)).into())
    }

    async fn get_employee_by_email(&self, email: &str) -> Result<Employee> {
        self.calls.lock().await.get_employee_by_email += 1;

        if let Some(error) = self.lookup_error.lock().await.take() {
            return Err(error.into());
        }

        self.employees
            .lock()
            .await
            .iter()
            .find(|e| e.email == email)
            .cloned()
            .ok_or_else(|| ApiError::Request(format!("Employee {} not found", email)).into())
    }

    async fn create_employee(&self, employee: &Employee) -> Result<Employee> {
        let mut employees = self.employees.lock().await;
        let mut created = employee.clone();
        created.id = Some(employees.len() as i64 + 1);
        employees.push(created.clone());
        Ok(created)
    }

    async fn update_employee(&self, id: i64, employee: &Employee) -> Result<Employee> {
        let mut employees = self.employees.lock().await;
        match employees.iter_mut().find(|e| e.id == Some(id)) {
            Some(slot) => {
                *slot = employee.clone();
                slot.id = Some(id);
                Ok(slot.clone())
            }
            None => Err(ApiError::Request(format!("Employee {} not found", id)).into()),
        }
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        self.employees.lock().await.retain(|e| e.id != Some(id));
        Ok(())
    }

    async fn list_positions(&self) -> Result<Vec<Position>> {
        Ok(self.positions.lock().await.clone())
    }

    async fn get_position(&self, id: i64) -> Result<Position> {
        self.positions
            .lock()
            .await
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::Request(format!("Position {} not found", id)).into())
    }

    async fn create_position(&self, position: &Position) -> Result<Position> {
        let mut positions = self.positions.lock().await;
        let mut created = position.clone();
        created.id = Some(positions.len() as i64 + 1);
        positions.push(created.clone());
        Ok(created)
    }

    async fn update_position(&self, id: i64, position: &Position) -> Result<Position> {
        let mut positions = self.positions.lock().await;
        match positions.iter_mut().find(|p| p.id == Some(id)) {
            Some(slot) => {
                *slot = position.clone();
                slot.id = Some(id);
                Ok(slot.clone())
            }
            None => Err(ApiError::Request(format!("Position {} not found", id)).into()),
        }
    }

    async fn delete_position(&self, id: i64) -> Result<()> {
        self.positions.lock().await.retain(|p| p.id != Some(id));
        Ok(())
    }

    async fn list_leave(&self) -> Result<Vec<LeaveRecord>> {
        Ok(self.leave.lock().await.clone())
    }

    async fn get_leave(&self, id: i64) -> Result<LeaveRecord> {
        self.leave
            .lock()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::Request(format!("Record {} not found", id)).into())
    }

    async fn create_leave(&self, record: &LeaveRecord) -> Result<LeaveRecord> {
        let mut leave = self.leave.lock().await;
        let mut created = record.clone();
        created.id = Some(leave.len() as i64 + 1);
        leave.push(created.clone());
        Ok(created)
    }

    async fn update_leave(&self, id: i64, record: &LeaveRecord) -> Result<LeaveRecord> {
        let mut leave = self.leave.lock().await;
        match leave.iter_mut().find(|r| r.id == Some(id)) {
            Some(slot) => {
                *slot = record.clone();
                slot.id = Some(id);
                Ok(slot.clone())
            }
            None => Err(ApiError::Request(format!("Record {} not found", id)).into()),
        }
    }

    async fn delete_leave(&self, id: i64) -> Result<()> {
        self.leave.lock().await.retain(|r| r.id != Some(id));
        Ok(())
    }
}
