//! HR platform API client implementation
//!
//! One reqwest client fronts all five services. Every request picks up the
//! bearer token from the shared slot when one is set; every failure is
//! classified into exactly one [`ApiError`] variant and is terminal for
//! that call. Nothing here retries or queues.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::api::{AuthApi, EmployeeApi, PayrollApi, PerformanceApi, ScheduleApi};
use super::models::{
    Adjustment, Employee, EmployeeSchedule, Evaluation, JwtToken, LeaveRecord, LoginRequest,
    LoginResponse, Payroll, Position, Schedule, TokenClaims, WorkedHours,
};
use crate::config::Endpoints;
use crate::error::{ApiError, Result};

/// Fixed request timeout, matching the platform's client default
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// API client for the HR platform services
#[derive(Clone)]
pub struct HrClient {
    http: HttpClient,
    endpoints: Endpoints,
    token: Arc<RwLock<Option<String>>>,
}

impl HrClient {
    /// Create a new client over the given endpoint profile
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|_| ApiError::Unreachable)?;

        Ok(Self {
            http,
            endpoints,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Set the bearer token attached to subsequent requests
    pub async fn set_token(&self, token: impl Into<String>) {
        let mut slot = self.token.write().await;
        *slot = Some(token.into());
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated
    pub async fn clear_token(&self) {
        let mut slot = self.token.write().await;
        *slot = None;
    }

    /// Send one request and classify the outcome.
    ///
    /// Returns the response only for success statuses; every other
    /// outcome maps to one `ApiError` variant.
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);

        if let Some(token) = self.token.read().await.as_deref() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::SessionExpired.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::INTERNAL_SERVER_ERROR => Err(ApiError::Server.into()),
            _ => Err(ApiError::Request(Self::failure_message(response).await).into()),
        }
    }

    /// Pull the server-provided message out of a failure body, falling
    /// back to a default string.
    async fn failure_message(response: reqwest::Response) -> String {
        let text = response.text().await.unwrap_or_default();

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }

        if text.trim().is_empty() {
            "The request could not be completed.".to_string()
        } else {
            text
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = self.dispatch(Method::GET, &url, None).await?;
        Self::parse(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: String,
        body: serde_json::Value,
    ) -> Result<T> {
        let response = self.dispatch(Method::POST, &url, Some(body)).await?;
        Self::parse(response).await
    }

    async fn put_json<T: DeserializeOwned>(
        &self,
        url: String,
        body: serde_json::Value,
    ) -> Result<T> {
        let response = self.dispatch(Method::PUT, &url, Some(body)).await?;
        Self::parse(response).await
    }

    async fn delete_empty(&self, url: String) -> Result<()> {
        self.dispatch(Method::DELETE, &url, None).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }

    fn employee_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoints.employee, path)
    }

    fn schedule_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoints.schedule, path)
    }

    fn payroll_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoints.payroll, path)
    }

    fn performance_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoints.performance, path)
    }
}

#[async_trait]
impl AuthApi for HrClient {
    async fn login(&self, email: &str, password: &str) -> Result<JwtToken> {
        let url = format!("{}/login", self.endpoints.auth);
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;

        let login: LoginResponse = self.post_json(url, body).await?;

        let claims = TokenClaims::decode(&login.token)?;
        let expires_at = claims.expires_at()?;

        Ok(JwtToken {
            token: login.token,
            expires_at,
        })
    }
}

#[async_trait]
impl EmployeeApi for HrClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.get_json(self.employee_url("/api/employee")).await
    }

    async fn get_employee(&self, id: i64) -> Result<Employee> {
        self.get_json(self.employee_url(&format!("/api/employee/{}", id)))
            .await
    }

    async fn get_employee_by_email(&self, email: &str) -> Result<Employee> {
        self.get_json(self.employee_url(&format!("/api/employee/email/{}", email)))
            .await
    }

    async fn create_employee(&self, employee: &Employee) -> Result<Employee> {
        self.post_json(
            self.employee_url("/api/employee"),
            serde_json::to_value(employee)?,
        )
        .await
    }

    async fn update_employee(&self, id: i64, employee: &Employee) -> Result<Employee> {
        self.put_json(
            self.employee_url(&format!("/api/employee/{}", id)),
            serde_json::to_value(employee)?,
        )
        .await
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        self.delete_empty(self.employee_url(&format!("/api/employee/{}", id)))
            .await
    }

    async fn list_positions(&self) -> Result<Vec<Position>> {
        self.get_json(self.employee_url("/api/position")).await
    }

    async fn get_position(&self, id: i64) -> Result<Position> {
        self.get_json(self.employee_url(&format!("/api/position/{}", id)))
            .await
    }

    async fn create_position(&self, position: &Position) -> Result<Position> {
        self.post_json(
            self.employee_url("/api/position"),
            serde_json::to_value(position)?,
        )
        .await
    }

    async fn update_position(&self, id: i64, position: &Position) -> Result<Position> {
        self.put_json(
            self.employee_url(&format!("/api/position/{}", id)),
            serde_json::to_value(position)?,
        )
        .await
    }

    async fn delete_position(&self, id: i64) -> Result<()> {
        self.delete_empty(self.employee_url(&format!("/api/position/{}", id)))
            .await
    }

    async fn list_leave(&self) -> Result<Vec<LeaveRecord>> {
        self.get_json(self.employee_url("/api/status")).await
    }

    async fn get_leave(&self, id: i64) -> Result<LeaveRecord> {
        self.get_json(self.employee_url(&format!("/api/status/{}", id)))
            .await
    }

    async fn create_leave(&self, record: &LeaveRecord) -> Result<LeaveRecord> {
        self.post_json(
            self.employee_url("/api/status"),
            serde_json::to_value(record)?,
        )
        .await
    }

    async fn update_leave(&self, id: i64, record: &LeaveRecord) -> Result<LeaveRecord> {
        self.put_json(
            self.employee_url(&format!("/api/status/{}", id)),
            serde_json::to_value(record)?,
        )
        .await
    }

    async fn delete_leave(&self, id: i64) -> Result<()> {
        self.delete_empty(self.employee_url(&format!("/api/status/{}", id)))
            .await
    }
}

#[async_trait]
impl ScheduleApi for HrClient {
    async fn list_schedules(&self) -> Result<Vec<Schedule>> {
        self.get_json(self.schedule_url("/api/schedules")).await
    }

    async fn get_schedule(&self, id: i64) -> Result<Schedule> {
        self.get_json(self.schedule_url(&format!("/api/schedules/{}", id)))
            .await
    }

    async fn get_schedule_by_date(&self, date: NaiveDate) -> Result<Schedule> {
        self.get_json(self.schedule_url(&format!("/api/schedules/date/{}", date)))
            .await
    }

    async fn create_schedule(&self, schedule: &Schedule) -> Result<Schedule> {
        self.post_json(
            self.schedule_url("/api/schedules"),
            serde_json::to_value(schedule)?,
        )
        .await
    }

    async fn update_schedule(&self, id: i64, schedule: &Schedule) -> Result<Schedule> {
        self.put_json(
            self.schedule_url(&format!("/api/schedules/{}", id)),
            serde_json::to_value(schedule)?,
        )
        .await
    }

    async fn delete_schedule(&self, id: i64) -> Result<()> {
        self.delete_empty(self.schedule_url(&format!("/api/schedules/{}", id)))
            .await
    }

    async fn list_assignments(&self) -> Result<Vec<EmployeeSchedule>> {
        self.get_json(self.schedule_url("/api/employee-schedule"))
            .await
    }

    async fn find_assignment(
        &self,
        employee_id: i64,
        schedule_id: i64,
    ) -> Result<EmployeeSchedule> {
        self.get_json(self.schedule_url(&format!(
            "/api/employee-schedule/employee/{}/schedule/{}",
            employee_id, schedule_id
        )))
        .await
    }

    async fn create_assignment(&self, assignment: &EmployeeSchedule) -> Result<EmployeeSchedule> {
        self.post_json(
            self.schedule_url("/api/employee-schedule/new-employee-schedule"),
            serde_json::to_value(assignment)?,
        )
        .await
    }

    async fn delete_assignment(&self, id: i64) -> Result<()> {
        self.delete_empty(self.schedule_url(&format!("/api/employee-schedule/{}", id)))
            .await
    }

    async fn list_worked_hours(&self) -> Result<Vec<WorkedHours>> {
        self.get_json(self.schedule_url("/api/count-schedule")).await
    }

    async fn register_hours(&self, employee_id: i64, hours: f32) -> Result<()> {
        let url = self.schedule_url(&format!(
            "/api/count-schedule/{}?hours={}",
            employee_id, hours
        ));
        self.dispatch(Method::POST, &url, None).await?;
        Ok(())
    }
}

#[async_trait]
impl PayrollApi for HrClient {
    async fn list_payrolls(&self) -> Result<Vec<Payroll>> {
        self.get_json(self.payroll_url("/api/payrolls")).await
    }

    async fn get_payroll(&self, id: i64) -> Result<Payroll> {
        self.get_json(self.payroll_url(&format!("/api/payrolls/{}", id)))
            .await
    }

    async fn list_payrolls_by_employee(&self, employee_id: i64) -> Result<Vec<Payroll>> {
        self.get_json(self.payroll_url(&format!("/api/employees/{}/payrolls", employee_id)))
            .await
    }

    async fn list_adjustments(&self) -> Result<Vec<Adjustment>> {
        self.get_json(self.payroll_url("/api/payrolls/adjustments"))
            .await
    }

    async fn create_adjustment(
        &self,
        payroll_id: i64,
        adjustment: &Adjustment,
    ) -> Result<Adjustment> {
        self.post_json(
            self.payroll_url(&format!("/api/payrolls/{}/adjustments", payroll_id)),
            serde_json::to_value(adjustment)?,
        )
        .await
    }

    async fn delete_adjustment(&self, payroll_id: i64, adjustment_id: i64) -> Result<()> {
        self.delete_empty(self.payroll_url(&format!(
            "/api/payrolls/{}/adjustments/{}",
            payroll_id, adjustment_id
        )))
        .await
    }
}

#[async_trait]
impl PerformanceApi for HrClient {
    async fn list_evaluations(&self) -> Result<Vec<Evaluation>> {
        self.get_json(self.performance_url("/evaluations")).await
    }

    async fn get_evaluation(&self, id: i64) -> Result<Evaluation> {
        self.get_json(self.performance_url(&format!("/evaluations/{}", id)))
            .await
    }

    async fn list_evaluations_by_employee(&self, employee_id: i64) -> Result<Vec<Evaluation>> {
        self.get_json(self.performance_url(&format!("/evaluations/employee/{}", employee_id)))
            .await
    }

    async fn create_evaluation(&self, evaluation: &Evaluation) -> Result<Evaluation> {
        self.post_json(
            self.performance_url("/evaluations"),
            serde_json::to_value(evaluation)?,
        )
        .await
    }

    async fn update_evaluation(&self, id: i64, evaluation: &Evaluation) -> Result<Evaluation> {
        self.put_json(
            self.performance_url(&format!("/evaluations/{}", id)),
            serde_json::to_value(evaluation)?,
        )
        .await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<()> {
        self.delete_empty(self.performance_url(&format!("/evaluations/{}", id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::encode_token;
    use crate::error::Error;

    fn client_for(server: &mockito::ServerGuard) -> HrClient {
        HrClient::new(Endpoints::gateway(&server.url())).unwrap()
    }

    #[tokio::test]
    async fn attaches_bearer_token_when_set() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/employee/api/employee")
            .match_header("authorization", "Bearer tok-123")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        client.set_token("tok-123").await;
        client.list_employees().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn sends_no_auth_header_without_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/employee/api/employee")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        client.list_employees().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn classifies_401_as_session_expired() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/employee/api/employee")
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.list_employees().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::SessionExpired)));
    }

    #[tokio::test]
    async fn classifies_403_as_forbidden() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/employee/api/employee")
            .with_status(403)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.list_employees().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Forbidden)));
    }

    #[tokio::test]
    async fn classifies_500_as_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/employee/api/employee")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.list_employees().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Server)));
    }

    #[tokio::test]
    async fn other_statuses_carry_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/employee/api/employee/99")
            .with_status(404)
            .with_body(r#"{"message":"Employee 99 not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_employee(99).await.unwrap_err();
        match err {
            Error::Api(ApiError::Request(msg)) => assert!(msg.contains("Employee 99 not found")),
            other => panic!("Expected Request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn other_statuses_fall_back_to_default_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/employee/api/employee/99")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_employee(99).await.unwrap_err();
        match err {
            Error::Api(ApiError::Request(msg)) => {
                assert_eq!(msg, "The request could not be completed.")
            }
            other => panic!("Expected Request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_decodes_expiry_from_token() {
        let mut server = mockito::Server::new_async().await;
        let token = encode_token("a@b.com", 2_000_000_000);
        server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(format!(r#"{{"token":"{}"}}"#, token))
            .create_async()
            .await;

        let client = client_for(&server);
        let jwt = client.login("a@b.com", "secret").await.unwrap();
        assert_eq!(jwt.token, token);
        assert_eq!(jwt.expires_at.timestamp(), 2_000_000_000);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connectivity_failure() {
        // Port 1 is never listening
        let client = HrClient::new(Endpoints::gateway("http://127.0.0.1:1")).unwrap();
        let err = client.list_employees().await.unwrap_err();
        match err {
            Error::Api(api) => assert!(api.is_connectivity()),
            other => panic!("Expected connectivity failure, got {:?}", other),
        }
    }
}
