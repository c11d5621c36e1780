//! Employee service models: employees, positions, leave records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee ID (absent on create)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// National identity number
    pub dni: String,

    /// First name
    pub name: String,

    /// Last name
    pub last_name: String,

    /// Account email, also the sign-in subject
    pub email: String,

    pub phone: String,

    pub address: String,

    /// Write-only; never returned by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Assigned position; drives role derivation
    pub position_id: i64,
}

impl Employee {
    /// Display name as shown across the platform
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

/// Position ("role" in the UI)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    pub description: String,

    pub salary: f32,
}

/// Leave/status record (vacation, sick leave, permissions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Record type, e.g. "VACATION", "SICK_LEAVE"
    #[serde(rename = "type")]
    pub kind: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Paid fraction of the period
    pub paid: f32,

    pub description: String,

    pub employee_id: i64,

    pub status_permission_id: i64,
}

impl LeaveRecord {
    /// Length of the request in whole days, end exclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let employee = Employee {
            id: Some(5),
            dni: "12345678".to_string(),
            name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            password: None,
            position_id: 2,
        };
        assert_eq!(employee.full_name(), "A B");
    }

    #[test]
    fn employee_deserializes_from_service_json() {
        let json = r#"{
            "id": 5,
            "dni": "12345678",
            "name": "A",
            "lastName": "B",
            "email": "a@b.com",
            "phone": "555-0100",
            "address": "1 Main St",
            "positionId": 2
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.last_name, "B");
        assert_eq!(employee.position_id, 2);
        assert!(employee.password.is_none());
    }

    #[test]
    fn leave_record_day_count() {
        let record = LeaveRecord {
            id: None,
            kind: "VACATION".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
            paid: 1.0,
            description: "Summer break".to_string(),
            employee_id: 5,
            status_permission_id: 1,
        };
        assert_eq!(record.days(), 7);
    }

    #[test]
    fn leave_record_type_field_round_trips() {
        let json = r#"{
            "type": "SICK_LEAVE",
            "startDate": "2025-03-01",
            "endDate": "2025-03-03",
            "paid": 1.0,
            "description": "Flu",
            "employeeId": 9,
            "statusPermissionId": 2
        }"#;
        let record: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "SICK_LEAVE");

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains("\"type\":\"SICK_LEAVE\""));
    }
}
