//! Schedule service models: shifts, assignments, worked-hours counters

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Work schedule (one shift definition on a date)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub date: NaiveDate,

    pub start_time: NaiveTime,

    pub exit_time: NaiveTime,

    pub total_hours: f32,

    /// Hours deducted for breaks
    pub deducted_hours: f32,

    /// Employees to assign at creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_ids: Option<Vec<i64>>,
}

/// Assignment of an employee to a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub employee_id: i64,

    pub schedule_id: i64,
}

/// Worked-hours counter entry for one assignment and day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub employee_schedule_id: i64,

    pub work_date: NaiveDate,

    pub work_hours: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_round_trips_service_json() {
        let json = r#"{
            "id": 3,
            "date": "2025-05-12",
            "startTime": "09:00:00",
            "exitTime": "17:30:00",
            "totalHours": 8.5,
            "deductedHours": 0.5
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.total_hours, 8.5);
        assert!(schedule.employee_ids.is_none());

        let out = serde_json::to_string(&schedule).unwrap();
        assert!(out.contains("\"startTime\""));
        assert!(out.contains("\"deductedHours\""));
    }

    #[test]
    fn assignment_uses_camel_case_keys() {
        let assignment = EmployeeSchedule {
            id: None,
            employee_id: 5,
            schedule_id: 3,
        };
        let out = serde_json::to_string(&assignment).unwrap();
        assert_eq!(out, r#"{"employeeId":5,"scheduleId":3}"#);
    }
}
