//! Performance service models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Performance evaluation for one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub date: NaiveDate,

    /// Score on the platform's 0–10 scale
    pub score: f32,

    pub comments: String,

    pub employee_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_round_trips_service_json() {
        let json = r#"{
            "id": 11,
            "date": "2025-02-14",
            "score": 8.5,
            "comments": "Consistent quarter",
            "employeeId": 5
        }"#;
        let evaluation: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.score, 8.5);

        let out = serde_json::to_string(&evaluation).unwrap();
        assert!(out.contains("\"employeeId\":5"));
    }
}
