//! Payroll service models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payroll record for one employee and period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Lifecycle status, e.g. "PENDING", "PAID"
    #[serde(default)]
    pub status: Option<String>,

    pub base_salary: f32,

    /// Signed sum of all adjustments
    pub total_adjustments: f32,

    pub net_salary: f32,

    #[serde(default)]
    pub issue_date: Option<NaiveDate>,

    pub employee_id: i64,

    #[serde(default)]
    pub payment_date: Option<NaiveDate>,

    /// Amount actually paid out
    pub amount: f32,
}

/// Adjustment direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    Bonus,
    Deduction,
}

impl AdjustmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentType::Bonus => "BONUS",
            AdjustmentType::Deduction => "DEDUCTION",
        }
    }
}

/// Payroll adjustment (bonus or deduction)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "type")]
    pub kind: AdjustmentType,

    pub description: String,

    pub amount: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payroll_id: Option<i64>,
}

impl Adjustment {
    /// Amount with the sign the direction implies.
    pub fn signed_amount(&self) -> f32 {
        match self.kind {
            AdjustmentType::Bonus => self.amount,
            AdjustmentType::Deduction => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payroll_deserializes_from_service_json() {
        let json = r#"{
            "id": 7,
            "status": "PAID",
            "baseSalary": 2000.0,
            "totalAdjustments": 150.0,
            "netSalary": 2150.0,
            "issueDate": "2025-04-30",
            "employeeId": 5,
            "paymentDate": "2025-05-01",
            "amount": 2150.0
        }"#;
        let payroll: Payroll = serde_json::from_str(json).unwrap();
        assert_eq!(payroll.net_salary, 2150.0);
        assert_eq!(payroll.employee_id, 5);
    }

    #[test]
    fn adjustment_type_serializes_screaming() {
        let adjustment = Adjustment {
            id: None,
            kind: AdjustmentType::Deduction,
            description: "Unpaid absence".to_string(),
            amount: 80.0,
            payroll_id: Some(7),
        };
        let out = serde_json::to_string(&adjustment).unwrap();
        assert!(out.contains("\"type\":\"DEDUCTION\""));
    }

    #[test]
    fn signed_amount_by_direction() {
        let mut adjustment = Adjustment {
            id: None,
            kind: AdjustmentType::Bonus,
            description: "On-call".to_string(),
            amount: 120.0,
            payroll_id: None,
        };
        assert_eq!(adjustment.signed_amount(), 120.0);

        adjustment.kind = AdjustmentType::Deduction;
        assert_eq!(adjustment.signed_amount(), -120.0);
    }
}
