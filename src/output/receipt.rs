//! Payslip receipt generation
//!
//! Renders a payroll record and its adjustments into a formatted text
//! document, entirely from numbers already in memory, and writes it to
//! disk for the employee to keep.

use std::path::Path;

use crate::client::models::{Adjustment, Payroll};
use crate::error::Result;

const RULE: &str =
    "================================================================";

/// Render the payslip document
pub fn render_payslip(payroll: &Payroll, adjustments: &[Adjustment], employee_name: &str) -> String {
    let mut doc = String::new();

    doc.push_str(RULE);
    doc.push('\n');
    doc.push_str("                RH SYSTEMS - PAYROLL RECEIPT\n");
    doc.push_str(RULE);
    doc.push_str("\n\n");

    doc.push_str(&format!("Employee:      {}\n", employee_name));
    if let Some(id) = payroll.id {
        doc.push_str(&format!("Payroll #:     {}\n", id));
    }
    if let Some(status) = &payroll.status {
        doc.push_str(&format!("Status:        {}\n", status));
    }
    if let Some(issue_date) = payroll.issue_date {
        doc.push_str(&format!("Issued:        {}\n", issue_date));
    }
    if let Some(payment_date) = payroll.payment_date {
        doc.push_str(&format!("Paid:          {}\n", payment_date));
    }
    doc.push('\n');

    doc.push_str(&format!("Base salary:   {:>12.2}\n", payroll.base_salary));

    if adjustments.is_empty() {
        doc.push_str("Adjustments:           none\n");
    } else {
        doc.push_str("Adjustments:\n");
        for adjustment in adjustments {
            doc.push_str(&format!(
                "  {:<10} {:<24} {:>12.2}\n",
                adjustment.kind.as_str(),
                adjustment.description,
                adjustment.signed_amount()
            ));
        }
        doc.push_str(&format!(
            "  {:<36} {:>12.2}\n",
            "Total adjustments", payroll.total_adjustments
        ));
    }

    doc.push('\n');
    doc.push_str(&format!("NET SALARY:    {:>12.2}\n", payroll.net_salary));
    doc.push_str(RULE);
    doc.push('\n');

    doc
}

/// Default output filename for a payroll's receipt
pub fn default_filename(payroll: &Payroll) -> String {
    match (payroll.id, payroll.issue_date) {
        (Some(id), Some(date)) => format!("payslip_{}_{}.txt", id, date),
        (Some(id), None) => format!("payslip_{}.txt", id),
        _ => "payslip.txt".to_string(),
    }
}

/// Write the rendered document to disk
pub fn write_payslip(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::AdjustmentType;
    use chrono::NaiveDate;

    fn payroll() -> Payroll {
        Payroll {
            id: Some(7),
            status: Some("PAID".to_string()),
            base_salary: 2000.0,
            total_adjustments: 40.0,
            net_salary: 2040.0,
            issue_date: NaiveDate::from_ymd_opt(2025, 4, 30),
            employee_id: 5,
            payment_date: NaiveDate::from_ymd_opt(2025, 5, 1),
            amount: 2040.0,
        }
    }

    #[test]
    fn payslip_lists_adjustments_with_signs() {
        let adjustments = vec![
            Adjustment {
                id: Some(1),
                kind: AdjustmentType::Bonus,
                description: "On-call week".to_string(),
                amount: 120.0,
                payroll_id: Some(7),
            },
            Adjustment {
                id: Some(2),
                kind: AdjustmentType::Deduction,
                description: "Unpaid absence".to_string(),
                amount: 80.0,
                payroll_id: Some(7),
            },
        ];

        let doc = render_payslip(&payroll(), &adjustments, "A B");
        assert!(doc.contains("PAYROLL RECEIPT"));
        assert!(doc.contains("Employee:      A B"));
        assert!(doc.contains("120.00"));
        assert!(doc.contains("-80.00"));
        assert!(doc.contains("NET SALARY:"));
        assert!(doc.contains("2040.00"));
    }

    #[test]
    fn payslip_without_adjustments_says_none() {
        let doc = render_payslip(&payroll(), &[], "A B");
        assert!(doc.contains("Adjustments:           none"));
    }

    #[test]
    fn default_filename_uses_id_and_issue_date() {
        assert_eq!(default_filename(&payroll()), "payslip_7_2025-04-30.txt");

        let mut bare = payroll();
        bare.issue_date = None;
        assert_eq!(default_filename(&bare), "payslip_7.txt");
    }

    #[test]
    fn writes_document_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payslip.txt");
        write_payslip(&path, "doc body").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "doc body");
    }
}
