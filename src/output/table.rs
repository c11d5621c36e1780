//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table, or a placeholder when empty
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No records found.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct EmployeeRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "NAME")]
        name: String,
        #[tabled(rename = "ROLE")]
        role: String,
    }

    #[test]
    fn empty_rows_yield_placeholder() {
        let rows: Vec<EmployeeRow> = vec![];
        assert_eq!(format_table(&rows), "No records found.");
    }

    #[test]
    fn rows_render_with_headers() {
        let rows = vec![
            EmployeeRow {
                id: 5,
                name: "A B".to_string(),
                role: "employee".to_string(),
            },
            EmployeeRow {
                id: 1,
                name: "Root Admin".to_string(),
                role: "admin".to_string(),
            },
        ];

        let out = format_table(&rows);
        assert!(out.contains("NAME"));
        assert!(out.contains("A B"));
        assert!(out.contains("Root Admin"));
        // Rounded style corners
        assert!(out.contains("╭"));
        assert!(out.contains("╰"));
    }
}
