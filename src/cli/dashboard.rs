//! Dashboard command implementation (admin landing)

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, Globals, OutputFormat};
use crate::error::Result;
use crate::output::{json, table};
use crate::session::Role;

const ALLOWED: &[Role] = &[Role::Admin];

#[derive(Tabled, Serialize)]
struct Metric {
    #[tabled(rename = "METRIC")]
    metric: String,
    #[tabled(rename = "COUNT")]
    count: usize,
}

/// Run the dashboard command: platform-wide counters
pub async fn run(globals: &Globals) -> Result<()> {
    let ctx = CommandContext::new(globals, ALLOWED).await?;

    let employees = ctx.client.list_employees().await?;
    let positions = ctx.client.list_positions().await?;
    let schedules = ctx.client.list_schedules().await?;
    let leave = ctx.client.list_leave().await?;
    let evaluations = ctx.client.list_evaluations().await?;
    let payrolls = ctx.client.list_payrolls().await?;

    let metrics = vec![
        Metric {
            metric: "Employees".to_string(),
            count: employees.len(),
        },
        Metric {
            metric: "Positions".to_string(),
            count: positions.len(),
        },
        Metric {
            metric: "Schedules".to_string(),
            count: schedules.len(),
        },
        Metric {
            metric: "Leave records".to_string(),
            count: leave.len(),
        },
        Metric {
            metric: "Evaluations".to_string(),
            count: evaluations.len(),
        },
        Metric {
            metric: "Payrolls".to_string(),
            count: payrolls.len(),
        },
    ];

    match ctx.format {
        OutputFormat::Table => println!("{}", table::format_table(&metrics)),
        OutputFormat::Json => println!("{}", json::format_json(&metrics)?),
    }

    Ok(())
}
