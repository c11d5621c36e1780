//! Leave/status record command implementations
//!
//! Admins manage every record; employees see their own and file requests
//! for themselves. The request length in days is computed client-side
//! from the two dates.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use crate::cli::{CommandContext, Globals, LeaveCommands, OutputFormat};
use crate::client::models::LeaveRecord;
use crate::error::Result;
use crate::output::{json, table};
use crate::session::Role;

#[derive(Tabled)]
struct LeaveDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "EMPLOYEE")]
    employee: String,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "START")]
    start: String,
    #[tabled(rename = "END")]
    end: String,
    #[tabled(rename = "DAYS")]
    days: String,
    #[tabled(rename = "PAID")]
    paid: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl From<&LeaveRecord> for LeaveDisplay {
    fn from(record: &LeaveRecord) -> Self {
        Self {
            id: record.id.map_or_else(String::new, |id| id.to_string()),
            employee: record.employee_id.to_string(),
            kind: record.kind.clone(),
            start: record.start_date.to_string(),
            end: record.end_date.to_string(),
            days: record.days().to_string(),
            paid: format!("{:.1}", record.paid),
            description: record.description.clone(),
        }
    }
}

fn print_records(format: OutputFormat, records: &[LeaveRecord]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<LeaveDisplay> = records.iter().map(LeaveDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(records)?);
        }
    }
    Ok(())
}

/// Dispatch a leave subcommand
pub async fn run(globals: &Globals, command: LeaveCommands) -> Result<()> {
    match command {
        LeaveCommands::List => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let records = ctx.client.list_leave().await?;
            print_records(ctx.format, &records)
        }

        LeaveCommands::Get { id } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let record = ctx.client.get_leave(id).await?;
            print_records(ctx.format, std::slice::from_ref(&record))
        }

        LeaveCommands::Create {
            employee,
            kind,
            start,
            end,
            paid,
            description,
            permission,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let record = LeaveRecord {
                id: None,
                kind,
                start_date: start,
                end_date: end,
                paid,
                description,
                employee_id: employee,
                status_permission_id: permission,
            };
            let created = ctx.client.create_leave(&record).await?;
            println!(
                "{} Created {} record for employee {} ({} days, ID {})",
                "✓".green(),
                created.kind.bold(),
                created.employee_id,
                created.days(),
                created.id.unwrap_or_default()
            );
            Ok(())
        }

        LeaveCommands::Update {
            id,
            kind,
            start,
            end,
            paid,
            description,
            permission,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let mut record = ctx.client.get_leave(id).await?;
            if let Some(kind) = kind {
                record.kind = kind;
            }
            if let Some(start) = start {
                record.start_date = start;
            }
            if let Some(end) = end {
                record.end_date = end;
            }
            if let Some(paid) = paid {
                record.paid = paid;
            }
            if let Some(description) = description {
                record.description = description;
            }
            if let Some(permission) = permission {
                record.status_permission_id = permission;
            }

            ctx.client.update_leave(id, &record).await?;
            println!("{} Updated record {}", "✓".green(), id);
            Ok(())
        }

        LeaveCommands::Delete { id, yes } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete record {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            ctx.client.delete_leave(id).await?;
            println!("{} Deleted record {}", "✓".green(), id);
            Ok(())
        }

        LeaveCommands::Mine => {
            let ctx = CommandContext::new(globals, &[Role::Employee]).await?;
            let records: Vec<LeaveRecord> = ctx
                .client
                .list_leave()
                .await?
                .into_iter()
                .filter(|r| r.employee_id == ctx.user.id)
                .collect();
            print_records(ctx.format, &records)
        }

        LeaveCommands::Request {
            kind,
            start,
            end,
            paid,
            description,
            permission,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Employee]).await?;
            let record = LeaveRecord {
                id: None,
                kind,
                start_date: start,
                end_date: end,
                paid,
                description,
                employee_id: ctx.user.id,
                status_permission_id: permission,
            };
            let created = ctx.client.create_leave(&record).await?;
            println!(
                "{} Filed {} request for {} days (ID {})",
                "✓".green(),
                created.kind.bold(),
                created.days(),
                created.id.unwrap_or_default()
            );
            Ok(())
        }
    }
}
