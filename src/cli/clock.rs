//! Time-tracking command implementations (employee area)
//!
//! The clock lives in the config file: `in` stamps the start instant,
//! `out` turns the elapsed time into hours and registers them with the
//! schedule service before clearing the marker. A failed registration
//! leaves the marker in place so the hours are not lost.

use chrono::Utc;
use colored::Colorize;
use tabled::Tabled;

use crate::cli::{ClockCommands, CommandContext, Globals, OutputFormat};
use crate::error::{Error, Result};
use crate::output::{json, table};
use crate::session::Role;

const ALLOWED: &[Role] = &[Role::Employee];

const SECONDS_PER_HOUR: f32 = 3600.0;

fn format_duration(total_secs: i64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[derive(Tabled)]
struct WorkedHoursDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "ASSIGNMENT")]
    assignment: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "HOURS")]
    hours: String,
}

/// Dispatch a clock subcommand
pub async fn run(globals: &Globals, command: ClockCommands) -> Result<()> {
    let mut ctx = CommandContext::new(globals, ALLOWED).await?;

    match command {
        ClockCommands::In => {
            if let Some(started) = ctx.config.clock_in {
                return Err(Error::Other(format!(
                    "Clock already running since {}. Run `hrops clock out` first.",
                    started.to_rfc3339()
                )));
            }

            let now = Utc::now();
            ctx.config.clock_in = Some(now);
            ctx.save_config()?;

            println!("{} Clock started at {}", "✓".green(), now.to_rfc3339().bold());
            Ok(())
        }

        ClockCommands::Out => {
            let Some(started) = ctx.config.clock_in else {
                return Err(Error::Other(
                    "No open clock-in. Run `hrops clock in` first.".to_string(),
                ));
            };

            let elapsed_secs = (Utc::now() - started).num_seconds().max(0);
            let hours = elapsed_secs as f32 / SECONDS_PER_HOUR;

            // Register first; the marker survives a failed registration
            ctx.client.register_hours(ctx.user.id, hours).await?;

            ctx.config.clock_in = None;
            ctx.save_config()?;

            println!(
                "{} Clock stopped. Total time: {}",
                "✓".green(),
                format_duration(elapsed_secs).bold()
            );
            println!("  Registered {:.2} hours", hours);
            Ok(())
        }

        ClockCommands::Status => {
            match ctx.config.clock_in {
                Some(started) => {
                    let elapsed_secs = (Utc::now() - started).num_seconds().max(0);
                    println!(
                        "{} Clock running since {} ({})",
                        "○".green(),
                        started.to_rfc3339(),
                        format_duration(elapsed_secs).bold()
                    );
                }
                None => {
                    println!("{} Clock not running", "○".dimmed());
                    println!("  → Run '{}' to start", "hrops clock in".cyan());
                }
            }
            Ok(())
        }

        ClockCommands::Log => {
            let entries = ctx.client.list_worked_hours().await?;
            match ctx.format {
                OutputFormat::Table => {
                    let rows: Vec<WorkedHoursDisplay> = entries
                        .iter()
                        .map(|entry| WorkedHoursDisplay {
                            id: entry.id.map_or_else(String::new, |id| id.to_string()),
                            assignment: entry.employee_schedule_id.to_string(),
                            date: entry.work_date.to_string(),
                            hours: format!("{:.2}", entry.work_hours),
                        })
                        .collect();
                    println!("{}", table::format_table(&rows));
                }
                OutputFormat::Json => {
                    println!("{}", json::format_json(&entries)?);
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formats_as_hms() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3600 + 2 * 60 + 3), "01:02:03");
        assert_eq!(format_duration(10 * 3600), "10:00:00");
    }
}
