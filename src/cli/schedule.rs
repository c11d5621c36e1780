//! Schedule command implementations
//!
//! Admins manage schedules and assignments; employees list their own.
//! Total hours for a new schedule derive from the shift times minus the
//! deducted break hours.

use chrono::NaiveTime;
use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use crate::cli::{CommandContext, Globals, OutputFormat, ScheduleCommands};
use crate::client::models::{EmployeeSchedule, Schedule};
use crate::error::{Error, Result};
use crate::output::{json, table};
use crate::session::Role;

#[derive(Tabled)]
struct ScheduleDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "START")]
    start: String,
    #[tabled(rename = "EXIT")]
    exit: String,
    #[tabled(rename = "HOURS")]
    hours: String,
    #[tabled(rename = "DEDUCTED")]
    deducted: String,
}

impl From<&Schedule> for ScheduleDisplay {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.map_or_else(String::new, |id| id.to_string()),
            date: schedule.date.to_string(),
            start: schedule.start_time.format("%H:%M").to_string(),
            exit: schedule.exit_time.format("%H:%M").to_string(),
            hours: format!("{:.2}", schedule.total_hours),
            deducted: format!("{:.2}", schedule.deducted_hours),
        }
    }
}

fn print_schedules(format: OutputFormat, schedules: &[Schedule]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<ScheduleDisplay> = schedules.iter().map(ScheduleDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(schedules)?);
        }
    }
    Ok(())
}

/// Parse a shift time given as HH:MM or HH:MM:SS
fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .map_err(|_| Error::Other(format!("Invalid time '{}': expected HH:MM", input)))
}

/// Net shift hours: time span minus deducted break hours
fn shift_hours(start: NaiveTime, exit: NaiveTime, deducted: f32) -> f32 {
    let span = (exit - start).num_minutes() as f32 / 60.0;
    span - deducted
}

/// Dispatch a schedule subcommand
pub async fn run(globals: &Globals, command: ScheduleCommands) -> Result<()> {
    match command {
        ScheduleCommands::List => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let schedules = ctx.client.list_schedules().await?;
            print_schedules(ctx.format, &schedules)
        }

        ScheduleCommands::Get { id, date } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let schedule = match (id, date) {
                (Some(id), _) => ctx.client.get_schedule(id).await?,
                (None, Some(date)) => ctx.client.get_schedule_by_date(date).await?,
                (None, None) => {
                    return Err(Error::Other(
                        "Provide a schedule ID or --date".to_string(),
                    ));
                }
            };
            print_schedules(ctx.format, std::slice::from_ref(&schedule))
        }

        ScheduleCommands::Create {
            date,
            start_time,
            exit_time,
            deducted,
            employees,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let start = parse_time(&start_time)?;
            let exit = parse_time(&exit_time)?;

            let schedule = Schedule {
                id: None,
                date,
                start_time: start,
                exit_time: exit,
                total_hours: shift_hours(start, exit, deducted),
                deducted_hours: deducted,
                employee_ids: employees,
            };
            let created = ctx.client.create_schedule(&schedule).await?;
            println!(
                "{} Created schedule for {} ({:.2}h, ID {})",
                "✓".green(),
                created.date.to_string().bold(),
                created.total_hours,
                created.id.unwrap_or_default()
            );
            Ok(())
        }

        ScheduleCommands::Update {
            id,
            date,
            start_time,
            exit_time,
            deducted,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let mut schedule = ctx.client.get_schedule(id).await?;
            if let Some(date) = date {
                schedule.date = date;
            }
            if let Some(start_time) = start_time {
                schedule.start_time = parse_time(&start_time)?;
            }
            if let Some(exit_time) = exit_time {
                schedule.exit_time = parse_time(&exit_time)?;
            }
            if let Some(deducted) = deducted {
                schedule.deducted_hours = deducted;
            }
            schedule.total_hours =
                shift_hours(schedule.start_time, schedule.exit_time, schedule.deducted_hours);
            schedule.employee_ids = None;

            ctx.client.update_schedule(id, &schedule).await?;
            println!("{} Updated schedule {}", "✓".green(), id);
            Ok(())
        }

        ScheduleCommands::Delete { id, yes } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete schedule {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            ctx.client.delete_schedule(id).await?;
            println!("{} Deleted schedule {}", "✓".green(), id);
            Ok(())
        }

        ScheduleCommands::Assign { employee, schedule } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let assignment = EmployeeSchedule {
                id: None,
                employee_id: employee,
                schedule_id: schedule,
            };
            ctx.client.create_assignment(&assignment).await?;
            println!(
                "{} Assigned employee {} to schedule {}",
                "✓".green(),
                employee,
                schedule
            );
            Ok(())
        }

        ScheduleCommands::Unassign { employee, schedule } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let assignment = ctx.client.find_assignment(employee, schedule).await?;
            let Some(id) = assignment.id else {
                return Err(Error::Other(
                    "Assignment has no ID; cannot remove it".to_string(),
                ));
            };
            ctx.client.delete_assignment(id).await?;
            println!(
                "{} Removed employee {} from schedule {}",
                "✓".green(),
                employee,
                schedule
            );
            Ok(())
        }

        ScheduleCommands::Mine => {
            let ctx = CommandContext::new(globals, &[Role::Employee]).await?;
            let assignments = ctx.client.list_assignments().await?;

            let mut schedules = Vec::new();
            for assignment in assignments
                .iter()
                .filter(|a| a.employee_id == ctx.user.id)
            {
                schedules.push(ctx.client.get_schedule(assignment.schedule_id).await?);
            }

            print_schedules(ctx.format, &schedules)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_times() {
        assert_eq!(
            parse_time("09:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("17:30:15").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 15).unwrap()
        );
        assert!(parse_time("9am").is_err());
    }

    #[test]
    fn shift_hours_subtract_breaks() {
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let exit = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
        assert_eq!(shift_hours(start, exit, 0.5), 8.0);
        assert_eq!(shift_hours(start, exit, 0.0), 8.5);
    }
}
