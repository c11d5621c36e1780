//! Position command implementations (admin area)
//!
//! Positions are the "roles" of the platform UI; one entity serves both
//! names.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use crate::cli::{CommandContext, Globals, OutputFormat, PositionCommands};
use crate::client::models::Position;
use crate::error::Result;
use crate::output::{json, table};
use crate::session::Role;

const ALLOWED: &[Role] = &[Role::Admin];

#[derive(Tabled)]
struct PositionDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "SALARY")]
    salary: String,
}

impl From<&Position> for PositionDisplay {
    fn from(position: &Position) -> Self {
        Self {
            id: position.id.map_or_else(String::new, |id| id.to_string()),
            name: position.name.clone(),
            description: position.description.clone(),
            salary: format!("{:.2}", position.salary),
        }
    }
}

fn print_positions(format: OutputFormat, positions: &[Position]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<PositionDisplay> = positions.iter().map(PositionDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(positions)?);
        }
    }
    Ok(())
}

/// Dispatch a position subcommand
pub async fn run(globals: &Globals, command: PositionCommands) -> Result<()> {
    let ctx = CommandContext::new(globals, ALLOWED).await?;

    match command {
        PositionCommands::List => {
            let positions = ctx.client.list_positions().await?;
            print_positions(ctx.format, &positions)
        }

        PositionCommands::Get { id } => {
            let position = ctx.client.get_position(id).await?;
            print_positions(ctx.format, std::slice::from_ref(&position))
        }

        PositionCommands::Create {
            name,
            description,
            salary,
        } => {
            let position = Position {
                id: None,
                name,
                description,
                salary,
            };
            let created = ctx.client.create_position(&position).await?;
            println!(
                "{} Created position {} (ID {})",
                "✓".green(),
                created.name.bold(),
                created.id.unwrap_or_default()
            );
            Ok(())
        }

        PositionCommands::Update {
            id,
            name,
            description,
            salary,
        } => {
            let mut position = ctx.client.get_position(id).await?;
            if let Some(name) = name {
                position.name = name;
            }
            if let Some(description) = description {
                position.description = description;
            }
            if let Some(salary) = salary {
                position.salary = salary;
            }

            let updated = ctx.client.update_position(id, &position).await?;
            println!(
                "{} Updated position {} (ID {})",
                "✓".green(),
                updated.name.bold(),
                id
            );
            Ok(())
        }

        PositionCommands::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete position {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            ctx.client.delete_position(id).await?;
            println!("{} Deleted position {}", "✓".green(), id);
            Ok(())
        }
    }
}
