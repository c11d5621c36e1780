//! Evaluation command implementations
//!
//! Admins manage evaluations; employees list their own.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use crate::cli::{CommandContext, EvaluationCommands, Globals, OutputFormat};
use crate::client::models::Evaluation;
use crate::error::Result;
use crate::output::{json, table};
use crate::session::Role;

#[derive(Tabled)]
struct EvaluationDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "EMPLOYEE")]
    employee: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "SCORE")]
    score: String,
    #[tabled(rename = "COMMENTS")]
    comments: String,
}

impl From<&Evaluation> for EvaluationDisplay {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            id: evaluation.id.map_or_else(String::new, |id| id.to_string()),
            employee: evaluation.employee_id.to_string(),
            date: evaluation.date.to_string(),
            score: format!("{:.1}", evaluation.score),
            comments: evaluation.comments.clone(),
        }
    }
}

fn print_evaluations(format: OutputFormat, evaluations: &[Evaluation]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<EvaluationDisplay> =
                evaluations.iter().map(EvaluationDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(evaluations)?);
        }
    }
    Ok(())
}

/// Dispatch an evaluation subcommand
pub async fn run(globals: &Globals, command: EvaluationCommands) -> Result<()> {
    match command {
        EvaluationCommands::List { employee } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let evaluations = match employee {
                Some(employee_id) => {
                    ctx.client
                        .list_evaluations_by_employee(employee_id)
                        .await?
                }
                None => ctx.client.list_evaluations().await?,
            };
            print_evaluations(ctx.format, &evaluations)
        }

        EvaluationCommands::Get { id } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let evaluation = ctx.client.get_evaluation(id).await?;
            print_evaluations(ctx.format, std::slice::from_ref(&evaluation))
        }

        EvaluationCommands::Create {
            employee,
            date,
            score,
            comments,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let evaluation = Evaluation {
                id: None,
                date,
                score,
                comments,
                employee_id: employee,
            };
            let created = ctx.client.create_evaluation(&evaluation).await?;
            println!(
                "{} Created evaluation for employee {} (score {:.1}, ID {})",
                "✓".green(),
                created.employee_id,
                created.score,
                created.id.unwrap_or_default()
            );
            Ok(())
        }

        EvaluationCommands::Update {
            id,
            date,
            score,
            comments,
        } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let mut evaluation = ctx.client.get_evaluation(id).await?;
            if let Some(date) = date {
                evaluation.date = date;
            }
            if let Some(score) = score {
                evaluation.score = score;
            }
            if let Some(comments) = comments {
                evaluation.comments = comments;
            }

            ctx.client.update_evaluation(id, &evaluation).await?;
            println!("{} Updated evaluation {}", "✓".green(), id);
            Ok(())
        }

        EvaluationCommands::Delete { id, yes } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete evaluation {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            ctx.client.delete_evaluation(id).await?;
            println!("{} Deleted evaluation {}", "✓".green(), id);
            Ok(())
        }

        EvaluationCommands::Mine => {
            let ctx = CommandContext::new(globals, &[Role::Employee]).await?;
            let evaluations = ctx
                .client
                .list_evaluations_by_employee(ctx.user.id)
                .await?;
            print_evaluations(ctx.format, &evaluations)
        }
    }
}
