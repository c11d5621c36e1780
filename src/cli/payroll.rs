//! Payroll command implementations
//!
//! Admins browse all payrolls and manage adjustments; employees see their
//! own and can export a payslip receipt.

use colored::Colorize;
use tabled::Tabled;

use crate::cli::{AdjustCommands, AdjustKind, CommandContext, Globals, OutputFormat, PayrollCommands};
use crate::client::models::{Adjustment, AdjustmentType, Payroll};
use crate::error::{Error, Result};
use crate::output::{json, receipt, table};
use crate::session::Role;

#[derive(Tabled)]
struct PayrollDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "EMPLOYEE")]
    employee: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "BASE")]
    base: String,
    #[tabled(rename = "ADJUSTMENTS")]
    adjustments: String,
    #[tabled(rename = "NET")]
    net: String,
    #[tabled(rename = "ISSUED")]
    issued: String,
}

impl From<&Payroll> for PayrollDisplay {
    fn from(payroll: &Payroll) -> Self {
        Self {
            id: payroll.id.map_or_else(String::new, |id| id.to_string()),
            employee: payroll.employee_id.to_string(),
            status: payroll.status.clone().unwrap_or_default(),
            base: format!("{:.2}", payroll.base_salary),
            adjustments: format!("{:+.2}", payroll.total_adjustments),
            net: format!("{:.2}", payroll.net_salary),
            issued: payroll
                .issue_date
                .map_or_else(String::new, |date| date.to_string()),
        }
    }
}

#[derive(Tabled)]
struct AdjustmentDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

impl From<&Adjustment> for AdjustmentDisplay {
    fn from(adjustment: &Adjustment) -> Self {
        Self {
            id: adjustment.id.map_or_else(String::new, |id| id.to_string()),
            kind: adjustment.kind.as_str().to_string(),
            description: adjustment.description.clone(),
            amount: format!("{:+.2}", adjustment.signed_amount()),
        }
    }
}

fn print_payrolls(format: OutputFormat, payrolls: &[Payroll]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<PayrollDisplay> = payrolls.iter().map(PayrollDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(payrolls)?);
        }
    }
    Ok(())
}

/// Adjustments belonging to one payroll
async fn adjustments_for(ctx: &CommandContext, payroll_id: i64) -> Result<Vec<Adjustment>> {
    Ok(ctx
        .client
        .list_adjustments()
        .await?
        .into_iter()
        .filter(|a| a.payroll_id == Some(payroll_id))
        .collect())
}

/// Dispatch a payroll subcommand
pub async fn run(globals: &Globals, command: PayrollCommands) -> Result<()> {
    match command {
        PayrollCommands::List { employee } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let payrolls = match employee {
                Some(employee_id) => ctx.client.list_payrolls_by_employee(employee_id).await?,
                None => ctx.client.list_payrolls().await?,
            };
            print_payrolls(ctx.format, &payrolls)
        }

        PayrollCommands::Get { id } => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            let payroll = ctx.client.get_payroll(id).await?;
            let adjustments = adjustments_for(&ctx, id).await?;

            match ctx.format {
                OutputFormat::Table => {
                    print_payrolls(ctx.format, std::slice::from_ref(&payroll))?;
                    if !adjustments.is_empty() {
                        let rows: Vec<AdjustmentDisplay> =
                            adjustments.iter().map(AdjustmentDisplay::from).collect();
                        println!("\n{}", "Adjustments".bold());
                        println!("{}", table::format_table(&rows));
                    }
                }
                OutputFormat::Json => {
                    let combined = serde_json::json!({
                        "payroll": payroll,
                        "adjustments": adjustments,
                    });
                    println!("{}", json::format_json(&combined)?);
                }
            }
            Ok(())
        }

        PayrollCommands::Mine => {
            let ctx = CommandContext::new(globals, &[Role::Employee]).await?;
            let payrolls = ctx.client.list_payrolls_by_employee(ctx.user.id).await?;
            print_payrolls(ctx.format, &payrolls)
        }

        PayrollCommands::Receipt { id, out } => {
            let ctx = CommandContext::new(globals, &[Role::Employee]).await?;
            let payroll = ctx.client.get_payroll(id).await?;

            if payroll.employee_id != ctx.user.id {
                return Err(Error::Other(
                    "That payroll belongs to another employee.".to_string(),
                ));
            }

            let adjustments = adjustments_for(&ctx, id).await?;
            let document = receipt::render_payslip(&payroll, &adjustments, &ctx.user.name);

            let path = out.unwrap_or_else(|| receipt::default_filename(&payroll).into());
            receipt::write_payslip(&path, &document)?;

            println!("{} Payslip written to {}", "✓".green(), path.display().to_string().bold());
            Ok(())
        }

        PayrollCommands::Adjust(adjust) => {
            let ctx = CommandContext::new(globals, &[Role::Admin]).await?;
            match adjust {
                AdjustCommands::Add {
                    payroll,
                    kind,
                    amount,
                    description,
                } => {
                    let adjustment = Adjustment {
                        id: None,
                        kind: match kind {
                            AdjustKind::Bonus => AdjustmentType::Bonus,
                            AdjustKind::Deduction => AdjustmentType::Deduction,
                        },
                        description,
                        amount,
                        payroll_id: Some(payroll),
                    };
                    let created = ctx.client.create_adjustment(payroll, &adjustment).await?;
                    println!(
                        "{} Added {} of {:.2} to payroll {} (ID {})",
                        "✓".green(),
                        created.kind.as_str().bold(),
                        created.amount,
                        payroll,
                        created.id.unwrap_or_default()
                    );
                    Ok(())
                }

                AdjustCommands::Remove {
                    payroll,
                    adjustment,
                } => {
                    ctx.client.delete_adjustment(payroll, adjustment).await?;
                    println!(
                        "{} Removed adjustment {} from payroll {}",
                        "✓".green(),
                        adjustment,
                        payroll
                    );
                    Ok(())
                }
            }
        }
    }
}
