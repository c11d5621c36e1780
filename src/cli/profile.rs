//! Profile command implementation (employee landing)

use colored::Colorize;

use crate::cli::{CommandContext, Globals, OutputFormat};
use crate::error::Result;
use crate::output::json;
use crate::session::Role;

const ALLOWED: &[Role] = &[Role::Employee];

/// Run the profile command: show the signed-in employee's own record
pub async fn run(globals: &Globals) -> Result<()> {
    let ctx = CommandContext::new(globals, ALLOWED).await?;
    let employee = ctx.client.get_employee(ctx.user.id).await?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}\n", employee.full_name().bold());
            println!("Email:    {}", employee.email);
            println!("DNI:      {}", employee.dni);
            println!("Phone:    {}", employee.phone);
            println!("Address:  {}", employee.address);
            println!("Position: {}", employee.position_id);
            println!("Role:     {}", ctx.user.role);
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&employee)?);
        }
    }

    Ok(())
}
