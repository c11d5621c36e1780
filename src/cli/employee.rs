//! Employee command implementations (admin area)

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use tabled::Tabled;

use crate::cli::{CommandContext, EmployeeCommands, Globals, OutputFormat};
use crate::client::models::Employee;
use crate::error::Result;
use crate::output::{json, table};
use crate::session::Role;

const ALLOWED: &[Role] = &[Role::Admin];

/// Employee row for table display
#[derive(Tabled)]
struct EmployeeDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DNI")]
    dni: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "PHONE")]
    phone: String,
    #[tabled(rename = "POSITION")]
    position: String,
}

impl From<&Employee> for EmployeeDisplay {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.map_or_else(String::new, |id| id.to_string()),
            dni: employee.dni.clone(),
            name: employee.full_name(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            position: employee.position_id.to_string(),
        }
    }
}

fn print_employees(format: OutputFormat, employees: &[Employee]) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<EmployeeDisplay> = employees.iter().map(EmployeeDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(employees)?);
        }
    }
    Ok(())
}

/// Dispatch an employee subcommand
pub async fn run(globals: &Globals, command: EmployeeCommands) -> Result<()> {
    let ctx = CommandContext::new(globals, ALLOWED).await?;

    match command {
        EmployeeCommands::List => {
            let employees = ctx.client.list_employees().await?;
            print_employees(ctx.format, &employees)
        }

        EmployeeCommands::Get { id } => {
            let employee = ctx.client.get_employee(id).await?;
            print_employees(ctx.format, std::slice::from_ref(&employee))
        }

        EmployeeCommands::Create {
            dni,
            name,
            last_name,
            email,
            phone,
            address,
            password,
            position,
        } => {
            let employee = Employee {
                id: None,
                dni,
                name,
                last_name,
                email,
                phone,
                address,
                password: Some(password),
                position_id: position,
            };
            let created = ctx.client.create_employee(&employee).await?;
            println!(
                "{} Created employee {} (ID {})",
                "✓".green(),
                created.full_name().bold(),
                created.id.unwrap_or_default()
            );
            Ok(())
        }

        EmployeeCommands::Update {
            id,
            dni,
            name,
            last_name,
            email,
            phone,
            address,
            password,
            position,
        } => {
            let mut employee = ctx.client.get_employee(id).await?;
            if let Some(dni) = dni {
                employee.dni = dni;
            }
            if let Some(name) = name {
                employee.name = name;
            }
            if let Some(last_name) = last_name {
                employee.last_name = last_name;
            }
            if let Some(email) = email {
                employee.email = email;
            }
            if let Some(phone) = phone {
                employee.phone = phone;
            }
            if let Some(address) = address {
                employee.address = address;
            }
            if password.is_some() {
                employee.password = password;
            }
            if let Some(position) = position {
                employee.position_id = position;
            }

            let updated = ctx.client.update_employee(id, &employee).await?;
            println!(
                "{} Updated employee {} (ID {})",
                "✓".green(),
                updated.full_name().bold(),
                id
            );
            Ok(())
        }

        EmployeeCommands::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete employee {}?", id))
                    .default(false)
                    .interact()?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            ctx.client.delete_employee(id).await?;
            println!("{} Deleted employee {}", "✓".green(), id);
            Ok(())
        }
    }
}
