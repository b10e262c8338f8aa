use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, to_value};
use tracing::info;

use booking_room::{
    Employee, EmployeeUseCase, config::Config, db::init_db,
    repository::MySqlEmployeeRepository, telemetry::init_tracing,
};

#[derive(Parser, Debug)]
#[command(name = "booking-room", version, about = "Room booking employee administration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up an employee by id.
    FindId { id: String },
    /// Look up an employee by username.
    FindUsername { username: String },
    /// Check a username/password pair.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "EMPLOYEE_PASSWORD")]
        password: String,
    },
    /// Register a new employee.
    Register(EmployeeArgs),
    /// Replace an existing employee's fields.
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    /// List employees page by page.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, help = "Defaults to DEFAULT_PAGE_SIZE")]
        size: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, env = "EMPLOYEE_PASSWORD", default_value = "")]
    password: String,
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long, default_value = "")]
    division: String,
    #[arg(long, default_value = "")]
    position: String,
    #[arg(long, default_value = "")]
    contact: String,
}

impl EmployeeArgs {
    fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            username: self.username,
            password: self.password,
            role: self.role,
            division: self.division,
            position: self.position,
            contact: self.contact,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Rolling daily log
    let _guard = init_tracing(&config);
    info!("booking-room starting");

    let pool = init_db(&config)
        .await
        .context("Failed to connect to database")?;
    let usecase = EmployeeUseCase::new(Arc::new(MySqlEmployeeRepository::new(pool)));

    let output = match cli.command {
        Command::FindId { id } => to_value(usecase.find_by_id(&id).await?)?,
        Command::FindUsername { username } => {
            to_value(usecase.find_by_username(&username).await?)?
        }
        Command::Login { username, password } => {
            to_value(usecase.find_for_login(&username, &password).await?)?
        }
        Command::Register(fields) => {
            to_value(usecase.register(fields.into_employee(String::new())).await?)?
        }
        Command::Update { id, fields } => to_value(usecase.update(fields.into_employee(id)).await?)?,
        Command::List { page, size } => {
            let size = size.unwrap_or(config.default_page_size);
            let (data, paging) = usecase.list_all(page, size).await?;
            json!({ "data": data, "paging": paging })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
