use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "portal")]
#[command(about = "Administrative client for the employee service", version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, env = "CONFIG_PATH", default_value = configs::DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login(LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show whether a valid session is stored
    Status,
    /// Manage employees
    #[command(subcommand)]
    Employees(EmployeesCommand),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long, env = "PORTAL_EMAIL")]
    pub email: String,
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    /// List all employees
    List,
    /// Create a new employee
    Create(CreateArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "PORTAL_NEW_PASSWORD", hide_env_values = true)]
    pub password: String,
}
