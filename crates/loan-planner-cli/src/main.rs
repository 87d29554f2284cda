mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loans::{ApplyArgs, LoanArgs};
use commands::reminders::RemindersArgs;
use commands::simulation::{ProjectArgs, SimulateArgs};
use loan_planner_core::loans::LoanBook;

/// Loan repayment planning from the command line
#[derive(Parser)]
#[command(
    name = "loanplan",
    version,
    about = "Loan repayment simulation and EMI schedule planning",
    long_about = "Simulate extra payments and payment delays against a loan plan, \
                  chart the interest run-off, inspect EMI schedules and apply a \
                  simulation to them. Amounts use decimal precision throughout."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate an extra payment and/or payment delay
    Simulate(SimulateArgs),
    /// Month-by-month interest curve, current vs simulated plan
    Project(ProjectArgs),
    /// List loans
    Loans,
    /// Show one loan
    Loan(LoanArgs),
    /// Show a loan's EMI schedule
    Schedule(LoanArgs),
    /// Apply a simulation to a loan's EMI schedule
    Apply(ApplyArgs),
    /// Show reminder settings with any overrides applied
    Reminders(RemindersArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Nothing is persisted: each invocation starts from the demo book.
    let mut book = LoanBook::seeded();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::simulation::run_simulate(args),
        Commands::Project(args) => commands::simulation::run_project(args),
        Commands::Loans => commands::loans::run_loans(&book),
        Commands::Loan(args) => commands::loans::run_loan(&book, args),
        Commands::Schedule(args) => commands::loans::run_schedule(&book, args),
        Commands::Apply(args) => commands::loans::run_apply(&mut book, args),
        Commands::Reminders(args) => commands::reminders::run_reminders(args),
        Commands::Version => {
            println!("loanplan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
