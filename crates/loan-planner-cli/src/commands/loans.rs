use clap::Args;
use serde_json::{json, Value};

use loan_planner_core::loans::LoanBook;
use loan_planner_core::simulation::calculator;

use super::simulation::ScenarioArgs;

/// Arguments identifying a single loan
#[derive(Args)]
pub struct LoanArgs {
    /// Loan id
    pub id: String,
}

/// Arguments for applying a simulation to a loan plan
#[derive(Args)]
pub struct ApplyArgs {
    /// Loan id
    pub id: String,

    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

pub fn run_loans(book: &LoanBook) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(book.loans())?)
}

pub fn run_loan(book: &LoanBook, args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(book.loan(&args.id)?)?)
}

pub fn run_schedule(book: &LoanBook, args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "loan_id": args.id,
        "schedule": book.emi_schedule(&args.id)?,
        "totals": book.schedule_totals(&args.id)?,
    }))
}

pub fn run_apply(book: &mut LoanBook, args: ApplyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input = args.scenario.resolve()?;
    if sim_input.is_zero() {
        return Err("nothing to apply: pass --extra-payment and/or --payment-delay".into());
    }

    let simulation = calculator::run_simulation(&sim_input)?.result;
    let schedule = book.apply_simulation(&args.id, &simulation)?.to_vec();
    Ok(json!({
        "loan_id": args.id,
        "simulation": simulation,
        "schedule": schedule,
        "totals": book.schedule_totals(&args.id)?,
    }))
}
