use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_planner_core::simulation::calculator::{
    self, SimulationInput, SimulationParameters,
};
use loan_planner_core::simulation::projection;

use crate::input;

/// Extra payment / payment delay flags shared by the simulation commands.
#[derive(Args, Clone)]
pub struct ScenarioArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Additional amount paid toward principal
    #[arg(long, default_value = "0")]
    pub extra_payment: Decimal,

    /// Days by which the next payment is deferred
    #[arg(long, default_value_t = 0)]
    pub payment_delay: u32,
}

impl ScenarioArgs {
    pub fn resolve(&self) -> Result<SimulationInput, Box<dyn std::error::Error>> {
        Ok(input::load(self.input.as_deref())?
            .unwrap_or_else(|| SimulationInput::new(self.extra_payment, self.payment_delay)))
    }
}

/// Arguments for the repayment simulator
#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// JSON file with alternate calculator parameters
    #[arg(long)]
    pub params: Option<String>,
}

/// Arguments for the interest projection curve
#[derive(Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input = args.scenario.resolve()?;
    let params: SimulationParameters = match args.params.as_deref() {
        Some(path) => input::read_json(path)?,
        None => SimulationParameters::default(),
    };
    let result = calculator::run_simulation_with(&params, &sim_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input = args.scenario.resolve()?;
    let result = projection::run_projection(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}
