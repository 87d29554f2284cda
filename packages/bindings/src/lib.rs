use std::sync::Mutex;

use napi::Result as NapiResult;
use napi_derive::napi;

use loan_planner_core::loans::LoanBook;
use loan_planner_core::reminders::{ReminderSettings, ReminderSettingsUpdate};
use loan_planner_core::simulation::{calculator, projection, SimulationInput, SimulationResult};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// The demo book backing the loan endpoints for the life of the module.
static BOOK: Mutex<Option<LoanBook>> = Mutex::new(None);

fn with_book<T>(f: impl FnOnce(&mut LoanBook) -> NapiResult<T>) -> NapiResult<T> {
    let mut guard = BOOK.lock().map_err(to_napi_error)?;
    f(guard.get_or_insert_with(LoanBook::seeded))
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_loan(input_json: String) -> NapiResult<String> {
    let input: SimulationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = calculator::run_simulation(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn project_interest(input_json: String) -> NapiResult<String> {
    let input: SimulationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = projection::run_projection(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn get_loans() -> NapiResult<String> {
    with_book(|book| serde_json::to_string(book.loans()).map_err(to_napi_error))
}

#[napi]
pub fn get_loan_by_id(id: String) -> NapiResult<String> {
    with_book(|book| {
        let loan = book.loan(&id).map_err(to_napi_error)?;
        serde_json::to_string(loan).map_err(to_napi_error)
    })
}

#[napi]
pub fn get_emi_schedule(loan_id: String) -> NapiResult<String> {
    with_book(|book| {
        let schedule = book.emi_schedule(&loan_id).map_err(to_napi_error)?;
        serde_json::to_string(schedule).map_err(to_napi_error)
    })
}

#[napi]
pub fn update_loan_plan(loan_id: String, simulation_result_json: String) -> NapiResult<String> {
    let result: SimulationResult =
        serde_json::from_str(&simulation_result_json).map_err(to_napi_error)?;
    with_book(|book| {
        let schedule = book
            .apply_simulation(&loan_id, &result)
            .map_err(to_napi_error)?;
        serde_json::to_string(schedule).map_err(to_napi_error)
    })
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

#[napi]
pub fn reminder_settings(update_json: Option<String>) -> NapiResult<String> {
    let mut settings = ReminderSettings::default();
    if let Some(raw) = update_json {
        let update: ReminderSettingsUpdate = serde_json::from_str(&raw).map_err(to_napi_error)?;
        settings.apply(&update).map_err(to_napi_error)?;
    }
    serde_json::to_string(&settings).map_err(to_napi_error)
}
