pub mod csv_out;
pub mod minimal;
pub mod table;

use loan_planner_core::format::format_inr;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::OutputFormat;

/// Fields rendered as rupee amounts in human-facing formats.
const MONEY_FIELDS: &[&str] = &[
    "interest_saved",
    "new_total_interest",
    "amount",
    "current_balance",
    "emi",
    "principal",
    "interest",
    "balance",
    "current_plan",
    "simulated_plan",
    "threshold",
    "total_emi",
    "total_principal",
    "total_interest",
    "closing_balance",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("JSON serialization error: {}", e),
        },
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Plain-text cell value. Money fields become `₹` amounts when `pretty`.
pub(crate) fn cell(key: &str, value: &Value, pretty: bool) -> String {
    match value {
        Value::String(s) if pretty && MONEY_FIELDS.contains(&key) => Decimal::from_str(s)
            .map(format_inr)
            .unwrap_or_else(|_| s.clone()),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
