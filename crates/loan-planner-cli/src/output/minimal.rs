use serde_json::Value;

use super::cell;

/// Headline fields, most important first.
const PRIORITY_KEYS: &[&str] = &[
    "warning_message",
    "new_total_interest",
    "interest_saved",
    "current_balance",
    "reminder_time",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let body = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match body {
        Value::Object(map) => {
            let hit = PRIORITY_KEYS
                .iter()
                .find_map(|k| map.get(*k).filter(|v| !v.is_null()).map(|v| (*k, v)));
            match hit {
                Some((key, val)) => println!("{}", cell(key, val, true)),
                None => {
                    if let Some((key, val)) = map.iter().next() {
                        println!("{}: {}", key, cell(key, val, true));
                    }
                }
            }
        }
        Value::Array(rows) => println!("{} rows", rows.len()),
        other => println!("{}", cell("", other, true)),
    }
}
