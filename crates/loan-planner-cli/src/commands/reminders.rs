use clap::Args;
use serde_json::Value;

use loan_planner_core::reminders::{ReminderSettings, ReminderSettingsUpdate};

use crate::input;

/// Arguments for reminder preferences. Unset flags keep the defaults.
#[derive(Args)]
pub struct RemindersArgs {
    /// Path to JSON file with a partial settings update
    #[arg(long)]
    pub input: Option<String>,

    /// Remind a few days before the due date
    #[arg(long)]
    pub before_due_date: Option<bool>,

    /// Remind on the due date
    #[arg(long)]
    pub on_due_date: Option<bool>,

    /// Remind after a missed due date
    #[arg(long)]
    pub after_due_date: Option<bool>,

    /// Send a weekly overview
    #[arg(long)]
    pub weekly_overview: Option<bool>,

    /// Time of day for reminders, HH:MM
    #[arg(long)]
    pub reminder_time: Option<String>,
}

pub fn run_reminders(args: RemindersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let update: ReminderSettingsUpdate = match input::load(args.input.as_deref())? {
        Some(update) => update,
        None => ReminderSettingsUpdate {
            before_due_date: args.before_due_date,
            on_due_date: args.on_due_date,
            after_due_date: args.after_due_date,
            weekly_overview: args.weekly_overview,
            reminder_time: args.reminder_time,
        },
    };

    let mut settings = ReminderSettings::default();
    settings.apply(&update)?;
    if !settings.any_enabled() {
        log::warn!("all reminders are switched off");
    }
    Ok(serde_json::to_value(settings)?)
}
