//! EMI reminder preferences.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::LoanPlannerError;
use crate::LoanPlannerResult;

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    pub before_due_date: bool,
    pub on_due_date: bool,
    pub after_due_date: bool,
    pub weekly_overview: bool,
    #[serde(with = "hh_mm")]
    pub reminder_time: NaiveTime,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            before_due_date: true,
            on_due_date: true,
            after_due_date: false,
            weekly_overview: false,
            reminder_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReminderSettingsUpdate {
    pub before_due_date: Option<bool>,
    pub on_due_date: Option<bool>,
    pub after_due_date: Option<bool>,
    pub weekly_overview: Option<bool>,
    pub reminder_time: Option<String>,
}

impl ReminderSettings {
    pub fn apply(&mut self, update: &ReminderSettingsUpdate) -> LoanPlannerResult<()> {
        // Parse first so a bad time leaves the settings untouched.
        let reminder_time = update
            .reminder_time
            .as_deref()
            .map(parse_reminder_time)
            .transpose()?;

        if let Some(v) = update.before_due_date {
            self.before_due_date = v;
        }
        if let Some(v) = update.on_due_date {
            self.on_due_date = v;
        }
        if let Some(v) = update.after_due_date {
            self.after_due_date = v;
        }
        if let Some(v) = update.weekly_overview {
            self.weekly_overview = v;
        }
        if let Some(t) = reminder_time {
            self.reminder_time = t;
        }
        Ok(())
    }

    /// True if any reminder channel is switched on.
    pub fn any_enabled(&self) -> bool {
        self.before_due_date || self.on_due_date || self.after_due_date || self.weekly_overview
    }
}

pub fn parse_reminder_time(s: &str) -> LoanPlannerResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).map_err(|e| LoanPlannerError::InvalidInput {
        field: "reminder_time".into(),
        reason: format!("expected HH:MM, got '{}' ({})", s, e),
    })
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(super::TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_reminder_time(&raw).map_err(serde::de::Error::custom)
    }
}
