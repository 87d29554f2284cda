pub mod loans;
pub mod reminders;
pub mod simulation;
