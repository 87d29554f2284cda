pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "simulation")]
pub mod simulation;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "reminders")]
pub mod reminders;

pub use error::LoanPlannerError;
pub use types::*;

/// Standard result type for all loan-planner operations
pub type LoanPlannerResult<T> = Result<T, LoanPlannerError>;
