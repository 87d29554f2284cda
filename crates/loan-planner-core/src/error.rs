use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanPlannerError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Loan not found: {0}")]
    LoanNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanPlannerError {
    fn from(e: serde_json::Error) -> Self {
        LoanPlannerError::SerializationError(e.to_string())
    }
}
