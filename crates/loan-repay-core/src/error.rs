use thiserror::Error;

use crate::repayment::validate::FieldFailure;

#[derive(Debug, Error)]
pub enum LoanRepayError {
    #[error("Validation failed: {}", summarise(.failures))]
    Validation { failures: Vec<FieldFailure> },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Numeric overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanRepayError {
    fn from(e: serde_json::Error) -> Self {
        LoanRepayError::SerializationError(e.to_string())
    }
}

fn summarise(failures: &[FieldFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}
