pub mod error;
pub mod render;
pub mod repayment;
pub mod types;

pub use error::LoanRepayError;
pub use types::*;

/// Standard result type for all loan-repay operations
pub type LoanRepayResult<T> = Result<T, LoanRepayError>;
