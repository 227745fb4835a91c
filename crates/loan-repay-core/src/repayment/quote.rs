use std::time::Instant;

use crate::error::LoanRepayError;
use crate::types::{with_metadata, ComputationOutput, RawQuoteInput, RepaymentSchedule};
use crate::LoanRepayResult;

use super::schedule;
use super::validate;

/// Validate a raw quote request and, when every field passes, compute its fee
/// schedule and repayment timeline.
///
/// On any validation failure the error carries every failed field with its
/// message; no partial schedule is ever produced.
pub fn calculate_quote(
    input: &RawQuoteInput,
) -> LoanRepayResult<ComputationOutput<RepaymentSchedule>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let report = validate::validate(input);
    let valid = report
        .into_valid()
        .map_err(|failures| LoanRepayError::Validation { failures })?;

    let result = schedule::build_schedule(&valid)?;

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "base_total_cost_pence": schedule::BASE_TOTAL_COST.to_string(),
        "admin_fee_rate": schedule::ADMIN_FEE_RATE.to_string(),
        "surcharge_pence": schedule::SURCHARGE.to_string(),
        "surcharge_thresholds_pence": [
            schedule::FIRST_SURCHARGE_THRESHOLD.to_string(),
            schedule::SECOND_SURCHARGE_THRESHOLD.to_string(),
        ],
    });

    Ok(with_metadata(
        "Fixed-rule repayment schedule",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}
