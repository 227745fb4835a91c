use napi::Result as NapiResult;
use napi_derive::napi;

use loan_repay_core::render::{render_template, QuoteView, DEFAULT_TEMPLATE};
use loan_repay_core::repayment::{quote, validate};
use loan_repay_core::RawQuoteInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<RawQuoteInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

/// Validate the three raw fields and compute the repayment schedule.
#[napi]
pub fn calculate_quote(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = quote::calculate_quote(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Run validation only, returning every field's pass/fail status so the
/// caller can raise and clear per-field messages.
#[napi]
pub fn validate_quote(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let report = validate::validate(&input);
    let statuses = serde_json::json!({
        "valid": report.is_valid(),
        "fields": report.statuses(),
    });
    serde_json::to_string(&statuses).map_err(to_napi_error)
}

/// Compute a quote and render it through the default result template.
#[napi]
pub fn render_quote(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = quote::calculate_quote(&input).map_err(to_napi_error)?;
    Ok(render_template(DEFAULT_TEMPLATE, &QuoteView::from(&output.result)))
}
