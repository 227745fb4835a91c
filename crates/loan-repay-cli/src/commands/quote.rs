use clap::Args;
use serde_json::Value;

use loan_repay_core::render::{render_template, QuoteView, DEFAULT_TEMPLATE};
use loan_repay_core::repayment::{quote, validate};
use loan_repay_core::RawQuoteInput;

use crate::input;

/// Arguments shared by quote, check and render
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct QuoteArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount to borrow, in pounds (0-9000)
    #[arg(long, alias = "borrow")]
    pub amount_to_borrow: Option<String>,

    /// Expected monthly salary, in pounds
    #[arg(long, alias = "salary")]
    pub monthly_salary: Option<String>,

    /// Percentage of salary put towards repayment (10-100)
    #[arg(long, alias = "percent")]
    pub repay_percent: Option<String>,
}

/// Arguments for template rendering
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub quote: QuoteArgs,

    /// Path to a template file; `{field}` placeholders are substituted
    #[arg(long)]
    pub template: Option<String>,
}

fn resolve_input(args: &QuoteArgs) -> Result<RawQuoteInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(RawQuoteInput {
        amount_to_borrow: args
            .amount_to_borrow
            .clone()
            .ok_or("--amount-to-borrow is required (or provide --input)")?,
        monthly_salary: args
            .monthly_salary
            .clone()
            .ok_or("--monthly-salary is required (or provide --input)")?,
        repay_percent: args
            .repay_percent
            .clone()
            .ok_or("--repay-percent is required (or provide --input)")?,
    })
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = resolve_input(&args)?;
    let result = quote::calculate_quote(&raw)?;
    Ok(serde_json::to_value(result)?)
}

/// Report every field's pass/fail status without computing a schedule.
/// Invalid inputs are a report, not an error, so the exit code stays 0.
pub fn run_check(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = resolve_input(&args)?;
    let report = validate::validate(&raw);
    Ok(serde_json::json!({
        "result": {
            "valid": report.is_valid(),
            "fields": report.statuses(),
        }
    }))
}

pub fn run_render(args: RenderArgs) -> Result<String, Box<dyn std::error::Error>> {
    let raw = resolve_input(&args.quote)?;
    let result = quote::calculate_quote(&raw)?;
    let view = QuoteView::from(&result.result);

    let rendered = match args.template {
        Some(ref path) => render_template(&input::file::read_text(path)?, &view),
        None => render_template(DEFAULT_TEMPLATE, &view),
    };
    Ok(rendered)
}
