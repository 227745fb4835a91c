use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values, held in pence. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Whole-percent repayment rates (10 = 10%). Never as fractions.
pub type Percent = Decimal;

/// The three input fields of a quote request. Serialised ids double as the
/// field identifiers handed to error reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AmountToBorrow,
    MonthlySalary,
    RepayPercent,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::AmountToBorrow,
        Field::MonthlySalary,
        Field::RepayPercent,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::AmountToBorrow => "amount_to_borrow",
            Field::MonthlySalary => "monthly_salary",
            Field::RepayPercent => "repay_percent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One quote request exactly as entered: decimal text, not yet trusted to be
/// numeric at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuoteInput {
    #[serde(deserialize_with = "raw_field")]
    pub amount_to_borrow: String,
    #[serde(deserialize_with = "raw_field")]
    pub monthly_salary: String,
    #[serde(deserialize_with = "raw_field")]
    pub repay_percent: String,
}

/// A computed fee schedule and repayment timeline. Money fields are
/// integer-valued pence, never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub admin_fee: Money,
    pub monthly_repayment: Money,
    pub final_month_payment: Money,
    pub total_cost: Money,
    pub months_to_repay: u32,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Accept either JSON text or a JSON number for a raw input field, keeping
/// the entered characters intact either way.
fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawField::deserialize(deserializer)? {
        RawField::Text(s) => s,
        RawField::Number(n) => n.to_string(),
    })
}
