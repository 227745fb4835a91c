use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Field, Money, Percent, RawQuoteInput};

use super::parse::parse_amount;
use super::schedule;

/// Largest amount the lender will quote for, in pounds.
pub const MAX_BORROW_POUNDS: Decimal = dec!(9000);
/// Smallest acceptable slice of salary committed to repayment.
pub const MIN_REPAY_PERCENT: Decimal = dec!(10);
pub const MAX_REPAY_PERCENT: Decimal = dec!(100);

const PENCE_PER_POUND: Decimal = dec!(100);

/// One failed field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    pub field: Field,
    pub message: String,
}

/// Per-field view for error reporters: a failing field carries its message,
/// a passing field is the corresponding clear signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
    pub field: Field,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A quote request whose three fields all passed validation. Money fields
/// are converted to pence here so the schedule arithmetic never sees pounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuote {
    pub amount_to_borrow: Money,
    pub monthly_salary: Money,
    pub repay_percent: Percent,
}

/// Outcome of validating one raw quote request. Every field is always
/// checked; a failing field never suppresses the checks on the others.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
    #[serde(skip)]
    parsed: Option<ValidatedQuote>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    pub fn failure_for(&self, field: Field) -> Option<&str> {
        self.failures
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }

    /// All three fields in declaration order, each either valid or carrying
    /// its failure message.
    pub fn statuses(&self) -> Vec<FieldStatus> {
        Field::ALL
            .iter()
            .map(|&field| {
                let message = self.failure_for(field).map(str::to_string);
                FieldStatus {
                    field,
                    valid: message.is_none(),
                    message,
                }
            })
            .collect()
    }

    /// Consume the report: the parsed quote on full pass, the collected
    /// failures otherwise.
    pub fn into_valid(self) -> Result<ValidatedQuote, Vec<FieldFailure>> {
        match self.parsed {
            Some(quote) => Ok(quote),
            None => Err(self.failures),
        }
    }
}

/// Run all three range checks over a raw request, unconditionally, so every
/// invalid field is flagged at once. A non-numeric parse fails its field's
/// range check the same way an out-of-range value does.
pub fn validate(input: &RawQuoteInput) -> ValidationReport {
    let borrow = parse_amount(&input.amount_to_borrow);
    let salary = parse_amount(&input.monthly_salary);
    let percent = parse_amount(&input.repay_percent);

    let mut failures = Vec::new();

    let borrow_ok = matches!(borrow, Some(v) if v >= Decimal::ZERO && v <= MAX_BORROW_POUNDS);
    if !borrow_ok {
        failures.push(FieldFailure {
            field: Field::AmountToBorrow,
            message: "Amount to borrow must be between £0 and £9000".into(),
        });
    }

    let salary_ok = matches!(salary, Some(v) if v >= Decimal::ZERO);
    if !salary_ok {
        failures.push(FieldFailure {
            field: Field::MonthlySalary,
            message: "Monthly salary must be £0 or more".into(),
        });
    }

    let percent_ok =
        matches!(percent, Some(v) if v >= MIN_REPAY_PERCENT && v <= MAX_REPAY_PERCENT);
    if !percent_ok {
        failures.push(FieldFailure {
            field: Field::RepayPercent,
            message: "Repayment percentage must be between 10 and 100".into(),
        });
    }

    let mut parsed = None;
    if failures.is_empty() {
        if let (Some(b), Some(s), Some(p)) = (borrow, salary, percent) {
            let quote = ValidatedQuote {
                amount_to_borrow: b * PENCE_PER_POUND,
                monthly_salary: s * PENCE_PER_POUND,
                repay_percent: p,
            };
            // A salary low enough to round the instalment to zero would make
            // the repayment arithmetic degenerate; flag it here instead.
            if schedule::monthly_instalment(&quote).is_zero() {
                failures.push(FieldFailure {
                    field: Field::MonthlySalary,
                    message: "Monthly salary is too low to fund any repayment instalment".into(),
                });
            } else {
                parsed = Some(quote);
            }
        }
    }

    ValidationReport { failures, parsed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(borrow: &str, salary: &str, percent: &str) -> RawQuoteInput {
        RawQuoteInput {
            amount_to_borrow: borrow.into(),
            monthly_salary: salary.into(),
            repay_percent: percent.into(),
        }
    }

    fn failed_fields(report: &ValidationReport) -> Vec<Field> {
        report.failures().iter().map(|f| f.field).collect()
    }

    #[test]
    fn test_all_fields_in_range_pass() {
        let report = validate(&raw("1000", "2000", "50"));
        assert!(report.is_valid());
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_borrow_boundaries() {
        assert!(validate(&raw("0", "2000", "50")).is_valid());
        assert!(validate(&raw("9000", "2000", "50")).is_valid());
        assert_eq!(
            failed_fields(&validate(&raw("9001", "2000", "50"))),
            vec![Field::AmountToBorrow]
        );
        assert_eq!(
            failed_fields(&validate(&raw("-1", "2000", "50"))),
            vec![Field::AmountToBorrow]
        );
    }

    #[test]
    fn test_percent_boundaries() {
        assert!(validate(&raw("1000", "2000", "10")).is_valid());
        assert!(validate(&raw("1000", "2000", "100")).is_valid());
        assert_eq!(
            failed_fields(&validate(&raw("1000", "2000", "9"))),
            vec![Field::RepayPercent]
        );
        assert_eq!(
            failed_fields(&validate(&raw("1000", "2000", "101"))),
            vec![Field::RepayPercent]
        );
        assert_eq!(
            failed_fields(&validate(&raw("1000", "2000", "5"))),
            vec![Field::RepayPercent]
        );
    }

    #[test]
    fn test_negative_salary_fails() {
        assert_eq!(
            failed_fields(&validate(&raw("1000", "-200", "50"))),
            vec![Field::MonthlySalary]
        );
    }

    #[test]
    fn test_non_numeric_fails_each_field() {
        assert_eq!(
            failed_fields(&validate(&raw("", "2000", "50"))),
            vec![Field::AmountToBorrow]
        );
        assert_eq!(
            failed_fields(&validate(&raw("1000", "abc", "50"))),
            vec![Field::MonthlySalary]
        );
        assert_eq!(
            failed_fields(&validate(&raw("1000", "2000", "half"))),
            vec![Field::RepayPercent]
        );
    }

    #[test]
    fn test_every_check_runs_no_short_circuit() {
        let report = validate(&raw("9001", "nope", "5"));
        assert_eq!(
            failed_fields(&report),
            vec![
                Field::AmountToBorrow,
                Field::MonthlySalary,
                Field::RepayPercent
            ]
        );
    }

    #[test]
    fn test_only_the_bad_field_is_flagged() {
        let report = validate(&raw("9001", "2000", "50"));
        assert_eq!(failed_fields(&report), vec![Field::AmountToBorrow]);
        assert!(report.failure_for(Field::MonthlySalary).is_none());
        assert!(report.failure_for(Field::RepayPercent).is_none());
    }

    #[test]
    fn test_fractional_text_truncates_before_the_check() {
        // 9000.99 truncates to 9000, which is still in range.
        assert!(validate(&raw("9000.99", "2000", "50")).is_valid());
    }

    #[test]
    fn test_zero_salary_rejected_as_degenerate_instalment() {
        let report = validate(&raw("1000", "0", "50"));
        assert_eq!(failed_fields(&report), vec![Field::MonthlySalary]);
        assert!(report
            .failure_for(Field::MonthlySalary)
            .unwrap()
            .contains("instalment"));
    }

    #[test]
    fn test_statuses_carry_clear_signals() {
        let statuses = validate(&raw("9001", "2000", "50")).statuses();
        assert_eq!(statuses.len(), 3);
        assert!(!statuses[0].valid);
        assert!(statuses[0].message.is_some());
        assert!(statuses[1].valid && statuses[1].message.is_none());
        assert!(statuses[2].valid && statuses[2].message.is_none());
    }

    #[test]
    fn test_into_valid_converts_to_pence() {
        use rust_decimal_macros::dec;

        let quote = validate(&raw("1000", "2000", "50")).into_valid().unwrap();
        assert_eq!(quote.amount_to_borrow, dec!(100000));
        assert_eq!(quote.monthly_salary, dec!(200000));
        assert_eq!(quote.repay_percent, dec!(50));
    }
}
