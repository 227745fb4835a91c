use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::LoanRepayError;
use crate::types::{Money, RepaymentSchedule};
use crate::LoanRepayResult;

use super::validate::ValidatedQuote;

/// Base cost of any loan before threshold surcharges: £8000, in pence.
pub const BASE_TOTAL_COST: Decimal = dec!(800000);
/// Borrowing over £6400 adds £500 to the total cost.
pub const FIRST_SURCHARGE_THRESHOLD: Decimal = dec!(640000);
/// Borrowing over £7200 adds a further £500. The thresholds stack.
pub const SECOND_SURCHARGE_THRESHOLD: Decimal = dec!(720000);
pub const SURCHARGE: Decimal = dec!(50000);
/// Administration fee rate, applied to the raw borrowed amount only.
pub const ADMIN_FEE_RATE: Decimal = dec!(0.05);

/// The instalment taken each month: the chosen slice of salary, rounded up
/// to the next penny.
pub fn monthly_instalment(quote: &ValidatedQuote) -> Money {
    (quote.repay_percent / dec!(100) * quote.monthly_salary).ceil()
}

/// Build the fee schedule and repayment timeline for a validated quote.
///
/// All arithmetic stays in pence. The final month collects whatever the full
/// instalments leave over, so the timeline always counts one partial month.
pub fn build_schedule(quote: &ValidatedQuote) -> LoanRepayResult<RepaymentSchedule> {
    let admin_fee = (ADMIN_FEE_RATE * quote.amount_to_borrow).ceil();

    let mut total_cost = BASE_TOTAL_COST;
    if quote.amount_to_borrow > FIRST_SURCHARGE_THRESHOLD {
        total_cost += SURCHARGE;
    }
    if quote.amount_to_borrow > SECOND_SURCHARGE_THRESHOLD {
        total_cost += SURCHARGE;
    }

    let monthly_repayment = monthly_instalment(quote);
    if monthly_repayment.is_zero() {
        return Err(LoanRepayError::DivisionByZero {
            context: "repayment timeline with a zero monthly instalment".into(),
        });
    }

    let final_month_payment = total_cost % monthly_repayment;
    let full_months = ((total_cost - final_month_payment) / monthly_repayment).ceil();
    let months_to_repay = (Decimal::ONE + full_months)
        .to_u32()
        .ok_or_else(|| LoanRepayError::Overflow {
            context: "months to repay".into(),
        })?;

    Ok(RepaymentSchedule {
        admin_fee,
        monthly_repayment,
        final_month_payment,
        total_cost,
        months_to_repay,
    })
}
