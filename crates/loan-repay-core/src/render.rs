use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, RepaymentSchedule};

/// The nine display strings of a quote result. Pound amounts are plain
/// decimal integers with no padding; penny amounts are always exactly two
/// zero-padded digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteView {
    pub admin_fee_pounds: String,
    pub admin_fee_pence: String,
    pub monthly_repayment_pounds: String,
    pub monthly_repayment_pence: String,
    pub final_month_payment_pounds: String,
    pub final_month_payment_pence: String,
    pub total_cost_pounds: String,
    pub total_cost_pence: String,
    pub months_to_repay: String,
}

impl QuoteView {
    /// Placeholder names and their values, for template substitution.
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("admin_fee_pounds", &self.admin_fee_pounds),
            ("admin_fee_pence", &self.admin_fee_pence),
            ("monthly_repayment_pounds", &self.monthly_repayment_pounds),
            ("monthly_repayment_pence", &self.monthly_repayment_pence),
            (
                "final_month_payment_pounds",
                &self.final_month_payment_pounds,
            ),
            ("final_month_payment_pence", &self.final_month_payment_pence),
            ("total_cost_pounds", &self.total_cost_pounds),
            ("total_cost_pence", &self.total_cost_pence),
            ("months_to_repay", &self.months_to_repay),
        ]
    }
}

impl From<&RepaymentSchedule> for QuoteView {
    fn from(schedule: &RepaymentSchedule) -> Self {
        let (admin_fee_pounds, admin_fee_pence) = split_pence(schedule.admin_fee);
        let (monthly_repayment_pounds, monthly_repayment_pence) =
            split_pence(schedule.monthly_repayment);
        let (final_month_payment_pounds, final_month_payment_pence) =
            split_pence(schedule.final_month_payment);
        let (total_cost_pounds, total_cost_pence) = split_pence(schedule.total_cost);

        QuoteView {
            admin_fee_pounds,
            admin_fee_pence,
            monthly_repayment_pounds,
            monthly_repayment_pence,
            final_month_payment_pounds,
            final_month_payment_pence,
            total_cost_pounds,
            total_cost_pence,
            months_to_repay: schedule.months_to_repay.to_string(),
        }
    }
}

/// Split an integer pence amount into its pound and two-digit penny strings.
fn split_pence(amount: Money) -> (String, String) {
    let pounds = (amount / dec!(100)).trunc().normalize().to_string();
    let pence = (amount % dec!(100)).to_u32().unwrap_or(0);
    (pounds, format!("{pence:02}"))
}

/// Result fragment shown to the borrower, in the wording of the original
/// calculator page.
pub const DEFAULT_TEMPLATE: &str = "\
Administration fee: £{admin_fee_pounds}.{admin_fee_pence}
Total cost of loan: £{total_cost_pounds}.{total_cost_pence}
Monthly repayment: £{monthly_repayment_pounds}.{monthly_repayment_pence}
Final month payment: £{final_month_payment_pounds}.{final_month_payment_pence}
Time to repay: {months_to_repay} months
";

/// Substitute `{name}` placeholders for the nine quote fields. Placeholders
/// that name no field are left verbatim.
pub fn render_template(template: &str, view: &QuoteView) -> String {
    let mut out = template.to_string();
    for (name, value) in view.fields() {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn example_schedule() -> RepaymentSchedule {
        RepaymentSchedule {
            admin_fee: dec!(5000),
            monthly_repayment: dec!(100000),
            final_month_payment: dec!(0),
            total_cost: dec!(800000),
            months_to_repay: 9,
        }
    }

    #[test]
    fn test_view_of_worked_example() {
        let view = QuoteView::from(&example_schedule());
        assert_eq!(
            view,
            QuoteView {
                admin_fee_pounds: "50".into(),
                admin_fee_pence: "00".into(),
                monthly_repayment_pounds: "1000".into(),
                monthly_repayment_pence: "00".into(),
                final_month_payment_pounds: "0".into(),
                final_month_payment_pence: "00".into(),
                total_cost_pounds: "8000".into(),
                total_cost_pence: "00".into(),
                months_to_repay: "9".into(),
            }
        );
    }

    #[test]
    fn test_pennies_are_zero_padded() {
        let (pounds, pence) = split_pence(dec!(5));
        assert_eq!(pounds, "0");
        assert_eq!(pence, "05");

        let (pounds, pence) = split_pence(dec!(36500));
        assert_eq!(pounds, "365");
        assert_eq!(pence, "00");

        let (pounds, pence) = split_pence(dec!(12399));
        assert_eq!(pounds, "123");
        assert_eq!(pence, "99");
    }

    #[test]
    fn test_pounds_have_no_padding_or_point() {
        for amount in [dec!(0), dec!(1), dec!(99), dec!(100), dec!(850001)] {
            let (pounds, _) = split_pence(amount);
            assert!(!pounds.contains('.'), "pounds of {amount} was {pounds}");
            assert!(
                pounds == "0" || !pounds.starts_with('0'),
                "pounds of {amount} was {pounds}"
            );
        }
    }

    #[test]
    fn test_template_substitution() {
        let view = QuoteView::from(&example_schedule());
        let text = render_template("fee £{admin_fee_pounds}.{admin_fee_pence}", &view);
        assert_eq!(text, "fee £50.00");
    }

    #[test]
    fn test_unknown_placeholders_left_verbatim() {
        let view = QuoteView::from(&example_schedule());
        let text = render_template("{months_to_repay} months, {mystery}", &view);
        assert_eq!(text, "9 months, {mystery}");
    }

    #[test]
    fn test_default_template_renders() {
        let text = render_template(DEFAULT_TEMPLATE, &QuoteView::from(&example_schedule()));
        assert!(text.contains("Administration fee: £50.00"));
        assert!(text.contains("Total cost of loan: £8000.00"));
        assert!(text.contains("Monthly repayment: £1000.00"));
        assert!(text.contains("Final month payment: £0.00"));
        assert!(text.contains("Time to repay: 9 months"));
        assert!(!text.contains('{'));
    }
}
