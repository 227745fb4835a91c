use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse raw text the way the original form did: skip leading whitespace,
/// take one optional sign, then the longest run of ASCII digits. Everything
/// after the digits is ignored, so fractional amounts truncate toward their
/// integer prefix ("6400.75" parses as 6400). No digits at all is the
/// not-a-number case and yields `None`, which fails every range check.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    // Decimal holds 28 significant digits; anything longer is rejected rather
    // than silently rounded.
    let magnitude = Decimal::from_str(&rest[..digits_len]).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_amount("1000"), Some(dec!(1000)));
        assert_eq!(parse_amount("0"), Some(dec!(0)));
    }

    #[test]
    fn test_leading_whitespace_skipped() {
        assert_eq!(parse_amount("  \t 42"), Some(dec!(42)));
    }

    #[test]
    fn test_stops_at_first_non_digit() {
        assert_eq!(parse_amount("6400.75"), Some(dec!(6400)));
        assert_eq!(parse_amount("12abc"), Some(dec!(12)));
        assert_eq!(parse_amount("9e4"), Some(dec!(9)));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_amount("-5"), Some(dec!(-5)));
        assert_eq!(parse_amount("+5"), Some(dec!(5)));
        assert_eq!(parse_amount("-0"), Some(dec!(0)));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("+-3"), None);
        assert_eq!(parse_amount("- 5"), None);
        assert_eq!(parse_amount(".5"), None);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse_amount("007"), Some(dec!(7)));
    }
}
