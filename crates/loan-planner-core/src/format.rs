//! Rupee formatting in the `en-IN` convention.
//!
//! Indian digit grouping keeps the last three digits together and groups
//! everything to the left in pairs: `2500000` renders as `25,00,000`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Format an amount as whole rupees, e.g. `₹1,66,658`.
pub fn format_inr(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&rounded.abs().trunc().to_string()))
}

/// Group a plain digit string using lakh/crore separators.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(500)), "₹500");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(8329)), "₹8,329");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(format_inr(dec!(166658)), "₹1,66,658");
        assert_eq!(format_inr(dec!(2500000)), "₹25,00,000");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn test_fraction_rounds_half_away_from_zero() {
        assert_eq!(format_inr(dec!(999.5)), "₹1,000");
        assert_eq!(format_inr(dec!(1000.49)), "₹1,000");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_inr(dec!(-1500)), "-₹1,500");
    }
}
