//! Money formatting
//!
//! The backend reports every amount as a plain decimal in US dollars. These
//! helpers exist purely for presentation.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso};

/// Format an amount for display, e.g. `$1,234.50`.
pub fn format_amount(amount: Decimal) -> String {
    let minor = (amount * Decimal::ONE_HUNDRED)
        .round()
        .to_i64()
        .unwrap_or_default();

    Money::from_minor(minor, iso::USD).to_string()
}

/// Line total for a quantity at a frozen unit price.
pub fn line_total(quantity: u32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_decimal_places() {
        assert_eq!(format_amount(Decimal::new(25, 0)), "$25.00");
        assert_eq!(format_amount(Decimal::new(1005, 2)), "$10.05");
    }

    #[test]
    fn rounds_sub_cent_amounts() {
        assert_eq!(format_amount(Decimal::new(19_999, 3)), "$20.00");
    }

    #[test]
    fn line_total_multiplies_frozen_price() {
        assert_eq!(line_total(3, Decimal::new(250, 2)), Decimal::new(750, 2));
    }
}
