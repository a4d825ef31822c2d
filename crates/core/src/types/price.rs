//! Pricing helpers shared by the pipeline, the stores, and the view layer.
//!
//! The storefront is single-currency (USD). All money values are
//! [`rust_decimal::Decimal`]; floating point never touches a price.

use rust_decimal::Decimal;

/// The canonical effective-price rule.
///
/// The sale price wins only when it is present *and strictly less than* the
/// regular price; a sale price at or above the regular price is treated as
/// bad data and ignored. Every price-sensitive computation (filtering,
/// sorting, cart subtotals, display) goes through this one function.
#[must_use]
pub fn effective_price(price: Decimal, sale_price: Option<Decimal>) -> Decimal {
    match sale_price {
        Some(sale) if sale < price => sale,
        _ => price,
    }
}

/// Format a USD amount for display (e.g., "$24.00").
///
/// Negative amounts keep the sign ahead of the dollar symbol ("-$5.00"),
/// matching how refund lines render.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${rounded:.2}")
    }
}
