//! Money display formatting

use crate::domain::entities::Money;

/// Format a price as `"$<units>.<cents>"`
///
/// Cents are nanos truncated down to hundredths, zero-padded to two digits.
/// The final 7 digits of nano precision are discarded, never rounded.
pub fn format_money(price: &Money) -> String {
    let cents = price.nanos / 10_000_000;
    format!("${}.{:02}", price.units, cents)
}
