use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Whole-rupiah amount with `,` thousands separators, e.g. `Rp 1,500,000`.
///
/// Rounds half to even.
pub(crate) fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round().to_i128().unwrap_or_default();
    format!("Rp {}", rounded.to_formatted_string(&Locale::en))
}
