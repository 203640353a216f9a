//! Y-axis display-unit selection.

/// Picks the tick divisor from the digit length of the data maximum.
///
/// The rule keys off the literal string length of the value, not its
/// measured magnitude, and must stay bit-for-bit compatible:
/// `>9` digits selects billions, `7..=9` millions, `4..=6` thousands,
/// anything shorter selects `10`.
#[must_use]
pub fn auto_display_unit(data_max: f64) -> f64 {
    let digits = data_max.to_string().len();
    if digits > 9 {
        1e9
    } else if digits > 6 {
        1e6
    } else if digits >= 4 {
        1e3
    } else {
        10.0
    }
}

/// A pinned unit (`!= 0`) wins over the automatic choice.
#[must_use]
pub fn resolve_display_unit(pinned: f64, data_max: f64) -> f64 {
    if pinned == 0.0 {
        auto_display_unit(data_max)
    } else {
        pinned
    }
}
