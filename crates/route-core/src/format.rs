//! Display formatting shared by the aggregation modules.
//!
//! Formatters never fail. Values that cannot be shown honestly (non-finite,
//! negative where that makes no sense) become [`PLACEHOLDER`].

/// Shown instead of a number when the value is unknown.
pub const PLACEHOLDER: &str = "—";

/// Round half-up (`10.5 -> 11`, `-10.5 -> -10`). `None` for non-finite input.
pub fn round_half_up(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    Some((value + 0.5).floor() as i64)
}

pub fn format_km(km: f64) -> String {
    format!("{km:.1} км")
}

/// Currency amount in rubles, or the placeholder when non-finite.
pub fn format_currency(amount: f64) -> String {
    if amount.is_finite() {
        format!("{amount:.2} ₽")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Whole-number percentage, or the placeholder when non-finite.
pub fn format_percent(value: f64) -> String {
    match round_half_up(value) {
        Some(rounded) => format!("{rounded}%"),
        None => PLACEHOLDER.to_string(),
    }
}
