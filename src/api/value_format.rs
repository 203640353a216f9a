//! Numeric and category-label formatting.
//!
//! A [`ValueFormatter`] is the engine-side stand-in for the host formatter
//! factory: it carries a host format string, a display-unit divisor, and a
//! precision, and produces display text for one value at a time.

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::table::CellValue;

/// Fixed category label pattern: weekday, month day, year.
const CATEGORY_DATE_PATTERN: &str = "%A, %B %-d, %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct ValueFormatter {
    format: Option<String>,
    display_unit: f64,
    precision: usize,
}

impl ValueFormatter {
    #[must_use]
    pub fn new(format: Option<&str>, display_unit: f64, precision: usize) -> Self {
        let display_unit = if display_unit.is_finite() && display_unit > 0.0 {
            display_unit
        } else {
            1.0
        };
        Self {
            format: format.map(str::to_owned),
            display_unit,
            precision,
        }
    }

    #[must_use]
    pub fn display_unit(&self) -> f64 {
        self.display_unit
    }

    /// Formats one value: percent formats multiply by 100, divisors of a
    /// thousand and up divide and append the unit suffix, everything else
    /// renders at the configured precision.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }

        if self.is_percent_format() {
            return format!("{:.*}%", self.precision, value * 100.0);
        }

        let suffix = unit_suffix(self.display_unit);
        if suffix.is_empty() {
            format!("{:.*}", self.precision, value)
        } else {
            format!("{:.*}{suffix}", self.precision, value / self.display_unit)
        }
    }

    fn is_percent_format(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|format| format.contains('%'))
    }
}

/// Suffix for a display-unit divisor. Divisors below a thousand scale
/// nothing and carry no suffix.
#[must_use]
pub fn unit_suffix(display_unit: f64) -> &'static str {
    if display_unit >= 1e9 {
        "bn"
    } else if display_unit >= 1e6 {
        "M"
    } else if display_unit >= 1e3 {
        "K"
    } else {
        ""
    }
}

/// Decimal-digit count of the value's own literal representation; drives
/// per-value tooltip precision.
#[must_use]
pub fn decimal_places_of(value: f64) -> usize {
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}

/// Renders a category cell through the fixed date pattern.
///
/// Timestamps and date-like text format as *weekday, month day, year*;
/// anything else passes through as display text.
#[must_use]
pub fn format_category(cell: &CellValue) -> String {
    match cell {
        CellValue::Timestamp(timestamp) => timestamp.format(CATEGORY_DATE_PATTERN).to_string(),
        CellValue::Text(text) => parse_date_text(text)
            .map(|date| date.format(CATEGORY_DATE_PATTERN).to_string())
            .unwrap_or_else(|| text.clone()),
        CellValue::Number(value) => value.to_string(),
        CellValue::Bool(flag) => flag.to_string(),
        CellValue::Null => String::new(),
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
