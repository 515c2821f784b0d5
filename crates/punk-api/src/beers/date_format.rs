//! Brew date rendering.
//!
//! The API expects brew dates as month and year, e.g. `05-2010`. The pattern
//! is a constant and every call formats through a fresh `chrono` formatter,
//! so there is no shared formatter state between threads.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// `chrono` pattern used for brew dates: two-digit month, four-digit year.
pub const BREW_DATE_FORMAT: &str = "%m-%Y";

/// ISO pattern accepted by [`parse_brew_date`] in addition to `MM-YYYY`.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders a date with [`BREW_DATE_FORMAT`]. The day is dropped.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use punk_api_rs::beers::format_brew_date;
///
/// let date = NaiveDate::from_ymd_opt(2007, 9, 23).unwrap();
/// assert_eq!(format_brew_date(date), "09-2007");
/// ```
pub fn format_brew_date(date: NaiveDate) -> String {
    date.format(BREW_DATE_FORMAT).to_string()
}

/// Parses a brew date from `MM-YYYY` or `YYYY-MM-DD`.
///
/// `MM-YYYY` input resolves to the first day of that month. The year must
/// have exactly four digits.
///
/// # Errors
///
/// Returns `Error::InvalidDate` if the input matches neither form.
pub fn parse_brew_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();

    let parsed = match parts.as_slice() {
        [year, _, _] if is_four_digit_year(year) => {
            NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).ok()
        }
        [_, year] if is_four_digit_year(year) => {
            NaiveDate::parse_from_str(&format!("01-{trimmed}"), "%d-%m-%Y").ok()
        }
        _ => None,
    };

    parsed.ok_or_else(|| Error::invalid_date(input))
}

/// chrono's `%Y` takes any digit count, so the width is checked up front.
fn is_four_digit_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}
