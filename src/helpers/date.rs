//! Date helper functions

use chrono::NaiveDate;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM DD, YYYY") // -> "January 15, 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert Moment.js date tokens to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category so "MMMM" is not
    // consumed as two "MM" tokens
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        ("DDDD", "%j"), // Day of year
        ("DD", "%d"),   // Two-digit day
        ("dddd", "%A"), // Full weekday name
        ("ddd", "%a"),  // Abbreviated weekday name
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
