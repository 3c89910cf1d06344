//! Display-date formatting
//!
//! The site configuration carries a Moment.js-style format string
//! (`DD MMM YYYY`) and a BCP 47 language tag (`pt-BR`). Both come straight
//! from how blog authors write these things; chrono wants strftime tokens
//! and a glibc-style locale, so this module converts.

use chrono::{Locale, NaiveDate};

/// Format a calendar date for display using a Moment.js-style format string.
///
/// # Examples
/// ```ignore
/// format_display_date(date, "DD MMM YYYY", Locale::pt_BR) // -> "15 jan 2021"
/// ```
pub fn format_display_date(date: NaiveDate, format: &str, locale: Locale) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format_localized(&chrono_format, locale).to_string()
}

/// Resolve a language tag like `pt-BR` to a chrono locale.
///
/// Unknown tags fall back to `en_US` with a warning rather than failing the
/// load; the tag is site configuration, not content.
pub fn locale_for_tag(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    match Locale::try_from(normalized.as_str()) {
        Ok(locale) => locale,
        Err(_) => {
            tracing::warn!("Unknown locale tag {:?}, falling back to en_US", tag);
            Locale::en_US
        }
    }
}

/// Convert a Moment.js date format to a chrono format string.
///
/// Only calendar tokens are mapped; anything else passes through as a
/// literal. Longest tokens are replaced first so `MMM` never matches inside
/// `MMMM`.
fn moment_to_chrono_format(format: &str) -> String {
    const REPLACEMENTS: [(&str, &str); 8] = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        ("DD", "%d"),   // Two-digit day of month
        ("dddd", "%A"), // Full weekday name
        ("ddd", "%a"),  // Abbreviated weekday name
    ];

    let mut result = format.to_string();
    for (from, to) in REPLACEMENTS {
        result = result.replace(from, to);
    }
    result
}
