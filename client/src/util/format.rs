//! Display formatting for prices, statuses and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use market::calendar;
use market::{BookingStatus, Quote};
use time::Date;

/// `$314`.
pub fn money(amount: u32) -> String {
    format!("${amount}")
}

/// Price shown for a quote; catering has no fixed number.
pub fn quote_total(quote: &Quote) -> String {
    quote.total().map_or_else(|| "Custom Quote".to_owned(), money)
}

/// Title-case status badge text.
pub fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "Pending",
        BookingStatus::Confirmed => "Confirmed",
        BookingStatus::Completed => "Completed",
        BookingStatus::Cancelled => "Cancelled",
    }
}

/// BEM modifier class for a status badge.
pub fn status_badge_class(status: BookingStatus) -> String {
    format!("status-badge status-badge--{}", status.as_str())
}

/// `Sun, Dec 15, 2024` style card date.
pub fn short_date(date: Date) -> String {
    let month = date.month().to_string();
    let weekday = date.weekday().to_string();
    format!("{}, {} {}, {}", &weekday[..3], &month[..3], date.day(), date.year())
}

/// `Sunday, December 15, 2024`.
pub fn full_date(date: Date) -> String {
    calendar::full_date(date)
}

/// `Member since June 2023`.
pub fn member_since(joined: Date) -> String {
    format!("Member since {} {}", joined.month(), joined.year())
}

/// `4.9 (127 reviews)`.
pub fn rating_summary(rating: f64, review_count: u32) -> String {
    format!("{rating:.1} ({review_count} reviews)")
}
