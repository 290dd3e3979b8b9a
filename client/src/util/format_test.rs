use super::*;
use market::PriceBreakdown;
use time::macros::date;

#[test]
fn money_has_dollar_prefix() {
    assert_eq!(money(314), "$314");
}

#[test]
fn quote_total_for_priced_and_custom() {
    let priced = Quote::Priced(PriceBreakdown { hourly_rate: 95, hours: 3, subtotal: 285, service_fee: 29, total: 314 });
    assert_eq!(quote_total(&priced), "$314");
    assert_eq!(quote_total(&Quote::Custom), "Custom Quote");
}

#[test]
fn status_badges() {
    assert_eq!(status_label(BookingStatus::Cancelled), "Cancelled");
    assert_eq!(status_badge_class(BookingStatus::Pending), "status-badge status-badge--pending");
}

#[test]
fn dates() {
    assert_eq!(short_date(date!(2024 - 12 - 15)), "Sun, Dec 15, 2024");
    assert_eq!(full_date(date!(2024 - 12 - 15)), "Sunday, December 15, 2024");
    assert_eq!(member_since(date!(2023 - 06 - 15)), "Member since June 2023");
}

#[test]
fn rating_keeps_one_decimal() {
    assert_eq!(rating_summary(5.0, 156), "5.0 (156 reviews)");
}
