use leptos::reactive::owner::Owner;
use time::macros::date;

use super::*;

fn render(selected: Option<Date>, today: Date) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let on_select = Callback::new(|_: Date| {});
        view! { <BookingCalendar selected=Signal::stored(selected) today on_select/> }.to_html()
    })
}

#[test]
fn renders_weekday_header_and_month_title() {
    let html = render(None, date!(2024 - 11 - 20));
    for name in DAY_NAMES {
        assert!(html.contains(name), "missing weekday {name}");
    }
    assert!(html.contains("November 2024"));
}

#[test]
fn opens_on_selected_month() {
    let html = render(Some(date!(2024 - 12 - 14)), date!(2024 - 11 - 20));
    assert!(html.contains("December 2024"));
    assert!(html.contains("calendar__day--selected"));
}
