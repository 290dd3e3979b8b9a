use leptos::reactive::owner::Owner;
use time::macros::date;

use super::*;

fn render(availability: Availability, today: Date) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let on_toggle = Callback::new(|_: Date| {});
        view! { <AvailabilityCalendar availability=Signal::stored(availability) today on_toggle/> }.to_html()
    })
}

#[test]
fn renders_weekday_header() {
    let html = render(Availability::default(), date!(2024 - 11 - 20));
    for name in DAY_NAMES {
        assert!(html.contains(name), "missing weekday {name}");
    }
}

#[test]
fn lists_marked_days() {
    let today = date!(2024 - 11 - 20);
    let mut availability = Availability::default();
    assert!(availability.toggle(date!(2024 - 11 - 22), today));

    let html = render(availability, today);
    assert!(html.contains(&calendar::full_date(date!(2024 - 11 - 22))));
    assert!(html.contains("calendar__day--available"));
}
