//! Live order summary beside the booking wizard.

use leptos::prelude::*;
use market::calendar;
use market::{BookingWizard, Quote};

use crate::components::avatar::Avatar;
use crate::util::format;

#[component]
pub fn BookingSummary(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let chef = wizard.with_untracked(|w| w.chef().clone());
    let draft = move || wizard.with(|w| w.draft().clone());

    let service = move || draft().service_type.map(|s| s.label());
    let when = move || {
        let draft = draft();
        match (draft.date, draft.time) {
            (Some(date), Some(time)) => Some(format!("{} at {}", calendar::long_date(date), time.label())),
            (Some(date), None) => Some(calendar::long_date(date)),
            _ => None,
        }
    };

    let pricing = move || {
        wizard.with(BookingWizard::live_quote).map(|quote| match quote {
            Quote::Priced(b) => view! {
                <dl class="booking-summary__pricing">
                    <div><dt>{format!("{} × {} hours", format::money(b.hourly_rate), b.hours)}</dt><dd>{format::money(b.subtotal)}</dd></div>
                    <div><dt>"Service fee"</dt><dd>{format::money(b.service_fee)}</dd></div>
                    <div class="booking-summary__total"><dt>"Total"</dt><dd>{format::money(b.total)}</dd></div>
                </dl>
            }
                .into_any(),
            Quote::Custom => view! {
                <p class="booking-summary__custom">"Custom quote. The chef will contact you with pricing for your event."</p>
            }
                .into_any(),
        })
    };

    view! {
        <aside class="booking-summary">
            <h3>"Booking Summary"</h3>
            <div class="booking-summary__chef">
                <Avatar name=chef.name.clone() src=chef.image.clone()/>
                <div>
                    <p class="booking-summary__chef-name">{chef.name.clone()}</p>
                    <p class="booking-summary__chef-specialty">{chef.specialty.clone()}</p>
                </div>
            </div>
            <ul class="booking-summary__details">
                {move || service().map(|label| view! { <li>{label}</li> })}
                {move || when().map(|when| view! { <li>{when}</li> })}
                <li>{move || draft().hours.label()}</li>
                <li>{move || draft().guests.label()}</li>
            </ul>
            {pricing}
        </aside>
    }
}
