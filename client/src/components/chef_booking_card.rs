//! Chef-side booking card with accept/decline/complete actions.

use leptos::prelude::*;
use market::{Actor, ChefBooking, StatusAction};

use crate::components::avatar::Avatar;
use crate::util::format;

#[component]
pub fn ChefBookingCard(booking: ChefBooking, on_action: Callback<(String, StatusAction)>) -> impl IntoView {
    let actions = booking
        .status
        .available_actions(Actor::Chef)
        .into_iter()
        .map(|action| {
            let id = booking.id.clone();
            let class = match action {
                StatusAction::Confirm | StatusAction::Complete => "btn btn--primary",
                StatusAction::Decline | StatusAction::Cancel => "btn btn--outline",
            };
            view! {
                <button type="button" class=class on:click=move |_| on_action.run((id.clone(), action))>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <article class="booking-card booking-card--chef">
            <header class="booking-card__header">
                <Avatar name=booking.customer.name.clone() src=booking.customer.avatar.clone()/>
                <div class="booking-card__who">
                    <h4>{booking.customer.name.clone()}</h4>
                    <p>{booking.customer.email.clone()}</p>
                </div>
                <span class=format::status_badge_class(booking.status)>{format::status_label(booking.status)}</span>
            </header>
            <ul class="booking-card__facts">
                <li>{format::short_date(booking.date)}</li>
                <li>{format!("{} ({}h)", booking.time, booking.duration)}</li>
                <li>{format!("{} guests", booking.guests)}</li>
                <li class="booking-card__location">{booking.location.clone()}</li>
            </ul>
            <div class="booking-card__notes">
                <p>{format!("Service: {}", booking.service_type.label())}</p>
                {booking.special_requests.clone().map(|text| view! { <p>{format!("Special requests: {text}")}</p> })}
                {booking.dietary_restrictions.clone().map(|text| view! { <p>{format!("Dietary restrictions: {text}")}</p> })}
            </div>
            <div class="booking-card__money">
                <strong>{format::money(booking.total_amount)}</strong>
                <div class="booking-card__actions">{actions}</div>
            </div>
        </article>
    }
}
