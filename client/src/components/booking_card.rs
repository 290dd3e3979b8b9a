//! Customer-side booking card.

use leptos::prelude::*;
use market::CustomerBooking;

use crate::components::avatar::Avatar;
use crate::util::format;

#[component]
pub fn BookingCard(booking: CustomerBooking, on_cancel: Callback<String>) -> impl IntoView {
    let can_cancel = booking.can_cancel();
    let can_review = booking.can_review();
    let id = booking.id.clone();

    view! {
        <article class="booking-card">
            <header class="booking-card__header">
                <Avatar name=booking.chef.name.clone() src=booking.chef.image.clone()/>
                <div class="booking-card__who">
                    <h4>{booking.chef.name.clone()}</h4>
                    <p>{booking.chef.specialty.clone()}</p>
                </div>
                <span class=format::status_badge_class(booking.status)>{format::status_label(booking.status)}</span>
            </header>
            <ul class="booking-card__facts">
                <li>{format::short_date(booking.date)}</li>
                <li>{format!("{} ({}h)", booking.time, booking.duration)}</li>
                <li>{format!("{} guests", booking.guests)}</li>
                <li class="booking-card__location">{booking.location.clone()}</li>
            </ul>
            <div class="booking-card__money">
                <span>{booking.service_type.label()}</span>
                <strong>{format::money(booking.total_amount)}</strong>
            </div>
            <div class="booking-card__actions">
                {can_cancel
                    .then(|| {
                        view! {
                            <button type="button" class="btn btn--outline btn--danger" on:click=move |_| on_cancel.run(id.clone())>
                                "Cancel Booking"
                            </button>
                        }
                    })}
                {can_review.then(|| view! { <button type="button" class="btn btn--primary">"Leave Review"</button> })}
            </div>
        </article>
    }
}
