//! Earnings figures card on the chef overview tab.

use leptos::prelude::*;
use market::dashboard::EarningsSummary;

use crate::util::format;

#[component]
pub fn EarningsOverview(earnings: EarningsSummary) -> impl IntoView {
    let growth = earnings.growth_label();
    let trending_up = earnings.monthly_growth_pct().is_some_and(|pct| pct >= 0.0);

    view! {
        <section class="card earnings">
            <h3 class="card__title">"Earnings Overview"</h3>
            <div class="earnings__headline">
                <span class="earnings__amount">{format::money(earnings.this_month)}</span>
                <span class="earnings__caption">"This month"</span>
                {growth.map(|label| view! {
                    <span class="earnings__growth" class:earnings__growth--down=!trending_up>{label}</span>
                })}
            </div>
            <dl class="earnings__grid">
                <div><dt>"Last month"</dt><dd>{format::money(earnings.last_month)}</dd></div>
                <div><dt>"This year"</dt><dd>{format::money(earnings.this_year)}</dd></div>
                <div><dt>"Average booking"</dt><dd>{format::money(earnings.average_booking)}</dd></div>
                <div><dt>"Total bookings"</dt><dd>{earnings.total_bookings}</dd></div>
                <div><dt>"Repeat customers"</dt><dd>{earnings.repeat_customers}</dd></div>
            </dl>
        </section>
    }
}
