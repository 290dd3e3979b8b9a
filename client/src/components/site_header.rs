//! Top navigation bar shown on every page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                <span class="site-header__logo" aria-hidden="true">"👨‍🍳"</span>
                <span class="site-header__title">"Book My Chef"</span>
            </A>
            <nav class="site-header__nav">
                <A href="/browse">"Browse Chefs"</A>
                <A href="/dashboard">"My Bookings"</A>
                <A href="/chef-dashboard">"For Chefs"</A>
            </nav>
        </header>
    }
}
