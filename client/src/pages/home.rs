//! Landing page: hero search, featured chefs and how-it-works copy.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::chef_card::ChefCard;
use crate::components::site_header::SiteHeader;
use crate::state::use_catalog;

const POPULAR: [&str; 5] = ["Italian", "French", "Asian Fusion", "BBQ", "Vegan"];

const STEPS: [(&str, &str); 3] = [
    (
        "Browse & Search",
        "Explore our curated selection of professional chefs. Filter by cuisine, location, price, and availability.",
    ),
    (
        "Book Your Experience",
        "Select your preferred chef and book your culinary experience. Choose from private dining, cooking classes, or events.",
    ),
    (
        "Connect & Enjoy",
        "Communicate directly with your chef to customize your experience. Sit back and enjoy exceptional culinary artistry.",
    ),
];

/// `/browse` link carrying a percent-encoded search query.
fn browse_href(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() { "/browse".to_owned() } else { format!("/browse?q={}", urlencoding::encode(query)) }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = use_catalog();
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());

    let featured = catalog.featured().iter().cloned().map(|chef| view! { <ChefCard chef/> }).collect_view();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&browse_href(&search.get_untracked()), NavigateOptions::default());
    };

    view! {
        <SiteHeader/>
        <main class="home">
            <section class="hero">
                <h2 class="hero__title">
                    "Connect with Professional Chefs for " <span class="hero__accent">"Exceptional"</span>
                    " Culinary Experiences"
                </h2>
                <p class="hero__lead">
                    "Discover talented chefs in your area, browse their specialties, and book personalized dining experiences for any occasion."
                </p>
                <form class="hero__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search by cuisine, location, or chef name..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary">
                        "Find Chefs"
                    </button>
                </form>
                <div class="hero__popular">
                    <span>"Popular:"</span>
                    {POPULAR
                        .iter()
                        .map(|tag| view! { <A href=browse_href(tag) attr:class="badge badge--secondary">{*tag}</A> })
                        .collect_view()}
                </div>
            </section>

            <section class="featured">
                <h3 class="section-title">"Featured Chefs"</h3>
                <div class="chef-grid">{featured}</div>
            </section>

            <section class="how-it-works">
                <h3 class="section-title">"How It Works"</h3>
                <div class="how-it-works__steps">
                    {STEPS
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="card how-it-works__step">
                                    <h4 class="card__title">{*title}</h4>
                                    <p class="card__description">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h3>"Ready to Book Your Chef?"</h3>
                <p>"Join thousands of satisfied customers who have discovered exceptional culinary experiences."</p>
                <A href="/browse" attr:class="btn btn--secondary">"Browse Chefs"</A>
                <A href="/chef-dashboard" attr:class="btn btn--outline">"Become a Chef"</A>
            </section>
        </main>
    }
}
