//! Read-only chef profile with reviews, gallery and a booking sidebar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use market::pricing;
use market::{Chef, ServiceType};

use crate::components::chef_gallery::ChefGallery;
use crate::components::reviews_list::ReviewsList;
use crate::components::site_header::SiteHeader;
use crate::state::use_catalog;
use crate::util::format;

#[component]
pub fn ChefProfilePage() -> impl IntoView {
    let catalog = use_catalog();
    let params = use_params_map();

    let body = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        match catalog.chef(&id) {
            Ok(chef) => view! {
                <ChefProfile
                    chef=chef.clone()
                    reviews=catalog.reviews_for(&id).to_vec()
                    gallery=catalog.gallery_for(&id).to_vec()
                />
            }
                .into_any(),
            Err(err) => view! {
                <div class="empty-state">
                    <h3>"Chef not found"</h3>
                    <p>{err.to_string()}</p>
                    <A href="/browse" attr:class="btn btn--primary">"Browse Chefs"</A>
                </div>
            }
                .into_any(),
        }
    };

    view! {
        <SiteHeader/>
        <main class="chef-profile">{body}</main>
    }
}

#[component]
fn ChefProfile(chef: Chef, reviews: Vec<market::Review>, gallery: Vec<String>) -> impl IntoView {
    let book_href = format!("/book/{}", chef.id);
    let first_word = chef.name.split_whitespace().next().unwrap_or_default().to_owned();
    let services = ServiceType::ALL
        .iter()
        .map(|service| {
            let price = pricing::effective_hourly_rate(chef.hourly_rate, *service)
                .map_or_else(|| "Custom Quote".to_owned(), |rate| format!("{}/hour", format::money(rate)));
            view! {
                <li class="chef-profile__service">
                    <span>{service.label()}</span>
                    <span>{price}</span>
                </li>
            }
        })
        .collect_view();
    let cuisines = chef.cuisines.iter().map(|c| view! { <span class="badge badge--secondary">{c.clone()}</span> }).collect_view();

    view! {
        <div class="chef-profile__layout">
            <div class="chef-profile__main">
                <section class="chef-profile__hero">
                    <img class="chef-profile__image" src=chef.image.clone() alt=chef.name.clone()/>
                    <div>
                        <h1>{chef.name.clone()}</h1>
                        <p class="chef-profile__specialty">{chef.specialty.clone()}</p>
                        <p class="chef-profile__meta">
                            <span>{format!("★ {}", format::rating_summary(chef.rating, chef.review_count))}</span>
                            <span>{chef.location.clone()}</span>
                            <span>{format!("{} years experience", chef.experience)}</span>
                        </p>
                        <span class="badge" class:badge--success=chef.is_available class:badge--muted=!chef.is_available>
                            {if chef.is_available { "Available" } else { "Currently Unavailable" }}
                        </span>
                    </div>
                </section>
                <section class="card">
                    <h3 class="card__title">{format!("About {first_word}")}</h3>
                    <p>{chef.bio.clone()}</p>
                </section>
                <section class="card">
                    <h3 class="card__title">"Specialties & Cuisines"</h3>
                    <div class="chef-profile__cuisines">{cuisines}</div>
                </section>
                <section class="card">
                    <h3 class="card__title">"Portfolio"</h3>
                    <ChefGallery images=gallery chef_name=chef.name.clone()/>
                </section>
                <section class="card">
                    <h3 class="card__title">{format!("Reviews ({})", chef.review_count)}</h3>
                    <ReviewsList reviews/>
                </section>
            </div>
            <aside class="card chef-profile__booking">
                <h3 class="card__title">{format!("Book {first_word}")}</h3>
                <p class="chef-profile__rate">{chef.rate_label()}</p>
                <h4>"Services Offered:"</h4>
                <ul>{services}</ul>
                <A href=book_href attr:class="btn btn--primary btn--block">"Book Now"</A>
                <p class="chef-profile__note">"You won't be charged yet"</p>
            </aside>
        </div>
    }
}
