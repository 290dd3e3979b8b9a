//! Root application component with routing and the catalog context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use market::Catalog;

use crate::pages::{
    book::BookingPage, browse::BrowsePage, chef_dashboard::ChefDashboardPage, chef_profile::ChefProfilePage,
    customer_dashboard::CustomerDashboardPage, home::HomePage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the read-only catalog to every page and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Arc::new(Catalog::sample()));

    view! {
        <Stylesheet id="leptos" href="/pkg/bookmychef.css"/>
        <Title text="Book My Chef"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("browse") view=BrowsePage/>
                <Route path=(StaticSegment("chef"), ParamSegment("id")) view=ChefProfilePage/>
                <Route path=(StaticSegment("book"), ParamSegment("chef_id")) view=BookingPage/>
                <Route path=StaticSegment("dashboard") view=CustomerDashboardPage/>
                <Route path=StaticSegment("chef-dashboard") view=ChefDashboardPage/>
            </Routes>
        </Router>
    }
}
