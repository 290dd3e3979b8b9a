use leptos::reactive::owner::Owner;
use market::Catalog;

use super::*;

#[test]
fn dashboard_view_renders_signed_in_chef() {
    let catalog = Catalog::sample();
    let owner = Owner::new();
    let html = owner.with(|| {
        let state = RwSignal::new(ChefDashboardState::from_catalog(&catalog).unwrap());
        view! { <ChefDashboardView state earnings=catalog.earnings/> }.to_html()
    });

    assert!(html.contains("Welcome back, Chef Maria Rodriguez!"));
    assert!(html.contains("/professional-female-chef-cooking-italian-food.png"));
    assert!(html.contains("Recent Bookings"));
    assert!(html.contains("Earnings Overview"));
}
