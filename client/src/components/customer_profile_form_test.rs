use leptos::reactive::owner::Owner;
use market::Catalog;

use super::*;

fn render(form: CustomerProfileEditor) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let editor = RwSignal::new(Some(form));
        let on_save = Callback::new(|()| {});
        let on_cancel = Callback::new(|()| {});
        view! { <CustomerProfileForm editor on_save on_cancel/> }.to_html()
    })
}

#[test]
fn renders_account_fields() {
    let html = render(CustomerProfileEditor::from_user(&Catalog::sample().customer));
    for label in ["Full Name", "Email Address", "Phone Number", "Location", "Bio"] {
        assert!(html.contains(label), "missing field {label}");
    }
    assert!(!html.contains("Name and email are required."));
}

#[test]
fn incomplete_form_shows_required_notice() {
    let mut form = CustomerProfileEditor::from_user(&Catalog::sample().customer);
    form.email.clear();
    let html = render(form);
    assert!(html.contains("Name and email are required."));
}
