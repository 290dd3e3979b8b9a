//! Account form on the customer dashboard's profile tab. Edits stay in the
//! session.

#[cfg(test)]
#[path = "customer_profile_form_test.rs"]
mod customer_profile_form_test;

use leptos::prelude::*;
use market::profile::CustomerProfileEditor;

type EditorSignal = RwSignal<Option<CustomerProfileEditor>>;

/// Single-line input bound to one form field.
#[component]
fn AccountField(
    editor: EditorSignal,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    get: fn(&CustomerProfileEditor) -> String,
    set: fn(&mut CustomerProfileEditor, String),
) -> impl IntoView {
    view! {
        <label class="field">
            {label}
            <input
                type=kind
                prop:value=move || editor.with(|open| open.as_ref().map(get).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|open| {
                        if let Some(form) = open.as_mut() {
                            set(form, value);
                        }
                    });
                }
            />
        </label>
    }
}

/// Editable account form. `editor` is `None` while the form is closed; the
/// parent owns opening, saving and cancelling.
#[component]
pub fn CustomerProfileForm(editor: EditorSignal, on_save: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let can_save = move || editor.with(|open| open.as_ref().is_some_and(CustomerProfileEditor::can_save));

    view! {
        <form
            class="card profile-editor"
            on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <h3 class="card__title">"Edit Profile"</h3>
            <div class="form-grid">
                <AccountField editor label="Full Name" get=|f| f.name.clone() set=|f, v| f.name = v/>
                <AccountField editor label="Email Address" kind="email" get=|f| f.email.clone() set=|f, v| f.email = v/>
                <AccountField editor label="Phone Number" kind="tel" get=|f| f.phone.clone() set=|f, v| f.phone = v/>
                <AccountField editor label="Location" get=|f| f.location.clone() set=|f, v| f.location = v/>
            </div>
            <label class="field">
                "Bio"
                <textarea
                    rows="4"
                    placeholder="Tell us a bit about yourself and your culinary preferences..."
                    prop:value=move || editor.with(|open| open.as_ref().map(|f| f.bio.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editor.update(|open| {
                            if let Some(form) = open.as_mut() {
                                form.bio = value;
                            }
                        });
                    }
                ></textarea>
            </label>
            <Show when=move || !can_save()>
                <p class="field__error">"Name and email are required."</p>
            </Show>
            <div class="profile-editor__actions">
                <button type="button" class="btn btn--outline" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || !can_save()>
                    "Save Changes"
                </button>
            </div>
        </form>
    }
}
