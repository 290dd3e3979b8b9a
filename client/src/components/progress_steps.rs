//! Stage indicator across the top of the booking wizard.

use leptos::prelude::*;
use market::wizard::StepProgress;
use market::{BookingStage, BookingWizard};

#[component]
pub fn ProgressSteps(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let steps = BookingStage::ALL
        .into_iter()
        .map(|stage| {
            let progress = move || wizard.with(|w| w.progress(stage));
            view! {
                <li
                    class="progress-steps__step"
                    class:progress-steps__step--done=move || progress() == StepProgress::Done
                    class:progress-steps__step--current=move || progress() == StepProgress::Current
                >
                    <span class="progress-steps__marker">
                        {move || match progress() {
                            StepProgress::Done => "✓".to_owned(),
                            StepProgress::Current | StepProgress::Upcoming => (stage.index() + 1).to_string(),
                        }}
                    </span>
                    <span class="progress-steps__title">{stage.title()}</span>
                    <span class="progress-steps__description">{stage.description()}</span>
                </li>
            }
        })
        .collect_view();

    view! { <ol class="progress-steps">{steps}</ol> }
}
