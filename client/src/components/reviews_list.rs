use leptos::prelude::*;
use market::Review;

use crate::components::avatar::Avatar;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let items = reviews
        .into_iter()
        .map(|review| {
            let stars = "★".repeat(usize::from(review.rating)) + &"☆".repeat(usize::from(5u8.saturating_sub(review.rating)));
            view! {
                <li class="review">
                    <Avatar name=review.user_name.clone() src=review.user_avatar/>
                    <div class="review__body">
                        <div class="review__meta">
                            <span class="review__author">{review.user_name}</span>
                            <span class="review__stars" aria-label=format!("{} out of 5", review.rating)>{stars}</span>
                            <span class="review__date">{review.date}</span>
                        </div>
                        <p class="review__comment">{review.comment}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="reviews-list">{items}</ul> }
}
