use leptos::prelude::*;

use crate::starfield::Star;

/// Full-bleed layer of twinkling stars behind a section's content.
#[component]
pub fn Starfield(stars: Vec<Star>) -> impl IntoView {
    view! {
        <div class="absolute inset-0 z-0 pointer-events-none">
            {stars
                .into_iter()
                .map(|star| {
                    view! { <div class="absolute rounded-full bg-white" style=star.twinkle_style()></div> }
                })
                .collect_view()}
        </div>
    }
}
