//! Animated promo card for the landing page.
//!
//! DESIGN
//! ======
//! Visibility and viewport width feed `card_motion`, which resolves a pose the
//! card renders as inline CSS. The card enters once 40% of it is visible and
//! leans by its tilt hint only on large screens.

#[cfg(test)]
#[path = "home_card_test.rs"]
mod home_card_test;

use leptos::prelude::*;

use crate::util::breakpoints::is_large_screen;
use crate::util::card_motion::{Tilt, card_pose, card_style, card_transition};
use crate::util::viewport::{VISIBILITY_THRESHOLD, observe_visibility, use_window_width};

/// Promo card with an optional character overlay and a "Become a" caption.
#[component]
pub fn HomeCard(
    #[prop(into)] id: String,
    index: usize,
    #[prop(into)] background_image: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] alt: String,
    show_character: bool,
    #[prop(default = None)] character_image: Option<String>,
    #[prop(optional)] tilt: Tilt,
) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let in_view = RwSignal::new(false);
    let hovered = RwSignal::new(false);
    let width = use_window_width();

    observe_visibility(card_ref, VISIBILITY_THRESHOLD, in_view);

    let style = move || {
        let in_view = in_view.get();
        let hovered = hovered.get();
        let pose = card_pose(in_view, hovered, is_large_screen(width.get()), tilt);
        card_style(pose, &card_transition(in_view, hovered, index))
    };

    let overlay = character_overlay(show_character, character_image).map(|src| {
        view! {
            <img
                src=src
                alt=alt
                class="absolute z-30 top-[22%] left-1/2 -translate-x-1/2 -translate-y-1/2 lg:h-[314px] object-contain pointer-events-none"
            />
        }
    });

    view! {
        <div class="w-full max-w-sm">
            <div
                node_ref=card_ref
                data-card-id=id
                class="relative overflow-visible rounded-3xl cursor-pointer group"
                style=style
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                <div class="relative h-96 lg:h-[28rem] overflow-visible">
                    <img
                        src=background_image
                        alt="Game development background"
                        class="w-full h-full object-contain object-center"
                    />
                    {overlay}
                </div>
                <div class="absolute scale-80 lg:scale-90 lg:mb-7 xl:mb-2 bottom-0 left-0 right-0 p-8 lg:p-12 z-20">
                    <div class="text-white">
                        <h2 class="text-xl font-light mb-1 tracking-wide drop-shadow-lg">"Become a"</h2>
                        <h1 class="text-4xl font-clash font-bold uppercase leading-tight tracking-tight drop-shadow-lg">
                            {subtitle}
                        </h1>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// The overlay image is shown only when enabled and actually provided.
fn character_overlay(show_character: bool, character_image: Option<String>) -> Option<String> {
    character_image.filter(|src| show_character && !src.is_empty())
}
