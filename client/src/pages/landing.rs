//! Landing page: promo cards above the partner logo carousel.

use leptos::prelude::*;

use crate::components::home_card::HomeCard;
use crate::components::home_swiper::HomeSwiper;
use crate::content::home::HOME_CARDS;

#[component]
pub fn LandingPage() -> impl IntoView {
    let cards = HOME_CARDS
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            view! {
                <HomeCard
                    id=card.id
                    index=index
                    background_image=card.background_image
                    subtitle=card.subtitle
                    alt=card.alt
                    show_character=card.character_image.is_some()
                    character_image=card.character_image.map(str::to_owned)
                    tilt=card.tilt
                />
            }
        })
        .collect_view();

    view! {
        <main class="pt-24 pb-16 space-y-16">
            <section class="flex flex-col lg:flex-row items-center justify-center gap-10 px-6">
                {cards}
            </section>
            <section>
                <HomeSwiper/>
            </section>
        </main>
    }
}
