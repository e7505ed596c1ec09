//! Autoplaying logo carousel for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tiles per view follow the viewport breakpoints. Autoplay runs as a local
//! task that stops when the component is dropped. Hovering pauses it without
//! disabling it, and leaving starts a fresh run that waits a full delay.

#[cfg(test)]
#[path = "home_swiper_test.rs"]
mod home_swiper_test;

use leptos::prelude::*;

use crate::content::home::{HOME_SWIPER_IMAGES, SlideImage};
use crate::util::breakpoints::slides_per_view;
use crate::util::carousel::{
    CarouselState, SPACE_BETWEEN_PX, is_own_transition, slide_width, track_transform, track_transition,
};
use crate::util::image_fallback::ImageSource;
use crate::util::viewport::use_window_width;

/// Looping carousel of partner logos.
#[component]
pub fn HomeSwiper() -> impl IntoView {
    let width = use_window_width();
    let carousel = RwSignal::new(CarouselState::new(HOME_SWIPER_IMAGES.len()));
    let per_view = move || slides_per_view(width.get());

    #[cfg(feature = "hydrate")]
    let autoplay_alive = {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        spawn_autoplay(carousel, alive.clone());
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
        alive
    };

    let on_pointer_leave = move |_: leptos::ev::MouseEvent| {
        let resumed = carousel.try_update(|c| c.set_paused(false)).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        if resumed {
            spawn_autoplay(carousel, autoplay_alive.clone());
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = resumed;
    };

    let track_css = move || {
        let state = carousel.get();
        track_style(state.index(), per_view(), state.animate())
    };
    let slot_style = move || format!("flex: 0 0 {};", slide_width(per_view()));

    let slides = doubled_slides(&HOME_SWIPER_IMAGES)
        .into_iter()
        .map(|(duplicate, image)| {
            view! {
                <div class="flex justify-center" style=slot_style aria-hidden=duplicate.then_some("true")>
                    <LogoTile image=image/>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="mx-auto w-[95vw] md:w-[90vw] min-[1680px]:w-[90%] overflow-hidden"
            on:mouseenter=move |_| {
                carousel.update(|c| {
                    c.set_paused(true);
                });
            }
            on:mouseleave=on_pointer_leave
        >
            <div
                class="flex"
                style=track_css
                on:transitionend=move |ev| {
                    if is_own_transition(ev.target(), ev.current_target()) {
                        carousel.update(CarouselState::settle);
                    }
                }
            >
                {slides}
            </div>
        </div>
    }
}

/// Run autoplay under the carousel's current generation until the component
/// is dropped or a pause/resume makes that generation stale.
#[cfg(feature = "hydrate")]
fn spawn_autoplay(carousel: RwSignal<CarouselState>, alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    use std::sync::atomic::Ordering;

    use crate::util::carousel::autoplay_wait_ms;

    let Some(generation) = carousel.try_with_untracked(CarouselState::generation) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let mut advances = 0;
        loop {
            let wait = autoplay_wait_ms(advances);
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(wait))).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            match carousel.try_update(|c| c.tick(generation)) {
                Some(true) => advances += 1,
                Some(false) | None => break,
            }
        }
    });
}

/// One logo tile with a one-shot fallback image.
#[component]
fn LogoTile(image: SlideImage) -> impl IntoView {
    let source = RwSignal::new(ImageSource::new(image.path));

    view! {
        <div class="w-20 h-20 sm:w-24 sm:h-24 md:w-28 md:h-28 flex items-center justify-center rounded-2xl shadow-theme-xs bg-[#EAF2FF]">
            <img
                src=move || source.with(|s| s.src().to_owned())
                alt=format!("slide-{}", image.id)
                class="w-15 h-10 sm:w-16 sm:h-16 object-contain"
                loading="lazy"
                on:error=move |_| {
                    source.update(|s| {
                        s.on_error();
                    });
                }
            />
        </div>
    }
}

fn track_style(index: usize, per_view: usize, animate: bool) -> String {
    format!(
        "gap: {SPACE_BETWEEN_PX}px; transform: {}; transition: {};",
        track_transform(index, per_view),
        track_transition(animate)
    )
}

/// The slide list followed by a copy of itself, flagged as duplicates.
fn doubled_slides(images: &[SlideImage]) -> Vec<(bool, SlideImage)> {
    images
        .iter()
        .map(|image| (false, *image))
        .chain(images.iter().map(|image| (true, *image)))
        .collect()
}
