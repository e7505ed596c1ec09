use std::collections::HashSet;

use super::*;

#[test]
fn swiper_image_ids_are_unique() {
    let ids: HashSet<_> = HOME_SWIPER_IMAGES.iter().map(|img| img.id).collect();
    assert_eq!(ids.len(), HOME_SWIPER_IMAGES.len());
}

#[test]
fn swiper_fills_widest_breakpoint() {
    let widest = crate::util::breakpoints::slides_per_view(f64::MAX);
    assert!(HOME_SWIPER_IMAGES.len() >= widest);
}

#[test]
fn home_card_ids_are_unique() {
    let ids: HashSet<_> = HOME_CARDS.iter().map(|card| card.id).collect();
    assert_eq!(ids.len(), HOME_CARDS.len());
}
