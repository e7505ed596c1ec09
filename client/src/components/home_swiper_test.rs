use super::*;

#[test]
fn doubled_slides_repeat_list_once_and_flag_copy() {
    let slides = doubled_slides(&HOME_SWIPER_IMAGES);
    assert_eq!(slides.len(), HOME_SWIPER_IMAGES.len() * 2);
    let (originals, copies) = slides.split_at(HOME_SWIPER_IMAGES.len());
    assert!(originals.iter().all(|(duplicate, _)| !duplicate));
    assert!(copies.iter().all(|(duplicate, _)| *duplicate));
    assert_eq!(originals[0].1, copies[0].1);
}

#[test]
fn track_style_combines_gap_transform_and_transition() {
    assert_eq!(
        track_style(1, 2, true),
        "gap: 28px; transform: translateX(calc(-1 * ((100% + 28px) / 2))); transition: transform 700ms ease;"
    );
    assert!(track_style(0, 2, false).ends_with("transition: none;"));
}
