use super::*;

#[test]
fn new_source_keeps_original_path() {
    let image = ImageSource::new("/images/brand/brand-01.svg");
    assert_eq!(image.src(), "/images/brand/brand-01.svg");
    assert!(!image.fallback_applied());
}

#[test]
fn first_error_swaps_to_fallback() {
    let mut image = ImageSource::new("/images/brand/missing.svg");
    assert!(image.on_error());
    assert_eq!(image.src(), FALLBACK_IMAGE_PATH);
    assert!(image.fallback_applied());
}

#[test]
fn second_error_leaves_fallback_in_place() {
    let mut image = ImageSource::new("/images/brand/missing.svg");
    image.on_error();
    let after_first = image.clone();
    assert!(!image.on_error());
    assert_eq!(image, after_first);
}
