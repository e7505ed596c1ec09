//! Landing page content: promo cards and carousel logos.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::util::card_motion::Tilt;

/// A logo shown in the landing carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideImage {
    pub id: u32,
    pub path: &'static str,
}

pub const HOME_SWIPER_IMAGES: [SlideImage; 12] = [
    SlideImage { id: 1, path: "/images/brand/brand-01.svg" },
    SlideImage { id: 2, path: "/images/brand/brand-02.svg" },
    SlideImage { id: 3, path: "/images/brand/brand-03.svg" },
    SlideImage { id: 4, path: "/images/brand/brand-04.svg" },
    SlideImage { id: 5, path: "/images/brand/brand-05.svg" },
    SlideImage { id: 6, path: "/images/brand/brand-06.svg" },
    SlideImage { id: 7, path: "/images/brand/brand-07.svg" },
    SlideImage { id: 8, path: "/images/brand/brand-08.svg" },
    SlideImage { id: 9, path: "/images/brand/brand-09.svg" },
    SlideImage { id: 10, path: "/images/brand/brand-10.svg" },
    SlideImage { id: 11, path: "/images/brand/brand-11.svg" },
    SlideImage { id: 12, path: "/images/brand/brand-12.svg" },
];

/// A promo card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeCardContent {
    pub id: &'static str,
    pub background_image: &'static str,
    pub character_image: Option<&'static str>,
    pub alt: &'static str,
    pub subtitle: &'static str,
    pub tilt: Tilt,
}

pub const HOME_CARDS: [HomeCardContent; 3] = [
    HomeCardContent {
        id: "game-developer",
        background_image: "/images/home/card-bg-blue.png",
        character_image: Some("/images/home/character-gamer.png"),
        alt: "Game developer character",
        subtitle: "Game Developer",
        tilt: Tilt::Left,
    },
    HomeCardContent {
        id: "web-developer",
        background_image: "/images/home/card-bg-purple.png",
        character_image: Some("/images/home/character-coder.png"),
        alt: "Web developer character",
        subtitle: "Web Developer",
        tilt: Tilt::None,
    },
    HomeCardContent {
        id: "3d-artist",
        background_image: "/images/home/card-bg-orange.png",
        character_image: None,
        alt: "3D artist character",
        subtitle: "3D Artist",
        tilt: Tilt::Right,
    },
];
