//! Thumbnail grid feeding the lightbox.

use leptos::prelude::*;

use crate::dispatch::Dispatcher;
use crate::state::lightbox::LightboxEvent;
use crate::state::site::SiteEvent;

#[derive(Clone, Copy, Debug)]
pub struct GalleryItem {
    /// Full-size image shown in the lightbox (`data-src`).
    pub src: &'static str,
    pub thumb: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { src: "img/orion-full.jpg", thumb: "img/orion-thumb.jpg", alt: "Orion nebula brand campaign" },
    GalleryItem { src: "img/lyra-full.jpg", thumb: "img/lyra-thumb.jpg", alt: "Lyra mobile app screens" },
    GalleryItem { src: "img/vega-full.jpg", thumb: "img/vega-thumb.jpg", alt: "Vega conference identity" },
    GalleryItem { src: "img/draco-full.jpg", thumb: "img/draco-thumb.jpg", alt: "" },
    GalleryItem { src: "img/cygnus-full.jpg", thumb: "img/cygnus-thumb.jpg", alt: "Cygnus product photography" },
    GalleryItem { src: "img/altair-full.jpg", thumb: "img/altair-thumb.jpg", alt: "Altair packaging system" },
];

#[component]
pub fn Gallery() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();

    view! {
        <div class="gallery">
            {GALLERY
                .iter()
                .map(|item| {
                    let on_click = move |_| {
                        dispatcher.send(SiteEvent::Lightbox(LightboxEvent::ItemClicked {
                            src: item.src.to_owned(),
                            alt: item.alt.to_owned(),
                        }));
                    };
                    view! {
                        <button type="button" class="gallery-item" data-src={item.src} on:click=on_click>
                            <img src={item.thumb} alt={item.alt} loading="lazy"/>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
