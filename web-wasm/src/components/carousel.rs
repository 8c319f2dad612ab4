//! バナーカルーセルコンポーネント

use leptos::prelude::*;
use photo_gallery_common::{Carousel, CAROUSEL_PHOTOS};

#[component]
pub fn FeaturedCarousel(carousel: RwSignal<Carousel>) -> impl IntoView {
    let slide = move || carousel.with(|c| c.current(&CAROUSEL_PHOTOS).copied());

    view! {
        <div class="carousel">
            {move || slide().map(|photo| view! {
                <div class="carousel-slide">
                    <img src=photo.image alt=photo.title />
                    <div class="caption">
                        <h2>{photo.title}</h2>
                        <p>{photo.description}</p>
                    </div>
                </div>
            })}

            <button
                class="carousel-nav prev"
                aria-label="上一張"
                on:click=move |_| carousel.update(|c| c.prev())
            >
                "‹"
            </button>
            <button
                class="carousel-nav next"
                aria-label="下一張"
                on:click=move |_| carousel.update(|c| c.next())
            >
                "›"
            </button>

            <div class="carousel-dots">
                {(0..CAROUSEL_PHOTOS.len())
                    .map(|index| view! {
                        <button
                            class="dot"
                            class:active=move || carousel.with(|c| c.index() == index)
                            on:click=move |_| carousel.update(|c| c.go_to(index))
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
