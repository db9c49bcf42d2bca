//! Public gallery page with the picture grid.

use leptos::prelude::*;

/// Gallery page — fetches the picture list on mount and renders a grid.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let pictures = LocalResource::new(|| crate::net::api::fetch_pictures());

    view! {
        <div class="gallery-page">
            <h1>"Pictures"</h1>
            <Suspense fallback=move || view! { <p>"Loading pictures..."</p> }>
                {move || {
                    pictures
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="gallery-page__empty">"No pictures yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="gallery-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|picture| {
                                                view! {
                                                    <figure class="gallery-page__item">
                                                        <img src=picture.url alt=picture.name.clone()/>
                                                        <figcaption>{picture.name}</figcaption>
                                                    </figure>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
