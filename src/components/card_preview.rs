//! Live card preview.

use cardforge_core::PreviewFragment;
use dioxus::prelude::*;

/// Renders a preview fragment. The whole subtree is rebuilt from the
/// fragment, so nothing from an earlier render lingers.
#[component]
pub fn CardPreview(fragment: PreviewFragment) -> Element {
    rsx! {
        div { id: "cardPreview", class: "card-preview",
            for image in fragment.images.iter() {
                img {
                    key: "{image.field}",
                    class: "card-preview__image",
                    src: "{image.data_url}",
                    alt: "{image.field}",
                    style: "max-width: 100%; height: auto;",
                }
            }
            h2 { class: "card-preview__name", "{fragment.heading}" }
            for paragraph in fragment.paragraphs.iter() {
                p { key: "{paragraph.field}", class: "card-preview__line", "{paragraph.text}" }
            }
        }
    }
}
