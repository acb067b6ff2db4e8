//! Image Picker Component
//!
//! Native file picker for one of the card's image fields.

use cardforge_core::{ImageField, SelectedFile};
use dioxus::prelude::*;
use rfd::FileDialog;

/// Extensions offered in the picker
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "svg"];

/// Image field with pick and clear buttons
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImagePicker {
///         field: ImageField::Logo,
///         selected: None,
///         error: None,
///         on_change: move |file| {
///             // Some(file) when picked, None when cleared
///         },
///     }
/// }
/// ```
#[component]
pub fn ImagePicker(
    field: ImageField,
    /// Currently selected file, if any
    selected: Option<SelectedFile>,
    /// Why the selected file has no preview
    error: Option<String>,
    on_change: EventHandler<Option<SelectedFile>>,
) -> Element {
    let mut picking = use_signal(|| false);

    let handle_pick = move |_| {
        picking.set(true);

        spawn(async move {
            // Blocking dialog, off the UI thread
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &IMAGE_EXTENSIONS)
                    .set_title(field.label())
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => {
                    tracing::debug!(%field, path = %path.display(), "image selected");
                    on_change.call(Some(SelectedFile::new(path)));
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::warn!("File picker error: {:?}", e);
                }
            }
            picking.set(false);
        });
    };

    let button_label = match (picking(), &selected) {
        (true, _) => "Choosing...".to_string(),
        (false, Some(file)) => file.file_name.clone(),
        (false, None) => "Choose file".to_string(),
    };

    rsx! {
        div { class: "image-picker",
            span { class: "input-label", {field.label()} }
            div { class: "image-picker__row",
                button {
                    r#type: "button",
                    name: field.name(),
                    class: "image-picker__btn",
                    disabled: picking(),
                    onclick: handle_pick,
                    "{button_label}"
                }
                if selected.is_some() {
                    button {
                        r#type: "button",
                        class: "image-picker__clear",
                        title: "Remove image",
                        onclick: move |_| on_change.call(None),
                        "✕"
                    }
                }
            }

            if let Some(err) = error {
                div { class: "image-picker__error",
                    "⚠️ {err}"
                }
            }
        }
    }
}
