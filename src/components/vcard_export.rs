//! vCard export button.

use cardforge_core::{to_vcard, FormSnapshot, TextField};
use dioxus::prelude::*;
use rfd::FileDialog;

/// Suggested file name, e.g. `ada-lovelace.vcf`.
fn suggested_file_name(snapshot: &FormSnapshot) -> String {
    let stem = [TextField::Fname, TextField::Lname]
        .into_iter()
        .map(|f| snapshot.text(f).trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .replace(|c: char| !c.is_alphanumeric() && c != '-', "_");
    if stem.is_empty() {
        "business_card.vcf".to_string()
    } else {
        format!("{}.vcf", stem)
    }
}

/// Saves the current form as a vCard through a native save dialog.
#[component]
pub fn VcardExport(snapshot: FormSnapshot) -> Element {
    let mut status = use_signal(|| Option::<String>::None);

    let save = move |_| {
        let contents = to_vcard(&snapshot);
        let file_name = suggested_file_name(&snapshot);
        status.set(None);

        spawn(async move {
            let target = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("vCard", &["vcf"])
                    .set_file_name(file_name)
                    .save_file()
            })
            .await;

            match target {
                Ok(Some(path)) => match tokio::fs::write(&path, contents).await {
                    Ok(()) => {
                        tracing::info!(path = %path.display(), "vCard saved");
                        status.set(Some("vCard saved".to_string()));
                    }
                    Err(e) => {
                        tracing::error!("Failed to save vCard: {}", e);
                        status.set(Some(format!("Save failed: {}", e)));
                    }
                },
                Ok(None) => {}
                Err(e) => tracing::warn!("Save dialog error: {:?}", e),
            }
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "btn-secondary",
            onclick: save,
            "Save vCard"
        }
        if let Some(message) = status() {
            span { class: "vcard-export__status", "{message}" }
        }
    }
}
