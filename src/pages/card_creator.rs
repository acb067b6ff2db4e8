//! Card creator page.
//!
//! Form on one side, live preview on the other. Every input event replaces
//! the form snapshot; the preview re-renders from it and the resolved image
//! slots. Submitting posts the snapshot and shows the generated card URL.

use std::collections::BTreeMap;

use cardforge_core::images::read_pending;
use cardforge_core::{
    render_preview, FormSnapshot, ImageField, ImageSlots, SelectedFile, SubmissionOutcome,
    SubmissionState, TextField,
};
use dioxus::prelude::*;

use crate::components::{CardForm, CardPreview, GeneratedUrl};
use crate::context::{use_card_client, use_card_config, use_preview_positioning};

/// Bring the preview wrapper into view after a card is created.
const SCROLL_TO_PREVIEW: &str =
    r#"document.getElementById("previewWrapper")?.scrollIntoView({ behavior: "smooth" });"#;

#[component]
pub fn CardCreator() -> Element {
    let config = use_card_config();
    let client = use_card_client();
    let positioning = use_preview_positioning(config.breakpoint);

    let mut snapshot = use_signal(FormSnapshot::new);
    let mut images = use_signal(ImageSlots::new);
    let mut image_errors = use_signal(BTreeMap::<ImageField, String>::new);
    let mut submission = use_signal(SubmissionState::default);

    let on_text = move |(field, value): (TextField, String)| {
        snapshot.write().set_text(field, value);
    };

    let on_footer_credit = move |enabled: bool| {
        snapshot.write().footer_credit = enabled;
    };

    // Read every newly selected file, then swap the results in together.
    let on_image = move |(field, file): (ImageField, Option<SelectedFile>)| {
        snapshot.write().set_image(field, file);
        image_errors.write().remove(&field);

        let current = snapshot.peek().clone();
        images.write().retain_selected(&current);
        let pending = images.peek().pending(&current);
        if pending.is_empty() {
            return;
        }

        spawn(async move {
            let reads = read_pending(pending).await;
            let latest = snapshot.peek().clone();
            let report = images.write().apply(&latest, reads);
            for (field, err) in report.failed {
                image_errors.write().insert(field, err.to_string());
            }
        });
    };

    let on_submit = move |_: ()| {
        if !submission.write().begin() {
            tracing::debug!("Submission already in flight, ignoring");
            return;
        }
        let current = snapshot.peek().clone();
        let client = client.clone();

        spawn(async move {
            let result = match client {
                Ok(client) => client.submit(&current).await,
                Err(reason) => {
                    submission.set(SubmissionState::Failed { reason });
                    return;
                }
            };
            if let Err(ref e) = result {
                tracing::error!("Card submission failed: {}", e);
            }
            let created = matches!(result, Ok(SubmissionOutcome::Created { .. }));
            submission.write().finish(result);

            if created {
                let _ = document::eval(SCROLL_TO_PREVIEW);
            }
        });
    };

    let fragment = render_preview(&snapshot.read(), &images.read());
    let wrapper_style = format!("position: {};", positioning().as_css());

    rsx! {
        main { class: "card-creator",
            section { class: "card-creator__form",
                h1 { class: "page-title", "Create Your Card" }
                CardForm {
                    snapshot: snapshot(),
                    image_errors: image_errors(),
                    submitting: submission.read().is_pending(),
                    on_text: on_text,
                    on_footer_credit: on_footer_credit,
                    on_image: on_image,
                    on_submit: on_submit,
                }
            }

            aside {
                id: "previewWrapper",
                class: "preview-wrapper",
                style: "{wrapper_style}",
                GeneratedUrl { state: submission() }
                CardPreview { fragment: fragment }
            }
        }
    }
}
