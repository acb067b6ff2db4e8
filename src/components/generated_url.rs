//! Generated URL panel.
//!
//! Shows what became of the last submission: the shareable link with copy
//! and QR code once a card is created, field errors when the server
//! rejects it, and the failure reason when the request itself fails.

use base64::Engine;
use cardforge_core::SubmissionState;
use dioxus::prelude::*;

/// Generate a QR code data URL for `data`.
///
/// Returns None if QR code generation fails.
fn generate_qr_data_url(data: &str) -> Option<String> {
    use qrcode::render::svg;
    use qrcode::QrCode;

    let code = QrCode::new(data.as_bytes()).ok()?;

    // SVG keeps the modules crisp at any size
    let svg_string = code
        .render()
        .min_dimensions(160, 160)
        .dark_color(svg::Color("#1b1b1f"))
        .light_color(svg::Color("#ffffff"))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(svg_string);
    Some(format!("data:image/svg+xml;base64,{}", encoded))
}

#[component]
pub fn GeneratedUrl(state: SubmissionState) -> Element {
    match state {
        SubmissionState::Idle => rsx! {
            div { id: "generatedUrl", class: "generated-url", style: "display: none;" }
        },
        SubmissionState::Submitting => rsx! {
            div { class: "generated-url generated-url--pending", "Creating your card..." }
        },
        SubmissionState::LinkDisplayed { url } => rsx! {
            CardLink { url }
        },
        SubmissionState::Rejected { errors } => rsx! {
            div { class: "generated-url generated-url--error",
                p { "The server did not accept the card." }
                if !errors.is_empty() {
                    ul {
                        for (field, messages) in errors {
                            for message in messages {
                                li { "{field}: {message}" }
                            }
                        }
                    }
                }
            }
        },
        SubmissionState::Failed { reason } => rsx! {
            div { class: "generated-url generated-url--error",
                p { "Could not create the card." }
                p { class: "generated-url__reason", "{reason}" }
            }
        },
    }
}

/// Visible link panel for a created card.
#[component]
fn CardLink(url: String) -> Element {
    let mut copied = use_signal(|| false);
    let qr = generate_qr_data_url(&url);

    let link = url.clone();
    let copy_to_clipboard = move |_| {
        let text = link.clone();
        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(text) {
                        tracing::warn!("Clipboard write failed: {}", e);
                        return;
                    }
                    copied.set(true);
                    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                    copied.set(false);
                }
                Err(e) => {
                    tracing::warn!("Clipboard not available: {}", e);
                }
            }
        });
    };

    rsx! {
        div { id: "generatedUrl", class: "generated-url", style: "display: block;",
            p { "Your card is live:" }
            a {
                id: "cardLink",
                class: "generated-url__link",
                href: "{url}",
                target: "_blank",
                "{url}"
            }
            div { class: "generated-url__actions",
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: copy_to_clipboard,
                    if copied() { "Copied" } else { "Copy link" }
                }
            }
            if let Some(src) = qr {
                img { class: "generated-url__qr", src: "{src}", alt: "QR code for {url}" }
            }
        }
    }
}
