//! Card form.
//!
//! Emits one event per field change; the page owns the snapshot.

use std::collections::BTreeMap;

use cardforge_core::{FormSnapshot, ImageField, SelectedFile, TextField};
use dioxus::prelude::*;

use crate::components::images::ImagePicker;
use crate::components::VcardExport;

/// Fields shown in the main section, in form order.
const PRIMARY_FIELDS: [TextField; 7] = [
    TextField::Fname,
    TextField::Lname,
    TextField::Pronouns,
    TextField::Title,
    TextField::Biz,
    TextField::Addr,
    TextField::Desc,
];

/// Fields folded into the "advanced" section.
const ADVANCED_FIELDS: [TextField; 5] = [
    TextField::Key,
    TextField::Tracker,
    TextField::FontLink,
    TextField::FontCss,
    TextField::HostedUrl,
];

#[component]
pub fn CardForm(
    /// Current form values
    snapshot: FormSnapshot,
    /// Image read failures by field
    image_errors: BTreeMap<ImageField, String>,
    /// A submission is in flight
    submitting: bool,
    on_text: EventHandler<(TextField, String)>,
    on_footer_credit: EventHandler<bool>,
    on_image: EventHandler<(ImageField, Option<SelectedFile>)>,
    on_submit: EventHandler<()>,
) -> Element {
    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        on_submit.call(());
    };

    rsx! {
        form {
            id: "cardForm",
            class: "card-form",
            onsubmit: handle_submit,

            for field in PRIMARY_FIELDS {
                TextInput {
                    key: "{field}",
                    field,
                    value: snapshot.text(field).to_string(),
                    on_text,
                }
            }

            div { class: "card-form__images",
                for field in ImageField::ALL {
                    ImagePicker {
                        key: "{field}",
                        field,
                        selected: snapshot.image(field).cloned(),
                        error: image_errors.get(&field).cloned(),
                        on_change: move |file| on_image.call((field, file)),
                    }
                }
            }

            details { class: "card-form__advanced",
                summary { "Advanced" }
                for field in ADVANCED_FIELDS {
                    TextInput {
                        key: "{field}",
                        field,
                        value: snapshot.text(field).to_string(),
                        on_text,
                    }
                }
                label { class: "checkbox-field",
                    input {
                        r#type: "checkbox",
                        name: "footer_credit",
                        checked: snapshot.footer_credit,
                        onchange: move |e: FormEvent| on_footer_credit.call(e.checked()),
                    }
                    "Enable Footer Credit"
                }
            }

            div { class: "card-form__actions",
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: submitting,
                    if submitting { "Creating..." } else { "Create Your Own" }
                }
                VcardExport { snapshot: snapshot.clone() }
            }
        }
    }
}

/// Labelled input or textarea for one text field.
#[component]
fn TextInput(field: TextField, value: String, on_text: EventHandler<(TextField, String)>) -> Element {
    let id = format!("field-{}", field.name());

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", {field.label()} }
            if field.is_multiline() {
                textarea {
                    id: "{id}",
                    name: field.name(),
                    class: "input-field textarea",
                    rows: "3",
                    value: "{value}",
                    oninput: move |e| on_text.call((field, e.value())),
                }
            } else {
                input {
                    id: "{id}",
                    name: field.name(),
                    class: "input-field",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |e| on_text.call((field, e.value())),
                }
            }
        }
    }
}
