use dioxus::prelude::*;

use crate::context::get_config;
use crate::pages::CardCreator;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the configuration context.
#[component]
pub fn App() -> Element {
    use_context_provider(get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        CardCreator {}
    }
}
