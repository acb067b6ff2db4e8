//! Shared context for Cardforge components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_config);
//!
//! // In child components
//! let config = use_card_config();
//! let positioning = use_preview_positioning(config.breakpoint);
//! ```

use cardforge_core::{CardClient, CardConfig, Positioning};
use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;

/// Get the configuration resolved at startup.
pub fn get_config() -> CardConfig {
    crate::get_config()
}

/// Hook to access the configuration from context.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook returning a card client built once per component.
///
/// The error is kept as text so the result can live in a hook.
pub fn use_card_client() -> Result<CardClient, String> {
    let config = use_card_config();
    use_hook(move || CardClient::new(&config).map_err(|e| e.to_string()))
}

/// Hook tracking the preview panel positioning.
///
/// Evaluated once from the current window size, then again on every
/// window resize.
pub fn use_preview_positioning(breakpoint: f64) -> Signal<Positioning> {
    let window = use_window();
    let mut positioning = use_signal(move || {
        let scale = window.window.scale_factor();
        let width = window.window.inner_size().to_logical::<f64>(scale).width;
        Positioning::for_width(width, breakpoint)
    });

    let window = use_window();
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let width = size.to_logical::<f64>(window.window.scale_factor()).width;
            let next = Positioning::for_width(width, breakpoint);
            if *positioning.peek() != next {
                tracing::debug!(width, position = next.as_css(), "preview positioning changed");
                positioning.set(next);
            }
        }
    });

    positioning
}
