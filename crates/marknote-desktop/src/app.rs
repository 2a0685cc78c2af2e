//! Main application component

use dioxus::prelude::*;

use marknote_core::config::StorageConfig;

use crate::state::{open_desktop_store, AppState};
use crate::theme::ResolvedTheme;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(|| StorageConfig::resolve(None, None).map_err(|e| e.to_string()));

    let store_config = config.clone();
    let store = use_signal(move || open_desktop_store(store_config.as_ref().ok()));
    let storage_warning = use_signal(move || {
        config.err().map(|error| {
            tracing::error!("Failed to resolve storage location: {}", error);
            format!("Notes are kept in memory only: {error}")
        })
    });
    let theme = use_hook(ResolvedTheme::from_env);

    use_context_provider(|| AppState {
        store,
        storage_warning,
        theme,
    });

    let colors = theme.palette();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme.as_attr()}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_page};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
