//! Header card component

use dioxus::prelude::*;

use crate::state::AppState;

/// Title card with the note count and any storage warning
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let colors = state.theme.palette();
    let count = state.store.read().len();
    let warning = (state.storage_warning)();

    let subtitle = match count {
        0 => "Markdown notes, saved locally".to_string(),
        1 => "1 note".to_string(),
        n => format!("{n} notes"),
    };

    rsx! {
        div {
            class: "header-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                padding: 12px 16px;
                border-radius: 12px;
                border: 1px solid {colors.border};
                background: {colors.bg_card};
            ",

            div {
                style: "font-size: 16px; font-weight: 600;",
                "Marknote"
            }

            div {
                style: "font-size: 12px; color: {colors.text_secondary};",
                "{subtitle}"
            }

            if let Some(message) = warning {
                div {
                    class: "storage-warning",
                    style: "font-size: 12px; color: {colors.warning};",
                    "{message}"
                }
            }
        }
    }
}
