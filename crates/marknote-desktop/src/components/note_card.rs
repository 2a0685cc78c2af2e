//! Note card component

use dioxus::prelude::*;

use marknote_core::NoteId;

use crate::state::AppState;

/// One rendered note with its Edit and Delete buttons.
#[component]
pub fn NoteCard(
    id: NoteId,
    html: String,
    is_editing: bool,
    on_edit: EventHandler<NoteId>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = state.theme.palette();

    let border = if is_editing {
        colors.warning
    } else {
        colors.border
    };

    rsx! {
        div {
            class: if is_editing { "note-card editing" } else { "note-card" },
            style: "
                break-inside: avoid;
                margin-bottom: 8px;
                padding: 16px;
                display: flex;
                align-items: flex-start;
                justify-content: space-between;
                gap: 8px;
                border-radius: 12px;
                border: 1px solid {border};
                background: {colors.bg_card};
            ",

            div {
                class: "note-content",
                style: "overflow: auto; width: 100%; line-height: 1.5;",
                dangerous_inner_html: "{html}",
            }

            div {
                class: "note-actions",
                style: "display: flex; flex-direction: column; gap: 8px;",

                button {
                    title: "Edit",
                    style: "
                        padding: 4px 10px;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                        background: {colors.warning};
                        color: {colors.button_text};
                    ",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }

                button {
                    title: "Delete",
                    style: "
                        padding: 4px 10px;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                        background: {colors.danger};
                        color: {colors.button_text};
                    ",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
