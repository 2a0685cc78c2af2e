//! Note list component

use dioxus::prelude::*;

use super::NoteCard;
use crate::state::AppState;

/// All notes in insertion order, or the empty-state chip
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let colors = state.theme.palette();

    let store = state.store.read();
    let notes = store.notes().to_vec();
    let editing = store.editing().target();
    drop(store);
    let is_empty = notes.is_empty();

    rsx! {
        div {
            class: "note-list",
            style: "
                column-count: 2;
                column-gap: 8px;
            ",

            for note in notes {
                NoteCard {
                    key: "{note.id}",
                    id: note.id,
                    html: note.rendered_content.clone(),
                    is_editing: editing == Some(note.id),
                    on_edit: move |id| state.begin_edit(id),
                    on_delete: move |id| state.delete(id),
                }
            }
        }

        if is_empty {
            div {
                class: "empty-chip",
                style: "
                    align-self: flex-start;
                    padding: 4px 12px;
                    border-radius: 999px;
                    font-size: 13px;
                    color: {colors.danger};
                    background: {colors.danger_soft};
                ",
                "No note is created."
            }
        }
    }
}
