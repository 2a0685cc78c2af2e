//! Note input component

use dioxus::prelude::*;

use marknote_core::SubmitAction;

use crate::state::AppState;

/// Markdown textarea bound to the draft, with the submit and cancel buttons
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = state.theme.palette();

    let store = state.store.read();
    let draft = store.draft().to_string();
    let action = store.submit_action();
    let save_error = store.last_save_error().map(ToString::to_string);
    drop(store);

    let submit_color = match action {
        SubmitAction::Create => colors.primary,
        SubmitAction::Update => colors.warning,
    };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape && action == SubmitAction::Update {
            state.cancel_edit();
        }
        // Ctrl/Cmd+Enter to submit
        if evt.key() == Key::Enter && (evt.modifiers().meta() || evt.modifiers().ctrl()) {
            evt.prevent_default();
            state.submit();
        }
    };

    rsx! {
        div {
            class: "note-editor",
            style: "display: flex; flex-direction: column; gap: 4px;",

            label {
                style: "font-size: 12px; color: {colors.text_secondary};",
                "Note"
            }

            textarea {
                class: "editor-textarea",
                style: "
                    width: 100%;
                    min-height: 120px;
                    padding: 12px;
                    border: 1px solid {colors.border};
                    border-radius: 12px;
                    font-size: 14px;
                    font-family: inherit;
                    resize: vertical;
                    outline: none;
                    box-sizing: border-box;
                    background: {colors.bg_input};
                    color: {colors.text_primary};
                ",
                value: "{draft}",
                placeholder: "Write...",
                oninput: move |evt| state.set_draft(evt.value()),
                onkeydown: handle_keydown,
            }

            div {
                style: "font-size: 12px; color: {colors.text_secondary};",
                "You can use markdown syntax to make rich edits."
            }

            if let Some(message) = save_error {
                div {
                    class: "save-error",
                    style: "
                        padding: 8px 12px;
                        border-radius: 8px;
                        font-size: 12px;
                        color: {colors.danger};
                        background: {colors.danger_soft};
                    ",
                    "Could not save notes: {message}"
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 4px;",

                if action == SubmitAction::Update {
                    button {
                        style: "
                            padding: 6px 14px;
                            border: 1px solid {colors.border};
                            border-radius: 8px;
                            cursor: pointer;
                            background: transparent;
                            color: {colors.text_primary};
                        ",
                        onclick: move |_| state.cancel_edit(),
                        "Cancel"
                    }
                }

                button {
                    style: "
                        padding: 6px 14px;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                        background: {submit_color};
                        color: {colors.button_text};
                    ",
                    onclick: move |_| state.submit(),
                    "{action.label()}"
                }
            }
        }
    }
}
