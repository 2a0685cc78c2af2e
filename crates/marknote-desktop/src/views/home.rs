//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{Header, NoteEditor, NoteList};

/// Home view component - header, notes, then the input field
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "
                display: flex;
                justify-content: center;
                padding: 24px 16px 40px 16px;
                box-sizing: border-box;
            ",

            div {
                class: "main-content",
                style: "
                    width: 100%;
                    max-width: 880px;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                ",

                Header {}
                NoteList {}
                NoteEditor {}
            }
        }
    }
}
