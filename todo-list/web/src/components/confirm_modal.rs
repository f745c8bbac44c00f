use crate::state::use_dispatcher;
use dioxus::prelude::*;
use todo_list_core::{Dialog, Intent};

/// Asks before a task is deleted. Nothing is removed until Confirm.
#[component]
pub fn ConfirmModal() -> Element {
    let dispatcher = use_dispatcher();
    if !matches!(dispatcher.read().dialog(), Dialog::ConfirmDelete { .. }) {
        return rsx! {};
    }

    rsx! {
        div { id: "modal", class: "modal active",
            div { class: "modal-content",
                h2 { "Delete task?" }
                p { "This task will be removed permanently." }

                div { class: "modal-actions",
                    button {
                        id: "confirm-delete",
                        class: "btn-danger",
                        onclick: move |_| {
                            dispatcher.send(Intent::ConfirmDelete);
                        },
                        "Delete"
                    }
                    button {
                        id: "cancel-delete",
                        class: "btn-secondary",
                        onclick: move |_| {
                            dispatcher.send(Intent::CancelDelete);
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}
