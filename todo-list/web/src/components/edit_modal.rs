use crate::state::use_dispatcher;
use dioxus::prelude::*;
use todo_list_core::{Dialog, Intent};

/// Modal for replacing a task's text. A blank submission closes it without
/// changing the task.
#[component]
pub fn EditModal() -> Element {
    let dispatcher = use_dispatcher();
    let Dialog::Edit { draft, .. } = dispatcher.read().dialog().clone() else {
        return rsx! {};
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        dispatcher.send(Intent::SubmitEdit);
    };

    rsx! {
        div { class: "modal active", onclick: move |_| {
                dispatcher.send(Intent::CancelEdit);
            },

            div { class: "modal-content", onclick: move |evt| evt.stop_propagation(),
                h2 { "Edit task" }

                form { onsubmit: handle_submit,
                    input {
                        r#type: "text",
                        class: "edit-input",
                        value: "{draft}",
                        oninput: move |evt| {
                            dispatcher.send(Intent::UpdateDraft(evt.value()));
                        },
                        autofocus: true,
                    }

                    div { class: "modal-actions",
                        button { r#type: "submit", class: "btn-primary", "Save" }
                        button {
                            r#type: "button",
                            class: "btn-secondary",
                            onclick: move |_| {
                                dispatcher.send(Intent::CancelEdit);
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
