use crate::state::use_dispatcher;
use dioxus::prelude::*;
use todo_list_core::{Intent, Priority};

/// Inputs for a new task. Text and due date are cleared once the task is
/// added; the chosen priority sticks.
#[component]
pub fn TaskForm() -> Element {
    let dispatcher = use_dispatcher();
    let mut text = use_signal(String::new);
    let mut due_date = use_signal(String::new);
    let mut priority = use_signal(Priority::default);

    let mut submit = move || {
        let added = dispatcher.send_change(Intent::Add {
            text: text(),
            due_date: due_date(),
            priority: priority(),
        });
        if added {
            text.set(String::new());
            due_date.set(String::new());
        }
    };

    rsx! {
        div { class: "task-form",
            input {
                id: "task-input",
                r#type: "text",
                placeholder: "Add a new task...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            input {
                id: "due-date",
                r#type: "date",
                value: "{due_date}",
                oninput: move |evt| due_date.set(evt.value()),
            }
            select {
                id: "priority",
                value: "{priority}",
                onchange: move |evt| {
                    if let Ok(selected) = evt.value().parse() {
                        priority.set(selected);
                    }
                },
                for level in Priority::ALL {
                    option {
                        value: level.as_str(),
                        selected: level == priority(),
                        "{level}"
                    }
                }
            }
            button { id: "add-task-btn", onclick: move |_| submit(),
                i { class: "fas fa-plus" }
                " Add"
            }
        }
    }
}
