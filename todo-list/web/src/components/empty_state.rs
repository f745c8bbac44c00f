use dioxus::prelude::*;

/// Shown in place of the list when no task passes the filter and search
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        p { class: "empty-message", "No tasks found" }
    }
}
