use crate::components::{ConfirmModal, EditModal, TaskForm, TaskList, ToastView, Toolbar};
use crate::state::use_dispatcher;
use dioxus::prelude::*;

/// The whole to-do page. The theme class sits on the outermost element so the
/// dark palette reaches every child.
#[component]
pub fn TodoBoard() -> Element {
    let dispatcher = use_dispatcher();
    let theme = dispatcher.read().theme();

    rsx! {
        div { class: "app {theme.root_class()}",
            main { class: "container",
                header { class: "app-header",
                    h1 { "To-Do List" }
                }
                TaskForm {}
                Toolbar {}
                TaskList {}
            }
            EditModal {}
            ConfirmModal {}
            ToastView {}
        }
    }
}
