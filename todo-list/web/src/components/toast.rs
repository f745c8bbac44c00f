use crate::state::use_dispatcher;
use dioxus::prelude::*;

/// Notification area. The dispatcher clears the toast once its timer fires.
#[component]
pub fn ToastView() -> Element {
    let dispatcher = use_dispatcher();
    let toast = dispatcher.read().toast().cloned();

    match toast {
        Some(toast) => rsx! {
            div { id: "toast", class: "toast show {toast.kind.as_str()}", "{toast.message}" }
        },
        None => rsx! {
            div { id: "toast", class: "toast" }
        },
    }
}
