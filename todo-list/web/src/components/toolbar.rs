use crate::state::use_dispatcher;
use dioxus::prelude::*;
use todo_list_core::{Filter, Intent};

/// Search box, the exclusive status filters and the theme toggle.
#[component]
pub fn Toolbar() -> Element {
    let dispatcher = use_dispatcher();
    let (active, search, theme) = {
        let controller = dispatcher.read();
        (
            controller.filter(),
            controller.search().to_string(),
            controller.theme(),
        )
    };

    rsx! {
        div { class: "toolbar",
            div { class: "search-box",
                i { class: "fas fa-search" }
                input {
                    id: "search-input",
                    r#type: "text",
                    placeholder: "Search tasks...",
                    value: "{search}",
                    oninput: move |evt| {
                        dispatcher.send(Intent::Search(evt.value()));
                    },
                }
            }
            div { class: "filters",
                {Filter::ALL.into_iter().map(|filter| {
                    let class = if filter == active { "filter-btn active" } else { "filter-btn" };
                    rsx! {
                        button {
                            key: "{filter}",
                            class,
                            "data-filter": filter.as_str(),
                            onclick: move |_| {
                                dispatcher.send(Intent::SetFilter(filter));
                            },
                            "{filter.label()}"
                        }
                    }
                })}
            }
            button {
                id: "theme-toggle",
                title: "Toggle theme",
                onclick: move |_| {
                    dispatcher.send(Intent::ToggleTheme);
                },
                i { class: "fas {theme.icon()}" }
            }
        }
    }
}
