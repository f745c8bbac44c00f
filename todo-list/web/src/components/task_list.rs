use super::EmptyState;
use crate::state::{Dispatcher, use_dispatcher};
use dioxus::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;
use todo_list_core::{Intent, ItemBounds, Task, TaskId};

/// The filtered, searched list with drag-and-drop reordering.
///
/// Mounted rows are remembered by id so a drag-over can measure them; the
/// measured bounds go to the controller, which owns the display order.
#[component]
pub fn TaskList() -> Element {
    let dispatcher = use_dispatcher();
    let rows = use_signal(HashMap::<TaskId, Rc<MountedData>>::new);
    let (tasks, dragging) = {
        let controller = dispatcher.read();
        let tasks: Vec<Task> = controller.visible_tasks().into_iter().cloned().collect();
        (tasks, controller.dragging())
    };

    if tasks.is_empty() {
        return rsx! {
            ul { id: "task-list", EmptyState {} }
        };
    }

    let handle_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        if dispatcher.read().dragging().is_none() {
            return;
        }
        let pointer_y = evt.client_coordinates().y;
        spawn(async move {
            let bounds = measure_rows(dispatcher, rows).await;
            dispatcher.send(Intent::DragOver { pointer_y, bounds });
        });
    };

    rsx! {
        ul { id: "task-list", ondragover: handle_drag_over,
            {tasks.into_iter().enumerate().map(|(index, task)| rsx! {
                TaskItem {
                    key: "{task.id}",
                    dragging: dragging == Some(task.id),
                    index,
                    task,
                    rows,
                }
            })}
        }
    }
}

/// Reads the current client rect of every displayed row, top to bottom.
async fn measure_rows(
    dispatcher: Dispatcher,
    rows: Signal<HashMap<TaskId, Rc<MountedData>>>,
) -> Vec<ItemBounds> {
    let order = dispatcher.read().display_order();
    let mut rows = rows;
    retain_visible(&mut rows.write(), &order);
    let mounted = rows.read().clone();
    let mut bounds = Vec::with_capacity(order.len());
    for id in order {
        let Some(row) = mounted.get(&id) else {
            continue;
        };
        if let Ok(rect) = row.get_client_rect().await {
            bounds.push(ItemBounds::new(id, rect.origin.y, rect.size.height));
        }
    }
    bounds
}

/// Forgets rows that are no longer displayed.
fn retain_visible<V>(rows: &mut HashMap<TaskId, V>, order: &[TaskId]) {
    rows.retain(|id, _| order.contains(id));
}

#[component]
fn TaskItem(
    task: Task,
    index: usize,
    dragging: bool,
    rows: Signal<HashMap<TaskId, Rc<MountedData>>>,
) -> Element {
    let dispatcher = use_dispatcher();
    let id = task.id;
    let completed = if task.completed { "completed" } else { "" };
    let marker = if dragging { "dragging" } else { "" };
    let delay = index as f64 * 0.1;
    let mut rows = rows;

    rsx! {
        li {
            class: "task-item {completed} {task.priority} {marker}",
            draggable: "true",
            "data-id": "{id}",
            style: "animation-delay: {delay}s",
            onmounted: move |evt: MountedEvent| {
                rows.write().insert(id, evt.data());
            },
            ondragstart: move |_| dispatcher.start_drag(id),
            ondragend: move |_| {
                dispatcher.send(Intent::DragEnd);
            },

            input {
                r#type: "checkbox",
                class: "task-checkbox",
                checked: task.completed,
                onchange: move |_| {
                    dispatcher.send(Intent::Toggle(id));
                },
            }
            span { class: "priority {task.priority}", "{task.priority}" }
            span { class: "task-text", "{task.text}" }
            span { class: "task-due", "{task.due_date}" }
            div { class: "task-actions",
                button {
                    class: "edit-btn",
                    title: "Edit",
                    onclick: move |_| {
                        dispatcher.send(Intent::BeginEdit(id));
                    },
                    i { class: "fas fa-edit" }
                }
                button {
                    class: "delete-btn",
                    title: "Delete",
                    onclick: move |_| {
                        dispatcher.send(Intent::RequestDelete(id));
                    },
                    i { class: "fas fa-trash" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_visible_drops_hidden_rows() {
        let mut rows: HashMap<TaskId, &str> =
            HashMap::from([(1, "first"), (2, "second"), (3, "third")]);

        retain_visible(&mut rows, &[3, 1]);

        let mut ids: Vec<TaskId> = rows.keys().copied().collect();
        ids.sort();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn retain_visible_clears_rows_when_nothing_is_displayed() {
        let mut rows: HashMap<TaskId, &str> = HashMap::from([(1, "first")]);

        retain_visible(&mut rows, &[]);

        assert!(rows.is_empty());
    }
}
