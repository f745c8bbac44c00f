//! Interaction state machine: turns user intents into store mutations and
//! keeps the UI-only state (filter, search term, theme, open dialog, toast,
//! drag) that the renderer reads back.

use crate::drag::{DragReorder, ItemBounds};
use crate::persistence::{StoreError, TaskPersistence};
use crate::store::TaskStore;
use crate::task::{Priority, Task, TaskId};
use crate::view::{Filter, visible_tasks};
use std::time::Duration;
use tracing::{debug, error};

/// How long a toast stays visible unless configured otherwise.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

pub const TASK_ADDED: &str = "Task added successfully!";
pub const TASK_UPDATED: &str = "Task updated!";
pub const TASK_DELETED: &str = "Task deleted!";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Transient notification. `seq` identifies it so a dismiss timer only
/// clears the toast it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Visual mode applied to the document root. Not persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on the root element.
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }

    /// Icon offered by the toggle: the mode you would switch to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

/// The modal currently shown, if any. Only one can be open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    Edit {
        id: TaskId,
        draft: String,
    },
    ConfirmDelete {
        id: TaskId,
    },
}

/// A discrete user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Add {
        text: String,
        due_date: String,
        priority: Priority,
    },
    SetFilter(Filter),
    Search(String),
    Toggle(TaskId),
    BeginEdit(TaskId),
    UpdateDraft(String),
    SubmitEdit,
    CancelEdit,
    RequestDelete(TaskId),
    ConfirmDelete,
    CancelDelete,
    ToggleTheme,
    DragStart(TaskId),
    /// Fired after the zero-delay yield that follows a drag start.
    DragMarked(TaskId),
    DragOver {
        pointer_y: f64,
        bounds: Vec<ItemBounds>,
    },
    DragEnd,
    DismissToast(u64),
}

#[derive(Debug)]
pub struct Controller<P> {
    store: TaskStore<P>,
    filter: Filter,
    search: String,
    theme: Theme,
    dialog: Dialog,
    drag: DragReorder,
    toast: Option<Toast>,
    toast_seq: u64,
}

impl<P: TaskPersistence> Controller<P> {
    pub fn new(store: TaskStore<P>) -> Self {
        Self {
            store,
            filter: Filter::default(),
            search: String::new(),
            theme: Theme::default(),
            dialog: Dialog::default(),
            drag: DragReorder::default(),
            toast: None,
            toast_seq: 0,
        }
    }

    pub fn load(persistence: P) -> Self {
        Self::new(TaskStore::load(persistence))
    }

    pub fn store(&self) -> &TaskStore<P> {
        &self.store
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dragging(&self) -> Option<TaskId> {
        self.drag.dragging()
    }

    /// The tasks to render for the current filter and search term.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible_tasks(self.store.tasks(), self.filter, &self.search)
    }

    /// Ids of the rendered tasks, top to bottom.
    pub fn display_order(&self) -> Vec<TaskId> {
        self.visible_tasks().iter().map(|task| task.id).collect()
    }

    /// Applies an intent. Returns the toast it raised, if any, so the caller
    /// can schedule its dismissal.
    pub fn handle(&mut self, intent: Intent) -> Option<Toast> {
        debug!(?intent, "Handling intent");
        match intent {
            Intent::Add {
                text,
                due_date,
                priority,
            } => {
                let added = settle(self.store.add(&text, &due_date, priority))?;
                added.map(|_| self.notify(TASK_ADDED, ToastKind::Success))
            }
            Intent::SetFilter(filter) => {
                self.filter = filter;
                None
            }
            Intent::Search(term) => {
                self.search = term;
                None
            }
            Intent::Toggle(id) => {
                let toggled = settle(self.store.toggle(id))?;
                toggled.map(|_| self.notify(TASK_UPDATED, ToastKind::Success))
            }
            Intent::BeginEdit(id) => {
                if let Some(task) = self.store.get(id) {
                    self.dialog = Dialog::Edit {
                        id,
                        draft: task.text.clone(),
                    };
                }
                None
            }
            Intent::UpdateDraft(text) => {
                if let Dialog::Edit { draft, .. } = &mut self.dialog {
                    *draft = text;
                }
                None
            }
            Intent::SubmitEdit => {
                let Dialog::Edit { id, draft } = std::mem::take(&mut self.dialog) else {
                    return None;
                };
                let edited = settle(self.store.edit(id, &draft))?;
                edited.then(|| self.notify(TASK_UPDATED, ToastKind::Success))
            }
            Intent::CancelEdit => {
                if matches!(self.dialog, Dialog::Edit { .. }) {
                    self.dialog = Dialog::Closed;
                }
                None
            }
            Intent::RequestDelete(id) => {
                if self.store.get(id).is_some() {
                    self.dialog = Dialog::ConfirmDelete { id };
                }
                None
            }
            Intent::ConfirmDelete => {
                let Dialog::ConfirmDelete { id } = std::mem::take(&mut self.dialog) else {
                    return None;
                };
                let removed = settle(self.store.remove(id))?;
                removed.map(|_| self.notify(TASK_DELETED, ToastKind::Error))
            }
            Intent::CancelDelete => {
                if matches!(self.dialog, Dialog::ConfirmDelete { .. }) {
                    self.dialog = Dialog::Closed;
                }
                None
            }
            Intent::ToggleTheme => {
                self.theme = self.theme.toggled();
                None
            }
            Intent::DragStart(id) => {
                self.drag.start(id);
                None
            }
            Intent::DragMarked(id) => {
                self.drag.mark(id);
                None
            }
            Intent::DragOver { pointer_y, bounds } => {
                let order = self.display_order();
                if let Some(reordered) = self.drag.over(&order, pointer_y, &bounds) {
                    settle(self.store.reorder(&reordered));
                }
                None
            }
            Intent::DragEnd => {
                self.drag.end();
                None
            }
            Intent::DismissToast(seq) => {
                if self.toast.as_ref().is_some_and(|toast| toast.seq == seq) {
                    self.toast = None;
                }
                None
            }
        }
    }

    fn notify(&mut self, message: &str, kind: ToastKind) -> Toast {
        self.toast_seq += 1;
        let toast = Toast {
            seq: self.toast_seq,
            message: message.to_string(),
            kind,
        };
        self.toast = Some(toast.clone());
        toast
    }
}

/// Logs a failed write. The in-memory list keeps the mutation either way.
fn settle<T>(result: Result<T, StoreError>) -> Option<T> {
    result
        .inspect_err(|err| error!(%err, "Failed to persist tasks"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryPersistence, MockTaskPersistence};

    fn controller() -> Controller<MemoryPersistence> {
        Controller::load(MemoryPersistence::new())
    }

    fn add(controller: &mut Controller<MemoryPersistence>, text: &str) -> TaskId {
        controller.handle(Intent::Add {
            text: text.to_string(),
            due_date: String::new(),
            priority: Priority::Medium,
        });
        controller.store().tasks()[0].id
    }

    #[test]
    fn can_add_task_with_toast() {
        let mut controller = controller();

        let toast = controller
            .handle(Intent::Add {
                text: "Buy milk".to_string(),
                due_date: "2024-01-01".to_string(),
                priority: Priority::High,
            })
            .unwrap();

        assert_eq!(toast.message, TASK_ADDED);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(controller.toast(), Some(&toast));
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn blank_add_raises_no_toast() {
        let mut controller = controller();

        let toast = controller.handle(Intent::Add {
            text: "  ".to_string(),
            due_date: String::new(),
            priority: Priority::Low,
        });

        assert_eq!(toast, None);
        assert!(controller.store().is_empty());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut controller = controller();
        let id = add(&mut controller, "Task");

        controller.handle(Intent::RequestDelete(id));

        assert_eq!(controller.dialog(), &Dialog::ConfirmDelete { id });
        assert_eq!(controller.store().len(), 1);

        let toast = controller.handle(Intent::ConfirmDelete).unwrap();

        assert_eq!(toast.message, TASK_DELETED);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(controller.dialog(), &Dialog::Closed);
        assert!(controller.store().is_empty());
    }

    #[test]
    fn cancel_delete_discards_pending_id() {
        let mut controller = controller();
        let id = add(&mut controller, "Task");

        controller.handle(Intent::RequestDelete(id));
        controller.handle(Intent::CancelDelete);
        let toast = controller.handle(Intent::ConfirmDelete);

        assert_eq!(toast, None);
        assert_eq!(controller.dialog(), &Dialog::Closed);
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn cannot_request_delete_for_unknown_task() {
        let mut controller = controller();
        add(&mut controller, "Task");

        controller.handle(Intent::RequestDelete(404));

        assert_eq!(controller.dialog(), &Dialog::Closed);
    }

    #[test]
    fn failed_save_keeps_mutation_without_toast() {
        let mut persistence = MockTaskPersistence::new();
        persistence.expect_load().returning(|| Ok(Vec::new()));
        persistence
            .expect_save()
            .returning(|_| Err(StoreError::Storage("quota exceeded".to_string())));
        let mut controller = Controller::load(persistence);

        let toast = controller.handle(Intent::Add {
            text: "Task".to_string(),
            due_date: String::new(),
            priority: Priority::Low,
        });

        assert_eq!(toast, None);
        assert_eq!(controller.toast(), None);
        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.store().revision(), 1);

        let id = controller.store().tasks()[0].id;
        assert_eq!(controller.handle(Intent::Toggle(id)), None);
        assert!(controller.store().get(id).unwrap().completed);
    }

    #[test]
    fn can_edit_through_dialog() {
        let mut controller = controller();
        let id = add(&mut controller, "Draft");

        controller.handle(Intent::BeginEdit(id));
        assert_eq!(
            controller.dialog(),
            &Dialog::Edit {
                id,
                draft: "Draft".to_string()
            }
        );

        controller.handle(Intent::UpdateDraft("Final".to_string()));
        let toast = controller.handle(Intent::SubmitEdit).unwrap();

        assert_eq!(toast.message, TASK_UPDATED);
        assert_eq!(controller.dialog(), &Dialog::Closed);
        assert_eq!(controller.store().get(id).unwrap().text, "Final");
    }

    #[test]
    fn cancelled_or_blank_edit_keeps_text() {
        let mut controller = controller();
        let id = add(&mut controller, "Original");

        controller.handle(Intent::BeginEdit(id));
        controller.handle(Intent::UpdateDraft("Changed".to_string()));
        controller.handle(Intent::CancelEdit);

        controller.handle(Intent::BeginEdit(id));
        controller.handle(Intent::UpdateDraft("   ".to_string()));
        let toast = controller.handle(Intent::SubmitEdit);

        assert_eq!(toast, None);
        assert_eq!(controller.dialog(), &Dialog::Closed);
        assert_eq!(controller.store().get(id).unwrap().text, "Original");
    }

    #[test]
    fn cannot_begin_edit_for_unknown_task() {
        let mut controller = controller();

        controller.handle(Intent::BeginEdit(12));

        assert_eq!(controller.dialog(), &Dialog::Closed);
    }

    #[test]
    fn toggle_raises_update_toast() {
        let mut controller = controller();
        let id = add(&mut controller, "Task");

        let toast = controller.handle(Intent::Toggle(id)).unwrap();

        assert_eq!(toast.message, TASK_UPDATED);
        assert!(controller.store().get(id).unwrap().completed);
        assert_eq!(controller.handle(Intent::Toggle(999)), None);
    }

    #[test]
    fn filter_and_search_shape_visible_tasks() {
        let mut controller = controller();
        let milk = add(&mut controller, "Buy milk");
        let rent = add(&mut controller, "Pay rent");
        controller.handle(Intent::Toggle(rent));

        controller.handle(Intent::SetFilter(Filter::Completed));
        assert_eq!(controller.display_order(), vec![rent]);

        controller.handle(Intent::SetFilter(Filter::All));
        controller.handle(Intent::Search("MILK".to_string()));
        assert_eq!(controller.display_order(), vec![milk]);
        assert_eq!(controller.filter(), Filter::All);
        assert_eq!(controller.search(), "MILK");
    }

    #[test]
    fn can_toggle_theme() {
        let mut controller = controller();

        controller.handle(Intent::ToggleTheme);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.theme().root_class(), "dark-mode");
        assert_eq!(controller.theme().icon(), "fa-sun");

        controller.handle(Intent::ToggleTheme);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        let mut controller = controller();
        let id = add(&mut controller, "Task");
        let first = controller.toast().unwrap().clone();
        let second = controller.handle(Intent::Toggle(id)).unwrap();

        controller.handle(Intent::DismissToast(first.seq));
        assert_eq!(controller.toast(), Some(&second));

        controller.handle(Intent::DismissToast(second.seq));
        assert_eq!(controller.toast(), None);
    }

    #[test]
    fn drag_over_commits_new_order() {
        let mut controller = controller();
        let c = add(&mut controller, "C");
        let b = add(&mut controller, "B");
        let a = add(&mut controller, "A");
        let bounds = vec![
            ItemBounds::new(a, 0.0, 40.0),
            ItemBounds::new(b, 40.0, 40.0),
            ItemBounds::new(c, 80.0, 40.0),
        ];

        controller.handle(Intent::DragStart(c));
        controller.handle(Intent::DragMarked(c));
        controller.handle(Intent::DragOver {
            pointer_y: 10.0,
            bounds,
        });
        controller.handle(Intent::DragEnd);

        assert_eq!(controller.store().ids(), vec![c, a, b]);
        assert_eq!(controller.dragging(), None);
        let persisted = controller.store().persistence().load().unwrap();
        assert_eq!(persisted[0].id, c);
    }

    #[test]
    fn drag_while_filtered_only_moves_visible_tasks() {
        let mut controller = controller();
        let c = add(&mut controller, "C");
        let b = add(&mut controller, "B");
        let a = add(&mut controller, "A");
        controller.handle(Intent::Toggle(b));
        controller.handle(Intent::SetFilter(Filter::Pending));
        let bounds = vec![ItemBounds::new(a, 0.0, 40.0), ItemBounds::new(c, 40.0, 40.0)];

        controller.handle(Intent::DragStart(c));
        controller.handle(Intent::DragMarked(c));
        controller.handle(Intent::DragOver {
            pointer_y: 5.0,
            bounds,
        });

        assert_eq!(controller.store().ids(), vec![c, b, a]);
    }
}
