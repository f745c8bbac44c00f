//! Client-side state for the to-do app.
//!
//! The task list lives in LocalStorage under a single key. The controller that
//! owns it sits in a signal shared through context; components send it intents
//! through a [`Dispatcher`].

use dioxus::prelude::*;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use todo_list_core::{Controller, Intent, StoreError, Task, TaskId, TaskPersistence, Toast};
use tracing::debug;

pub type AppController = Controller<LocalStoragePersistence>;

/// Persists the task list as a JSON array in LocalStorage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStoragePersistence {
    key: String,
}

impl LocalStoragePersistence {
    pub fn new(key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl TaskPersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        match LocalStorage::get::<Vec<Task>>(self.key.as_str()) {
            Ok(tasks) => Ok(tasks),
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(StorageError::SerdeError(err)) => Err(StoreError::Json(err)),
            Err(err) => Err(StoreError::Storage(err.to_string())),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        LocalStorage::set(self.key.as_str(), tasks).map_err(|err| match err {
            StorageError::SerdeError(err) => StoreError::Json(err),
            err => StoreError::Storage(err.to_string()),
        })
    }
}

/// Handle for sending intents to the shared controller.
///
/// Any toast an intent raises is dismissed again after `toast_duration`.
#[derive(Copy, Clone)]
pub struct Dispatcher {
    controller: Signal<AppController>,
    toast_duration: Duration,
}

impl Dispatcher {
    /// Applies the intent and returns the toast it raised, if any.
    pub fn send(&self, intent: Intent) -> Option<Toast> {
        let mut controller = self.controller;
        let toast = controller.write().handle(intent);
        if let Some(toast) = &toast {
            self.dismiss_later(toast.seq);
        }
        toast
    }

    /// Applies the intent and reports whether the task list changed, even if
    /// writing it to storage failed.
    pub fn send_change(&self, intent: Intent) -> bool {
        let before = self.read().store().revision();
        self.send(intent);
        self.read().store().revision() != before
    }

    /// Read access for rendering.
    pub fn read(&self) -> ReadableRef<'_, Signal<AppController>> {
        self.controller.read()
    }

    /// Marks the dragged item after the browser captured its drag image.
    pub fn start_drag(&self, id: TaskId) {
        self.send(Intent::DragStart(id));
        let dispatcher = *self;
        spawn(async move {
            TimeoutFuture::new(0).await;
            dispatcher.send(Intent::DragMarked(id));
        });
    }

    fn dismiss_later(&self, seq: u64) {
        let dispatcher = *self;
        let millis = u32::try_from(self.toast_duration.as_millis()).unwrap_or(u32::MAX);
        spawn(async move {
            TimeoutFuture::new(millis).await;
            debug!(seq, "Dismissing toast");
            dispatcher.send(Intent::DismissToast(seq));
        });
    }
}

/// Loads the task list and shares a [`Dispatcher`] with every descendant.
pub fn use_dispatcher_provider(storage_key: String, toast_duration: Duration) -> Dispatcher {
    let controller = use_signal(move || Controller::load(LocalStoragePersistence::new(storage_key)));
    use_context_provider(move || Dispatcher {
        controller,
        toast_duration,
    })
}

/// The [`Dispatcher`] provided by the app root.
pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}
