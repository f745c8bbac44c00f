//! Core domain models and interaction logic for the to-do list.
//!
//! Nothing in here knows about the DOM. The web crate feeds user intents into
//! the [`Controller`] and renders whatever [`Controller::visible_tasks`] yields.
pub mod controller;
pub mod drag;
pub mod persistence;
pub mod store;
pub mod task;
pub mod view;

pub use controller::{Controller, Dialog, Intent, Theme, Toast, ToastKind};
pub use drag::{DragReorder, ItemBounds, drop_target};
pub use persistence::{DEFAULT_STORAGE_KEY, MemoryPersistence, StoreError, TaskPersistence};
pub use store::TaskStore;
pub use task::{NO_DUE_DATE, Priority, Task, TaskId};
pub use view::{Filter, matches_search, visible_tasks};
