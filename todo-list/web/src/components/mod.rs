mod confirm_modal;
mod edit_modal;
mod empty_state;
mod task_form;
mod task_list;
mod toast;
mod toolbar;

pub use confirm_modal::ConfirmModal;
pub use edit_modal::EditModal;
pub use empty_state::EmptyState;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use toast::ToastView;
pub use toolbar::Toolbar;
