//! UI Components
//!
//! Leptos components for the task list page.

mod new_todo_form;
mod todo_list;
mod todo_row;
mod loading_overlay;
mod message_banner;

pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use loading_overlay::LoadingOverlay;
pub use message_banner::MessageBanner;
