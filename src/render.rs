//! Render Engine
//!
//! Pure mapping from the fetched records and the edit state to what the
//! list shows. The `TodoList` component turns this into DOM, rebuilding
//! every row on each render.

use crate::controller::EditState;
use crate::models::{Todo, TodoId};

/// What the list container shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    /// Nothing fetched yet
    #[default]
    NotLoaded,
    /// Collection is empty: a single placeholder, no controls
    Empty,
    Rows(Vec<RowView>),
}

impl ListView {
    pub fn rows(&self) -> &[RowView] {
        match self {
            ListView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// One rendered record
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: TodoId,
    /// Raw title. Only ever inserted as a text node.
    pub title: String,
    pub completed: bool,
    /// Title replaced by the inline edit widget
    pub editing: bool,
}

pub fn build_list(todos: &[Todo], edit: &EditState) -> ListView {
    if todos.is_empty() {
        return ListView::Empty;
    }

    let rows = todos
        .iter()
        .map(|todo| RowView {
            id: todo.id.clone(),
            title: todo.title.clone(),
            completed: todo.completed,
            editing: edit.is_editing(&todo.id),
        })
        .collect();
    ListView::Rows(rows)
}
