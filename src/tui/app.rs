use crate::model::{Filter, Priority, Task};
use crate::store::{StoreError, TaskStore};
use crate::view;

use super::text_input::TextInput;
use super::theme::Theme;

/// Current interaction mode: which region owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the task list (the default).
    Navigate,
    /// Typing into the add-task title input.
    Add,
    /// Typing into the search input.
    Search,
    /// Editing a task inline.
    Edit,
}

/// Draft state for the task being edited inline. At most one task is
/// editable at a time; starting another edit replaces this wholesale.
#[derive(Debug, Clone)]
pub struct EditState {
    pub task_id: String,
    pub title: TextInput,
    pub priority: Priority,
}

/// Main application state.
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub filter: Filter,
    /// Live search text; applied to the view pipeline on every render.
    pub search: TextInput,
    /// Add-task controller: title draft, priority draft, transient error.
    pub draft_title: TextInput,
    pub draft_priority: Priority,
    pub error: Option<String>,
    /// Some(_) while a task is being edited (the Editing state).
    pub editing: Option<EditState>,
    /// Cursor index into the visible (projected) task list.
    pub cursor: usize,
    /// First visible row of the task list.
    pub scroll_offset: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            filter: Filter::All,
            search: TextInput::new(),
            draft_title: TextInput::new(),
            draft_priority: Priority::default(),
            error: None,
            editing: None,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// The ordered task list currently on screen.
    pub fn visible(&self) -> Vec<Task> {
        view::visible_tasks(self.store.tasks(), self.filter, self.search.text())
    }

    /// Id of the task under the cursor, if any.
    pub fn cursor_task_id(&self) -> Option<String> {
        self.visible().get(self.cursor).map(|t| t.id.clone())
    }

    /// Keep the cursor inside the visible list after any change to the
    /// projection (mutation, filter, search).
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn active_count(&self) -> usize {
        self.store.tasks().iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.store.tasks().len() - self.active_count()
    }

    // -----------------------------------------------------------------------
    // Add-task controller
    // -----------------------------------------------------------------------

    /// Submit the add-task draft. An empty post-trim title produces an
    /// inline error and no mutation; success clears the error, resets the
    /// draft (title empty, priority Medium), and keeps the title input
    /// focused so the next task can be typed immediately.
    pub fn submit_new_task(&mut self) {
        match self.store.create(self.draft_title.text(), self.draft_priority) {
            Err(e) => self.error = Some(e.to_string()),
            Ok(_) => {
                self.error = None;
                self.draft_title.clear();
                self.draft_priority = Priority::default();
                self.clamp_cursor();
            }
        }
    }

    /// Record a change to the draft title. The validation error is
    /// transient: any edit clears it immediately.
    pub fn draft_title_changed(&mut self) {
        self.error = None;
    }

    // -----------------------------------------------------------------------
    // Edit-mode state machine
    // -----------------------------------------------------------------------

    /// Viewing → Editing (or Editing → Editing with a new target, silently
    /// discarding the previous draft). Unknown ids are ignored.
    pub fn start_edit(&mut self, id: &str) {
        let Some(task) = self.store.get(id) else {
            return;
        };
        self.editing = Some(EditState {
            task_id: task.id.clone(),
            title: TextInput::with_text(&task.title),
            priority: task.priority,
        });
        self.mode = Mode::Edit;
    }

    /// Commit the edit draft. An empty draft title keeps the machine in
    /// Editing; otherwise the update lands and the machine returns to
    /// Viewing. If the edited task vanished, there is nothing to keep
    /// editing, so this also returns to Viewing.
    pub fn save_edit(&mut self) {
        let Some(edit) = &self.editing else {
            return;
        };
        match self
            .store
            .update(&edit.task_id, edit.title.text(), edit.priority)
        {
            Err(StoreError::EmptyTitle) => {}
            Ok(_) => {
                self.editing = None;
                self.mode = Mode::Navigate;
            }
        }
    }

    /// Editing → Viewing, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------------
    // List actions
    // -----------------------------------------------------------------------

    pub fn toggle_task(&mut self, id: &str) {
        self.store.toggle_complete(id);
        self.clamp_cursor();
    }

    /// Delete a task. Deleting the task currently being edited forces the
    /// edit machine back to Viewing, draft and all.
    pub fn delete_task(&mut self, id: &str) {
        self.store.delete(id);
        if self.editing.as_ref().is_some_and(|e| e.task_id == id) {
            self.editing = None;
            if self.mode == Mode::Edit {
                self.mode = Mode::Navigate;
            }
        }
        self.clamp_cursor();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_cursor();
    }
}
