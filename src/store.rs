use crate::model::{Priority, Task};

/// Error type for store mutations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Task title cannot be empty.")]
    EmptyTitle,
}

/// Callback invoked with the full collection after every successful mutation.
pub type SnapshotListener = Box<dyn FnMut(&[Task])>;

/// The sole owner of the task collection.
///
/// All mutations go through `create` / `toggle_complete` / `delete` /
/// `update`; each successful one notifies the registered snapshot listeners
/// with the resulting collection, which is how the persistence write is
/// driven. No-op calls (unknown id) do not notify.
pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: Vec<SnapshotListener>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskStore {
            tasks,
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every successful mutation.
    /// Listeners must not call back into the store.
    pub fn subscribe(&mut self, listener: SnapshotListener) {
        self.listeners.push(listener);
    }

    /// The current collection, newest-inserted first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Validate and add a new task at the front of the collection.
    /// Returns the id of the created task.
    pub fn create(&mut self, title: &str, priority: Priority) -> Result<String, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task::new(title.to_string(), priority);
        let id = task.id.clone();
        // Prepend so that equal timestamps resolve newest-inserted first
        // under the stable sort in the view pipeline.
        self.tasks.insert(0, task);
        self.notify();
        Ok(id)
    }

    /// Flip the completed flag. Returns false (and stays silent) if `id` is
    /// not in the collection.
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.notify();
        true
    }

    /// Remove the task with `id`. Returns false if it was not present.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.notify();
        true
    }

    /// Replace title and priority on the task with `id`, leaving id,
    /// completion state, and creation time untouched. An empty post-trim
    /// title fails validation before the task is looked up; an unknown id is
    /// a silent no-op (`Ok(false)`).
    pub fn update(
        &mut self,
        id: &str,
        title: &str,
        priority: Priority,
    ) -> Result<bool, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.title = title.to_string();
        task.priority = priority;
        self.notify();
        Ok(true)
    }

    fn notify(&mut self) {
        let tasks = &self.tasks;
        for listener in &mut self.listeners {
            listener(tasks);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn create_trims_title_and_prepends() {
        let mut store = TaskStore::new(Vec::new());
        store.create("Buy milk", Priority::Medium).unwrap();
        let id = store.create("  Call dentist  ", Priority::High).unwrap();
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.tasks()[0].title, "Call dentist");
        assert_eq!(store.tasks()[1].title, "Buy milk");
    }

    #[test]
    fn create_rejects_empty_and_whitespace_titles() {
        let mut store = TaskStore::new(Vec::new());
        assert_eq!(store.create("", Priority::Low), Err(StoreError::EmptyTitle));
        assert_eq!(
            store.create("   \t ", Priority::Low),
            Err(StoreError::EmptyTitle)
        );
        assert!(store.tasks().is_empty());
        // The error message surfaced to the user must be non-empty.
        assert!(!StoreError::EmptyTitle.to_string().is_empty());
    }

    #[test]
    fn toggle_complete_flips_and_double_toggle_restores() {
        let mut store = TaskStore::new(Vec::new());
        let id = store.create("task", Priority::Medium).unwrap();
        assert!(store.toggle_complete(&id));
        assert!(store.get(&id).unwrap().completed);
        assert!(store.toggle_complete(&id));
        assert!(!store.get(&id).unwrap().completed);
    }

    #[test]
    fn toggle_complete_unknown_id_is_noop() {
        let mut store = TaskStore::new(Vec::new());
        store.create("task", Priority::Medium).unwrap();
        assert!(!store.toggle_complete("missing"));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn delete_removes_only_the_matching_task() {
        let mut store = TaskStore::new(Vec::new());
        let a = store.create("a", Priority::Low).unwrap();
        let b = store.create("b", Priority::Low).unwrap();
        assert!(store.delete(&a));
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, b);
        // Deleted ids stay gone: no error, no resurrection.
        assert!(!store.delete(&a));
        assert!(!store.toggle_complete(&a));
        assert_eq!(store.update(&a, "new title", Priority::High), Ok(false));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn update_replaces_title_and_priority_only() {
        let mut store = TaskStore::new(Vec::new());
        let id = store.create("Buy milk", Priority::Medium).unwrap();
        store.toggle_complete(&id);
        let created_at = store.get(&id).unwrap().created_at;

        assert_eq!(store.update(&id, " Buy bread ", Priority::High), Ok(true));
        let task = store.get(&id).unwrap();
        assert_eq!(task.title, "Buy bread");
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn update_with_empty_title_leaves_task_unchanged() {
        let mut store = TaskStore::new(Vec::new());
        let id = store.create("Buy milk", Priority::Medium).unwrap();
        assert_eq!(
            store.update(&id, "   ", Priority::High),
            Err(StoreError::EmptyTitle)
        );
        let task = store.get(&id).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn listeners_fire_on_successful_mutations_only() {
        let saves: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&saves);

        let mut store = TaskStore::new(Vec::new());
        store.subscribe(Box::new(move |tasks| {
            seen.borrow_mut().push(tasks.len());
        }));

        let _ = store.create("", Priority::Low);
        assert!(saves.borrow().is_empty());

        let id = store.create("task", Priority::Low).unwrap();
        store.toggle_complete(&id);
        store.toggle_complete("missing");
        let _ = store.update(&id, "", Priority::Low);
        store.update(&id, "renamed", Priority::High).unwrap();
        store.delete(&id);
        store.delete(&id);

        // create, toggle, update, delete — one snapshot each.
        assert_eq!(*saves.borrow(), vec![1, 1, 1, 0]);
    }
}
