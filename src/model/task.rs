use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Display label (also the serialized form).
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in Low → Medium → High → Low order.
    pub fn cycle(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

/// A single to-do record. `id` and `created_at` are assigned at creation and
/// never change; `title` and `priority` change only through an edit, and
/// `completed` only through a toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Task {
    /// Create a new incomplete task with a fresh UUID and the current time.
    /// Callers are responsible for validating `title` first.
    pub fn new(title: String, priority: Priority) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            title,
            priority,
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

/// Status filter for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Next filter in All → Active → Completed → All order.
    pub fn cycle(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Whether a task passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete_with_unique_id() {
        let a = Task::new("one".into(), Priority::Low);
        let b = Task::new("two".into(), Priority::High);
        assert!(!a.completed);
        assert!(!b.completed);
        assert_ne!(a.id, b.id);
        assert!(a.created_at > 0);
    }

    #[test]
    fn task_serializes_with_original_field_names() {
        let task = Task {
            id: "t1".into(),
            title: "Buy milk".into(),
            priority: Priority::Medium,
            completed: false,
            created_at: 1700000000000,
        };
        let value = serde_json::to_value(&task).expect("serialize task");
        assert_eq!(
            value,
            serde_json::json!({
                "id": "t1",
                "title": "Buy milk",
                "priority": "Medium",
                "completed": false,
                "createdAt": 1700000000000i64,
            })
        );
    }

    #[test]
    fn task_deserializes_from_stored_records() {
        let json = r#"
        {
          "id": "a2f6",
          "title": "Call dentist",
          "priority": "High",
          "completed": true,
          "createdAt": 42
        }
        "#;
        let task: Task = serde_json::from_str(json).expect("task should deserialize");
        assert_eq!(task.title, "Call dentist");
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
        assert_eq!(task.created_at, 42);
    }

    #[test]
    fn priority_cycle_covers_all_variants() {
        assert_eq!(Priority::Low.cycle(), Priority::Medium);
        assert_eq!(Priority::Medium.cycle(), Priority::High);
        assert_eq!(Priority::High.cycle(), Priority::Low);
    }

    #[test]
    fn filter_matches_by_completion() {
        let mut task = Task::new("t".into(), Priority::Medium);
        assert!(Filter::All.matches(&task));
        assert!(Filter::Active.matches(&task));
        assert!(!Filter::Completed.matches(&task));
        task.completed = true;
        assert!(Filter::All.matches(&task));
        assert!(!Filter::Active.matches(&task));
        assert!(Filter::Completed.matches(&task));
    }
}
