use regex::Regex;

use crate::model::{Filter, Task};

/// Derive the ordered list of tasks to display.
///
/// Pure projection, recomputed on every render: status filter, then
/// case-insensitive substring search on the title (empty search matches
/// everything), then a stable sort that puts active tasks above completed
/// ones and orders each group newest first. Equal timestamps keep their
/// collection order, so the newest-inserted task wins the top slot.
pub fn visible_tasks(tasks: &[Task], filter: Filter, search: &str) -> Vec<Task> {
    let needle = search.to_lowercase();
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    out.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(b.created_at.cmp(&a.created_at))
    });
    out
}

/// Case-insensitive regex matching the search text literally, for
/// highlighting matches in rendered titles. None when the search is empty.
pub fn search_regex(search: &str) -> Option<Regex> {
    if search.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(search))).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Priority;

    fn task(id: &str, title: &str, completed: bool, created_at: i64) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            priority: Priority::Medium,
            completed,
            created_at,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn newest_tasks_sort_to_the_top() {
        // Collection order is newest-inserted first, matching the store.
        let tasks = vec![
            task("b", "Call dentist", false, 200),
            task("a", "Buy milk", false, 100),
        ];
        let out = visible_tasks(&tasks, Filter::All, "");
        assert_eq!(titles(&out), vec!["Call dentist", "Buy milk"]);
    }

    #[test]
    fn active_tasks_appear_before_completed_ones() {
        let tasks = vec![
            task("d", "done-new", true, 400),
            task("c", "open-new", false, 300),
            task("b", "done-old", true, 200),
            task("a", "open-old", false, 100),
        ];
        let out = visible_tasks(&tasks, Filter::All, "");
        assert_eq!(
            titles(&out),
            vec!["open-new", "open-old", "done-new", "done-old"]
        );

        // The group/ordering invariant, stated directly: no completed task
        // ahead of an active one, created_at non-increasing within groups.
        let boundary = out.iter().position(|t| t.completed).unwrap_or(out.len());
        assert!(out[..boundary].iter().all(|t| !t.completed));
        assert!(out[boundary..].iter().all(|t| t.completed));
        for group in [&out[..boundary], &out[boundary..]] {
            for pair in group.windows(2) {
                assert!(pair[0].created_at >= pair[1].created_at);
            }
        }
    }

    #[test]
    fn equal_timestamps_break_ties_by_insertion_order() {
        let tasks = vec![
            task("newer", "inserted last", false, 100),
            task("older", "inserted first", false, 100),
        ];
        let out = visible_tasks(&tasks, Filter::All, "");
        assert_eq!(out[0].id, "newer");
        assert_eq!(out[1].id, "older");
    }

    #[test]
    fn status_filter_selects_matching_group() {
        let tasks = vec![
            task("b", "Call dentist", false, 200),
            task("a", "Buy milk", true, 100),
        ];
        assert_eq!(
            titles(&visible_tasks(&tasks, Filter::Active, "")),
            vec!["Call dentist"]
        );
        assert_eq!(
            titles(&visible_tasks(&tasks, Filter::Completed, "")),
            vec!["Buy milk"]
        );
        assert_eq!(visible_tasks(&tasks, Filter::All, "").len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let tasks = vec![
            task("b", "Call dentist", false, 200),
            task("a", "Buy milk", false, 100),
        ];
        assert_eq!(
            titles(&visible_tasks(&tasks, Filter::All, "mil")),
            vec!["Buy milk"]
        );
        assert_eq!(
            titles(&visible_tasks(&tasks, Filter::All, "MIL")),
            vec!["Buy milk"]
        );
        assert!(visible_tasks(&tasks, Filter::All, "xyz").is_empty());
        // Empty search matches everything.
        assert_eq!(visible_tasks(&tasks, Filter::All, "").len(), 2);
    }

    #[test]
    fn search_applies_regardless_of_filter() {
        let tasks = vec![
            task("b", "Call dentist", false, 200),
            task("a", "Buy milk", true, 100),
        ];
        assert_eq!(
            titles(&visible_tasks(&tasks, Filter::All, "mil")),
            vec!["Buy milk"]
        );
        assert!(visible_tasks(&tasks, Filter::Active, "mil").is_empty());
    }

    #[test]
    fn pipeline_does_not_mutate_the_source() {
        let tasks = vec![
            task("a", "Buy milk", true, 100),
            task("b", "Call dentist", false, 200),
        ];
        let before = tasks.clone();
        let _ = visible_tasks(&tasks, Filter::Active, "call");
        assert_eq!(tasks, before);
    }

    #[test]
    fn search_regex_escapes_literals_and_ignores_case() {
        let re = search_regex("a.b").unwrap();
        assert!(re.is_match("xA.By"));
        assert!(!re.is_match("axb"));
        assert!(search_regex("").is_none());
    }
}
