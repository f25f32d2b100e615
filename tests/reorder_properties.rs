//! Property tests for the group-and-sort transform.

use proptest::prelude::*;
use task_sorter::{Task, TaskCollection};

/// Checklist lines drawn from a small label and date space so that groups
/// and equal dates actually occur.
fn checklist_line() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,8}",
        prop::sample::select(vec!["High", "Low", "Medium", "high", ""]),
        1u32..=3,
        1u32..=4,
    )
        .prop_map(|(name, priority, month, day)| {
            format!("- [ ] {name} (2024-{month:02}-{day:02}, {priority})")
        })
}

fn collection_from(lines: &[String]) -> TaskCollection {
    let mut tasks = TaskCollection::new();
    tasks.ingest_lines(lines);
    tasks
}

fn sorted_copy(tasks: &[Task]) -> Vec<Task> {
    let mut copy = tasks.to_vec();
    copy.sort_by(|a, b| {
        (a.priority(), a.due_date(), a.name()).cmp(&(b.priority(), b.due_date(), b.name()))
    });
    copy
}

proptest! {
    /// Every generated line is well formed, so every line becomes a task.
    #[test]
    fn prop_all_generated_lines_parse(lines in prop::collection::vec(checklist_line(), 0..40)) {
        let tasks = collection_from(&lines);
        prop_assert_eq!(tasks.len(), lines.len());
    }

    /// Reorder is a permutation: same multiset of tasks before and after.
    #[test]
    fn prop_reorder_is_permutation(lines in prop::collection::vec(checklist_line(), 0..40)) {
        let mut tasks = collection_from(&lines);
        let before = sorted_copy(tasks.tasks());
        tasks.reorder();
        prop_assert_eq!(sorted_copy(tasks.tasks()), before);
    }

    /// Applying reorder twice equals applying it once.
    #[test]
    fn prop_reorder_is_idempotent(lines in prop::collection::vec(checklist_line(), 0..40)) {
        let mut tasks = collection_from(&lines);
        tasks.reorder();
        let once = tasks.clone();
        tasks.reorder();
        prop_assert_eq!(tasks, once);
    }

    /// Output is ordered by (priority, due date) and equal keys keep
    /// ingestion order.
    #[test]
    fn prop_reorder_orders_and_is_stable(lines in prop::collection::vec(checklist_line(), 0..40)) {
        // Tag each line with its ingestion index through the name
        let tagged: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| line.replacen("- [ ] ", &format!("- [ ] {i:03}-"), 1))
            .collect();
        let mut tasks = collection_from(&tagged);
        tasks.reorder();

        for pair in tasks.tasks().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (a.priority(), a.due_date());
            let key_b = (b.priority(), b.due_date());
            prop_assert!(key_a <= key_b, "{} before {}", a, b);
            if key_a == key_b {
                prop_assert!(a.name()[..3] < b.name()[..3], "unstable: {} before {}", a, b);
            }
        }
    }
}
