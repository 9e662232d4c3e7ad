#[cfg(test)]
mod tests {
    use tarea::libs::task::Task;
    use tarea::storage::store::MemoryStore;
    use tarea::storage::tasks::{TaskList, TaskListError, TASKS_KEY};

    fn list_from(raw: &str) -> TaskList<MemoryStore> {
        TaskList::init(MemoryStore::with_value(TASKS_KEY, raw)).unwrap()
    }

    fn names_and_flags(list: &TaskList<MemoryStore>) -> Vec<(String, bool)> {
        list.tasks().iter().map(|t| (t.name.clone(), t.done)).collect()
    }

    #[test]
    fn test_init_without_stored_value_is_empty() {
        let list = TaskList::init(MemoryStore::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_init_is_idempotent() {
        let store = MemoryStore::with_value(TASKS_KEY, r#"[{"name":"a","done":false},{"name":"b","done":true}]"#);

        let first = TaskList::init(store.clone()).unwrap();
        let second = TaskList::init(store).unwrap();

        assert_eq!(first.tasks(), second.tasks());
    }

    #[test]
    fn test_add_appends_pending_task_and_persists() {
        let mut list = TaskList::init(MemoryStore::new()).unwrap();

        let task = list.add("wash dishes").unwrap();
        assert_eq!(task.name, "wash dishes");
        assert!(!task.done);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks().last(), Some(&task));

        // The stored value is exactly the serialized list, written before
        // add() returned.
        let store = list.into_store();
        assert_eq!(store.value(TASKS_KEY), Some(r#"[{"name":"wash dishes","done":false}]"#));
    }

    #[test]
    fn test_add_grows_list_by_one() {
        let mut list = list_from(r#"[{"name":"a","done":true}]"#);
        let before = list.len();

        list.add("b").unwrap();

        assert_eq!(list.len(), before + 1);
        assert_eq!(names_and_flags(&list), vec![("a".to_string(), true), ("b".to_string(), false)]);
    }

    #[test]
    fn test_toggle_flips_only_the_addressed_task() {
        let mut list = list_from(r#"[{"name":"a","done":false},{"name":"b","done":false}]"#);

        list.toggle(1).unwrap();

        assert_eq!(names_and_flags(&list), vec![("a".to_string(), false), ("b".to_string(), true)]);
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let mut list = list_from(r#"[{"name":"a","done":false},{"name":"b","done":true},{"name":"c","done":false}]"#);
        let original = list.tasks().to_vec();

        list.toggle(1).unwrap();
        list.toggle(1).unwrap();

        assert_eq!(list.tasks(), original.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_the_addressed_task() {
        let mut list = list_from(r#"[{"name":"a","done":false},{"name":"b","done":true},{"name":"c","done":false}]"#);

        let deleted = list.delete(1).unwrap();

        assert_eq!(deleted.name, "b");
        assert_eq!(names_and_flags(&list), vec![("a".to_string(), false), ("c".to_string(), false)]);
    }

    #[test]
    fn test_mutations_write_through() {
        let mut list = TaskList::init(MemoryStore::new()).unwrap();
        list.add("a").unwrap();
        list.add("b").unwrap();
        list.toggle(0).unwrap();
        list.delete(1).unwrap();

        let expected = serde_json::to_string(list.tasks()).unwrap();
        let store = list.into_store();
        assert_eq!(store.value(TASKS_KEY), Some(expected.as_str()));
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let mut list = TaskList::init(MemoryStore::new()).unwrap();
        list.add("buy milk").unwrap();
        list.add("pay rent").unwrap();
        list.toggle(1).unwrap();
        let state = names_and_flags(&list);

        let reloaded = TaskList::init(list.into_store()).unwrap();

        assert_eq!(names_and_flags(&reloaded), state);
    }

    #[test]
    fn test_toggle_out_of_range_fails_loudly() {
        let mut list = list_from(r#"[{"name":"a","done":false}]"#);

        let err = list.toggle(1).unwrap_err();
        assert!(matches!(err, TaskListError::IndexOutOfRange { index: 1, len: 1 }));

        // State and storage are untouched by the failed call.
        assert_eq!(list.len(), 1);
        let store = list.into_store();
        assert_eq!(store.value(TASKS_KEY), Some(r#"[{"name":"a","done":false}]"#));
    }

    #[test]
    fn test_delete_out_of_range_fails_loudly() {
        let mut list = TaskList::init(MemoryStore::new()).unwrap();

        let err = list.delete(0).unwrap_err();
        assert!(matches!(err, TaskListError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_malformed_stored_value_is_surfaced_by_init() {
        let store = MemoryStore::with_value(TASKS_KEY, "not json at all");

        let err = TaskList::init(store).unwrap_err();
        assert!(matches!(err, TaskListError::MalformedPersistedState(_)));
    }

    #[test]
    fn test_malformed_stored_value_falls_back_to_empty() {
        let store = MemoryStore::with_value(TASKS_KEY, r#"{"name":"not an array"}"#);

        let list = TaskList::init_or_empty(store).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_survive_deletion_of_other_tasks() {
        let mut list = TaskList::init(MemoryStore::new()).unwrap();
        list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();

        // Removing the head shifts positions but not identifiers.
        list.delete(0).unwrap();
        assert_eq!(list.position_of(b.id), Some(0));
        assert_eq!(list.position_of(c.id), Some(1));

        let toggled = list.toggle_by_id(c.id).unwrap();
        assert_eq!(toggled.name, "c");
        assert!(toggled.done);

        let deleted = list.delete_by_id(b.id).unwrap();
        assert_eq!(deleted.name, "b");
        assert_eq!(names_and_flags(&list), vec![("c".to_string(), true)]);
    }

    #[test]
    fn test_stale_id_is_task_not_found() {
        let mut list = TaskList::init(MemoryStore::new()).unwrap();
        let task = list.add("a").unwrap();
        list.delete_by_id(task.id).unwrap();

        let err = list.toggle_by_id(task.id).unwrap_err();
        assert!(matches!(err, TaskListError::TaskNotFound(id) if id == task.id));
    }

    #[test]
    fn test_serialized_shape_has_no_identifier() {
        let task = Task::new("a");
        assert_eq!(serde_json::to_string(&task).unwrap(), r#"{"name":"a","done":false}"#);
    }
}
