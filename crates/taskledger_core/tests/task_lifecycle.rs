use taskledger_core::{ManualClock, TaskId, TaskStore};

fn new_store() -> (TaskStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    (TaskStore::with_clock(clock.clone()), clock)
}

#[test]
fn buy_milk_add_delete_purge_scenario() {
    let (mut store, clock) = new_store();

    let task = store.add("Buy milk").unwrap();
    assert_eq!(store.active().len(), 1);
    assert_eq!(store.active()[0].text, "Buy milk");
    assert_eq!(store.added().len(), 1);
    assert_eq!(store.added()[0].text, "Buy milk");
    assert!(store.deleted().is_empty());

    clock.advance(60_000);
    let record = store.delete(task.id).unwrap();
    assert!(store.active().is_empty());
    assert_eq!(store.deleted().len(), 1);
    assert_eq!(store.deleted()[0].text, "Buy milk");
    assert_eq!(store.deleted()[0].deleted_at, record.deleted_at);
    assert_eq!(record.deleted_at.epoch_ms(), 1_700_000_060_000);
    assert_eq!(store.added().len(), 1);

    store.purge(task.id).unwrap();
    assert!(store.deleted().is_empty());
    assert!(store.active().is_empty());
    assert_eq!(store.added().len(), 1);
    assert_eq!(store.added()[0].id, task.id);
}

#[test]
fn blank_text_is_ignored() {
    let (mut store, _clock) = new_store();

    assert!(store.add("").is_none());
    assert!(store.add("   ").is_none());
    assert!(store.add("\t\n").is_none());

    assert!(store.active().is_empty());
    assert!(store.added().is_empty());
}

#[test]
fn added_log_counts_non_blank_adds_and_never_shrinks() {
    let (mut store, _clock) = new_store();
    let inputs = ["a", " ", "b", "", "c", "  d  "];
    let mut previous_len = 0;
    let mut created = Vec::new();

    for text in inputs {
        if let Some(task) = store.add(text) {
            created.push(task.id);
        }
        assert!(store.added().len() >= previous_len);
        previous_len = store.added().len();
    }
    assert_eq!(store.added().len(), 4);

    for id in &created {
        store.delete(*id);
        store.purge(*id);
        assert_eq!(store.added().len(), 4);
    }
}

#[test]
fn delete_twice_equals_delete_once() {
    let (mut store, clock) = new_store();
    let task = store.add("walk dog").unwrap();
    store.add("feed cat");

    assert!(store.delete(task.id).is_some());
    let after_once = (
        store.active().to_vec(),
        store.added().to_vec(),
        store.deleted().to_vec(),
    );

    clock.advance(1);
    assert!(store.delete(task.id).is_none());
    let after_twice = (
        store.active().to_vec(),
        store.added().to_vec(),
        store.deleted().to_vec(),
    );
    assert_eq!(after_once, after_twice);
}

#[test]
fn purge_twice_equals_purge_once() {
    let (mut store, _clock) = new_store();
    let task = store.add("walk dog").unwrap();
    store.delete(task.id);

    assert!(store.purge(task.id).is_some());
    let counts = store.counts();
    assert!(store.purge(task.id).is_none());
    assert_eq!(store.counts(), counts);
}

#[test]
fn purged_id_is_gone_and_never_reissued() {
    let (mut store, _clock) = new_store();
    let task = store.add("one").unwrap();
    store.delete(task.id);
    store.purge(task.id);

    assert!(!store.contains_active(task.id));
    assert!(!store.contains_deleted(task.id));

    // Deleting a purged id must not resurrect it.
    assert!(store.delete(task.id).is_none());
    assert!(!store.contains_deleted(task.id));

    let next = store.add("two").unwrap();
    assert_ne!(next.id, task.id);
    assert!(next.id > task.id);
}

#[test]
fn active_and_deleted_never_share_an_id() {
    let (mut store, _clock) = new_store();
    let ids: Vec<TaskId> = ["a", "b", "c", "d"]
        .iter()
        .filter_map(|text| store.add(text).map(|task| task.id))
        .collect();

    store.delete(ids[1]);
    store.delete(ids[3]);
    store.purge(ids[3]);

    for task in store.active() {
        assert!(!store.contains_deleted(task.id));
    }
    for record in store.deleted() {
        assert!(!store.contains_active(record.id));
    }
}

#[test]
fn delete_of_deleted_only_id_is_noop_and_purge_of_active_id_is_noop() {
    let (mut store, _clock) = new_store();
    let kept = store.add("kept").unwrap();

    assert!(store.purge(kept.id).is_none());
    assert!(store.contains_active(kept.id));

    assert!(store.delete(TaskId::from_raw(9_999)).is_none());
    assert!(store.purge(TaskId::from_raw(9_999)).is_none());
    assert_eq!(store.active().len(), 1);
}

#[test]
fn deleted_log_is_ordered_by_deletion_time() {
    let (mut store, clock) = new_store();
    let first = store.add("first").unwrap();
    let second = store.add("second").unwrap();

    clock.advance(10);
    store.delete(second.id);
    clock.advance(10);
    store.delete(first.id);

    let order: Vec<_> = store.deleted().iter().map(|record| record.id).collect();
    assert_eq!(order, vec![second.id, first.id]);
}

#[test]
fn added_records_match_tasks_at_creation() {
    let (mut store, _clock) = new_store();
    let task = store.add("  stretch  ").unwrap();

    let added = &store.added()[0];
    assert_eq!(added.id, task.id);
    assert_eq!(added.text, "stretch");
    assert_eq!(added.created_at, task.created_at);
}
