use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
use ticklist_core::{
    ErrorReporter, KvStore, MemoryKvStore, SqliteKvStore, StorageError, StorageResult, StoreError,
    TodoStore,
};

#[derive(Clone, Default)]
struct RecordingReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingReporter {
    fn new() -> Self {
        Self::default()
    }

    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Backend whose writes can be switched off, like a full storage quota.
#[derive(Default)]
struct FlakyKvStore {
    inner: MemoryKvStore,
    fail_writes: Cell<bool>,
}

impl KvStore for FlakyKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}

#[test]
fn load_from_absent_slot_leaves_store_empty() {
    let kv = MemoryKvStore::new();
    let mut store = TodoStore::new(&kv, RecordingReporter::new());
    store.load().unwrap();
    assert_eq!(store.count(), 0);
}

#[test]
fn memory_roundtrip_restores_order_ids_and_flags() {
    let kv = MemoryKvStore::new();

    let (milk_id, dog_id) = {
        let mut store = TodoStore::new(&kv, RecordingReporter::new());
        let milk = store.add("buy milk").unwrap();
        let dog = store.add("walk dog").unwrap();
        store.toggle(milk.id).unwrap();
        (milk.id, dog.id)
    };

    let mut restored = TodoStore::new(&kv, RecordingReporter::new());
    restored.load().unwrap();

    assert_eq!(restored.count(), 2);
    assert_eq!(restored.list()[0].id, dog_id);
    assert_eq!(restored.list()[0].text, "walk dog");
    assert!(!restored.list()[0].completed);
    assert_eq!(restored.list()[1].id, milk_id);
    assert_eq!(restored.list()[1].text, "buy milk");
    assert!(restored.list()[1].completed);
}

#[test]
fn sqlite_roundtrip_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("ticklist.db");

    let first_id = {
        let kv = SqliteKvStore::open(&db_path).unwrap();
        let mut store = TodoStore::new(kv, RecordingReporter::new());
        let item = store.add("persisted across restarts").unwrap();
        store.toggle(item.id).unwrap();
        item.id
    };

    let kv = SqliteKvStore::open(&db_path).unwrap();
    let mut store = TodoStore::new(kv, RecordingReporter::new());
    store.load().unwrap();

    assert_eq!(store.count(), 1);
    assert_eq!(store.list()[0].id, first_id);
    assert_eq!(store.list()[0].text, "persisted across restarts");
    assert!(store.list()[0].completed);
}

#[test]
fn corrupt_slot_fails_load_and_keeps_list_empty() {
    let kv = MemoryKvStore::new();
    kv.set("todos", "{not json").unwrap();

    let mut store = TodoStore::new(&kv, RecordingReporter::new());
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
    assert_eq!(store.count(), 0);
}

#[test]
fn slot_with_blank_text_record_is_rejected_on_load() {
    let kv = MemoryKvStore::new();
    kv.set("todos", r#"[{"id":1,"text":"   ","completed":false}]"#)
        .unwrap();

    let mut store = TodoStore::new(&kv, RecordingReporter::new());
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
    assert_eq!(store.count(), 0);
}

#[test]
fn failed_save_keeps_mutation_and_reaches_reporter() {
    let kv = FlakyKvStore::default();
    let reporter = RecordingReporter::new();
    let mut store = TodoStore::new(&kv, reporter.clone());

    kv.fail_writes.set(true);
    let item = store.add("written during outage").unwrap();

    // The mutation stands even though the save failed.
    assert_eq!(store.count(), 1);
    assert_eq!(reporter.messages(), ["Failed to save todos"]);
    assert_eq!(kv.get("todos").unwrap(), None);

    // Next successful mutation re-persists the full list.
    kv.fail_writes.set(false);
    store.toggle(item.id).unwrap();

    let mut restored = TodoStore::new(&kv, RecordingReporter::new());
    restored.load().unwrap();
    assert_eq!(restored.count(), 1);
    assert_eq!(restored.list()[0].text, "written during outage");
    assert!(restored.list()[0].completed);
}

#[test]
fn load_restores_id_watermark_for_new_additions() {
    let kv = MemoryKvStore::new();
    kv.set(
        "todos",
        r#"[{"id":99999999999999,"text":"far future","completed":false}]"#,
    )
    .unwrap();

    let mut store = TodoStore::new(&kv, RecordingReporter::new());
    store.load().unwrap();

    // A restored id far ahead of the clock must not be reused.
    let item = store.add("fresh").unwrap();
    assert!(item.id > 99999999999999);
}
