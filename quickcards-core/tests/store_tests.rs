use quickcards_core::{CardStore, CoreError, Flashcard, MemoryStore};

#[test]
fn valid_adds_grow_by_one_and_land_last() {
    let mut store = MemoryStore::new();
    let pairs = [("hola", "hello"), ("adios", "goodbye"), ("gracias", "thanks")];
    for (i, (t, d)) in pairs.iter().enumerate() {
        let before = store.len();
        let total = store.add(t, d).unwrap();
        assert_eq!(total, before + 1);
        assert_eq!(store.len(), i + 1);
        assert_eq!(store.list().last(), Some(&Flashcard::new(*t, *d)));
    }
}

#[test]
fn empty_fields_leave_store_unchanged() {
    let mut store = MemoryStore::new();
    store.add("keep", "me").unwrap();
    for (t, d) in [("", "x"), ("x", ""), ("", ""), (" ", "x"), ("x", "\t")] {
        assert!(matches!(store.add(t, d), Err(CoreError::Validation(_))));
        assert_eq!(store.len(), 1);
    }
}

#[test]
fn remove_absent_and_present() {
    let mut store = MemoryStore::new();
    store.add("a", "1").unwrap();
    store.add("b", "2").unwrap();

    assert_eq!(store.remove("X"), Err(CoreError::NotFound("X".into())));
    assert_eq!(store.len(), 2);

    let gone = store.remove("a").unwrap();
    assert_eq!(gone, Flashcard::new("a", "1"));
    assert_eq!(store.list(), &[Flashcard::new("b", "2")]);
}
