use std::sync::{Arc, Mutex};

/// Process-wide cell holding the note set for the system.
///
/// The note starts out absent and is replaced wholesale on every `set`;
/// last completed write wins. Handles are cheap clones sharing one cell,
/// so the store can be injected wherever it is read or written instead of
/// living in ambient global state.
#[derive(Clone, Default)]
pub struct NoteStore {
    cell: Arc<Mutex<Option<String>>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current note, or `None` if one was never set.
    pub fn get(&self) -> Option<String> {
        self.cell.lock().unwrap().clone()
    }

    /// Replaces the note. Accepts any string, including empty.
    pub fn set(&self, note: String) {
        *self.cell.lock().unwrap() = Some(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_starts_absent() {
        let store = NoteStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = NoteStore::new();
        store.set("This is a test note".to_string());
        assert_eq!(store.get().as_deref(), Some("This is a test note"));
    }

    #[test]
    fn last_write_wins() {
        let store = NoteStore::new();
        store.set("A".to_string());
        store.set("B".to_string());
        assert_eq!(store.get().as_deref(), Some("B"));
    }

    #[test]
    fn empty_string_is_a_valid_note() {
        let store = NoteStore::new();
        store.set(String::new());
        assert_eq!(store.get().as_deref(), Some(""));
    }

    #[test]
    fn concurrent_writes_leave_one_of_the_values() {
        let store = NoteStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.set(format!("note-{i}")))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stored = store.get().expect("a note should have been stored");
        assert!((0..8).any(|i| stored == format!("note-{i}")));
    }
}
