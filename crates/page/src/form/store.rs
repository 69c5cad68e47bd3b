use dom::Id;
use std::collections::HashMap;

/// Current values of the form controls, keyed by node id.
///
/// This is the headless stand-in for live input state: the embedder writes a
/// control's new value before its input event is routed, the way a real
/// input mutates before firing. Revisions increment on every write so
/// embedders can cheaply detect changes.
#[derive(Clone, Debug, Default)]
pub struct FieldStore {
    values: HashMap<Id, FieldState>,
}

#[derive(Clone, Debug, Default)]
struct FieldState {
    value: String,
    value_rev: u64,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, id: Id) -> bool {
        self.values.contains_key(&id)
    }

    pub fn get(&self, id: Id) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Like `get`, but absent controls read as empty — the shape every
    /// validation rule wants.
    pub fn value_or_empty(&self, id: Id) -> &str {
        self.get(id).unwrap_or("")
    }

    pub fn value_revision(&self, id: Id) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value.
    pub fn ensure_initial(&mut self, id: Id, initial: String) {
        self.values.entry(id).or_insert(FieldState {
            value: initial,
            value_rev: 0,
        });
    }

    pub fn set(&mut self, id: Id, value: String) {
        let st = self.values.entry(id).or_default();
        st.value = value;
        st.value_rev = st.value_rev.wrapping_add(1);
    }

    /// Reset a control to empty (form reset semantics).
    pub fn clear(&mut self, id: Id) {
        self.set(id, String::new());
    }
}
