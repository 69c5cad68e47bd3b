use crate::discovery::FaqEntry;
use crate::events::Key;
use dom::attrs::{add_class_by_id, remove_class_by_id, set_attr_by_id};
use dom::traverse::contains;
use dom::{Id, Node};
use tracing::debug;

const OPEN_CLASS: &str = "active";

/// Single-open FAQ accordion.
///
/// Every toggle first sweeps all items closed (class and `aria-expanded`),
/// then reopens the clicked one unless it was the open one — so clicking an
/// open item leaves none open.
#[derive(Debug)]
pub struct FaqAccordion {
    entries: Vec<FaqEntry>,
    /// The one open item, if any. Single source of truth for the single-open
    /// invariant; classes and `aria-expanded` are derived from it.
    open: Option<Id>,
}

impl FaqAccordion {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries,
            open: None,
        }
    }

    /// The currently expanded item, if any.
    pub fn open_item(&self) -> Option<Id> {
        self.open
    }

    /// Click routed from the document. Returns whether a question consumed it.
    pub fn on_click(&mut self, root: &mut Node, target: Id) -> bool {
        let Some(entry) = self.entry_for_target(root, target) else {
            return false;
        };
        self.toggle(root, entry);
        true
    }

    /// Enter and Space activate a question like a click; returning `true`
    /// tells the embedder to suppress the default key behavior (page scroll
    /// on Space).
    pub fn on_key(&mut self, root: &mut Node, target: Id, key: Key) -> bool {
        if !matches!(key, Key::Enter | Key::Space) {
            return false;
        }
        let Some(entry) = self.entry_for_target(root, target) else {
            return false;
        };
        self.toggle(root, entry);
        true
    }

    fn entry_for_target(&self, root: &Node, target: Id) -> Option<FaqEntry> {
        self.entries
            .iter()
            .copied()
            .find(|e| contains(root, e.question, target))
    }

    fn toggle(&mut self, root: &mut Node, entry: FaqEntry) {
        let was_open = self.open == Some(entry.item);

        // Close all items
        for other in &self.entries {
            remove_class_by_id(root, other.item, OPEN_CLASS);
            set_attr_by_id(root, other.question, "aria-expanded", "false");
        }
        self.open = None;

        if !was_open {
            add_class_by_id(root, entry.item, OPEN_CLASS);
            set_attr_by_id(root, entry.question, "aria-expanded", "true");
            self.open = Some(entry.item);
        }
        debug!(open = !was_open, "faq item toggled");
    }
}
