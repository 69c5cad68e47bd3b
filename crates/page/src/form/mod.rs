use crate::discovery::{FieldSlots, FormLandmarks};
use crate::events::PageAction;
use crate::interaction::InteractionState;
use crate::scheduler::{TimerTask, Timers};
use crate::toast::{Toast, ToastKind};
use dom::attrs::{add_class_by_id, attr, has_class_by_id, remove_class_by_id, set_text_by_id};
use dom::traverse::find_node_by_id;
use dom::{Id, Node};
use std::time::Duration;
use tracing::{info, warn};

mod fields;
mod mailto;
mod store;

pub use fields::{
    FieldKind, MSG_CHALLENGE_REQUIRED, MSG_CHALLENGE_TOO_SHORT, MSG_COMPANY_REQUIRED,
    MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED, MSG_NAME_TOO_SHORT, validate,
};
pub use mailto::{BUDGET_NOT_PROVIDED, ContactMessage, MailtoError, compose};
pub use store::FieldStore;


const ERROR_CLASS: &str = "error";

/// Success notification shown once the handoff target is composed.
pub const MSG_REDIRECTING: &str = "Redirecionando para seu cliente de email...";

/// Contact-form validation and submission flow. Inert when the form landmark
/// is absent.
#[derive(Debug)]
pub struct ContactForm {
    landmarks: Option<FormLandmarks>,
    contact_email: String,
    reset_delay: Duration,
}

impl ContactForm {
    pub fn new(
        landmarks: Option<FormLandmarks>,
        contact_email: String,
        reset_delay: Duration,
    ) -> Self {
        Self {
            landmarks,
            contact_email,
            reset_delay,
        }
    }

    /// Seed control values from the document (the `value` attribute, or text
    /// content for a textarea), without clobbering anything already typed.
    pub fn seed_values(&self, root: &Node, store: &mut FieldStore) {
        let Some(landmarks) = &self.landmarks else {
            return;
        };
        let controls = self
            .slots(landmarks)
            .into_iter()
            .filter_map(|(_, s)| s.input)
            .chain(landmarks.budget);

        for id in controls {
            let initial = find_node_by_id(root, id)
                .map(initial_control_value)
                .unwrap_or_default();
            store.ensure_initial(id, initial);
        }
    }

    /// Blur always validates the field it left.
    pub fn on_blur(&self, root: &mut Node, store: &FieldStore, target: Id) {
        if let Some((kind, slots)) = self.field_for(target) {
            self.validate_field(root, store, kind, slots);
        }
    }

    /// Input re-validates only while the field is showing an error, clearing
    /// it as soon as the value becomes acceptable.
    pub fn on_input(&self, root: &mut Node, store: &FieldStore, target: Id) {
        let Some((kind, slots)) = self.field_for(target) else {
            return;
        };
        let Some(input) = slots.input else {
            return;
        };
        if has_class_by_id(root, input, ERROR_CLASS) {
            self.validate_field(root, store, kind, slots);
        }
    }

    /// Submit-time flow: validate everything; on failure focus the first
    /// invalid field, on success compose the handoff, toast, and schedule
    /// the delayed reset.
    #[allow(clippy::too_many_arguments)]
    pub fn on_submit(
        &self,
        root: &mut Node,
        store: &FieldStore,
        interaction: &mut InteractionState,
        timers: &mut Timers,
        toast: &Toast,
        reflow_rev: &mut u64,
        now: Duration,
    ) -> Option<PageAction> {
        let landmarks = self.landmarks.as_ref()?;

        let mut all_valid = true;
        for (kind, slots) in self.slots(landmarks) {
            all_valid &= self.validate_field(root, store, kind, slots);
        }

        if !all_valid {
            if let Some(first) = self.first_invalid(root, landmarks) {
                interaction.set_focus(first);
            }
            return None;
        }

        let value = |slot: FieldSlots| {
            slot.input
                .map(|id| store.value_or_empty(id).trim().to_string())
                .unwrap_or_default()
        };
        let budget = landmarks
            .budget
            .map(|id| store.value_or_empty(id))
            .filter(|v| !v.is_empty())
            .unwrap_or(BUDGET_NOT_PROVIDED);

        let message = ContactMessage {
            name: value(landmarks.name),
            email: value(landmarks.email),
            company: value(landmarks.company),
            budget: budget.to_string(),
            challenge: value(landmarks.challenge),
        };

        match compose(&self.contact_email, &message) {
            Ok(target) => {
                info!(to = %self.contact_email, "contact form handed off to mail client");
                toast.show(root, reflow_rev, timers, now, MSG_REDIRECTING, ToastKind::Success);
                timers.schedule_after(now, self.reset_delay, TimerTask::ResetForm);
                Some(PageAction::Navigate(target))
            }
            Err(err) => {
                warn!(%err, "mailto composition failed; submission dropped");
                None
            }
        }
    }

    /// Delayed reset: every control back to empty. Error markers are
    /// untouched — a successful submit already cleared them.
    pub fn reset(&self, store: &mut FieldStore) {
        let Some(landmarks) = &self.landmarks else {
            return;
        };
        for (_, slots) in self.slots(landmarks) {
            if let Some(input) = slots.input {
                store.clear(input);
            }
        }
        if let Some(budget) = landmarks.budget {
            store.clear(budget);
        }
        info!("contact form reset");
    }

    fn slots(&self, landmarks: &FormLandmarks) -> [(FieldKind, FieldSlots); 4] {
        [
            (FieldKind::Name, landmarks.name),
            (FieldKind::Email, landmarks.email),
            (FieldKind::Company, landmarks.company),
            (FieldKind::Challenge, landmarks.challenge),
        ]
    }

    fn field_for(&self, target: Id) -> Option<(FieldKind, FieldSlots)> {
        let landmarks = self.landmarks.as_ref()?;
        self.slots(landmarks)
            .into_iter()
            .find(|(_, slots)| slots.input == Some(target))
    }

    /// A field whose control is missing from the document validates as fine.
    fn validate_field(
        &self,
        root: &mut Node,
        store: &FieldStore,
        kind: FieldKind,
        slots: FieldSlots,
    ) -> bool {
        let Some(input) = slots.input else {
            return true;
        };

        match validate(kind, store.value_or_empty(input)) {
            Some(message) => {
                add_class_by_id(root, input, ERROR_CLASS);
                if let Some(error) = slots.error {
                    set_text_by_id(root, error, message);
                }
                false
            }
            None => {
                remove_class_by_id(root, input, ERROR_CLASS);
                if let Some(error) = slots.error {
                    set_text_by_id(root, error, "");
                }
                true
            }
        }
    }

    fn first_invalid(&self, root: &Node, landmarks: &FormLandmarks) -> Option<Id> {
        self.slots(landmarks)
            .into_iter()
            .filter_map(|(_, slots)| slots.input)
            .find(|id| has_class_by_id(root, *id, ERROR_CLASS))
    }
}

fn initial_control_value(node: &Node) -> String {
    if node.is_element_named("textarea") {
        let mut out = String::new();
        collect_text(node, &mut out);
        return out;
    }
    attr(node, "value").unwrap_or("").to_string()
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text, .. } => out.push_str(text),
        _ => {
            for c in node.children().unwrap_or_default() {
                collect_text(c, out);
            }
        }
    }
}
