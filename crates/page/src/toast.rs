use crate::scheduler::{TimerTask, Timers};
use dom::attrs::{add_class_by_id, remove_class_by_id, set_text_by_id};
use dom::{Id, Node};
use std::time::Duration;
use tracing::info;

const SHOW_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn as_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Transient notification. Re-triggering removes and re-adds the visible
/// marker with a forced style recalculation in between, so repeated toasts
/// restart their CSS animation. Every call schedules its own unconditional
/// hide; content is last-write-wins.
#[derive(Debug)]
pub struct Toast {
    container: Option<Id>,
    message_slot: Option<Id>,
    hide_after: Duration,
}

impl Toast {
    pub fn new(container: Option<Id>, message_slot: Option<Id>, hide_after: Duration) -> Self {
        Self {
            container,
            message_slot,
            hide_after,
        }
    }

    pub fn show(
        &self,
        root: &mut Node,
        reflow_rev: &mut u64,
        timers: &mut Timers,
        now: Duration,
        message: &str,
        kind: ToastKind,
    ) {
        let Some(container) = self.container else {
            return;
        };

        if let Some(slot) = self.message_slot {
            set_text_by_id(root, slot, message);
        }

        remove_class_by_id(root, container, SHOW_CLASS);
        remove_class_by_id(root, container, ToastKind::Success.as_class());
        remove_class_by_id(root, container, ToastKind::Error.as_class());

        add_class_by_id(root, container, kind.as_class());

        // Force reflow so re-adding the visible marker restarts the animation.
        *reflow_rev = reflow_rev.wrapping_add(1);

        add_class_by_id(root, container, SHOW_CLASS);
        timers.schedule_after(now, self.hide_after, TimerTask::HideToast);
        info!(%message, "toast shown");
    }

    /// Timer-driven: drop the visible marker, whatever is currently showing.
    pub fn hide(&self, root: &mut Node) {
        if let Some(container) = self.container {
            remove_class_by_id(root, container, SHOW_CLASS);
        }
    }
}
