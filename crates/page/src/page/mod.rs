//! Page-level orchestration.
//!
//! Invariants:
//! - All interactive state lives on the document (classes, attributes, text
//!   slots) or in the small owned stores here; each flag is written by
//!   exactly one component.
//! - `on_event` handles one discrete input event and returns at most one
//!   outbound action (the mail-client handoff).
//! - `on_frame` does the per-frame work: smooth-scroll sampling, the
//!   coalesced header evaluation, and due timers. The page never reads a
//!   clock; the embedder passes time in.

use crate::config::PageConfig;
use crate::discovery::{self, PageLandmarks};
use crate::events::{Key, PageAction, UiEvent};
use crate::faq::FaqAccordion;
use crate::form::{ContactForm, FieldStore};
use crate::header::HeaderScroll;
use crate::history::History;
use crate::interaction::InteractionState;
use crate::menu::MobileMenu;
use crate::scheduler::{TimerTask, Timers};
use crate::sections::ActiveSection;
use crate::toast::{Toast, ToastKind};
use dom::traverse::assign_node_ids;
use dom::{Id, Node};
use std::time::Duration;
use tracing::debug;
use viewport::{GeometryMap, ScrollAnimation, Viewport};

mod scroll;

pub struct Page {
    root: Node,
    geometry: GeometryMap,
    viewport: Viewport,
    landmarks: PageLandmarks,
    config: PageConfig,

    history: History,
    interaction: InteractionState,
    timers: Timers,
    fields: FieldStore,
    scroll_anim: Option<ScrollAnimation>,
    reflow_rev: u64,

    header: HeaderScroll,
    sections: ActiveSection,
    menu: MobileMenu,
    faq: FaqAccordion,
    form: ContactForm,
    toast: Toast,
}

impl Page {
    /// Build the behavior layer over a document. Resolves landmarks once,
    /// seeds field values, and runs the initial header/section evaluations
    /// so a deep-linked load (a viewport that starts scrolled) is reflected
    /// before the first frame.
    pub fn new(
        mut root: Node,
        geometry: GeometryMap,
        viewport: Viewport,
        config: PageConfig,
    ) -> Self {
        assign_node_ids(&mut root);
        let landmarks = discovery::discover(&root);

        let header = HeaderScroll::new(landmarks.header, config.header_scroll_threshold);
        let mut sections = ActiveSection::new(
            landmarks.sections.clone(),
            landmarks.nav_links.clone(),
            config.band_top_fraction,
            config.band_bottom_fraction,
        );
        let menu = MobileMenu::new(landmarks.menu_toggle, landmarks.nav_panel);
        let faq = FaqAccordion::new(landmarks.faq.clone());
        let form = ContactForm::new(
            landmarks.form.clone(),
            config.contact_email.clone(),
            config.form_reset_delay(),
        );
        let toast = Toast::new(
            landmarks.toast,
            landmarks.toast_message,
            config.toast_hide_delay(),
        );

        let mut fields = FieldStore::new();
        form.seed_values(&root, &mut fields);

        // Initial checks: the header reflects the load-time offset, sections
        // get their first intersection pass.
        header.evaluate(&mut root, viewport.scroll_y());
        sections.evaluate(&mut root, &viewport, &geometry);

        debug!(
            nav_links = landmarks.nav_links.len(),
            sections = landmarks.sections.len(),
            faq_items = landmarks.faq.len(),
            has_form = landmarks.form.is_some(),
            has_toast = landmarks.toast.is_some(),
            "page behavior initialized"
        );

        Self {
            root,
            geometry,
            viewport,
            landmarks,
            config,
            history: History::new(),
            interaction: InteractionState::default(),
            timers: Timers::new(),
            fields,
            scroll_anim: None,
            reflow_rev: 0,
            header,
            sections,
            menu,
            faq,
            form,
            toast,
        }
    }

    // -- Event Handling --

    pub fn on_event(&mut self, event: UiEvent, now: Duration) -> Option<PageAction> {
        match event {
            UiEvent::Click { target } => {
                self.on_click(target, now);
                None
            }
            UiEvent::KeyDown { key, target } => {
                self.on_key_down(key, target);
                None
            }
            UiEvent::Blur { target } => {
                self.form.on_blur(&mut self.root, &self.fields, target);
                None
            }
            UiEvent::Input { target, value } => {
                self.fields.set(target, value);
                self.form.on_input(&mut self.root, &self.fields, target);
                None
            }
            UiEvent::Submit => self.form.on_submit(
                &mut self.root,
                &self.fields,
                &mut self.interaction,
                &mut self.timers,
                &self.toast,
                &mut self.reflow_rev,
                now,
            ),
            UiEvent::Scroll { y } => {
                // A real scroll (wheel, drag) takes over from any smooth
                // animation still in flight.
                self.scroll_anim = None;
                if self.viewport.set_scroll_y(y) {
                    self.after_scroll_change();
                }
                None
            }
        }
    }

    /// Per-frame work. Animation first so the header and sections see the
    /// freshest offset, then the coalesced header task, then due timers.
    pub fn on_frame(&mut self, now: Duration) {
        if let Some(anim) = self.scroll_anim {
            if self.viewport.set_scroll_y(anim.sample(now)) {
                self.after_scroll_change();
            }
            if anim.finished(now) {
                self.scroll_anim = None;
            }
        }

        self.header.run_frame(&mut self.root, self.viewport.scroll_y());

        for task in self.timers.take_due(now) {
            match task {
                TimerTask::ResetForm => self.form.reset(&mut self.fields),
                TimerTask::HideToast => self.toast.hide(&mut self.root),
            }
        }
    }

    /// Show a transient notification. The contact form uses this internally;
    /// embedders may too.
    pub fn show_toast(&mut self, now: Duration, message: &str, kind: ToastKind) {
        self.toast.show(
            &mut self.root,
            &mut self.reflow_rev,
            &mut self.timers,
            now,
            message,
            kind,
        );
    }

    fn on_click(&mut self, target: Option<Id>, now: Duration) {
        let Some(target) = target else {
            // A pointer press that hit no node still counts as an outside
            // click for the menu.
            self.menu.close_if_outside(&mut self.root, None);
            return;
        };

        self.on_anchor_click(target, now);

        if self.menu.is_toggle_target(&self.root, target) {
            self.menu.toggle(&mut self.root);
        } else {
            self.menu.close_if_outside(&mut self.root, Some(target));
        }

        self.faq.on_click(&mut self.root, target);
    }

    fn on_key_down(&mut self, key: Key, target: Option<Id>) {
        if key == Key::Escape {
            self.menu.on_escape(&mut self.root, &mut self.interaction);
        }
        if let Some(target) = target {
            self.faq.on_key(&mut self.root, target, key);
        }
    }

    fn after_scroll_change(&mut self) {
        self.header.on_scroll();
        self.sections
            .evaluate(&mut self.root, &self.viewport, &self.geometry);
    }

    // -- Read access for embedders and tests --

    pub fn document(&self) -> &Node {
        &self.root
    }

    pub fn landmarks(&self) -> &PageLandmarks {
        &self.landmarks
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn focused_node(&self) -> Option<Id> {
        self.interaction.focused_node_id
    }

    pub fn field_value(&self, id: Id) -> &str {
        self.fields.value_or_empty(id)
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu.is_open(&self.root)
    }

    /// Fragment of the section currently owning the detection band.
    pub fn active_section(&self) -> Option<&str> {
        self.sections.active_fragment()
    }

    /// The FAQ item currently expanded, if any.
    pub fn open_faq_item(&self) -> Option<Id> {
        self.faq.open_item()
    }

    /// Target of the smooth scroll currently in flight, if any.
    pub fn scroll_target(&self) -> Option<f32> {
        self.scroll_anim.map(|a| a.target())
    }

    /// Bumped whenever a style recalculation was forced (toast restarts).
    pub fn reflow_revision(&self) -> u64 {
        self.reflow_rev
    }
}
