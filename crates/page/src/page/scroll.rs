use super::Page;
use dom::Id;
use dom::traverse::{contains, find_element_by_html_id};
use std::time::Duration;
use tracing::debug;
use viewport::ScrollAnimation;

impl Page {
    // -- In-page anchor navigation --

    /// Click routed through any `<a href="#…">`. Returns whether default
    /// navigation was suppressed.
    ///
    /// Bare (`#`) and dangling fragments fall through untouched — for a
    /// same-page anchor the default is an effective no-op anyway. A handled
    /// click closes the mobile menu first so the target is visible, starts a
    /// smooth scroll that parks the target just below the fixed header, and
    /// records the fragment without re-triggering any scrolling.
    pub(super) fn on_anchor_click(&mut self, target: Id, now: Duration) -> bool {
        let Some(anchor) = self
            .landmarks
            .anchors
            .iter()
            .find(|a| contains(&self.root, a.id, target))
        else {
            return false;
        };
        let href = anchor.href.clone();

        // Skip if it's just "#" or empty
        if href == "#" || href.is_empty() {
            return false;
        }
        let Some(fragment) = href.strip_prefix('#') else {
            return false;
        };
        let Some(section) = find_element_by_html_id(&self.root, fragment) else {
            return false;
        };
        let section_id = section.id();

        if self.menu.is_open(&self.root) {
            self.menu.close(&mut self.root);
        }

        let header_height = self
            .landmarks
            .header
            .map(|h| self.geometry.height_of(h))
            .unwrap_or(0.0);
        let rect = self.geometry.get(section_id).unwrap_or_default();
        let target_y = self.viewport.clamp_target(rect.y - header_height);

        self.scroll_anim = Some(ScrollAnimation::new(
            self.viewport.scroll_y(),
            target_y,
            now,
            self.config.smooth_scroll_duration(),
        ));
        self.history.push(&href);
        debug!(%href, target_y, "anchor navigation started");
        true
    }
}
