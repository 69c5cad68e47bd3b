use dom::attrs::{add_class_by_id, remove_class_by_id};
use dom::{Id, Node};

const SCROLLED_CLASS: &str = "scrolled";

/// Scroll-position class on the page header.
///
/// Scroll events only arm a latch; the class is evaluated at most once per
/// frame (the requestAnimationFrame discipline of the original page). One
/// immediate evaluation happens at construction so a deep-linked load is
/// reflected before the first frame.
#[derive(Debug)]
pub struct HeaderScroll {
    header: Option<Id>,
    threshold: f32,
    update_queued: bool,
}

impl HeaderScroll {
    pub fn new(header: Option<Id>, threshold: f32) -> Self {
        Self {
            header,
            threshold,
            update_queued: false,
        }
    }

    /// Called on every scroll change; coalesces into one frame task.
    pub fn on_scroll(&mut self) {
        self.update_queued = true;
    }

    /// Runs the queued evaluation, if any. Returns whether one ran.
    pub fn run_frame(&mut self, root: &mut Node, scroll_y: f32) -> bool {
        if !self.update_queued {
            return false;
        }
        self.update_queued = false;
        self.evaluate(root, scroll_y);
        true
    }

    /// Immediate evaluation, bypassing the frame latch.
    pub fn evaluate(&self, root: &mut Node, scroll_y: f32) {
        let Some(header) = self.header else {
            return;
        };
        if scroll_y > self.threshold {
            add_class_by_id(root, header, SCROLLED_CLASS);
        } else {
            remove_class_by_id(root, header, SCROLLED_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::attrs::has_class_by_id;
    use dom::traverse::assign_node_ids;

    fn header_doc() -> (Node, Id) {
        let mut root = Node::Document {
            id: Id(0),
            children: vec![Node::Element {
                id: Id(0),
                name: "header".to_string(),
                attributes: vec![("id".to_string(), Some("header".to_string()))],
                children: Vec::new(),
            }],
        };
        assign_node_ids(&mut root);
        let id = root.children().unwrap()[0].id();
        (root, id)
    }

    #[test]
    fn class_follows_the_threshold() {
        let (mut root, header) = header_doc();
        let hs = HeaderScroll::new(Some(header), 50.0);

        hs.evaluate(&mut root, 51.0);
        assert!(has_class_by_id(&root, header, "scrolled"));

        hs.evaluate(&mut root, 50.0);
        assert!(!has_class_by_id(&root, header, "scrolled"));
    }

    #[test]
    fn scroll_events_coalesce_to_one_evaluation_per_frame() {
        let (mut root, header) = header_doc();
        let mut hs = HeaderScroll::new(Some(header), 50.0);

        hs.on_scroll();
        hs.on_scroll();
        hs.on_scroll();

        assert!(hs.run_frame(&mut root, 120.0));
        assert!(has_class_by_id(&root, header, "scrolled"));

        // Latch consumed: nothing runs until the next scroll.
        assert!(!hs.run_frame(&mut root, 0.0));
        assert!(has_class_by_id(&root, header, "scrolled"));
    }

    #[test]
    fn missing_header_is_inert() {
        let (mut root, _) = header_doc();
        let mut hs = HeaderScroll::new(None, 50.0);
        hs.on_scroll();
        assert!(hs.run_frame(&mut root, 500.0));
    }
}
