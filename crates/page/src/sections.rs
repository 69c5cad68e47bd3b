use crate::discovery::{NavLink, SectionLandmark};
use dom::Node;
use dom::attrs::{add_class_by_id, remove_class_by_id};
use tracing::debug;
use viewport::{GeometryMap, Viewport};

const ACTIVE_CLASS: &str = "active";

/// Active-section tracking over the viewport detection band.
///
/// A section becomes active when its rect *enters* the band (transition
/// tracking, like intersection-observer callbacks); the matching nav link is
/// the only one left carrying the active class. Two sections straddling the
/// band therefore do not flip-flop while the page is idle.
#[derive(Debug)]
pub struct ActiveSection {
    sections: Vec<SectionLandmark>,
    nav_links: Vec<NavLink>,
    in_band: Vec<bool>,
    /// Index of the currently active section. Single source of truth for the
    /// at-most-one-active invariant; the nav-link classes are derived from it.
    active: Option<usize>,
    band_top_fraction: f32,
    band_bottom_fraction: f32,
}

impl ActiveSection {
    pub fn new(
        sections: Vec<SectionLandmark>,
        nav_links: Vec<NavLink>,
        band_top_fraction: f32,
        band_bottom_fraction: f32,
    ) -> Self {
        let in_band = vec![false; sections.len()];
        Self {
            sections,
            nav_links,
            in_band,
            active: None,
            band_top_fraction,
            band_bottom_fraction,
        }
    }

    /// Fragment of the currently active section, if any.
    pub fn active_fragment(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.sections.get(i))
            .map(|s| s.fragment.as_str())
    }

    /// Re-check every observed section against the current band and apply
    /// entry transitions. Call whenever the scroll offset changes, plus once
    /// at construction.
    pub fn evaluate(&mut self, root: &mut Node, viewport: &Viewport, geometry: &GeometryMap) {
        if self.sections.is_empty() {
            return;
        }

        let band = viewport.band(self.band_top_fraction, self.band_bottom_fraction);

        for (i, section) in self.sections.iter().enumerate() {
            let intersecting = geometry
                .get(section.id)
                .map(|rect| band.intersects(rect))
                .unwrap_or(false);

            if intersecting && !self.in_band[i] {
                debug!(section = %section.fragment, "section entered detection band");
                self.active = Some(i);
                set_active_link(root, &self.nav_links, &section.fragment);
            }
            self.in_band[i] = intersecting;
        }
    }
}

/// Sweep: clear the marker everywhere, then set it on the one link whose
/// href targets the fragment. Keeps the at-most-one-active invariant by
/// construction.
fn set_active_link(root: &mut Node, nav_links: &[NavLink], fragment: &str) {
    let target = format!("#{fragment}");
    for link in nav_links {
        remove_class_by_id(root, link.id, ACTIVE_CLASS);
        if link.href == target {
            add_class_by_id(root, link.id, ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::attrs::has_class_by_id;
    use dom::traverse::assign_node_ids;
    use dom::{Id, Node};
    use viewport::Rect;

    fn link(href: &str) -> Node {
        Node::Element {
            id: Id(0),
            name: "a".to_string(),
            attributes: vec![
                ("class".to_string(), Some("nav-link".to_string())),
                ("href".to_string(), Some(href.to_string())),
            ],
            children: Vec::new(),
        }
    }

    fn section(fragment: &str) -> Node {
        Node::Element {
            id: Id(0),
            name: "section".to_string(),
            attributes: vec![("id".to_string(), Some(fragment.to_string()))],
            children: Vec::new(),
        }
    }

    struct Fixture {
        root: Node,
        tracker: ActiveSection,
        geometry: GeometryMap,
        viewport: Viewport,
        links: Vec<Id>,
    }

    fn fixture() -> Fixture {
        let mut root = Node::Document {
            id: Id(0),
            children: vec![
                link("#hero"),
                link("#services"),
                section("hero"),
                section("services"),
            ],
        };
        assign_node_ids(&mut root);
        let landmarks = crate::discovery::discover(&root);

        let mut geometry = GeometryMap::new();
        geometry.insert(
            landmarks.sections[0].id,
            Rect {
                x: 0.0,
                y: 0.0,
                width: 1280.0,
                height: 900.0,
            },
        );
        geometry.insert(
            landmarks.sections[1].id,
            Rect {
                x: 0.0,
                y: 900.0,
                width: 1280.0,
                height: 900.0,
            },
        );

        let links = landmarks.nav_links.iter().map(|l| l.id).collect();
        let tracker = ActiveSection::new(
            landmarks.sections.clone(),
            landmarks.nav_links.clone(),
            0.2,
            0.7,
        );

        Fixture {
            root,
            tracker,
            geometry,
            viewport: Viewport::new(1280.0, 800.0, 1800.0),
            links,
        }
    }

    fn active_count(fx: &Fixture) -> usize {
        fx.links
            .iter()
            .filter(|id| has_class_by_id(&fx.root, **id, "active"))
            .count()
    }

    #[test]
    fn section_entering_the_band_activates_its_link() {
        let mut fx = fixture();

        fx.tracker
            .evaluate(&mut fx.root, &fx.viewport, &fx.geometry);
        assert!(has_class_by_id(&fx.root, fx.links[0], "active"));
        assert_eq!(active_count(&fx), 1);

        // Scroll until the second section occupies the band.
        fx.viewport.set_scroll_y(1000.0);
        fx.tracker
            .evaluate(&mut fx.root, &fx.viewport, &fx.geometry);
        assert!(has_class_by_id(&fx.root, fx.links[1], "active"));
        assert_eq!(active_count(&fx), 1);
    }

    #[test]
    fn staying_in_the_band_does_not_retrigger() {
        let mut fx = fixture();
        fx.tracker
            .evaluate(&mut fx.root, &fx.viewport, &fx.geometry);

        // Manually steal the marker; an idle re-evaluation must not restore
        // it because nothing entered the band.
        dom::attrs::remove_class_by_id(&mut fx.root, fx.links[0], "active");
        fx.tracker
            .evaluate(&mut fx.root, &fx.viewport, &fx.geometry);
        assert_eq!(active_count(&fx), 0);
    }

    #[test]
    fn no_sections_means_no_work() {
        let mut fx = fixture();
        let mut tracker = ActiveSection::new(Vec::new(), Vec::new(), 0.2, 0.7);
        tracker.evaluate(&mut fx.root, &fx.viewport, &fx.geometry);
        assert_eq!(active_count(&fx), 0);
    }

    #[test]
    fn sections_without_geometry_never_activate() {
        let mut fx = fixture();
        fx.tracker
            .evaluate(&mut fx.root, &fx.viewport, &GeometryMap::new());
        assert_eq!(active_count(&fx), 0);
    }
}
