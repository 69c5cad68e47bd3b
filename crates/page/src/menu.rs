use crate::interaction::InteractionState;
use dom::attrs::{add_class_by_id, has_class_by_id, remove_class_by_id, set_attr_by_id};
use dom::traverse::contains;
use dom::{Id, Node};
use tracing::debug;

const OPEN_CLASS: &str = "active";
const LABEL_OPEN: &str = "Fechar menu";
const LABEL_CLOSED: &str = "Abrir menu";

/// Collapsible mobile navigation panel.
///
/// The open flag lives on the panel as a class; the toggle mirrors it into
/// `aria-expanded` and an `aria-label` naming the action a press would take.
/// Inert unless both the toggle and the panel exist.
#[derive(Debug)]
pub struct MobileMenu {
    toggle: Option<Id>,
    panel: Option<Id>,
}

impl MobileMenu {
    pub fn new(toggle: Option<Id>, panel: Option<Id>) -> Self {
        Self { toggle, panel }
    }

    fn ids(&self) -> Option<(Id, Id)> {
        Some((self.toggle?, self.panel?))
    }

    pub fn is_open(&self, root: &Node) -> bool {
        self.ids()
            .map(|(_, panel)| has_class_by_id(root, panel, OPEN_CLASS))
            .unwrap_or(false)
    }

    /// Whether a click on `target` belongs to the toggle control.
    pub fn is_toggle_target(&self, root: &Node, target: Id) -> bool {
        self.ids()
            .map(|(toggle, _)| contains(root, toggle, target))
            .unwrap_or(false)
    }

    pub fn toggle(&self, root: &mut Node) {
        if self.is_open(root) {
            self.close(root);
        } else {
            self.open(root);
        }
    }

    pub fn open(&self, root: &mut Node) {
        let Some((toggle, panel)) = self.ids() else {
            return;
        };
        add_class_by_id(root, panel, OPEN_CLASS);
        set_attr_by_id(root, toggle, "aria-expanded", "true");
        set_attr_by_id(root, toggle, "aria-label", LABEL_OPEN);
        debug!("mobile menu opened");
    }

    pub fn close(&self, root: &mut Node) {
        let Some((toggle, panel)) = self.ids() else {
            return;
        };
        remove_class_by_id(root, panel, OPEN_CLASS);
        set_attr_by_id(root, toggle, "aria-expanded", "false");
        set_attr_by_id(root, toggle, "aria-label", LABEL_CLOSED);
        debug!("mobile menu closed");
    }

    /// Document-level click while open: close unless the click landed inside
    /// the panel or the toggle. `None` means the pointer hit no node at all,
    /// which counts as outside.
    pub fn close_if_outside(&self, root: &mut Node, target: Option<Id>) {
        let Some((toggle, panel)) = self.ids() else {
            return;
        };
        if !self.is_open(root) {
            return;
        }
        let inside = target
            .map(|t| contains(root, panel, t) || contains(root, toggle, t))
            .unwrap_or(false);
        if !inside {
            self.close(root);
        }
    }

    /// Escape while open: close and hand keyboard focus back to the toggle.
    /// Returns whether the key was consumed.
    pub fn on_escape(&self, root: &mut Node, interaction: &mut InteractionState) -> bool {
        let Some((toggle, _)) = self.ids() else {
            return false;
        };
        if !self.is_open(root) {
            return false;
        }
        self.close(root);
        interaction.set_focus(toggle);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::attrs::attr_by_id;
    use dom::traverse::assign_node_ids;

    struct Fixture {
        root: Node,
        menu: MobileMenu,
        toggle: Id,
        panel: Id,
        link: Id,
        outside: Id,
    }

    fn elem(name: &str, attributes: Vec<(&str, &str)>, children: Vec<Node>) -> Node {
        Node::Element {
            id: Id(0),
            name: name.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
            children,
        }
    }

    fn fixture() -> Fixture {
        let mut root = Node::Document {
            id: Id(0),
            children: vec![
                elem(
                    "button",
                    vec![("class", "mobile-menu-btn"), ("aria-expanded", "false")],
                    Vec::new(),
                ),
                elem(
                    "nav",
                    vec![("id", "nav-menu")],
                    vec![elem("a", vec![("class", "nav-link")], Vec::new())],
                ),
                elem("footer", Vec::new(), Vec::new()),
            ],
        };
        assign_node_ids(&mut root);

        let children = root.children().unwrap();
        let toggle = children[0].id();
        let panel = children[1].id();
        let link = children[1].children().unwrap()[0].id();
        let outside = children[2].id();

        Fixture {
            menu: MobileMenu::new(Some(toggle), Some(panel)),
            root,
            toggle,
            panel,
            link,
            outside,
        }
    }

    #[test]
    fn open_and_close_mirror_accessibility_attributes() {
        let mut fx = fixture();

        fx.menu.open(&mut fx.root);
        assert!(fx.menu.is_open(&fx.root));
        assert_eq!(attr_by_id(&fx.root, fx.toggle, "aria-expanded"), Some("true"));
        assert_eq!(
            attr_by_id(&fx.root, fx.toggle, "aria-label"),
            Some("Fechar menu")
        );

        fx.menu.close(&mut fx.root);
        assert!(!fx.menu.is_open(&fx.root));
        assert_eq!(attr_by_id(&fx.root, fx.toggle, "aria-expanded"), Some("false"));
        assert_eq!(
            attr_by_id(&fx.root, fx.toggle, "aria-label"),
            Some("Abrir menu")
        );
    }

    #[test]
    fn outside_click_closes_only_when_truly_outside() {
        let mut fx = fixture();
        fx.menu.open(&mut fx.root);

        // Click inside the panel: stays open.
        fx.menu.close_if_outside(&mut fx.root, Some(fx.link));
        assert!(fx.menu.is_open(&fx.root));

        // Click on the panel element itself: stays open.
        fx.menu.close_if_outside(&mut fx.root, Some(fx.panel));
        assert!(fx.menu.is_open(&fx.root));

        // Click elsewhere: closes.
        fx.menu.close_if_outside(&mut fx.root, Some(fx.outside));
        assert!(!fx.menu.is_open(&fx.root));
    }

    #[test]
    fn bare_document_click_counts_as_outside() {
        let mut fx = fixture();
        fx.menu.open(&mut fx.root);
        fx.menu.close_if_outside(&mut fx.root, None);
        assert!(!fx.menu.is_open(&fx.root));
    }

    #[test]
    fn escape_closes_and_returns_focus_to_the_toggle() {
        let mut fx = fixture();
        let mut interaction = InteractionState::default();

        // Closed: Escape is not consumed.
        assert!(!fx.menu.on_escape(&mut fx.root, &mut interaction));

        fx.menu.open(&mut fx.root);
        assert!(fx.menu.on_escape(&mut fx.root, &mut interaction));
        assert!(!fx.menu.is_open(&fx.root));
        assert_eq!(interaction.focused_node_id, Some(fx.toggle));
    }

    #[test]
    fn missing_elements_make_the_menu_inert() {
        let mut fx = fixture();
        let menu = MobileMenu::new(None, Some(fx.panel));

        menu.toggle(&mut fx.root);
        assert!(!menu.is_open(&fx.root));

        let mut interaction = InteractionState::default();
        assert!(!menu.on_escape(&mut fx.root, &mut interaction));
    }
}
