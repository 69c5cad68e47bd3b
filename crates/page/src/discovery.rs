//! One-shot landmark resolution.
//!
//! The behavior layer depends on the page structure contract (specific ids
//! and classes). Everything is resolved once per document; absent landmarks
//! stay `None`/empty and the dependent component degrades to a no-op.

use dom::attrs::{attr, has_class, html_id};
use dom::traverse::{find_element_by_html_id, for_each_element};
use dom::{Id, Node};

#[derive(Clone, Debug)]
pub struct AnchorLink {
    pub id: Id,
    /// Raw `href` value, fragment included (`"#services"`, possibly `"#"`).
    pub href: String,
}

#[derive(Clone, Debug)]
pub struct NavLink {
    pub id: Id,
    pub href: String,
}

#[derive(Clone, Debug)]
pub struct SectionLandmark {
    pub id: Id,
    /// The section's HTML id, i.e. the fragment nav links point at.
    pub fragment: String,
}

#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub item: Id,
    pub question: Id,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FieldSlots {
    pub input: Option<Id>,
    pub error: Option<Id>,
}

#[derive(Clone, Debug)]
pub struct FormLandmarks {
    pub form: Id,
    pub name: FieldSlots,
    pub email: FieldSlots,
    pub company: FieldSlots,
    pub challenge: FieldSlots,
    pub budget: Option<Id>,
}

#[derive(Clone, Debug, Default)]
pub struct PageLandmarks {
    pub header: Option<Id>,
    pub nav_panel: Option<Id>,
    pub menu_toggle: Option<Id>,
    pub nav_links: Vec<NavLink>,
    pub anchors: Vec<AnchorLink>,
    pub sections: Vec<SectionLandmark>,
    pub faq: Vec<FaqEntry>,
    pub form: Option<FormLandmarks>,
    pub toast: Option<Id>,
    pub toast_message: Option<Id>,
}

pub fn discover(root: &Node) -> PageLandmarks {
    let mut landmarks = PageLandmarks {
        header: id_of(root, "header"),
        nav_panel: id_of(root, "nav-menu"),
        ..PageLandmarks::default()
    };

    for_each_element(root, &mut |node| {
        if has_class(node, "mobile-menu-btn") && landmarks.menu_toggle.is_none() {
            landmarks.menu_toggle = Some(node.id());
        }

        if has_class(node, "nav-link") {
            landmarks.nav_links.push(NavLink {
                id: node.id(),
                href: attr(node, "href").unwrap_or("").to_string(),
            });
        }

        if node.is_element_named("a")
            && let Some(href) = attr(node, "href")
            && href.starts_with('#')
        {
            landmarks.anchors.push(AnchorLink {
                id: node.id(),
                href: href.to_string(),
            });
        }

        if node.is_element_named("section")
            && let Some(fragment) = html_id(node)
        {
            landmarks.sections.push(SectionLandmark {
                id: node.id(),
                fragment: fragment.to_string(),
            });
        }

        if has_class(node, "faq-item")
            && let Some(question) = first_with_class(node, "faq-question")
        {
            landmarks.faq.push(FaqEntry {
                item: node.id(),
                question,
            });
        }
    });

    landmarks.form = find_element_by_html_id(root, "contact-form").map(|form| FormLandmarks {
        form: form.id(),
        name: field_slots(root, "name"),
        email: field_slots(root, "email"),
        company: field_slots(root, "company"),
        challenge: field_slots(root, "challenge"),
        budget: id_of(root, "budget"),
    });

    if let Some(toast) = find_element_by_html_id(root, "toast") {
        landmarks.toast = Some(toast.id());
        landmarks.toast_message = first_with_class(toast, "toast-message");
    }

    landmarks
}

fn id_of(root: &Node, html_id: &str) -> Option<Id> {
    find_element_by_html_id(root, html_id).map(Node::id)
}

fn field_slots(root: &Node, field: &str) -> FieldSlots {
    FieldSlots {
        input: id_of(root, field),
        error: id_of(root, &format!("{field}-error")),
    }
}

fn first_with_class(node: &Node, class: &str) -> Option<Id> {
    let mut found = None;
    for_each_element(node, &mut |n| {
        if found.is_none() && has_class(n, class) {
            found = Some(n.id());
        }
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::traverse::assign_node_ids;

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

    fn doc(children: Vec<Node>) -> Node {
        let mut root = Node::Document {
            id: Id(0),
            children,
        };
        assign_node_ids(&mut root);
        root
    }

    #[test]
    fn empty_document_discovers_nothing() {
        let root = doc(Vec::new());
        let landmarks = discover(&root);

        assert!(landmarks.header.is_none());
        assert!(landmarks.menu_toggle.is_none());
        assert!(landmarks.nav_links.is_empty());
        assert!(landmarks.sections.is_empty());
        assert!(landmarks.form.is_none());
        assert!(landmarks.toast.is_none());
    }

    #[test]
    fn anchors_include_bare_and_fragment_hrefs_but_not_external() {
        let root = doc(vec![
            elem("a", vec![("href", "#services")], Vec::new()),
            elem("a", vec![("href", "#")], Vec::new()),
            elem("a", vec![("href", "https://example.com")], Vec::new()),
            elem("a", Vec::new(), Vec::new()),
        ]);
        let landmarks = discover(&root);

        let hrefs: Vec<_> = landmarks.anchors.iter().map(|a| a.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#services", "#"]);
    }

    #[test]
    fn faq_items_without_a_question_are_skipped() {
        let root = doc(vec![
            elem(
                "div",
                vec![("class", "faq-item")],
                vec![elem("button", vec![("class", "faq-question")], Vec::new())],
            ),
            elem("div", vec![("class", "faq-item")], Vec::new()),
        ]);
        let landmarks = discover(&root);
        assert_eq!(landmarks.faq.len(), 1);
    }

    #[test]
    fn form_fields_resolve_with_their_error_slots() {
        let root = doc(vec![elem(
            "form",
            vec![("id", "contact-form")],
            vec![
                elem("input", vec![("id", "name")], Vec::new()),
                elem("span", vec![("id", "name-error")], Vec::new()),
                elem("input", vec![("id", "email")], Vec::new()),
            ],
        )]);
        let landmarks = discover(&root);

        let form = landmarks.form.expect("form landmarks");
        assert!(form.name.input.is_some());
        assert!(form.name.error.is_some());
        assert!(form.email.input.is_some());
        assert!(form.email.error.is_none());
        assert!(form.company.input.is_none());
        assert!(form.budget.is_none());
    }

    #[test]
    fn toast_message_slot_is_scoped_to_the_toast() {
        let root = doc(vec![
            elem("span", vec![("class", "toast-message")], Vec::new()),
            elem(
                "div",
                vec![("id", "toast")],
                vec![elem("span", vec![("class", "toast-message")], Vec::new())],
            ),
        ]);
        let landmarks = discover(&root);

        let toast = landmarks.toast.expect("toast");
        let slot = landmarks.toast_message.expect("slot");
        assert!(dom::traverse::contains(&root, toast, slot));
    }
}
