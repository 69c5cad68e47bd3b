use crate::attrs::html_id;
use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id(0) {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    for c in node.children().unwrap_or_default() {
        if let Some(found) = find_node_by_id(c, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            if let Some(found) = find_node_by_id_mut(c, id) {
                return Some(found);
            }
        }
    }
    None
}

/// First element whose HTML `id` attribute equals `target` (document order).
/// This is the fragment-resolution primitive: `#services` resolves via
/// `find_element_by_html_id(root, "services")`.
pub fn find_element_by_html_id<'a>(node: &'a Node, target: &str) -> Option<&'a Node> {
    if let Node::Element { .. } = node
        && html_id(node) == Some(target)
    {
        return Some(node);
    }
    for c in node.children().unwrap_or_default() {
        if let Some(found) = find_element_by_html_id(c, target) {
            return Some(found);
        }
    }
    None
}

/// Whether `target` lies inside the subtree rooted at `ancestor`
/// (inclusive, like `Element::contains`).
pub fn contains(root: &Node, ancestor: Id, target: Id) -> bool {
    let Some(subtree) = find_node_by_id(root, ancestor) else {
        return false;
    };
    find_node_by_id(subtree, target).is_some()
}

/// Depth-first visit of every element node.
pub fn for_each_element<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    if let Node::Element { .. } = node {
        f(node);
    }
    for c in node.children().unwrap_or_default() {
        for_each_element(c, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Node {
        Node::Element {
            id: Id(0),
            name: name.to_string(),
            attributes,
            children,
        }
    }

    fn id_attr(value: &str) -> Vec<(String, Option<String>)> {
        vec![("id".to_string(), Some(value.to_string()))]
    }

    fn doc(children: Vec<Node>) -> Node {
        Node::Document {
            id: Id(0),
            children,
        }
    }

    #[test]
    fn assign_node_ids_only_touches_unset_nodes() {
        let mut root = doc(vec![
            elem("header", Vec::new(), Vec::new()),
            Node::Element {
                id: Id(42),
                name: "nav".to_string(),
                attributes: Vec::new(),
                children: Vec::new(),
            },
        ]);
        assign_node_ids(&mut root);

        assert_ne!(root.id(), Id(0));
        let children = root.children().unwrap();
        assert_ne!(children[0].id(), Id(0));
        assert_eq!(children[1].id(), Id(42));
    }

    #[test]
    fn find_element_by_html_id_returns_first_match() {
        let mut root = doc(vec![
            elem("section", id_attr("hero"), Vec::new()),
            elem("section", id_attr("services"), Vec::new()),
            elem("div", id_attr("services"), Vec::new()),
        ]);
        assign_node_ids(&mut root);

        let found = find_element_by_html_id(&root, "services").unwrap();
        assert!(found.is_element_named("section"));
        assert!(find_element_by_html_id(&root, "missing").is_none());
    }

    #[test]
    fn contains_is_inclusive_of_the_ancestor_itself() {
        let mut root = doc(vec![elem(
            "nav",
            id_attr("nav-menu"),
            vec![elem("a", Vec::new(), Vec::new())],
        )]);
        assign_node_ids(&mut root);

        let nav = find_element_by_html_id(&root, "nav-menu").unwrap().id();
        let link = root.children().unwrap()[0].children().unwrap()[0].id();

        assert!(contains(&root, nav, link));
        assert!(contains(&root, nav, nav));
        assert!(!contains(&root, link, nav));
    }

    #[test]
    fn for_each_element_skips_text_nodes() {
        let mut root = doc(vec![elem(
            "p",
            Vec::new(),
            vec![Node::Text {
                id: Id(0),
                text: "hi".to_string(),
            }],
        )]);
        assign_node_ids(&mut root);

        let mut names = Vec::new();
        for_each_element(&root, &mut |n| {
            if let Node::Element { name, .. } = n {
                names.push(name.clone());
            }
        });
        assert_eq!(names, vec!["p".to_string()]);
    }
}
