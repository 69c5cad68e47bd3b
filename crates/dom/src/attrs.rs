//! Attribute and class-list access.
//!
//! Attribute names match ASCII case-insensitively. Class lists are stored in
//! the `class` attribute as whitespace-separated tokens; the mutators keep
//! token order stable and report whether they changed anything.

use crate::traverse::find_node_by_id_mut;
use crate::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Set or replace an attribute value. No-op on non-element nodes.
pub fn set_attr(node: &mut Node, name: &str, value: &str) {
    let Node::Element { attributes, .. } = node else {
        return;
    };
    for (k, v) in attributes.iter_mut() {
        if k.eq_ignore_ascii_case(name) {
            *v = Some(value.to_string());
            return;
        }
    }
    attributes.push((name.to_string(), Some(value.to_string())));
}

/// The element's HTML `id` attribute, trimmed; `None` if missing or blank.
pub fn html_id(node: &Node) -> Option<&str> {
    attr(node, "id").map(str::trim).filter(|s| !s.is_empty())
}

pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class")
        .map(|v| v.split_ascii_whitespace().any(|t| t == class))
        .unwrap_or(false)
}

/// Add a class token. Returns `true` if the class was not already present.
pub fn add_class(node: &mut Node, class: &str) -> bool {
    if has_class(node, class) {
        return false;
    }
    let current = attr(node, "class").unwrap_or("").trim().to_string();
    let next = if current.is_empty() {
        class.to_string()
    } else {
        format!("{current} {class}")
    };
    set_attr(node, "class", &next);
    true
}

/// Remove a class token. Returns `true` if the class was present.
pub fn remove_class(node: &mut Node, class: &str) -> bool {
    if !has_class(node, class) {
        return false;
    }
    let current = attr(node, "class").unwrap_or("");
    let next = current
        .split_ascii_whitespace()
        .filter(|t| *t != class)
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", &next);
    true
}

/// Replace an element's content with a single text node, like `textContent`.
/// The first existing text child keeps its id; otherwise the new text node
/// starts unassigned.
pub fn set_element_text(node: &mut Node, text: &str) {
    let Node::Element { children, .. } = node else {
        return;
    };

    let text_id = children
        .iter()
        .find_map(|c| match c {
            Node::Text { id, .. } => Some(*id),
            _ => None,
        })
        .unwrap_or_default();

    children.clear();
    children.push(Node::Text {
        id: text_id,
        text: text.to_string(),
    });
}

// --- By-id wrappers over a document root ---

pub fn attr_by_id<'a>(root: &'a Node, id: Id, name: &str) -> Option<&'a str> {
    crate::traverse::find_node_by_id(root, id).and_then(|n| attr(n, name))
}

pub fn has_class_by_id(root: &Node, id: Id, class: &str) -> bool {
    crate::traverse::find_node_by_id(root, id)
        .map(|n| has_class(n, class))
        .unwrap_or(false)
}

pub fn add_class_by_id(root: &mut Node, id: Id, class: &str) -> bool {
    find_node_by_id_mut(root, id)
        .map(|n| add_class(n, class))
        .unwrap_or(false)
}

pub fn remove_class_by_id(root: &mut Node, id: Id, class: &str) -> bool {
    find_node_by_id_mut(root, id)
        .map(|n| remove_class(n, class))
        .unwrap_or(false)
}

pub fn set_attr_by_id(root: &mut Node, id: Id, name: &str, value: &str) {
    if let Some(n) = find_node_by_id_mut(root, id) {
        set_attr(n, name, value);
    }
}

pub fn set_text_by_id(root: &mut Node, id: Id, text: &str) {
    if let Some(n) = find_node_by_id_mut(root, id) {
        set_element_text(n, text);
    }
}
