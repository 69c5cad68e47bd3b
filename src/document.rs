//! The demo landing-page document and its seeded geometry.
//!
//! The behavior layer has no layout engine, so every element it measures
//! (header, sections) gets a document-space rect registered here.

use dom::traverse::{assign_node_ids, find_element_by_html_id};
use dom::{Id, Node};
use viewport::{GeometryMap, Rect};

const PAGE_WIDTH: f32 = 1280.0;
const HEADER_HEIGHT: f32 = 72.0;
const SECTION_HEIGHT: f32 = 900.0;

fn elem(name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
        children,
    }
}

fn text(t: &str) -> Node {
    Node::Text {
        id: Id(0),
        text: t.to_string(),
    }
}

fn nav_link(href: &str, label: &str) -> Node {
    elem("a", &[("class", "nav-link"), ("href", href)], vec![text(label)])
}

fn faq_item(question: &str, answer: &str) -> Node {
    elem(
        "div",
        &[("class", "faq-item")],
        vec![
            elem(
                "button",
                &[("class", "faq-question"), ("aria-expanded", "false")],
                vec![text(question)],
            ),
            elem("div", &[("class", "faq-answer")], vec![text(answer)]),
        ],
    )
}

fn labeled_field(tag: &str, id: &str, label: &str) -> Vec<Node> {
    let error_id = format!("{id}-error");
    vec![
        elem("label", &[("for", id)], vec![text(label)]),
        elem(tag, &[("id", id), ("class", "form-input")], Vec::new()),
        elem(
            "span",
            &[("id", error_id.as_str()), ("class", "form-error")],
            Vec::new(),
        ),
    ]
}

fn contact_form() -> Node {
    let mut children = Vec::new();
    children.extend(labeled_field("input", "name", "Nome"));
    children.extend(labeled_field("input", "email", "Email"));
    children.extend(labeled_field("input", "company", "Empresa"));
    children.push(elem(
        "select",
        &[("id", "budget")],
        vec![
            elem("option", &[("value", "")], vec![text("Selecione")]),
            elem("option", &[("value", "R$ 10k - 50k")], vec![text("R$ 10k - 50k")]),
            elem("option", &[("value", "R$ 50k+")], vec![text("R$ 50k+")]),
        ],
    ));
    children.extend(labeled_field("textarea", "challenge", "Desafio/Objetivo"));
    children.push(elem(
        "button",
        &[("type", "submit"), ("class", "btn-primary")],
        vec![text("Enviar")],
    ));
    elem("form", &[("id", "contact-form")], children)
}

/// Build the landing page and register geometry for everything the behavior
/// layer measures. Node ids are assigned here so geometry can be keyed
/// before the page takes ownership.
pub fn landing_page() -> (Node, GeometryMap) {
    let mut root = Node::Document {
        id: Id(0),
        children: vec![
            elem(
                "header",
                &[("id", "header")],
                vec![
                    elem("a", &[("href", "#hero"), ("class", "logo")], vec![text("Calesco")]),
                    elem(
                        "nav",
                        &[("id", "nav-menu")],
                        vec![
                            nav_link("#hero", "Início"),
                            nav_link("#services", "Serviços"),
                            nav_link("#faq", "FAQ"),
                            nav_link("#contact", "Contato"),
                        ],
                    ),
                    elem(
                        "button",
                        &[
                            ("class", "mobile-menu-btn"),
                            ("aria-expanded", "false"),
                            ("aria-label", "Abrir menu"),
                        ],
                        vec![text("☰")],
                    ),
                ],
            ),
            elem(
                "main",
                &[],
                vec![
                    elem(
                        "section",
                        &[("id", "hero")],
                        vec![
                            elem("h1", &[], vec![text("Tecnologia sob medida")]),
                            elem(
                                "a",
                                &[("href", "#contact"), ("class", "cta")],
                                vec![text("Fale conosco")],
                            ),
                        ],
                    ),
                    elem(
                        "section",
                        &[("id", "services")],
                        vec![elem("h2", &[], vec![text("Serviços")])],
                    ),
                    elem(
                        "section",
                        &[("id", "faq")],
                        vec![
                            elem("h2", &[], vec![text("Perguntas frequentes")]),
                            faq_item(
                                "Qual o prazo médio de um projeto?",
                                "Entre 4 e 12 semanas, conforme o escopo.",
                            ),
                            faq_item(
                                "Como funciona o orçamento?",
                                "Proposta fechada após a conversa inicial.",
                            ),
                            faq_item(
                                "Vocês dão suporte após a entrega?",
                                "Sim, todo projeto inclui acompanhamento.",
                            ),
                        ],
                    ),
                    elem(
                        "section",
                        &[("id", "contact")],
                        vec![elem("h2", &[], vec![text("Contato")]), contact_form()],
                    ),
                ],
            ),
            elem(
                "div",
                &[("id", "toast"), ("class", "toast")],
                vec![elem("span", &[("class", "toast-message")], Vec::new())],
            ),
        ],
    };
    assign_node_ids(&mut root);

    let mut geometry = GeometryMap::new();
    let mut register = |fragment: &str, y: f32, height: f32| {
        if let Some(node) = find_element_by_html_id(&root, fragment) {
            geometry.insert(
                node.id(),
                Rect {
                    x: 0.0,
                    y,
                    width: PAGE_WIDTH,
                    height,
                },
            );
        }
    };

    register("header", 0.0, HEADER_HEIGHT);
    for (i, fragment) in ["hero", "services", "faq", "contact"].iter().enumerate() {
        register(fragment, i as f32 * SECTION_HEIGHT, SECTION_HEIGHT);
    }

    (root, geometry)
}
