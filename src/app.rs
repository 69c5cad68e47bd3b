//! Demo shell: a ~60 Hz tick loop over an mpsc channel driving a scripted
//! walk through every page behavior, logging what a browser chrome would do
//! with the outcome.

use crate::config::AppConfig;
use crate::document;
use anyhow::Result;
use page::{Key, Page, PageAction, UiEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use viewport::Viewport;

enum AppEvent {
    Tick,
}

/// Pause after the last scripted event so the delayed form reset and the
/// toast auto-hide get to run before shutdown.
const SHUTDOWN_SLACK: Duration = Duration::from_millis(4600);

pub fn run(cfg: AppConfig) -> Result<()> {
    let (root, geometry) = document::landing_page();
    let viewport = Viewport::new(
        cfg.viewport.width,
        cfg.viewport.height,
        geometry.content_height(),
    );
    let mut page = Page::new(root, geometry, viewport, cfg.page);

    let script = demo_script(&page);
    let shutdown_at = script
        .last()
        .map(|(at, _)| *at + SHUTDOWN_SLACK)
        .unwrap_or_default();
    let mut script = script.into_iter().peekable();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    thread::spawn(move || {
        let frame = Duration::from_millis(16); // ~60Hz
        loop {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            thread::sleep(frame);
        }
    });

    let start = Instant::now();
    while let Ok(AppEvent::Tick) = rx.recv() {
        let now = start.elapsed();

        while let Some((at, _)) = script.peek() {
            if *at > now {
                break;
            }
            let Some((_, event)) = script.next() else {
                break;
            };
            debug!(?event, "dispatching scripted event");
            if let Some(PageAction::Navigate(target)) = page.on_event(event, now) {
                info!(%target, "opening mail client");
            }
        }

        page.on_frame(now);

        if now >= shutdown_at {
            break;
        }
    }

    info!(
        scroll_y = page.viewport().scroll_y(),
        fragment = page.history().current().unwrap_or(""),
        "demo finished"
    );
    Ok(())
}

/// Scripted pass over every behavior: header state, smooth scroll, menu,
/// accordion, validation, handoff. Absent landmarks simply drop their steps.
fn demo_script(page: &Page) -> Vec<(Duration, UiEvent)> {
    let landmarks = page.landmarks();
    let mut script: Vec<(Duration, UiEvent)> = Vec::new();

    // Header scroll state, both directions.
    at(&mut script, 400, UiEvent::Scroll { y: 120.0 });
    at(&mut script, 800, UiEvent::Scroll { y: 0.0 });

    // Smooth anchor navigation via the services nav link.
    if let Some(link) = landmarks.nav_links.iter().find(|l| l.href == "#services") {
        at(
            &mut script,
            1200,
            UiEvent::Click {
                target: Some(link.id),
            },
        );
    }

    // Mobile menu: open, then dismiss with Escape.
    if let Some(toggle) = landmarks.menu_toggle {
        at(
            &mut script,
            2200,
            UiEvent::Click {
                target: Some(toggle),
            },
        );
        at(
            &mut script,
            2600,
            UiEvent::KeyDown {
                key: Key::Escape,
                target: None,
            },
        );
    }

    // Accordion: open two items in turn, then close the second.
    if let [first, second, ..] = landmarks.faq.as_slice() {
        at(
            &mut script,
            3000,
            UiEvent::Click {
                target: Some(first.question),
            },
        );
        at(
            &mut script,
            3400,
            UiEvent::KeyDown {
                key: Key::Space,
                target: Some(second.question),
            },
        );
        at(
            &mut script,
            3800,
            UiEvent::Click {
                target: Some(second.question),
            },
        );
    }

    // Contact form: a failed blur, then a full valid submission.
    if let Some(form) = &landmarks.form {
        field(&mut script, 4200, form.name.input, "A");
        if let Some(name) = form.name.input {
            at(&mut script, 4300, UiEvent::Blur { target: name });
        }
        field(&mut script, 4600, form.name.input, "Ana Martins");
        field(&mut script, 4800, form.email.input, "ana@exemplo.com");
        field(&mut script, 5000, form.company.input, "Acme Ltda");
        field(&mut script, 5200, form.budget, "R$ 10k - 50k");
        field(
            &mut script,
            5400,
            form.challenge.input,
            "Precisamos de um site novo",
        );
        at(&mut script, 5800, UiEvent::Submit);
    }

    script
}

fn at(script: &mut Vec<(Duration, UiEvent)>, ms: u64, event: UiEvent) {
    script.push((Duration::from_millis(ms), event));
}

fn field(script: &mut Vec<(Duration, UiEvent)>, ms: u64, input: Option<dom::Id>, value: &str) {
    if let Some(target) = input {
        at(
            script,
            ms,
            UiEvent::Input {
                target,
                value: value.to_string(),
            },
        );
    }
}
