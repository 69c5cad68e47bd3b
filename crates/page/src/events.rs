use dom::Id;

/// Keys the behavior layer reacts to. Everything else arrives as `Other`
/// and falls through every handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

/// Input events delivered by the embedder.
///
/// `target` is the node the event was dispatched to, `None` when the pointer
/// hit no node at all (bare document). `Input` carries the control's new
/// value, mirroring how a live input mutates before its event fires.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Click { target: Option<Id> },
    KeyDown { key: Key, target: Option<Id> },
    Blur { target: Id },
    Input { target: Id, value: String },
    Submit,
    Scroll { y: f32 },
}

/// Outbound request back to the embedder. The only one this page ever emits
/// is the mail-client handoff.
#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Navigate(String),
}
