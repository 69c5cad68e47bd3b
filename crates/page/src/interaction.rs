use dom::Id;

/// Keyboard-focus state. Written by exactly two flows: Escape-closing the
/// mobile menu (focus returns to the toggle) and a failed submit (focus
/// moves to the first invalid field).
#[derive(Debug, Default)]
pub struct InteractionState {
    pub focused_node_id: Option<Id>,
}

impl InteractionState {
    pub fn set_focus(&mut self, id: Id) {
        self.focused_node_id = Some(id);
    }

    pub fn clear_focus(&mut self) {
        self.focused_node_id = None;
    }
}
