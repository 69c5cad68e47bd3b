use dom::Id;
use std::collections::HashMap;

/// Axis-aligned rectangle in document coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Document-space geometry for landmark elements, seeded by the embedder.
///
/// There is no layout engine behind this: whoever constructs the document is
/// responsible for registering a rect per element the behavior layer needs to
/// measure (header, sections). Elements without geometry measure as empty.
#[derive(Clone, Debug, Default)]
pub struct GeometryMap {
    rects: HashMap<Id, Rect>,
}

impl GeometryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Id, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: Id) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    /// Rendered height of an element; 0.0 when it has no geometry.
    pub fn height_of(&self, id: Id) -> f32 {
        self.get(id).map(|r| r.height).unwrap_or(0.0)
    }

    /// Bottom edge of the lowest registered rect. This is what the viewport
    /// clamps scrolling against.
    pub fn content_height(&self) -> f32 {
        self.rects
            .values()
            .map(Rect::bottom)
            .fold(0.0, f32::max)
    }
}
