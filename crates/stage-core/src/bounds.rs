use crate::geometry::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// Live layout query for the element a tracked item is bound to.
///
/// Implementations read layout synchronously; items only call them on
/// construction and explicit refresh, never per frame.
pub trait BoundsSource {
    fn bounds(&self) -> Rect;

    /// Bounds of the element's first child. Defaults to the element itself.
    fn child_bounds(&self) -> Rect {
        self.bounds()
    }
}

/// In-memory bounds that can be changed from outside, for headless scenes.
#[derive(Clone, Debug, Default)]
pub struct SharedBounds {
    rect: Rc<Cell<Rect>>,
    child: Rc<Cell<Option<Rect>>>,
}

impl SharedBounds {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Rc::new(Cell::new(rect)),
            child: Rc::new(Cell::new(None)),
        }
    }

    pub fn with_child(rect: Rect, child: Rect) -> Self {
        let shared = Self::new(rect);
        shared.child.set(Some(child));
        shared
    }

    pub fn set(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub fn set_child(&self, child: Rect) {
        self.child.set(Some(child));
    }
}

impl BoundsSource for SharedBounds {
    fn bounds(&self) -> Rect {
        self.rect.get()
    }

    fn child_bounds(&self) -> Rect {
        self.child.get().unwrap_or_else(|| self.rect.get())
    }
}
