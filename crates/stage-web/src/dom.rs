use anyhow::anyhow;
use stage_core::{BoundsSource, Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport_size(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn query_elements(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("invalid selector {selector:?}: {e:?}"))?;
    let elements = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect();
    Ok(elements)
}

#[inline]
fn rect_from(r: &web::DomRect) -> Rect {
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Layout reads for a card element and its first child, resolved once.
pub struct ElementBounds {
    element: web::Element,
    child: Option<web::Element>,
}

impl ElementBounds {
    pub fn new(element: web::Element) -> Self {
        let child = element.first_element_child();
        Self { element, child }
    }
}

impl BoundsSource for ElementBounds {
    fn bounds(&self) -> Rect {
        rect_from(&self.element.get_bounding_client_rect())
    }

    fn child_bounds(&self) -> Rect {
        match &self.child {
            Some(child) => rect_from(&child.get_bounding_client_rect()),
            None => self.bounds(),
        }
    }
}
