use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client-space position of a mouse or pointer event.
#[inline]
pub fn event_client_point(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

#[inline]
pub fn wheel_delta_y(ev: &web::Event) -> Option<f32> {
    ev.dyn_ref::<web::WheelEvent>().map(|w| w.delta_y() as f32)
}
