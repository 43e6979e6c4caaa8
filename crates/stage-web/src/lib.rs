#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod input;
mod packing;

use anyhow::anyhow;
use events::{Listener, Listeners};
use packing::{pack_meshes, MeshOutput};
use stage_core::{
    Catapult, FrameClock, ItemId, MeshHandle, PlaneMesh, ScrollTracker, Stage, TrackingConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub use packing::MESH_OUTPUT_FLOATS;

/// Floats per record returned by [`CardStage::write_meshes`].
#[wasm_bindgen]
pub fn mesh_output_floats() -> usize {
    MESH_OUTPUT_FLOATS
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");
    Ok(())
}

struct StageState {
    stage: Stage<dom::ElementBounds>,
    clock: FrameClock,
    scroll: ScrollTracker,
    catapult: Catapult,
    out: Vec<MeshOutput>,
}

type Shared = Rc<RefCell<StageState>>;

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn parse_config(options: JsValue) -> anyhow::Result<TrackingConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(TrackingConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| anyhow!("tracking options: {e}"))
}

/// Card planes bound to the elements matching a selector. JS owns the
/// meshes: it attaches a handle per element, calls `frame()` from
/// `requestAnimationFrame` and copies `write_meshes()` onto its scene.
#[wasm_bindgen]
pub struct CardStage {
    state: Shared,
    listeners: Listeners,
}

#[wasm_bindgen]
impl CardStage {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: JsValue) -> Result<CardStage, JsValue> {
        Self::build(selector, options).map_err(|e| {
            log::error!("CardStage init error: {e:#}");
            to_js(e)
        })
    }

    pub fn len(&self) -> usize {
        self.state.borrow().stage.len()
    }

    pub fn attach_mesh(&self, index: u32, handle: u32) -> Result<(), JsValue> {
        let mut st = self.state.borrow_mut();
        st.stage
            .attach_mesh(ItemId(index), PlaneMesh::new(MeshHandle(handle)))
            .map(|_| ())
            .map_err(|e| to_js(e.into()))
    }

    /// Returns whether a mesh was attached.
    pub fn detach_mesh(&self, index: u32) -> Result<bool, JsValue> {
        let mut st = self.state.borrow_mut();
        st.stage
            .item_mut(ItemId(index))
            .map(|item| item.detach_mesh().is_some())
            .map_err(|e| to_js(e.into()))
    }

    pub fn frame(&self) {
        let mut st = self.state.borrow_mut();
        let info = st.clock.tick();
        st.stage.frame(&info);
        st.scroll.update(info.slow_down_factor);
    }

    /// Packed [`MeshOutput`] records, `MESH_OUTPUT_FLOATS` floats each.
    pub fn write_meshes(&self) -> js_sys::Float32Array {
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;
        let floats = pack_meshes(st.stage.meshes(), &mut st.out);
        js_sys::Float32Array::from(floats)
    }

    pub fn set_following(&self, enabled: bool) {
        self.state.borrow_mut().stage.set_following(enabled);
    }

    pub fn animate_in(&self) {
        self.state.borrow_mut().stage.animate_enter_all();
    }

    pub fn resize(&self) {
        if let Some(window) = web::window() {
            let viewport = dom::viewport_size(&window);
            self.state.borrow_mut().stage.on_resize(viewport);
        }
    }

    pub fn pick(&self, x: f32, y: f32) -> Option<u32> {
        self.state
            .borrow()
            .stage
            .pick(glam::Vec2::new(x, y))
            .map(|id| id.0)
    }

    pub fn scroll_index(&self) -> f32 {
        self.state.borrow().scroll.current()
    }

    /// `[spline_progress, scale]` per item for the spiral carousel.
    pub fn spiral_layout(&self) -> Vec<f32> {
        self.state
            .borrow()
            .scroll
            .layout()
            .flat_map(|slot| [slot.spline_progress, slot.scale])
            .collect()
    }

    /// Launch power of the held drag band, if any.
    pub fn drag_power(&self) -> Option<f32> {
        self.state.borrow().catapult.power()
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.state.borrow_mut().stage.destroy();
        log::info!("[stage] destroyed");
    }
}

impl CardStage {
    fn build(selector: &str, options: JsValue) -> anyhow::Result<CardStage> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let config = parse_config(options)?;
        let viewport = dom::viewport_size(&window);
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;

        let mut stage = Stage::new(config, viewport, seed)?;
        for element in dom::query_elements(&document, selector)? {
            stage.push(dom::ElementBounds::new(element));
        }
        log::info!(
            "[stage] {} items for {:?}, viewport {}x{}",
            stage.len(),
            selector,
            viewport.width,
            viewport.height
        );
        let scroll = ScrollTracker::new(stage.len());
        let state = Rc::new(RefCell::new(StageState {
            stage,
            clock: FrameClock::new(),
            scroll,
            catapult: Catapult::default(),
            out: Vec::new(),
        }));
        let listeners = wire_listeners(&window, &document, &state)?;
        Ok(CardStage { state, listeners })
    }
}

fn wire_listeners(
    window: &web::Window,
    document: &web::Document,
    state: &Shared,
) -> anyhow::Result<Listeners> {
    let mut listeners = Listeners::default();

    let st = state.clone();
    let win = window.clone();
    listeners.push(Listener::new(window, "resize", move |_ev| {
        let viewport = dom::viewport_size(&win);
        st.borrow_mut().stage.on_resize(viewport);
    })?);

    let st = state.clone();
    listeners.push(Listener::new(window, "pointermove", move |ev| {
        if let Some(p) = input::event_client_point(&ev) {
            let mut s = st.borrow_mut();
            s.stage.set_pointer(p);
            s.catapult.move_to(p);
        }
    })?);

    let st = state.clone();
    listeners.push(Listener::new(window, "pointerdown", move |ev| {
        let mut s = st.borrow_mut();
        if let Some(p) = input::event_client_point(&ev) {
            s.stage.set_pointer(p);
            s.catapult.press(p);
        }
        s.stage.set_following(true);
    })?);

    let st = state.clone();
    listeners.push(Listener::new(window, "pointerup", move |_ev| {
        let mut s = st.borrow_mut();
        if let Some(power) = s.catapult.release() {
            log::debug!("[stage] drag released, power {power:.2}");
        }
        s.stage.set_following(false);
    })?);

    let st = state.clone();
    listeners.push(Listener::new(window, "wheel", move |ev| {
        if let Some(dy) = input::wheel_delta_y(&ev) {
            st.borrow_mut().scroll.apply_scroll(dy);
        }
    })?);

    let st = state.clone();
    let doc = document.clone();
    listeners.push(Listener::new(document, "visibilitychange", move |_ev| {
        // resume from a fresh reference frame
        if !doc.hidden() {
            st.borrow_mut().clock.reset();
        }
    })?);

    Ok(listeners)
}
