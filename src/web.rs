//! Browser entry point (`web` feature, wasm32).
//!
//! Binds the engine to a canvas, slides the page's heading elements with
//! the scroll position, and drives frames from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, WheelEvent, Window};

use crate::assets;
use crate::engine::{HeadingTargets, PlanetsEngine, WheelDelta};
use crate::options::Options;
use crate::util::viewport::SurfaceSize;

/// Heading elements matched by a CSS selector.
struct DomHeadings {
    elements: Vec<HtmlElement>,
}

impl DomHeadings {
    /// Collect the elements matching `selector`. An invalid selector or no
    /// match yields an empty set.
    fn query(document: &Document, selector: &str) -> Self {
        let Ok(list) = document.query_selector_all(selector) else {
            log::warn!("invalid heading selector {selector:?}");
            return Self {
                elements: Vec::new(),
            };
        };
        let elements: Vec<HtmlElement> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        log::debug!("{} heading element(s) for {selector:?}", elements.len());
        Self { elements }
    }
}

impl HeadingTargets for DomHeadings {
    fn apply_offset_percent(&mut self, percent: f32) {
        let transform = format!("translateY({percent}%)");
        for element in &self.elements {
            if let Err(e) = element.style().set_property("transform", &transform) {
                log::debug!("heading transform rejected: {e:?}");
            }
        }
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Size the canvas to fill the window: CSS size in logical pixels, backing
/// store in physical pixels.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
    let css = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let size = SurfaceSize::fill(
        (css(window.inner_width()), css(window.inner_height())),
        window.device_pixel_ratio(),
    );
    let style = canvas.style();
    for (property, value) in [("width", size.logical.0), ("height", size.logical.1)] {
        if let Err(e) = style.set_property(property, &format!("{value}px")) {
            log::debug!("canvas {property} rejected: {e:?}");
        }
    }
    let (width, height) = size.physical;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

/// Start the scene with default options.
///
/// # Errors
///
/// Rejects if the canvas is missing or the GPU cannot be initialized.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    run(Options::default()).await
}

/// Start the scene with options given as a TOML document.
///
/// # Errors
///
/// Rejects if the options do not parse, the canvas is missing, or the GPU
/// cannot be initialized.
#[wasm_bindgen]
pub async fn start_with_options(toml: String) -> Result<(), JsValue> {
    run(Options::from_toml(&toml).map_err(js_error)?).await
}

async fn run(options: Options) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window.document().ok_or_else(|| js_error("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(&options.display.canvas_id)
        .ok_or_else(|| js_error(format!("no element #{}", options.display.canvas_id)))?
        .dyn_into()
        .map_err(|_| js_error(format!("#{} is not a canvas", options.display.canvas_id)))?;

    let size = fit_canvas(&window, &canvas);
    let headings = DomHeadings::query(&document, &options.display.heading_selector);
    let engine = PlanetsEngine::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        size,
        options,
        Box::new(headings),
    )
    .await
    .map_err(js_error)?;

    assets::web::spawn_loads(
        &engine.options().assets,
        engine.max_texture_dimension(),
        &engine.asset_sender(),
    );

    let engine = Rc::new(RefCell::new(engine));
    listen_wheel(&window, Rc::clone(&engine))?;
    listen_resize(&window, canvas, Rc::clone(&engine))?;
    run_frames(&window, engine)
}

fn listen_wheel(window: &Window, engine: Rc<RefCell<PlanetsEngine>>) -> Result<(), JsValue> {
    let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        let delta = match event.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => WheelDelta::Lines(event.delta_y() as f32),
            _ => WheelDelta::Pixels(event.delta_y() as f32),
        };
        let mut engine = engine.borrow_mut();
        let now = engine.elapsed();
        let _ = engine.handle_wheel(delta, now);
    });
    window.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
    on_wheel.forget();
    Ok(())
}

fn listen_resize(
    window: &Window,
    canvas: HtmlCanvasElement,
    engine: Rc<RefCell<PlanetsEngine>>,
) -> Result<(), JsValue> {
    let win = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let (width, height) = fit_canvas(&win, &canvas);
        engine.borrow_mut().resize(width, height);
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn run_frames(window: &Window, engine: Rc<RefCell<PlanetsEngine>>) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let win = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        {
            let mut engine = engine.borrow_mut();
            let now = engine.elapsed();
            engine.frame(now);
        }
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    let first = callback.borrow();
    if let Some(cb) = first.as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
