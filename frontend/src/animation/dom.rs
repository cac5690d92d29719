use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use web_sys::{Document, HtmlElement};

use super::tween::{Keyframe, Tween};

const FRAME_MS: u32 = 16;

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        debug!("Bad selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Top edge of `element` relative to the viewport, `None` once it has left
/// the document.
pub fn viewport_top(element: &HtmlElement) -> Option<f64> {
    element
        .is_connected()
        .then(|| element.get_bounding_client_rect().top())
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn apply(element: &HtmlElement, frame: &Keyframe) {
    let style = element.style();
    for (property, value) in frame.css() {
        if style.set_property(property, &value).is_err() {
            debug!("Could not set {} on {}", property, element.tag_name());
        }
    }
}

/// Plays `tween` on `element`, honoring its delay. The frame interval
/// removes itself after the last frame.
pub fn play(element: HtmlElement, tween: Tween) {
    if tween.delay_ms > 0.0 {
        Timeout::new(tween.delay_ms.round() as u32, move || run(element, tween)).forget();
    } else {
        run(element, tween);
    }
}

fn run(element: HtmlElement, tween: Tween) {
    let started = Date::now();
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();

    let interval = Interval::new(FRAME_MS, move || {
        let elapsed = Date::now() - started;
        apply(&element, &tween.sample(elapsed));
        if tween.is_done(elapsed) {
            // dropped outside the tick so the running closure is not freed under itself
            let handle = handle_clone.clone();
            spawn_local(async move {
                handle.borrow_mut().take();
            });
        }
    });

    *handle.borrow_mut() = Some(interval);
}
