use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};
use yew::prelude::*;

use super::catalog::{self, SKILL_BAR_PERCENT_ATTR, SKILL_BAR_SELECTOR};
use super::dom;
use super::trigger::{Trigger, TriggerEngine};

/// Plays the header / hero entrance once on mount.
#[hook]
pub fn use_entrance(header: NodeRef, hero_text: NodeRef, hero_image: NodeRef) {
    use_effect_with_deps(
        move |_| {
            play_entrance(&header, &hero_text, &hero_image);
            || ()
        },
        (),
    );
}

fn play_entrance(header: &NodeRef, hero_text: &NodeRef, hero_image: &NodeRef) {
    let (Some(header), Some(hero_text), Some(hero_image)) = (
        header.cast::<HtmlElement>(),
        hero_text.cast::<HtmlElement>(),
        hero_image.cast::<HtmlElement>(),
    ) else {
        debug!("Entrance skipped, hero not mounted");
        return;
    };

    let children = hero_text.children();
    let lines: Vec<HtmlElement> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    let schedule = catalog::entrance(header, lines, hero_image).schedule();
    for step in &schedule {
        dom::apply(&step.target, &step.tween.from);
    }
    for step in schedule {
        let tween = step.tween.delay(step.tween.delay_ms + step.start_ms);
        dom::play(step.target, tween);
    }
}

/// Scroll listener plus the triggers it drives. Dropping it detaches the
/// listener.
struct ScrollReveals {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollReveals {
    fn mount() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let engine = Rc::new(RefCell::new(register_all(&document)));
        info!("Registered {} scroll triggers", engine.borrow().len());

        let callback = Closure::<dyn Fn()>::new({
            let engine = engine.clone();
            move || evaluate(&engine)
        });
        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("Could not attach scroll listener");
            return None;
        }

        // sections already on screen at load
        evaluate(&engine);

        Some(Self { window, callback })
    }
}

impl Drop for ScrollReveals {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

fn register(engine: &mut TriggerEngine<HtmlElement>, trigger: Trigger<HtmlElement>) {
    // elements wait hidden until their trigger fires
    dom::apply(&trigger.target, &trigger.tween.from);
    engine.register(trigger);
}

fn register_all(document: &Document) -> TriggerEngine<HtmlElement> {
    let mut engine = TriggerEngine::new();

    for reveal in catalog::section_reveals() {
        let targets = dom::query_all(document, reveal.target);
        let anchor = reveal.anchor.and_then(|selector| dom::query_one(document, selector));
        let triggers = reveal.expand(targets, anchor);
        if triggers.is_empty() {
            debug!("Nothing to reveal for {}", reveal.target);
        }
        for trigger in triggers {
            register(&mut engine, trigger);
        }
    }

    for bar in dom::query_all(document, SKILL_BAR_SELECTOR) {
        let percent = bar
            .get_attribute(SKILL_BAR_PERCENT_ATTR)
            .as_deref()
            .and_then(catalog::parse_percent);
        match percent {
            Some(percent) => register(&mut engine, catalog::skill_fill(bar, percent)),
            None => debug!("Skill bar without a usable {}", SKILL_BAR_PERCENT_ATTR),
        }
    }

    engine
}

fn evaluate(engine: &RefCell<TriggerEngine<HtmlElement>>) {
    let Some(height) = dom::viewport_height() else {
        return;
    };
    let firings = engine.borrow_mut().evaluate(height, dom::viewport_top);
    for firing in firings {
        dom::play(firing.target, firing.tween);
    }
}

/// Registers every section reveal and skill-bar fill for the lifetime of the
/// calling component.
#[hook]
pub fn use_scroll_reveals() {
    use_effect_with_deps(
        |_| {
            let reveals = ScrollReveals::mount();
            move || drop(reveals)
        },
        (),
    );
}
