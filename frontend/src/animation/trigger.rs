//! Scroll triggers: register once, fire once.
//!
//! The engine never touches the DOM. It is handed a probe that reports where
//! an anchor's top edge currently sits relative to the viewport, so the same
//! code runs against real elements in the browser and against plain numbers
//! in tests.

use super::tween::Tween;

/// Viewport-relative start point, e.g. `Threshold::percent(80.0)` for
/// "anchor top reaches 80% down the viewport".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn percent(percent: f64) -> Self {
        Threshold(percent / 100.0)
    }

    /// Whether an anchor whose top edge is `top` px below the viewport top
    /// has reached the start point.
    pub fn reached(&self, top: f64, viewport_height: f64) -> bool {
        top <= viewport_height * self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fires {
    Once,
    EveryEntry,
}

/// One registered trigger: when `anchor` reaches `threshold`, play `tween`
/// on `target`.
#[derive(Clone, Debug)]
pub struct Trigger<H> {
    pub target: H,
    pub anchor: H,
    pub threshold: Threshold,
    pub tween: Tween,
    pub fires: Fires,
}

#[derive(Debug)]
struct Slot<H> {
    trigger: Trigger<H>,
    fired: bool,
    inside: bool,
}

impl<H> Slot<H> {
    fn is_spent(&self) -> bool {
        self.fired && self.trigger.fires == Fires::Once
    }
}

/// A trigger that fired during an [`TriggerEngine::evaluate`] pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Firing<H> {
    pub target: H,
    pub tween: Tween,
}

#[derive(Debug)]
pub struct TriggerEngine<H> {
    slots: Vec<Slot<H>>,
}

impl<H> Default for TriggerEngine<H> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<H: Clone> TriggerEngine<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, trigger: Trigger<H>) {
        self.slots.push(Slot {
            trigger,
            fired: false,
            inside: false,
        });
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Triggers that can still fire.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_spent()).count()
    }

    /// Checks every live trigger against the current scroll position and
    /// returns the ones that start now. `probe` yields the anchor's top edge
    /// relative to the viewport; `None` (anchor gone) skips the trigger for
    /// this pass.
    pub fn evaluate<F>(&mut self, viewport_height: f64, mut probe: F) -> Vec<Firing<H>>
    where
        F: FnMut(&H) -> Option<f64>,
    {
        let mut firings = Vec::new();
        for slot in self.slots.iter_mut().filter(|slot| !slot.is_spent()) {
            let Some(top) = probe(&slot.trigger.anchor) else {
                continue;
            };
            let inside = slot.trigger.threshold.reached(top, viewport_height);
            if inside && !slot.inside {
                slot.fired = true;
                firings.push(Firing {
                    target: slot.trigger.target.clone(),
                    tween: slot.trigger.tween,
                });
            }
            slot.inside = inside;
        }
        firings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::Keyframe;
    use std::collections::HashMap;

    const VIEWPORT: f64 = 1000.0;

    fn reveal() -> Tween {
        Tween::new(Keyframe::faded().y(50.0), Keyframe::shown().y(0.0), 800.0)
    }

    fn trigger(name: &'static str, percent: f64, fires: Fires) -> Trigger<&'static str> {
        Trigger {
            target: name,
            anchor: name,
            threshold: Threshold::percent(percent),
            tween: reveal(),
            fires,
        }
    }

    /// Anchor tops for a page whose sections start at fixed document offsets.
    fn tops_at<'a>(
        scroll: f64,
        layout: &'a HashMap<&'static str, f64>,
    ) -> impl Fn(&&'static str) -> Option<f64> + 'a {
        move |name| layout.get(name).map(|offset| offset - scroll)
    }

    #[test]
    fn threshold_is_inclusive() {
        let t = Threshold::percent(80.0);
        assert!(t.reached(800.0, VIEWPORT));
        assert!(!t.reached(800.5, VIEWPORT));
        assert!(t.reached(-2000.0, VIEWPORT));
    }

    #[test]
    fn reveal_fires_once_across_repeated_crossings() {
        let layout = HashMap::from([("features", 1500.0)]);
        let mut engine = TriggerEngine::new();
        engine.register(trigger("features", 80.0, Fires::Once));

        assert!(engine.evaluate(VIEWPORT, tops_at(0.0, &layout)).is_empty());

        let fired = engine.evaluate(VIEWPORT, tops_at(800.0, &layout));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].target, "features");
        assert_eq!(engine.pending(), 0);

        for scroll in [0.0, 900.0, 100.0, 2000.0, 0.0, 1200.0] {
            assert!(engine.evaluate(VIEWPORT, tops_at(scroll, &layout)).is_empty());
        }
    }

    #[test]
    fn every_entry_fires_on_each_fresh_entry() {
        let layout = HashMap::from([("footer", 3000.0)]);
        let mut engine = TriggerEngine::new();
        engine.register(trigger("footer", 90.0, Fires::EveryEntry));

        let mut count = 0;
        for scroll in [0.0, 2200.0, 2500.0, 0.0, 2300.0, 2400.0] {
            count += engine.evaluate(VIEWPORT, tops_at(scroll, &layout)).len();
        }
        assert_eq!(count, 2);
        assert_eq!(engine.pending(), 1);
    }

    #[test]
    fn already_past_on_mount_fires_immediately() {
        let layout = HashMap::from([("portfolio", 400.0)]);
        let mut engine = TriggerEngine::new();
        engine.register(trigger("portfolio", 80.0, Fires::Once));

        assert_eq!(engine.evaluate(VIEWPORT, tops_at(0.0, &layout)).len(), 1);
    }

    #[test]
    fn missing_anchor_is_skipped_until_it_appears() {
        let mut layout = HashMap::new();
        let mut engine = TriggerEngine::new();
        engine.register(trigger("contact", 80.0, Fires::Once));

        assert!(engine.evaluate(VIEWPORT, tops_at(5000.0, &layout)).is_empty());
        assert_eq!(engine.pending(), 1);

        layout.insert("contact", 5200.0);
        assert_eq!(engine.evaluate(VIEWPORT, tops_at(5000.0, &layout)).len(), 1);
    }

    #[test]
    fn triggers_are_independent() {
        let layout = HashMap::from([("skills", 2000.0), ("contact", 4000.0)]);
        let mut engine = TriggerEngine::new();
        engine.register(trigger("skills", 80.0, Fires::Once));
        engine.register(trigger("contact", 80.0, Fires::Once));

        let fired: Vec<_> = engine
            .evaluate(VIEWPORT, tops_at(1500.0, &layout))
            .into_iter()
            .map(|f| f.target)
            .collect();
        assert_eq!(fired, vec!["skills"]);

        let fired: Vec<_> = engine
            .evaluate(VIEWPORT, tops_at(3500.0, &layout))
            .into_iter()
            .map(|f| f.target)
            .collect();
        assert_eq!(fired, vec!["contact"]);
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.pending(), 0);
    }
}
