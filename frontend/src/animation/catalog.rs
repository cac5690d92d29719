//! What animates on this page. The how lives in `trigger`, `timeline` and
//! `dom`; this file is only data.

use super::timeline::{Position, Timeline};
use super::trigger::{Fires, Threshold, Trigger};
use super::tween::{Ease, Keyframe, Tween};

pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const SKILL_BAR_PERCENT_ATTR: &str = "data-percent";
const SKILL_BAR_THRESHOLD: f64 = 90.0;

/// A reveal described by selectors. One [`Trigger`] is produced per element
/// the target selector matches.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub target: &'static str,
    /// Element whose position gates the reveal. `None` means each target
    /// element gates itself.
    pub anchor: Option<&'static str>,
    pub threshold: f64,
    pub tween: Tween,
    /// Extra delay per matched element, in match order.
    pub stagger_ms: f64,
}

fn rise(distance: f64, duration_ms: f64) -> Tween {
    Tween::new(Keyframe::faded().y(distance), Keyframe::shown().y(0.0), duration_ms)
}

/// On-mount sequence: header drops in, hero lines rise one after another,
/// then the portrait slides in over the tail of the text.
pub fn entrance<H: Clone>(header: H, hero_lines: Vec<H>, hero_image: H) -> Timeline<H> {
    Timeline::new(Ease::Power3Out)
        .then(vec![header], rise(-50.0, 1000.0), 0.0, Position::After)
        .then(hero_lines, rise(50.0, 800.0), 200.0, Position::Offset(-500.0))
        .then(
            vec![hero_image],
            Tween::new(Keyframe::faded().x(50.0), Keyframe::shown().x(0.0), 1000.0),
            0.0,
            Position::Offset(-1000.0),
        )
}

pub fn section_reveals() -> Vec<Reveal> {
    let section = |target: &'static str, anchor: Option<&'static str>| Reveal {
        target,
        anchor,
        threshold: 80.0,
        tween: rise(50.0, 800.0),
        stagger_ms: 0.0,
    };
    let cards = |target: &'static str, stagger_ms: f64| Reveal {
        target,
        anchor: None,
        threshold: 85.0,
        tween: rise(50.0, 600.0),
        stagger_ms,
    };

    vec![
        section("#features h2", Some("#features")),
        section("#portfolio", None),
        section("#skills .text-center", Some("#skills")),
        cards("#skills > div > div", 100.0),
        section("#contact .text-center", Some("#contact")),
        cards("#contact > div > div", 150.0),
        section("#location .text-center", Some("#location")),
        Reveal {
            target: "#location > div",
            anchor: None,
            threshold: 85.0,
            tween: Tween::new(
                Keyframe::faded().y(50.0).scale(0.95),
                Keyframe::shown().y(0.0).scale(1.0),
                800.0,
            ),
            stagger_ms: 0.0,
        },
        Reveal {
            target: "footer",
            anchor: None,
            threshold: 90.0,
            tween: rise(30.0, 800.0),
            stagger_ms: 0.0,
        },
    ]
}

impl Reveal {
    /// Builds the concrete triggers once the selectors have been resolved.
    /// A declared anchor that did not resolve yields nothing, so nothing is
    /// left hidden waiting for a trigger that can never fire.
    pub fn expand<H: Clone>(&self, targets: Vec<H>, anchor: Option<H>) -> Vec<Trigger<H>> {
        if self.anchor.is_some() && anchor.is_none() {
            return Vec::new();
        }
        targets
            .into_iter()
            .enumerate()
            .map(|(index, target)| Trigger {
                anchor: anchor.clone().unwrap_or_else(|| target.clone()),
                target,
                threshold: Threshold::percent(self.threshold),
                tween: self.tween.delay(self.tween.delay_ms + self.stagger_ms * index as f64),
                fires: Fires::Once,
            })
            .collect()
    }
}

/// Progress-bar fill for one skill bar; the bar is its own anchor.
pub fn skill_fill<H: Clone>(bar: H, percent: f64) -> Trigger<H> {
    Trigger {
        target: bar.clone(),
        anchor: bar,
        threshold: Threshold::percent(SKILL_BAR_THRESHOLD),
        tween: Tween::new(Keyframe::default().width(0.0), Keyframe::default().width(percent), 1500.0)
            .ease(Ease::Power2Out),
        fires: Fires::Once,
    }
}

/// Reads a `data-percent` value such as `"85%"` or `"85"`.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_is_covered() {
        let targets: Vec<&str> = section_reveals().iter().map(|s| s.target).collect();
        assert_eq!(
            targets,
            vec![
                "#features h2",
                "#portfolio",
                "#skills .text-center",
                "#skills > div > div",
                "#contact .text-center",
                "#contact > div > div",
                "#location .text-center",
                "#location > div",
                "footer",
            ]
        );
    }

    #[test]
    fn card_reveals_stagger_by_index() {
        let skills = section_reveals()
            .into_iter()
            .find(|s| s.target == "#skills > div > div")
            .unwrap();

        let triggers = skills.expand(vec![0usize, 1, 2], None);
        let delays: Vec<f64> = triggers.iter().map(|t| t.tween.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0]);
        assert!(triggers.iter().all(|t| t.anchor == t.target));
        assert!(triggers.iter().all(|t| t.tween.duration_ms == 600.0));
    }

    #[test]
    fn shared_anchor_is_used_for_every_target() {
        let features = section_reveals().remove(0);
        let triggers = features.expand(vec!["h2"], Some("#features"));
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].anchor, "#features");
        assert_eq!(triggers[0].target, "h2");
    }

    #[test]
    fn unresolved_anchor_registers_nothing() {
        let features = section_reveals().remove(0);
        assert!(features.expand(vec!["h2"], None).is_empty());
        assert!(features.expand(Vec::<&str>::new(), Some("#features")).is_empty());
    }

    #[test]
    fn skill_fill_goes_from_empty_to_target() {
        let trigger = skill_fill("bar", 85.0);
        assert_eq!(trigger.tween.from.width, Some(0.0));
        assert_eq!(trigger.tween.to.width, Some(85.0));
        assert_eq!(trigger.tween.duration_ms, 1500.0);
        assert_eq!(trigger.tween.ease, Ease::Power2Out);
        assert!(trigger.threshold.reached(900.0, 1000.0));
        assert!(!trigger.threshold.reached(901.0, 1000.0));
    }

    #[test]
    fn percent_attribute_parsing() {
        assert_eq!(parse_percent("85%"), Some(85.0));
        assert_eq!(parse_percent(" 90 "), Some(90.0));
        assert_eq!(parse_percent("120%"), None);
        assert_eq!(parse_percent("wide"), None);
    }
}
