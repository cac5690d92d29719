//! Sequenced animations that play on mount, independent of scrolling.

use super::tween::{Ease, Tween};

/// Where a step starts, relative to the end of the previous step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the previous step ends.
    After,
    /// Shifted by `ms` from the previous step's end; negative overlaps it.
    Offset(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step<H> {
    /// Elements animated by this step, in stagger order.
    pub targets: Vec<H>,
    pub tween: Tween,
    pub stagger_ms: f64,
    pub position: Position,
}

/// A tween with its absolute start time on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheduled<H> {
    pub target: H,
    pub tween: Tween,
    pub start_ms: f64,
}

/// Ordered steps sharing one ease, like a GSAP timeline with `defaults`.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<H> {
    ease: Ease,
    steps: Vec<Step<H>>,
}

impl<H: Clone> Timeline<H> {
    pub fn new(ease: Ease) -> Self {
        Self {
            ease,
            steps: Vec::new(),
        }
    }

    pub fn then(mut self, targets: Vec<H>, tween: Tween, stagger_ms: f64, position: Position) -> Self {
        self.steps.push(Step {
            targets,
            tween,
            stagger_ms,
            position,
        });
        self
    }

    /// Resolves every step to absolute start times. A step with no targets
    /// still occupies its slot so later offsets keep their meaning.
    pub fn schedule(&self) -> Vec<Scheduled<H>> {
        let mut out = Vec::new();
        let mut previous_end = 0.0_f64;
        for step in &self.steps {
            let start = match step.position {
                Position::After => previous_end,
                Position::Offset(ms) => (previous_end + ms).max(0.0),
            };
            let lanes = step.targets.len().max(1);
            let step_end = start + step.stagger_ms * (lanes - 1) as f64 + step.tween.duration_ms;

            for (index, target) in step.targets.iter().enumerate() {
                out.push(Scheduled {
                    target: target.clone(),
                    tween: step.tween.ease(self.ease),
                    start_ms: start + step.stagger_ms * index as f64,
                });
            }
            previous_end = step_end;
        }
        out
    }

    /// Total running time of the timeline.
    #[cfg(test)]
    pub fn duration(&self) -> f64 {
        self.schedule()
            .iter()
            .map(|s| s.start_ms + s.tween.duration_ms)
            .fold(0.0, f64::max)
    }
}
