/// Easing curves used by the page. Each maps linear progress in `[0, 1]`
/// onto eased progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[cfg(test)]
    Linear,
    #[default]
    Power1Out,
    Power2Out,
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// A snapshot of the animatable properties. `None` leaves the property alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Keyframe {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    /// Width in percent of the parent.
    pub width: Option<f64>,
}

impl Keyframe {
    pub fn faded() -> Self {
        Self { opacity: Some(0.0), ..Self::default() }
    }

    pub fn shown() -> Self {
        Self { opacity: Some(1.0), ..Self::default() }
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn width(mut self, percent: f64) -> Self {
        self.width = Some(percent);
        self
    }

    /// Interpolates every property set on both ends; properties set on only
    /// one end snap to the `to` side.
    pub fn lerp(&self, to: &Keyframe, t: f64) -> Keyframe {
        fn mix(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a + (b - a) * t),
                (_, b) => b,
            }
        }
        Keyframe {
            opacity: mix(self.opacity, to.opacity, t),
            x: mix(self.x, to.x, t),
            y: mix(self.y, to.y, t),
            scale: mix(self.scale, to.scale, t),
            width: mix(self.width, to.width, t),
        }
    }

    /// CSS `transform` value, or `None` when no transform property is set.
    pub fn transform(&self) -> Option<String> {
        if self.x.is_none() && self.y.is_none() && self.scale.is_none() {
            return None;
        }
        let mut parts = vec![format!(
            "translate({}px, {}px)",
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0)
        )];
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", scale));
        }
        Some(parts.join(" "))
    }

    /// `(property, value)` pairs to write onto an element's inline style.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(opacity) = self.opacity {
            out.push(("opacity", format!("{}", opacity)));
        }
        if let Some(transform) = self.transform() {
            out.push(("transform", transform));
        }
        if let Some(width) = self.width {
            out.push(("width", format!("{}%", width)));
        }
        out
    }
}

/// A from/to animation with timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Keyframe,
    pub to: Keyframe,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: Keyframe, to: Keyframe, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Frame at `elapsed_ms` after the delay has run out.
    pub fn sample(&self, elapsed_ms: f64) -> Keyframe {
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            elapsed_ms / self.duration_ms
        };
        self.from.lerp(&self.to, self.ease.apply(progress))
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}
