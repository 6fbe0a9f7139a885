//! Time-based interpolation of marks
//!
//! A transition never owns a timer: its progress is a pure function of the frame clock the
//! renderer is handed, so replacing a transition is the only way to cancel one.

use super::mark::MarkVisual;

/// Easing curve applied to transition progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// d3's default `easeCubicInOut`
    #[default]
    CubicInOut,
    CubicOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Starting visual state of a freshly drawn mark
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Entrance {
    /// Geometry collapses to nothing: zero radius, zero height, undrawn path
    #[default]
    Collapse,
    /// Geometry in place, fully transparent
    Fade,
}

/// Per-chart animation settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Seconds from start to target, per mark
    pub duration: f64,
    /// Extra delay per mark index, in seconds
    pub stagger: f64,
    pub easing: Easing,
    pub entrance: Entrance,
}

impl AnimationSpec {
    pub fn new(duration: f64, stagger: f64) -> Self {
        Self {
            duration,
            stagger,
            easing: Easing::default(),
            entrance: Entrance::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_entrance(mut self, entrance: Entrance) -> Self {
        self.entrance = entrance;
        self
    }

    /// Speed multiplier from the config: 2.0 plays twice as fast, 0 disables animation
    pub fn scaled(mut self, speed: f64) -> Self {
        if speed <= 0.0 {
            self.duration = 0.0;
            self.stagger = 0.0;
        } else {
            self.duration /= speed;
            self.stagger /= speed;
        }
        self
    }

    /// Start delay for the mark at `index`
    pub fn delay_for(&self, index: usize) -> f64 {
        index as f64 * self.stagger
    }

    /// The state a new mark is drawn from
    pub fn entrance_of(&self, target: &MarkVisual) -> MarkVisual {
        match self.entrance {
            Entrance::Collapse => target.collapsed(),
            Entrance::Fade => target.faded(),
        }
    }
}

/// One in-flight interpolation towards a mark's target
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    from: MarkVisual,
    start: f64,
    delay: f64,
    duration: f64,
    easing: Easing,
}

impl Transition {
    pub fn new(from: MarkVisual, start: f64, delay: f64, spec: &AnimationSpec) -> Self {
        Self {
            from,
            start,
            delay: delay.max(0.0),
            duration: spec.duration.max(0.0),
            easing: spec.easing,
        }
    }

    /// Raw progress in [0,1] at `now`
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = now - self.start - self.delay;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.duration <= 1e-9 {
            return 1.0;
        }
        (elapsed / self.duration).min(1.0) as f32
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Visual state at `now` on the way to `target`
    pub fn sample(&self, target: &MarkVisual, now: f64) -> MarkVisual {
        let t = self.easing.apply(self.progress(now));
        self.from.lerp(target, t)
    }
}
