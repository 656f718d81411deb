//! Hover highlight with fade-in.
//!
//! Caller-ticked state machine -- no internal threads or timers. The UI
//! layer runs a repeating ~30 ms callback while a fade is in progress and
//! calls `tick()` from it; `is_fading` says when the callback can stop.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> FadingIn -> Hovering -> Idle
//! ```
//!
//! Retargeting from any state restarts the fade at zero opacity.

/// Hover state over the 7-day row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverState {
    Idle,
    /// Highlight still climbing toward full opacity.
    FadingIn { day: usize },
    /// Fade complete; highlight steady.
    Hovering { day: usize },
}

/// Fade-in driver for the hovered day cell.
#[derive(Debug, Clone)]
pub struct HoverFade {
    target: Option<usize>,
    opacity: f32,
    /// Opacity gained per tick.
    step: f32,
    /// Upper opacity bound.
    max: f32,
}

impl Default for HoverFade {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverFade {
    /// Fade reaching full opacity in roughly a quarter second of 30 ms
    /// ticks.
    pub fn new() -> Self {
        Self::with_limits(0.12, 1.0)
    }

    pub fn with_limits(step: f32, max: f32) -> Self {
        Self {
            target: None,
            opacity: 0.0,
            step,
            max,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> HoverState {
        match self.target {
            None => HoverState::Idle,
            Some(day) if self.opacity < self.max => HoverState::FadingIn { day },
            Some(day) => HoverState::Hovering { day },
        }
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Current highlight opacity, 0.0..=max.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the repeating tick callback still has work to do.
    pub fn is_fading(&self) -> bool {
        matches!(self.state(), HoverState::FadingIn { .. })
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Report the hit-tested day under the pointer (`None` when outside the
    /// band). A target change cancels any in-progress fade and restarts at
    /// zero opacity.
    pub fn point_to(&mut self, day: Option<usize>) {
        if day != self.target {
            self.target = day;
            self.opacity = 0.0;
        }
    }

    /// Advance the fade one step and return the new opacity. Call from the
    /// repeating timer callback.
    pub fn tick(&mut self) -> f32 {
        if self.target.is_some() && self.opacity < self.max {
            self.opacity = (self.opacity + self.step).min(self.max);
        }
        self.opacity
    }
}
