use std::time::Duration;

use iced_core::time::Instant;

/// How long a banner takes to fully expand or shrink.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Show/hide transition of an overlay.
///
/// `Hidden` and `Visible` are the resting states. A change of the target
/// visibility moves to `Expanding` or `Shrinking`, starting from the progress
/// reached so far, so reversing a transition midway never jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Hidden,
    Expanding { since: Instant, from: f32 },
    Visible,
    Shrinking { since: Instant, from: f32 },
}

impl Transition {
    /// Resting state matching the initial visibility, nothing is animated
    /// on first display.
    pub fn new(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Visibility the transition is heading to.
    pub fn target(&self) -> bool {
        matches!(self, Self::Expanding { .. } | Self::Visible)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Expanding { .. } | Self::Shrinking { .. })
    }

    /// Expanded fraction in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant, duration: Duration) -> f32 {
        match self {
            Self::Hidden => 0.0,
            Self::Visible => 1.0,
            Self::Expanding { since, from } => (from + elapsed(*since, now, duration)).min(1.0),
            Self::Shrinking { since, from } => (from - elapsed(*since, now, duration)).max(0.0),
        }
    }

    /// Starts a transition toward `visible`.
    /// Returns `false` if already heading there.
    pub fn set_visible(&mut self, visible: bool, now: Instant, duration: Duration) -> bool {
        if self.target() == visible {
            return false;
        }
        let from = self.progress(now, duration);
        *self = if visible {
            Self::Expanding { since: now, from }
        } else {
            Self::Shrinking { since: now, from }
        };
        true
    }

    /// Advances to `now`, settling into a resting state once the transition
    /// is complete. Returns the progress at `now`.
    pub fn tick(&mut self, now: Instant, duration: Duration) -> f32 {
        let progress = self.progress(now, duration);
        match self {
            Self::Expanding { .. } if progress >= 1.0 => *self = Self::Visible,
            Self::Shrinking { .. } if progress <= 0.0 => *self = Self::Hidden,
            _ => {}
        }
        progress
    }
}

fn elapsed(since: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    now.saturating_duration_since(since).as_secs_f32() / duration.as_secs_f32()
}
