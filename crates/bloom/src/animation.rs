use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

pub fn expand_progress(from: f64, t: f64) -> f64 {
    (from + (1.0 - from) * t).clamp(0.0, 1.0)
}

pub fn collapse_progress(from: f64, t: f64) -> f64 {
    (from * (1.0 - t)).clamp(0.0, 1.0)
}

/// Elapsed fraction of an animation started at `start`, clamped to [0, 1].
/// A zero duration finishes immediately.
pub fn time_fraction(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// The single animation slot of the button. Starting a new animation
/// replaces whatever was running; `from` is the progress at that instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Animation {
    #[default]
    Idle,
    Expanding { from: f64, start: Duration },
    Collapsing { from: f64, start: Duration },
}

impl Animation {
    pub fn expand(from: f64, start: Duration) -> Self {
        Self::Expanding { from, start }
    }

    pub fn collapse(from: f64, start: Duration) -> Self {
        Self::Collapsing { from, start }
    }

    pub fn is_running(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Progress at `now`, or `None` when idle.
    pub fn sample(&self, now: Duration, duration: Duration) -> Option<f64> {
        match *self {
            Self::Idle => None,
            Self::Expanding { from, start } => {
                Some(expand_progress(from, time_fraction(start, now, duration)))
            }
            Self::Collapsing { from, start } => {
                Some(collapse_progress(from, time_fraction(start, now, duration)))
            }
        }
    }

    /// Samples the animation and drops back to `Idle` on the terminal frame,
    /// which is pinned to exactly 1 or 0.
    pub fn advance(&mut self, now: Duration, duration: Duration) -> Option<f64> {
        let start = match *self {
            Self::Idle => return None,
            Self::Expanding { start, .. } | Self::Collapsing { start, .. } => start,
        };

        if time_fraction(start, now, duration) < 1.0 {
            return self.sample(now, duration);
        }

        let terminal = match self {
            Self::Expanding { .. } => 1.0,
            _ => 0.0,
        };
        log::trace!("animation finished at progress {terminal}");
        *self = Self::Idle;
        Some(terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_progress_functions_stay_in_range() {
        for from in [0.0, 0.25, 0.5, 1.0] {
            for step in 0..=20u32 {
                let t = f64::from(step) / 20.0;
                let expand = expand_progress(from, t);
                let collapse = collapse_progress(from, t);
                assert!((0.0..=1.0).contains(&expand), "expand({from}, {t}) = {expand}");
                assert!((0.0..=1.0).contains(&collapse), "collapse({from}, {t}) = {collapse}");
            }
        }
        assert_eq!(expand_progress(0.5, 1.0), 1.0);
        assert_eq!(collapse_progress(0.75, 1.0), 0.0);
        assert_eq!(expand_progress(0.25, 0.0), 0.25);
        assert_eq!(collapse_progress(0.75, 0.0), 0.75);
    }

    #[test]
    fn test_time_fraction() {
        assert_eq!(time_fraction(ms(100), ms(100), ms(200)), 0.0);
        assert_eq!(time_fraction(ms(100), ms(200), ms(200)), 0.5);
        assert_eq!(time_fraction(ms(100), ms(900), ms(200)), 1.0);
        assert_eq!(time_fraction(ms(100), ms(50), ms(200)), 0.0);
        assert_eq!(time_fraction(ms(100), ms(100), Duration::ZERO), 1.0);
    }

    #[test]
    fn test_expand_runs_to_completion() {
        let mut animation = Animation::expand(0.0, ms(0));
        assert_eq!(animation.advance(ms(100), DEFAULT_DURATION), Some(0.5));
        assert!(animation.is_running());
        assert_eq!(animation.advance(ms(200), DEFAULT_DURATION), Some(1.0));
        assert_eq!(animation, Animation::Idle);
        assert_eq!(animation.advance(ms(300), DEFAULT_DURATION), None);
    }

    #[test]
    fn test_collapse_runs_to_completion() {
        let mut animation = Animation::collapse(1.0, ms(1000));
        assert_eq!(animation.advance(ms(1050), DEFAULT_DURATION), Some(0.75));
        assert_eq!(animation.advance(ms(1250), DEFAULT_DURATION), Some(0.0));
        assert!(!animation.is_running());
    }

    #[test]
    fn test_interrupted_collapse_is_continuous() {
        let collapse = Animation::collapse(1.0, ms(0));
        let at_interrupt = collapse.sample(ms(50), DEFAULT_DURATION).unwrap_or_default();
        assert_eq!(at_interrupt, 0.75);

        let expand = Animation::expand(at_interrupt, ms(50));
        assert_eq!(expand.sample(ms(50), DEFAULT_DURATION), Some(at_interrupt));
        assert_eq!(expand.sample(ms(150), DEFAULT_DURATION), Some(0.875));
    }

    #[test]
    fn test_interrupted_expand_is_continuous() {
        let expand = Animation::expand(0.0, ms(0));
        let at_interrupt = expand.sample(ms(150), DEFAULT_DURATION).unwrap_or_default();

        let collapse = Animation::collapse(at_interrupt, ms(150));
        assert_eq!(collapse.sample(ms(150), DEFAULT_DURATION), Some(at_interrupt));
        assert_eq!(collapse.sample(ms(250), DEFAULT_DURATION), Some(at_interrupt / 2.0));
    }
}
