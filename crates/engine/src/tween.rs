//! Linear value tweens for the shell's secondary animations (the rail's
//! active indicator and the mobile panel).

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    /// A tween that is already settled on `value`.
    pub fn settled(value: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let ratio = self.ratio_at(now);
        self.from + (self.to - self.from) * ratio
    }

    /// A tween with nowhere to go is settled from the start.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.from == self.to || self.ratio_at(now) >= 1.0
    }

    /// Starts moving towards `to` from the value shown at `now`, so a
    /// retarget mid-flight never jumps.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
    }

    fn ratio_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retarget_continues_from_current_value() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0, start, Duration::from_millis(300));
        tween.retarget(4.0, start);
        let midway = start + Duration::from_millis(150);
        assert!((tween.value_at(midway) - 2.0).abs() < 0.01);

        tween.retarget(0.0, midway);
        assert!((tween.value_at(midway) - 2.0).abs() < 0.01);
        assert!(tween.is_settled(midway + Duration::from_millis(300)));
        assert_eq!(tween.value_at(midway + Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn retarget_onto_the_shown_value_settles_at_once() {
        let start = Instant::now();
        let mut tween = Tween::settled(0.0, start, Duration::from_millis(300));
        tween.retarget(2.0, start);
        assert!(!tween.is_settled(start));
        // Heading back to the value on screen leaves nothing to animate.
        let later = start + Duration::from_millis(300);
        tween.retarget(0.0, later);
        tween.retarget(2.0, later);
        assert!(tween.is_settled(later));
    }

    #[test]
    fn settled_tween_holds_its_value() {
        let start = Instant::now();
        let tween = Tween::settled(3.0, start, Duration::from_millis(300));
        assert!(tween.is_settled(start));
        assert_eq!(tween.value_at(start + Duration::from_secs(5)), 3.0);
    }
}
