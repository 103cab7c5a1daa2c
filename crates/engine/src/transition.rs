//! Slide transition parameters.
//!
//! [`TransitionOrchestrator::plan`] is a pure function of the travel direction
//! and the two section ids. Offsets are percentages of the stage extent along
//! the travel axis: `+100` is one full stage beyond the far edge, `-100` one
//! full stage before the near edge, `0` is centered.

use std::time::Duration;

use folio_types::{Direction, SectionId};

/// Distance of a fully offset view, in percent of the stage extent.
pub const TRAVEL_EXTENT_PERCENT: f32 = 100.0;

/// Interpolation curve. Transitions are constant-rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    pub fn apply(self, ratio: f32) -> f32 {
        match self {
            Easing::Linear => ratio.clamp(0.0, 1.0),
        }
    }
}

/// Start and end offset of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTrack {
    pub from_percent: f32,
    pub to_percent: f32,
}

impl SlideTrack {
    pub fn new(from_percent: f32, to_percent: f32) -> Self {
        Self { from_percent, to_percent }
    }

    /// Offset after `ratio` of the duration has elapsed.
    pub fn offset_at(&self, ratio: f32, easing: Easing) -> f32 {
        let progress = easing.apply(ratio);
        self.from_percent + (self.to_percent - self.from_percent) * progress
    }
}

/// Animation parameters for one outgoing/incoming pair. The incoming view
/// always stacks above the outgoing one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPlan {
    pub outgoing_id: SectionId,
    pub incoming_id: SectionId,
    pub direction: Direction,
    pub outgoing: SlideTrack,
    pub incoming: SlideTrack,
    /// Both tracks share this duration and start together.
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionPlan {
    /// Returns the plan with the outgoing view starting from `offset_percent`
    /// instead of the centered position; used when a transition preempts
    /// another one mid-flight.
    pub fn with_outgoing_start(mut self, offset_percent: f32) -> Self {
        self.outgoing.from_percent = offset_percent;
        self
    }
}

/// Derives slide parameters from a travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOrchestrator {
    duration: Duration,
}

impl Default for TransitionOrchestrator {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl TransitionOrchestrator {
    /// `duration` is the single time unit every transition lasts, no matter
    /// how far apart the two sections are in the sequence.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn plan(&self, direction: Direction, outgoing_id: SectionId, incoming_id: SectionId) -> TransitionPlan {
        let sign = f32::from(direction.sign());
        TransitionPlan {
            outgoing_id,
            incoming_id,
            direction,
            incoming: SlideTrack::new(sign * TRAVEL_EXTENT_PERCENT, 0.0),
            outgoing: SlideTrack::new(0.0, -sign * TRAVEL_EXTENT_PERCENT),
            duration: self.duration,
            easing: Easing::Linear,
        }
    }
}
