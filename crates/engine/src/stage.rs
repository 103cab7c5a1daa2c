//! Stage bookkeeping: which section views are mounted and the in-flight
//! transition between them.
//!
//! Outside a transition exactly one view is mounted. While a transition is in
//! flight exactly two are: the outgoing view below and the incoming view on
//! top. A navigation change that arrives mid-flight preempts the running
//! transition: the view that was moving in becomes the outgoing view and
//! continues from wherever it currently is, the view that was moving out is
//! unmounted at once, and timing restarts from zero.

use std::time::Instant;

use folio_types::{Direction, NavigationState, SectionId};
use tracing::debug;

use crate::{TransitionOrchestrator, TransitionPlan};

/// A transition that is currently playing.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    plan: TransitionPlan,
    started_at: Instant,
}

impl TransitionState {
    pub fn new(plan: TransitionPlan, started_at: Instant) -> Self {
        Self { plan, started_at }
    }

    pub fn plan(&self) -> &TransitionPlan {
        &self.plan
    }

    pub fn outgoing_id(&self) -> &SectionId {
        &self.plan.outgoing_id
    }

    pub fn incoming_id(&self) -> &SectionId {
        &self.plan.incoming_id
    }

    pub fn direction(&self) -> Direction {
        self.plan.direction
    }

    /// Fraction of the duration elapsed at `now`, clamped to `0.0..=1.0`.
    pub fn elapsed_ratio(&self, now: Instant) -> f32 {
        if self.plan.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.plan.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn incoming_offset(&self, now: Instant) -> f32 {
        self.plan.incoming.offset_at(self.elapsed_ratio(now), self.plan.easing)
    }

    pub fn outgoing_offset(&self, now: Instant) -> f32 {
        self.plan.outgoing.offset_at(self.elapsed_ratio(now), self.plan.easing)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.elapsed_ratio(now) >= 1.0
    }
}

/// Mount changes the stage asks its owner to apply, in order: unmount first,
/// then mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageUpdate {
    pub unmounted: Vec<SectionId>,
    pub mounted: Vec<SectionId>,
}

impl StageUpdate {
    pub fn is_empty(&self) -> bool {
        self.unmounted.is_empty() && self.mounted.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Stage {
    orchestrator: TransitionOrchestrator,
    /// Section the stage is showing or moving towards.
    target: SectionId,
    in_flight: Option<TransitionState>,
}

impl Stage {
    pub fn new(orchestrator: TransitionOrchestrator, initial: SectionId) -> Self {
        Self {
            orchestrator,
            target: initial,
            in_flight: None,
        }
    }

    pub fn target(&self) -> &SectionId {
        &self.target
    }

    pub fn transition(&self) -> Option<&TransitionState> {
        self.in_flight.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Mounted section ids from bottom to top of the stacking order.
    pub fn mounted(&self) -> Vec<SectionId> {
        match &self.in_flight {
            Some(transition) => vec![transition.outgoing_id().clone(), transition.incoming_id().clone()],
            None => vec![self.target.clone()],
        }
    }

    /// Aligns the stage with a freshly published navigation state.
    pub fn follow(&mut self, state: &NavigationState, now: Instant) -> StageUpdate {
        if state.active_section_id == self.target {
            return StageUpdate::default();
        }

        let incoming = state.active_section_id.clone();
        let mut update = StageUpdate::default();
        let (outgoing, outgoing_start) = match self.in_flight.take() {
            Some(previous) => {
                let offset = previous.incoming_offset(now);
                debug!(
                    abandoned = %previous.incoming_id(),
                    dropped = %previous.outgoing_id(),
                    offset,
                    "transition preempted"
                );
                update.unmounted.push(previous.outgoing_id().clone());
                (previous.plan.incoming_id, offset)
            }
            None => (self.target.clone(), 0.0),
        };
        update.mounted.push(incoming.clone());

        let plan = self
            .orchestrator
            .plan(state.direction, outgoing, incoming.clone())
            .with_outgoing_start(outgoing_start);
        self.in_flight = Some(TransitionState::new(plan, now));
        self.target = incoming;
        update
    }

    /// Finishes the transition once its duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> StageUpdate {
        let finished = self.in_flight.as_ref().is_some_and(|transition| transition.is_complete(now));
        if !finished {
            return StageUpdate::default();
        }
        let mut update = StageUpdate::default();
        if let Some(transition) = self.in_flight.take() {
            update.unmounted.push(transition.plan.outgoing_id);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn state(id: &str, direction: Direction) -> NavigationState {
        NavigationState {
            active_section_id: id.into(),
            direction,
        }
    }

    fn stage() -> Stage {
        Stage::new(TransitionOrchestrator::new(Duration::from_secs(1)), "home".into())
    }

    #[test]
    fn exactly_one_view_is_mounted_at_rest() {
        let mut stage = stage();
        let start = Instant::now();
        assert_eq!(stage.mounted(), vec![SectionId::from("home")]);

        let update = stage.follow(&state("resume", Direction::Forward), start);
        assert_eq!(update.mounted, vec![SectionId::from("resume")]);
        assert_eq!(stage.mounted(), vec![SectionId::from("home"), SectionId::from("resume")]);

        let update = stage.tick(start + Duration::from_millis(999));
        assert!(update.is_empty());

        let update = stage.tick(start + Duration::from_secs(1));
        assert_eq!(update.unmounted, vec![SectionId::from("home")]);
        assert_eq!(stage.mounted(), vec![SectionId::from("resume")]);
        assert!(!stage.is_animating());
    }

    #[test]
    fn following_the_current_target_changes_nothing() {
        let mut stage = stage();
        let update = stage.follow(&state("home", Direction::None), Instant::now());
        assert!(update.is_empty());
        assert!(!stage.is_animating());
    }

    #[test]
    fn offsets_progress_linearly() {
        let mut stage = stage();
        let start = Instant::now();
        stage.follow(&state("about", Direction::Forward), start);
        let transition = stage.transition().expect("in flight");
        let quarter = start + Duration::from_millis(250);
        assert!((transition.incoming_offset(quarter) - 75.0).abs() < 0.01);
        assert!((transition.outgoing_offset(quarter) + 25.0).abs() < 0.01);
        assert!((transition.elapsed_ratio(quarter) - 0.25).abs() < 0.001);
    }

    #[test]
    fn preemption_redirects_immediately_and_never_reaches_the_abandoned_target() {
        let mut stage = stage();
        let start = Instant::now();
        stage.follow(&state("resume", Direction::Forward), start);

        let preempt_at = start + Duration::from_millis(400);
        let update = stage.follow(&state("about", Direction::Backward), preempt_at);
        assert_eq!(update.unmounted, vec![SectionId::from("home")]);
        assert_eq!(update.mounted, vec![SectionId::from("about")]);

        let transition = stage.transition().expect("in flight");
        assert_eq!(transition.outgoing_id().as_str(), "resume");
        assert_eq!(transition.incoming_id().as_str(), "about");
        assert_eq!(transition.elapsed_ratio(preempt_at), 0.0);
        // The outgoing view continues from where the incoming one was.
        assert!((transition.outgoing_offset(preempt_at) - 60.0).abs() < 0.01);
        assert_eq!(transition.incoming_offset(preempt_at), -100.0);

        let mut resting = Vec::new();
        for step in 1..=30 {
            stage.tick(preempt_at + Duration::from_millis(step * 50));
            let mounted = stage.mounted();
            if mounted.len() == 1 {
                resting.push(mounted[0].clone());
            }
        }
        assert!(resting.iter().all(|id| id.as_str() == "about"));
        assert!(!resting.is_empty());
    }

    #[test]
    fn preempting_back_to_the_outgoing_view_remounts_it() {
        let mut stage = stage();
        let start = Instant::now();
        stage.follow(&state("blogs", Direction::Forward), start);
        let update = stage.follow(&state("home", Direction::Backward), start + Duration::from_millis(500));
        assert_eq!(update.unmounted, vec![SectionId::from("home")]);
        assert_eq!(update.mounted, vec![SectionId::from("home")]);
        assert_eq!(stage.mounted(), vec![SectionId::from("blogs"), SectionId::from("home")]);
    }
}
