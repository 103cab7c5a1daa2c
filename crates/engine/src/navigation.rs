//! The navigation state machine.
//!
//! [`NavigationController`] owns the fixed, ordered section sequence and the
//! single [`NavigationState`] instance. It is the only place that mutates that
//! state; everything else observes it through [`NavigationController::subscribe`].
//!
//! Direction is derived from relative position in the static sequence and
//! nothing else: moving to a later section is `Forward`, to an earlier one is
//! `Backward`, regardless of how the user got to the current section.

use std::collections::HashSet;
use std::sync::Arc;

use folio_types::{Direction, NavigationState, SectionId, SectionSpec};
use tokio::sync::watch;
use tracing::debug;

use crate::NavigationError;

/// Outcome of an accepted [`NavigationController::request_section_change`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionChange {
    /// The target is already active; nothing was mutated or published.
    Unchanged,
    /// The active section moved.
    Changed {
        from: SectionId,
        to: SectionId,
        direction: Direction,
    },
}

impl SectionChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, SectionChange::Changed { .. })
    }
}

/// Checks the invariants of a section sequence: non-empty, no blank ids, and
/// unique ids.
pub fn validate_sections(sections: &[SectionSpec]) -> Result<(), NavigationError> {
    if sections.is_empty() {
        return Err(NavigationError::EmptySections);
    }
    let mut seen = HashSet::with_capacity(sections.len());
    for (position, section) in sections.iter().enumerate() {
        if section.id.as_str().trim().is_empty() {
            return Err(NavigationError::BlankSectionId(position));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(NavigationError::DuplicateSection(section.id.to_string()));
        }
    }
    Ok(())
}

#[derive(Debug)]
pub struct NavigationController {
    sections: Arc<[SectionSpec]>,
    state: watch::Sender<NavigationState>,
}

impl NavigationController {
    /// Builds a controller positioned on the first section with no direction.
    pub fn new(sections: Vec<SectionSpec>) -> Result<Self, NavigationError> {
        validate_sections(&sections)?;
        let first = sections[0].id.clone();
        let (state, _) = watch::channel(NavigationState::initial(first));
        Ok(Self {
            sections: sections.into(),
            state,
        })
    }

    /// The fixed section sequence, shared with read-only observers.
    pub fn sections(&self) -> Arc<[SectionSpec]> {
        Arc::clone(&self.sections)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    pub fn active_id(&self) -> SectionId {
        self.state.borrow().active_section_id.clone()
    }

    pub fn active_index(&self) -> usize {
        let state = self.state.borrow();
        // The active id is always a member of the sequence.
        self.index_of(state.active_section_id.as_str()).unwrap_or_default()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id.as_str() == id)
    }

    pub fn section(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|section| section.id.as_str() == id)
    }

    /// Registers a new observer. The receiver sees the current state
    /// immediately and is notified on every accepted change.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    /// Makes `target` the active section.
    ///
    /// Unknown ids are rejected without touching state. Requesting the active
    /// section is a strict no-op: no mutation and no notification.
    pub fn request_section_change(&mut self, target: &str) -> Result<SectionChange, NavigationError> {
        let Some(target_index) = self.index_of(target) else {
            debug!(target, "rejected navigation to unknown section");
            return Err(NavigationError::UnknownSection(target.to_string()));
        };

        let current_index = self.active_index();
        if target_index == current_index {
            return Ok(SectionChange::Unchanged);
        }

        let direction = Direction::between(current_index, target_index);
        let from = self.sections[current_index].id.clone();
        let to = self.sections[target_index].id.clone();
        debug!(%from, %to, ?direction, "section change accepted");

        self.state.send_replace(NavigationState {
            active_section_id: to.clone(),
            direction,
        });
        Ok(SectionChange::Changed { from, to, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::SectionKind;

    fn controller() -> NavigationController {
        NavigationController::new(SectionSpec::defaults()).expect("default sections are valid")
    }

    #[test]
    fn starts_on_first_section_without_direction() {
        let controller = controller();
        let state = controller.state();
        assert_eq!(state.active_section_id.as_str(), "home");
        assert_eq!(state.direction, Direction::None);
    }

    #[test]
    fn later_target_is_forward_and_earlier_is_backward() {
        let ids: Vec<String> = SectionSpec::defaults().into_iter().map(|s| s.id.to_string()).collect();
        for (current, current_id) in ids.iter().enumerate() {
            for (target, target_id) in ids.iter().enumerate() {
                if current == target {
                    continue;
                }
                let mut controller = controller();
                controller.request_section_change(current_id).expect("known id");
                controller.request_section_change(target_id).expect("known id");
                let expected = if target > current { Direction::Forward } else { Direction::Backward };
                assert_eq!(controller.state().direction, expected, "{current_id} -> {target_id}");
                assert_eq!(controller.active_id().as_str(), target_id);
            }
        }
    }

    #[test]
    fn requesting_the_active_section_is_a_strict_no_op() {
        let mut controller = controller();
        controller.request_section_change("resume").expect("known id");
        let before = controller.state();
        let mut receiver = controller.subscribe();
        receiver.mark_unchanged();

        let outcome = controller.request_section_change("resume").expect("known id");

        assert_eq!(outcome, SectionChange::Unchanged);
        assert_eq!(controller.state(), before);
        assert!(!receiver.has_changed().expect("sender alive"));
    }

    #[test]
    fn unknown_target_is_reported_and_state_is_untouched() {
        let mut controller = controller();
        controller.request_section_change("blogs").expect("known id");
        let before = controller.state();
        let mut receiver = controller.subscribe();
        receiver.mark_unchanged();

        let error = controller.request_section_change("gallery").unwrap_err();

        assert_eq!(error, NavigationError::UnknownSection("gallery".into()));
        assert_eq!(controller.state(), before);
        assert!(!receiver.has_changed().expect("sender alive"));
    }

    #[test]
    fn subscribers_are_notified_of_each_change() {
        let mut controller = controller();
        let mut receiver = controller.subscribe();
        receiver.mark_unchanged();

        controller.request_section_change("contact").expect("known id");
        assert!(receiver.has_changed().expect("sender alive"));
        let seen = receiver.borrow_and_update().clone();
        assert_eq!(seen.active_section_id.as_str(), "contact");
        assert_eq!(seen.direction, Direction::Forward);

        controller.request_section_change("about").expect("known id");
        assert_eq!(receiver.borrow_and_update().direction, Direction::Backward);
    }

    #[test]
    fn last_request_wins_without_merging() {
        let mut controller = controller();
        controller.request_section_change("portfolio").expect("known id");
        controller.request_section_change("about").expect("known id");
        controller.request_section_change("certifications").expect("known id");
        let state = controller.state();
        assert_eq!(state.active_section_id.as_str(), "certifications");
        assert_eq!(state.direction, Direction::Forward);
    }

    #[test]
    fn invalid_sequences_are_rejected() {
        assert_eq!(NavigationController::new(Vec::new()).unwrap_err(), NavigationError::EmptySections);

        let duplicated = vec![
            SectionSpec::new("home", "Home", SectionKind::Home),
            SectionSpec::new("home", "Again", SectionKind::About),
        ];
        assert_eq!(
            NavigationController::new(duplicated).unwrap_err(),
            NavigationError::DuplicateSection("home".into())
        );

        let blank = vec![SectionSpec::new(" ", "Blank", SectionKind::Home)];
        assert_eq!(NavigationController::new(blank).unwrap_err(), NavigationError::BlankSectionId(0));
    }
}
