//! Directional key routing with cyclic wraparound.
//!
//! The shell maps raw terminal key codes to [`DirectionalKey`]; anything that
//! does not map is not a navigation key and never reaches the router.

use tracing::debug;

use crate::{NavigationController, NavigationError, SectionChange};

/// The four directional keys the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionalKey {
    Up,
    Down,
    Left,
    Right,
}

impl DirectionalKey {
    /// `Right`/`Down` advance, `Left`/`Up` retreat.
    pub fn intent(self) -> NavIntent {
        match self {
            DirectionalKey::Right | DirectionalKey::Down => NavIntent::Advance,
            DirectionalKey::Left | DirectionalKey::Up => NavIntent::Retreat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

/// Index reached from `current` in a ring of `count` positions.
pub fn cyclic_index(current: usize, count: usize, intent: NavIntent) -> usize {
    if count == 0 {
        return 0;
    }
    match intent {
        NavIntent::Advance => (current + 1) % count,
        NavIntent::Retreat => (current + count - 1) % count,
    }
}

/// Turns directional keys into section change requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardRouter;

impl KeyboardRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, key: DirectionalKey, controller: &mut NavigationController) -> Result<SectionChange, NavigationError> {
        self.apply(key.intent(), controller)
    }

    pub fn apply(&self, intent: NavIntent, controller: &mut NavigationController) -> Result<SectionChange, NavigationError> {
        let next = cyclic_index(controller.active_index(), controller.len(), intent);
        let sections = controller.sections();
        let target = sections[next].id.as_str();
        debug!(?intent, target, "keyboard navigation");
        controller.request_section_change(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Direction, SectionSpec};

    fn controller() -> NavigationController {
        NavigationController::new(SectionSpec::defaults()).expect("default sections are valid")
    }

    #[test]
    fn seven_advances_cycle_back_home() {
        let mut controller = controller();
        let router = KeyboardRouter::new();
        let sections = controller.sections();

        for step in 1..=7 {
            router.route(DirectionalKey::Right, &mut controller).expect("known id");
            let expected = &sections[step % 7].id;
            assert_eq!(&controller.active_id(), expected, "step {step}");
        }
        assert_eq!(controller.active_id().as_str(), "home");
    }

    #[test]
    fn two_retreats_from_about_wrap_to_contact() {
        let mut controller = controller();
        let router = KeyboardRouter::new();
        controller.request_section_change("about").expect("known id");

        router.route(DirectionalKey::Up, &mut controller).expect("known id");
        assert_eq!(controller.active_id().as_str(), "home");
        assert_eq!(controller.state().direction, Direction::Backward);

        router.route(DirectionalKey::Left, &mut controller).expect("known id");
        assert_eq!(controller.active_id().as_str(), "contact");
        assert_eq!(controller.active_index(), 6);
        // Direction follows index order only, so wrapping 0 -> 6 is forward.
        assert_eq!(controller.state().direction, Direction::Forward);
    }

    #[test]
    fn wrapping_forward_from_last_travels_backward() {
        let mut controller = controller();
        let router = KeyboardRouter::new();
        controller.request_section_change("contact").expect("known id");

        router.route(DirectionalKey::Down, &mut controller).expect("known id");
        assert_eq!(controller.active_id().as_str(), "home");
        assert_eq!(controller.state().direction, Direction::Backward);
    }

    #[test]
    fn single_section_ring_is_a_no_op() {
        let mut controller = NavigationController::new(SectionSpec::defaults().into_iter().take(1).collect()).expect("valid");
        let outcome = KeyboardRouter::new().apply(NavIntent::Advance, &mut controller).expect("known id");
        assert_eq!(outcome, SectionChange::Unchanged);
    }

    #[test]
    fn cyclic_index_wraps_both_ways() {
        assert_eq!(cyclic_index(6, 7, NavIntent::Advance), 0);
        assert_eq!(cyclic_index(0, 7, NavIntent::Retreat), 6);
        assert_eq!(cyclic_index(3, 7, NavIntent::Retreat), 2);
        assert_eq!(cyclic_index(0, 0, NavIntent::Advance), 0);
    }
}
