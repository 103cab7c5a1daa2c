use std::time::{Duration, Instant};

use folio_engine::{NavigationController, Tween};
use folio_types::{NavigationState, SectionId};
use ratatui::layout::Rect;
use tokio::sync::watch;

use crate::ui::utils::find_target_index_by_mouse_position;

/// Rows between two rail entries.
pub const RAIL_ROW_PITCH: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailItem {
    pub id: SectionId,
    pub icon: String,
    pub label: String,
}

/// Entries, indicator animation and hit-test areas shared by the desktop rail
/// and the mobile panel.
#[derive(Debug)]
pub struct RailState {
    pub items: Vec<RailItem>,
    indicator: Tween,
    observer: watch::Receiver<NavigationState>,
    /// Last rendered area; used for hit testing.
    pub last_area: Rect,
    /// Last rendered entry rows, in item order.
    pub per_item_areas: Vec<Rect>,
}

impl RailState {
    pub fn new(navigation: &NavigationController, indicator_duration: Duration, now: Instant) -> Self {
        let items = navigation
            .sections()
            .iter()
            .map(|section| RailItem {
                id: section.id.clone(),
                icon: section.icon().to_string(),
                label: section.label.clone(),
            })
            .collect();
        let mut observer = navigation.subscribe();
        observer.borrow_and_update();
        Self {
            items,
            indicator: Tween::settled(navigation.active_index() as f32, now, indicator_duration),
            observer,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// Picks up a published navigation change and retargets the indicator.
    /// Returns `true` when something was observed.
    pub fn sync(&mut self, navigation: &NavigationController, now: Instant) -> bool {
        if !self.observer.has_changed().unwrap_or(false) {
            return false;
        }
        let state = self.observer.borrow_and_update().clone();
        if let Some(index) = navigation.index_of(state.active_section_id.as_str()) {
            self.indicator.retarget(index as f32, now);
        }
        true
    }

    /// Indicator position in entry units (fractional while sliding).
    pub fn indicator_position(&self, now: Instant) -> f32 {
        self.indicator.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.indicator.is_settled(now)
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<&SectionId> {
        find_target_index_by_mouse_position(&self.last_area, &self.per_item_areas, x, y)
            .and_then(|index| self.items.get(index))
            .map(|item| &item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::SectionSpec;

    #[test]
    fn indicator_slides_to_the_new_entry() {
        let mut navigation = NavigationController::new(SectionSpec::defaults()).expect("controller");
        let start = Instant::now();
        let mut rail = RailState::new(&navigation, Duration::from_millis(300), start);
        assert!(!rail.is_animating(start), "a fresh rail is at rest");
        assert!(!rail.sync(&navigation, start));

        navigation.request_section_change("portfolio").expect("known id");
        assert!(rail.sync(&navigation, start));
        assert_eq!(rail.indicator_position(start), 0.0);
        assert!((rail.indicator_position(start + Duration::from_millis(150)) - 2.0).abs() < 0.01);
        assert_eq!(rail.indicator_position(start + Duration::from_millis(300)), 4.0);
        assert!(!rail.is_animating(start + Duration::from_millis(300)));
    }

    #[test]
    fn no_op_requests_publish_nothing() {
        let mut navigation = NavigationController::new(SectionSpec::defaults()).expect("controller");
        let now = Instant::now();
        let mut rail = RailState::new(&navigation, Duration::from_millis(300), now);
        navigation.request_section_change("home").expect("known id");
        assert!(!rail.sync(&navigation, now));
    }
}
