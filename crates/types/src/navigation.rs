use serde::{Deserialize, Serialize};

use crate::SectionId;

/// Sign of travel between two sections in the fixed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
    /// Only observed before the first accepted change.
    #[default]
    None,
}

impl Direction {
    /// Direction of travel from position `from` to position `to`.
    ///
    /// Equal positions never reach this function in practice; they map to
    /// `Direction::None`.
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }

    /// `+1` forward, `-1` backward, `0` before any travel.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
            Direction::None => 0,
        }
    }
}

/// The authoritative "what is shown" state owned by the navigation controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub active_section_id: SectionId,
    pub direction: Direction,
}

impl NavigationState {
    pub fn initial(first: SectionId) -> Self {
        Self {
            active_section_id: first,
            direction: Direction::None,
        }
    }
}
