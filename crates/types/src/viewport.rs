use serde::{Deserialize, Serialize};

/// Responsive layout class derived from the viewport width.
///
/// It never influences navigation semantics; the shell only uses it to pick
/// between the top bar with a collapsible panel and the side rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classifies a width against a breakpoint; widths strictly below it are mobile.
    pub fn classify(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}
