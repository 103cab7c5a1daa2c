//! Responsive viewport classification.

use folio_types::ViewportClass;
use tokio::sync::watch;
use tracing::debug;

/// Default mobile/desktop breakpoint in pixels.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Classifies viewport widths and publishes only real flips.
///
/// Every width passed to [`observe`](Self::observe) is re-evaluated, so no
/// boundary crossing is missed, but subscribers are only woken when the class
/// actually changes.
#[derive(Debug)]
pub struct ViewportClassifier {
    breakpoint: u32,
    fixed: bool,
    class: watch::Sender<ViewportClass>,
}

impl ViewportClassifier {
    /// Classifies the width measured at mount time.
    pub fn mount(breakpoint: u32, initial_width: u32) -> Self {
        let initial = ViewportClass::classify(initial_width, breakpoint);
        debug!(initial_width, breakpoint, ?initial, "viewport classified");
        let (class, _) = watch::channel(initial);
        Self {
            breakpoint,
            fixed: false,
            class,
        }
    }

    /// A classifier pinned to one class; used when the environment cannot
    /// report its size. Subsequent observations are ignored.
    pub fn fixed(class: ViewportClass) -> Self {
        let (sender, _) = watch::channel(class);
        Self {
            breakpoint: DEFAULT_BREAKPOINT_PX,
            fixed: true,
            class: sender,
        }
    }

    pub fn class(&self) -> ViewportClass {
        *self.class.borrow()
    }

    pub fn is_mobile(&self) -> bool {
        self.class().is_mobile()
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewportClass> {
        self.class.subscribe()
    }

    /// Re-evaluates the class for a new width. Returns the new class when it
    /// flipped, `None` otherwise.
    pub fn observe(&mut self, width: u32) -> Option<ViewportClass> {
        if self.fixed {
            return None;
        }
        let next = ViewportClass::classify(width, self.breakpoint);
        let flipped = self.class.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if flipped {
            debug!(width, ?next, "viewport class flipped");
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_boundary_crossing_flips_exactly_once() {
        let mut classifier = ViewportClassifier::mount(DEFAULT_BREAKPOINT_PX, 1024);
        let mut receiver = classifier.subscribe();
        let widths = [1000, 900, 768, 767, 700, 500, 767, 768, 800, 1200, 320];
        let flips: Vec<ViewportClass> = widths.iter().filter_map(|width| classifier.observe(*width)).collect();

        assert_eq!(flips, [ViewportClass::Mobile, ViewportClass::Desktop, ViewportClass::Mobile]);
        assert!(receiver.has_changed().expect("sender alive"));
        assert_eq!(*receiver.borrow_and_update(), ViewportClass::Mobile);
    }

    #[test]
    fn widths_on_one_side_never_notify() {
        let mut classifier = ViewportClassifier::mount(DEFAULT_BREAKPOINT_PX, 320);
        let mut receiver = classifier.subscribe();
        receiver.mark_unchanged();
        for width in (0..768).step_by(37) {
            assert_eq!(classifier.observe(width), None);
        }
        assert!(!receiver.has_changed().expect("sender alive"));
        assert!(classifier.is_mobile());
    }

    #[test]
    fn fixed_classifier_ignores_resizes() {
        let mut classifier = ViewportClassifier::fixed(ViewportClass::Desktop);
        assert_eq!(classifier.observe(10), None);
        assert!(!classifier.is_mobile());
        assert!(classifier.is_fixed());
    }
}
