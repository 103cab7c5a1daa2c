use thiserror::Error;

/// Errors reported by the navigation controller.
///
/// None of them change state: a rejected request leaves the active section
/// and direction exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The requested id is not part of the fixed section sequence.
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    /// A controller needs at least one section.
    #[error("the section list is empty")]
    EmptySections,
    /// Section ids must be unique.
    #[error("duplicate section id '{0}'")]
    DuplicateSection(String),
    /// Section ids must not be blank.
    #[error("section at position {0} has a blank id")]
    BlankSectionId(usize),
}
