// src/services/screen.rs
//
// Shared pieces of the screen state machine.

/// Lifecycle of a screen instance.
///
/// `Idle` until the first refresh, `Loaded` while the list is populated,
/// `Selected` while one row is mirrored into the edit form. Any mutating
/// action or explicit clear drops back to `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Loaded,
    Selected,
}

/// What a commit should do with the form contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    Create,
    Update,
}
