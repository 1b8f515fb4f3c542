/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Editing the search term; every keystroke re-filters
    Search,
    /// Delivery detail modal is open
    Detail,
}

/// Lifecycle of the delivery-list fetch, shown in the status line. An
/// error keeps the previous records on screen; only the status text
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}
