use crate::{consts::consts::RecordId, render::card::Panel};

/// The page the controller drives: a results area, user notifications, a confirmation prompt and
/// an optional search field.
pub trait View {
    /// Replaces whatever the results area currently shows
    fn show(&mut self, panel: Panel);

    /// Modal-style message to the user
    fn notify(&mut self, message: &str);

    /// Returns `true` only when the user explicitly accepts
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Query-change events are ignored when the page has no search field
    fn has_search_field(&self) -> bool {
        true
    }
}

/// User interactions, bound to typed values rather than to strings embedded in markup
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    QueryChanged(String),
    MarkFound(RecordId),
    Reload,
}
