#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Transient UI state: the dismissible notice banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub notice: Option<String>,
}

impl UiState {
    /// Show a notice, replacing any previous one.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Dismiss the current notice.
    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}
