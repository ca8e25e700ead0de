//! Client-side navigation.

use parking_lot::Mutex;

/// Move the user to another view, side-effecting only.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

/// A simple history stack.
///
/// `go_to` pushes; `current` is the top of the stack.
#[derive(Default)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The path last navigated to, if any.
    pub fn current(&self) -> Option<String> {
        self.entries.lock().last().cloned()
    }

    /// Full navigation history, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&self, path: &str) {
        self.entries.lock().push(path.to_string());
    }
}
