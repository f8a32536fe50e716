use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::collage::NavigationSink;

use super::Screen;

#[derive(Debug, Default)]
struct RouterState {
    current: Screen,
    history: Vec<Screen>,
}

/// Navigation sink that tracks the current screen.
///
/// Starts on [`Screen::Landing`]. Shared between the screen sessions that
/// request navigation, so state sits behind a mutex.
#[derive(Debug, Default)]
pub struct Router {
    state: Mutex<RouterState>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.lock().current
    }

    /// Every screen navigated to, oldest first (the initial screen excluded).
    pub fn history(&self) -> Vec<Screen> {
        self.lock().history.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RouterState> {
        // A panic while holding the lock cannot leave RouterState half-written.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NavigationSink for Router {
    fn navigate(&self, destination: Screen) {
        let mut state = self.lock();
        info!(
            event = "core.router.navigated",
            from = state.current.as_str(),
            to = destination.as_str()
        );
        state.current = destination;
        state.history.push(destination);
    }
}
