//! Navigation router for screen transitions

use super::state::Screen;

/// Route represents a navigation path
#[derive(Clone, Copy, Debug)]
pub struct Route {
    /// The screen to display
    pub screen: Screen,
}

/// Router manages navigation history
pub struct Router {
    /// Navigation history stack
    history: Vec<Route>,
    /// Maximum history depth
    max_depth: usize,
}

impl Router {
    /// Create a new router
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            max_depth: 20,
        }
    }

    /// Push a new route onto the history
    pub fn push(&mut self, screen: Screen) {
        // Navigating to the current screen is a no-op.
        if self.history.last().map(|r| r.screen) == Some(screen) {
            return;
        }

        if self.history.len() >= self.max_depth {
            self.history.remove(0);
        }

        self.history.push(Route { screen });
    }

    /// Go back to the previous screen
    pub fn back(&mut self) -> Option<Screen> {
        self.history.pop();
        self.history.last().map(|r| r.screen)
    }

    /// Get the current route
    pub fn current(&self) -> Option<&Route> {
        self.history.last()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Clear navigation history
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_walks_the_history() {
        let mut router = Router::new();
        router.push(Screen::Home);
        router.push(Screen::Projects);
        router.push(Screen::Contact);

        assert_eq!(router.back(), Some(Screen::Projects));
        assert_eq!(router.back(), Some(Screen::Home));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn repushing_the_current_screen_is_a_no_op() {
        let mut router = Router::new();
        router.push(Screen::Home);
        router.push(Screen::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn history_depth_is_bounded() {
        let mut router = Router::new();
        for _ in 0..30 {
            router.push(Screen::Home);
            router.push(Screen::About);
        }
        let mut depth = 0;
        while router.back().is_some() {
            depth += 1;
        }
        assert!(depth < 20);
    }
}
