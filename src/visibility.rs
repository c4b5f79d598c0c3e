/// Open/closed state of the candidate panel.
///
/// A small state machine driven by the widget's event handlers. Opening
/// events: gaining focus, a text change, or ArrowDown while closed. Closing
/// events: Escape, a commit, or focus leaving the widget subtree. Closing
/// never clears the query or the filtered list; reopening shows the panel
/// filtered by whatever the query currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityController {
    open: bool,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_focus_gained(&mut self) {
        self.open = true;
    }

    pub fn on_text_changed(&mut self) {
        self.open = true;
    }

    /// ArrowDown while closed opens the panel and consumes the keystroke;
    /// opening and moving the highlight never happen on the same key press.
    /// Returns true when the keystroke was spent on opening.
    pub fn on_arrow_down(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Returns true when Escape actually closed the panel; false means the
    /// panel was already closed and the key belongs to the host.
    pub fn on_escape(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }

    pub fn on_commit(&mut self) {
        self.open = false;
    }

    /// `focus_within` answers "is the new focus target still inside the
    /// widget subtree" and is supplied by the host; the panel only closes
    /// when focus genuinely left.
    pub fn on_focus_lost(&mut self, focus_within: bool) {
        if !focus_within {
            self.open = false;
        }
    }

    /// Overwrite the state directly. Used when restoring a snapshot, not by
    /// event handling.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!VisibilityController::new().is_open());
    }

    #[test]
    fn focus_and_text_open_the_panel() {
        let mut visibility = VisibilityController::new();
        visibility.on_focus_gained();
        assert!(visibility.is_open());

        let mut visibility = VisibilityController::new();
        visibility.on_text_changed();
        assert!(visibility.is_open());
    }

    #[test]
    fn arrow_down_consumes_the_opening_keystroke() {
        let mut visibility = VisibilityController::new();
        assert!(visibility.on_arrow_down());
        assert!(visibility.is_open());
        // already open: the same key now belongs to navigation
        assert!(!visibility.on_arrow_down());
        assert!(visibility.is_open());
    }

    #[test]
    fn escape_only_reports_a_close_when_open() {
        let mut visibility = VisibilityController::new();
        assert!(!visibility.on_escape());
        visibility.on_focus_gained();
        assert!(visibility.on_escape());
        assert!(!visibility.is_open());
    }

    #[test]
    fn focus_loss_within_subtree_keeps_the_panel_open() {
        let mut visibility = VisibilityController::new();
        visibility.on_focus_gained();
        visibility.on_focus_lost(true);
        assert!(visibility.is_open());
        visibility.on_focus_lost(false);
        assert!(!visibility.is_open());
    }

    #[test]
    fn commit_closes() {
        let mut visibility = VisibilityController::new();
        visibility.on_text_changed();
        visibility.on_commit();
        assert!(!visibility.is_open());
    }
}
