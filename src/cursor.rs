/// Tracks which row of the visible candidate list is highlighted.
///
/// `None` means nothing is highlighted. The visible list may change length
/// between events; any list change resets the highlight rather than trying
/// to follow the previously highlighted item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    highlight: Option<usize>,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Clear the highlight. Called whenever the visible list is recomputed.
    pub fn reset(&mut self) {
        self.highlight = None;
    }

    /// Advance the highlight, saturating at the last row. Does not wrap.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.highlight = None;
            return;
        }
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Retreat the highlight, saturating at the first row.
    ///
    /// Moving up with no highlight lands on row 0 instead of staying
    /// cleared. Deliberately asymmetric with `move_down`: the first Up
    /// press always produces a highlight.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.highlight = None;
            return;
        }
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => i.saturating_sub(1).min(len - 1),
        });
    }

    /// The highlighted candidate, or `None` when nothing is highlighted or
    /// the stored index no longer fits the list.
    pub fn current<'a>(&self, visible: &'a [String]) -> Option<&'a str> {
        self.highlight
            .and_then(|i| visible.get(i))
            .map(String::as_str)
    }

    /// Reapply a previously captured highlight, dropping it if it no longer
    /// fits the list.
    pub fn restore(&mut self, highlight: Option<usize>, len: usize) {
        self.highlight = highlight.filter(|&i| i < len);
    }
}
