use crate::config::config::Config;
use crate::cursor::NavigationCursor;
use crate::filter::filter_candidates;
use crate::visibility::VisibilityController;
use crate::widget_traits::DebugInfoProvider;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// Interaction state snapshot: the three values every event handler updates
/// together. Cloneable so hosts can stash and restore it when swapping the
/// widget in and out of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    pub query: String,
    pub is_open: bool,
    pub highlight: Option<usize>,
}

/// What an event did, from the host's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    /// The widget consumed the event; state may have changed.
    Continue,
    /// A candidate was committed into the query field and the panel closed.
    /// Carries the candidate's exact text.
    Committed(String),
    /// The widget did not consume the event; the host keeps it.
    PassThrough,
}

/// Visual settings for rendering, resolved from the application config.
#[derive(Debug, Clone)]
pub struct SelectorAppearance {
    pub title: String,
    pub placeholder: String,
    pub indicator: String,
    pub max_panel_rows: u16,
    pub highlight_style: Style,
    pub border_style: Style,
}

impl Default for SelectorAppearance {
    fn default() -> Self {
        Self {
            title: "Select".to_string(),
            placeholder: "No results".to_string(),
            indicator: "►".to_string(),
            max_panel_rows: 8,
            highlight_style: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default(),
        }
    }
}

impl SelectorAppearance {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.display.title.clone(),
            placeholder: config.display.placeholder.clone(),
            indicator: config.display.indicator.clone(),
            max_panel_rows: config.display.max_panel_rows,
            highlight_style: config.theme.highlight_style(),
            border_style: config.theme.border_style(),
        }
    }
}

/// A combo-box: a query input over a fixed candidate list, with a panel
/// that narrows as the user types.
///
/// The candidate list is fixed for the widget's lifetime and its entries
/// are expected to be unique. With duplicate entries the widget still
/// behaves deterministically: commits resolve by row position in the
/// visible list, not by text.
pub struct SelectorWidget {
    candidates: Vec<String>,
    input: Input,
    visible: Vec<String>,
    cursor: NavigationCursor,
    visibility: VisibilityController,
    appearance: SelectorAppearance,
}

impl SelectorWidget {
    pub fn new(candidates: Vec<String>) -> Self {
        let visible = candidates.clone();
        Self {
            candidates,
            input: Input::default(),
            visible,
            cursor: NavigationCursor::new(),
            visibility: VisibilityController::new(),
            appearance: SelectorAppearance::default(),
        }
    }

    pub fn with_appearance(mut self, appearance: SelectorAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Whether the candidate panel is shown
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// The filtered candidate list, in original candidate order
    pub fn visible_candidates(&self) -> &[String] {
        &self.visible
    }

    /// The highlighted row of the visible list, if any
    pub fn highlight(&self) -> Option<usize> {
        self.cursor.highlight()
    }

    /// The highlighted candidate's text, if a valid row is highlighted
    pub fn current(&self) -> Option<&str> {
        self.cursor.current(&self.visible)
    }

    /// Text caret column, for host cursor placement
    pub fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Handle key input.
    ///
    /// Arrow keys drive the highlight, Enter commits, Escape closes, and
    /// everything else is offered to the query input. Keys the input does
    /// not recognize pass through to the host, as do Enter and Escape
    /// while the panel is closed.
    pub fn handle_key(&mut self, key: KeyEvent) -> SelectorAction {
        match key.code {
            KeyCode::Down => {
                if self.visibility.on_arrow_down() {
                    // the opening keystroke never also moves the highlight
                    tracing::trace!(target: "selector", "panel opened by ArrowDown");
                    return SelectorAction::Continue;
                }
                self.cursor.move_down(self.visible.len());
                SelectorAction::Continue
            }
            KeyCode::Up => {
                // not gated on the panel being open: the highlight moves
                // without opening, see NavigationCursor::move_up
                self.cursor.move_up(self.visible.len());
                SelectorAction::Continue
            }
            KeyCode::Enter => {
                if !self.visibility.is_open() {
                    return SelectorAction::PassThrough;
                }
                match self.cursor.current(&self.visible) {
                    Some(candidate) => {
                        let candidate = candidate.to_string();
                        self.commit(candidate)
                    }
                    // no valid highlight: the panel stays open
                    None => SelectorAction::Continue,
                }
            }
            KeyCode::Esc => {
                if self.visibility.on_escape() {
                    tracing::trace!(target: "selector", "panel closed by Escape");
                    SelectorAction::Continue
                } else {
                    SelectorAction::PassThrough
                }
            }
            _ => {
                let before = self.input.value().to_string();
                let handled = self.input.handle_event(&Event::Key(key)).is_some();
                if self.input.value() != before {
                    self.on_text_changed();
                    SelectorAction::Continue
                } else if handled {
                    // cursor movement inside the query field
                    SelectorAction::Continue
                } else {
                    SelectorAction::PassThrough
                }
            }
        }
    }

    /// The input gained focus: show the panel, filtered by the current query.
    pub fn handle_focus_gained(&mut self) {
        self.visibility.on_focus_gained();
    }

    /// Focus moved elsewhere. `focus_within` is the host's answer to "is
    /// the new focus target still inside this widget's subtree"; the panel
    /// only closes when it is not.
    pub fn handle_focus_lost(&mut self, focus_within: bool) {
        self.visibility.on_focus_lost(focus_within);
    }

    /// Pointer activation of a row of the visible list. Out-of-range rows
    /// are ignored.
    pub fn pointer_activate(&mut self, index: usize) -> SelectorAction {
        if !self.visibility.is_open() {
            return SelectorAction::Continue;
        }
        match self.visible.get(index) {
            Some(candidate) => {
                let candidate = candidate.clone();
                self.commit(candidate)
            }
            None => SelectorAction::Continue,
        }
    }

    /// Capture the interaction state for later restoration.
    pub fn state(&self) -> SelectorState {
        SelectorState {
            query: self.input.value().to_string(),
            is_open: self.visibility.is_open(),
            highlight: self.cursor.highlight(),
        }
    }

    /// Restore a captured state. The visible list is recomputed from the
    /// restored query and the highlight is dropped if it no longer fits.
    pub fn restore_state(&mut self, state: SelectorState) {
        let cursor = state.query.len();
        self.input = Input::new(state.query).with_cursor(cursor);
        self.visible = filter_candidates(&self.candidates, self.input.value());
        self.cursor.restore(state.highlight, self.visible.len());
        self.visibility.set_open(state.is_open);
    }

    fn on_text_changed(&mut self) {
        self.refilter();
        self.visibility.on_text_changed();
        tracing::debug!(
            target: "selector",
            "query '{}' matches {} of {}",
            self.input.value(),
            self.visible.len(),
            self.candidates.len()
        );
    }

    /// Recompute the visible list from the current query. Every list change
    /// clears the highlight.
    fn refilter(&mut self) {
        self.visible = filter_candidates(&self.candidates, self.input.value());
        self.cursor.reset();
    }

    /// Set the query to the candidate's exact text and close the panel. The
    /// query change refilters and clears the highlight, but a commit is not
    /// a user text change: the panel does not reopen.
    fn commit(&mut self, candidate: String) -> SelectorAction {
        tracing::debug!(target: "selector", "committed '{}'", candidate);
        self.input = Input::new(candidate.clone()).with_cursor(candidate.len());
        self.refilter();
        self.visibility.on_commit();
        SelectorAction::Committed(candidate)
    }

    /// Render the input field and, while open, the panel beneath it.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (input_area, panel_area) = self.layout(area);

        self.render_input(f, input_area);
        if self.visibility.is_open() {
            self.render_panel(f, self.panel_rect(panel_area));
        }
    }

    fn layout(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// The panel's actual rectangle: tall enough for the visible rows (or
    /// the placeholder line), capped by config and the available space.
    fn panel_rect(&self, available: Rect) -> Rect {
        let rows = self
            .visible
            .len()
            .max(1)
            .min(self.appearance.max_panel_rows as usize) as u16;
        Rect {
            height: (rows + 2).min(available.height),
            ..available
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        // the title glyph mirrors the panel's expanded/collapsed state
        let title = if self.visibility.is_open() {
            format!("{} ▾", self.appearance.title)
        } else {
            format!("{} ▸", self.appearance.title)
        };

        let input_widget = Paragraph::new(self.input.value()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.appearance.border_style),
        );
        f.render_widget(input_widget, area);

        f.set_cursor_position((area.x + self.input.visual_cursor() as u16 + 1, area.y + 1));
    }

    fn render_panel(&self, f: &mut Frame, area: Rect) {
        // the count in the title ties the panel to the input above it
        let title = format!(
            "{} options ({}/{})",
            self.appearance.title,
            self.visible.len(),
            self.candidates.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(self.appearance.border_style);

        if self.visible.is_empty() {
            let placeholder = Paragraph::new(self.appearance.placeholder.as_str())
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(placeholder, area);
            return;
        }

        let items: Vec<Line> = self
            .visible
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let is_highlighted = self.cursor.highlight() == Some(i);
                let marker = if is_highlighted {
                    self.appearance.indicator.as_str()
                } else {
                    " "
                };
                let style = if is_highlighted {
                    self.appearance.highlight_style
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{} {}", marker, candidate), style))
            })
            .collect();

        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }

    /// Map a terminal coordinate to a row of the visible panel, if it lands
    /// on one. `area` must be the rectangle `render` was called with.
    pub fn panel_row_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if !self.visibility.is_open() || self.visible.is_empty() {
            return None;
        }
        let (_, panel_area) = self.layout(area);
        let panel_area = self.panel_rect(panel_area);

        // inside the borders
        if column <= panel_area.x || column >= panel_area.x + panel_area.width.saturating_sub(1) {
            return None;
        }
        if row <= panel_area.y || row >= panel_area.y + panel_area.height.saturating_sub(1) {
            return None;
        }

        let index = (row - panel_area.y - 1) as usize;
        (index < self.visible.len()).then_some(index)
    }

    /// Whether a terminal coordinate falls inside the widget's rendered
    /// subtree (the input, plus the panel while open). Hosts use this to
    /// answer the `focus_within` question on pointer-driven focus changes.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> bool {
        let (input_area, panel_area) = self.layout(area);
        let position = Position::new(column, row);
        if input_area.contains(position) {
            return true;
        }
        self.visibility.is_open() && self.panel_rect(panel_area).contains(position)
    }
}

impl DebugInfoProvider for SelectorWidget {
    fn debug_info(&self) -> String {
        let mut info = String::from("=== SELECTOR WIDGET ===\n");
        info.push_str(&format!("Query: '{}'\n", self.input.value()));
        info.push_str(&format!(
            "Panel: {}\n",
            if self.visibility.is_open() {
                "OPEN"
            } else {
                "CLOSED"
            }
        ));
        info.push_str(&format!(
            "Visible: {} of {}\n",
            self.visible.len(),
            self.candidates.len()
        ));
        info.push_str(&format!("Highlight: {:?}\n", self.cursor.highlight()));

        if let Some(candidate) = self.current() {
            info.push_str(&format!("\nCurrent Selection: '{}'\n", candidate));
        }

        info
    }

    fn debug_summary(&self) -> String {
        format!(
            "SelectorWidget: {}/{} visible, open={}, highlight={:?}",
            self.visible.len(),
            self.candidates.len(),
            self.visibility.is_open(),
            self.cursor.highlight()
        )
    }
}
