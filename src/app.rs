use crate::config::config::Config;
use crate::logging::LogRingBuffer;
use crate::widget_traits::DebugInfoProvider;
use crate::widgets::selector_widget::{SelectorAction, SelectorAppearance, SelectorWidget};
use anyhow::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use std::io;

/// Which pane owns keyboard input in the demo host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusTarget {
    Selector,
    Detail,
}

/// Demo host: the selector next to a detail pane showing the committed
/// selection. Tab and mouse clicks move focus between the two, which is
/// what drives the widget's focus-gained/focus-lost events.
pub struct App {
    selector: SelectorWidget,
    focus: FocusTarget,
    committed: Option<String>,
    show_debug: bool,
    log_buffer: LogRingBuffer,
    selector_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(candidates: Vec<String>, config: &Config, log_buffer: LogRingBuffer) -> Self {
        let appearance = SelectorAppearance::from_config(config);
        let mut selector = SelectorWidget::new(candidates).with_appearance(appearance);
        // the selector pane starts focused
        selector.handle_focus_gained();

        Self {
            selector,
            focus: FocusTarget::Selector,
            committed: None,
            show_debug: false,
            log_buffer,
            selector_area: Rect::default(),
            should_quit: false,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusGained => {
                if self.focus == FocusTarget::Selector {
                    self.selector.handle_focus_gained();
                }
            }
            // the terminal itself lost focus, which is outside the subtree
            Event::FocusLost => self.selector.handle_focus_lost(false),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        tracing::trace!(target: "input", "key: {:?}", key.code);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::F(5) => {
                self.show_debug = !self.show_debug;
                return;
            }
            KeyCode::Tab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            FocusTarget::Selector => match self.selector.handle_key(key) {
                SelectorAction::Committed(candidate) => {
                    self.committed = Some(candidate);
                }
                SelectorAction::PassThrough => match key.code {
                    // with the panel closed, Enter accepts and Escape quits
                    KeyCode::Enter | KeyCode::Esc => self.should_quit = true,
                    _ => {}
                },
                SelectorAction::Continue => {}
            },
            FocusTarget::Detail => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusTarget::Selector => {
                self.selector.handle_focus_lost(false);
                FocusTarget::Detail
            }
            FocusTarget::Detail => {
                self.selector.handle_focus_gained();
                FocusTarget::Selector
            }
        };
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        // A click on a panel row is an activation. It lands inside the
        // widget subtree, so it never closes the panel via focus loss;
        // only the commit itself closes it.
        if let Some(index) = self.selector.panel_row_at(self.selector_area, column, row) {
            if let SelectorAction::Committed(candidate) = self.selector.pointer_activate(index) {
                self.committed = Some(candidate);
            }
            return;
        }

        let within = self.selector.hit_test(self.selector_area, column, row);
        match (self.focus, within) {
            (FocusTarget::Selector, false) => {
                self.selector.handle_focus_lost(false);
                self.focus = FocusTarget::Detail;
            }
            (FocusTarget::Detail, true) => {
                self.selector.handle_focus_gained();
                self.focus = FocusTarget::Selector;
            }
            (FocusTarget::Selector, true) => {
                self.selector.handle_focus_lost(true);
            }
            (FocusTarget::Detail, false) => {}
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);

        self.selector_area = panes[0];
        self.selector.render(f, panes[0]);
        self.render_detail(f, panes[1]);
        self.render_status(f, chunks[1]);

        if self.show_debug {
            self.render_debug_overlay(f);
        }
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let content = match &self.committed {
            Some(candidate) => format!("Selected: {}", candidate),
            None => "Nothing selected yet".to_string(),
        };
        let border_style = if self.focus == FocusTarget::Detail {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let detail = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Selection")
                    .border_style(border_style),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(detail, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let hints =
            "Tab switch focus | Up/Down navigate | Enter select | Esc close | F5 debug | Ctrl+C quit";
        let status = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, area);
    }

    fn render_debug_overlay(&self, f: &mut Frame) {
        let area = centered_rect(70, 60, f.area());

        let mut content = self.selector.debug_info();
        content.push_str("\nRecent log entries:\n");
        for entry in self.log_buffer.recent(10) {
            content.push_str(&entry.format_for_display());
            content.push('\n');
        }

        f.render_widget(Clear, area);
        let overlay = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Debug (F5 to close)"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(overlay, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Run the demo host over the given candidates. Returns the last committed
/// selection, if any.
pub fn run(
    candidates: Vec<String>,
    config: &Config,
    log_buffer: LogRingBuffer,
) -> Result<Option<String>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(candidates, config, log_buffer);
    let loop_result = app.event_loop(&mut terminal);

    // restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    loop_result?;
    Ok(app.committed.take())
}
