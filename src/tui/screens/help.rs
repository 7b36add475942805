//! Help screen — keybinding reference for whichever screen opened it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// A key chord and what pressing it does.
type Binding = (&'static str, &'static str);

static COMPOSE_BINDINGS: &[Binding] = &[
    ("Tab / Shift-Tab", "move to the next / previous field"),
    ("Enter", "publish the post"),
    ("Backspace", "delete the last character"),
    ("F2", "open the posts list"),
    ("F1", "open this help"),
    ("Esc", "quit postpad"),
];

static POSTS_BINDINGS: &[Binding] = &[
    ("Up / Down", "move the highlight"),
    ("r", "refresh the list from the service"),
    ("F1", "open this help"),
    ("q / Esc", "back to the compose screen"),
];

static HELP_BINDINGS: &[Binding] = &[
    ("Up / Down", "scroll"),
    ("Home", "jump to the top"),
    ("q / Esc", "go back"),
];

/// State for the help screen: scroll position plus the screen to
/// return to when dismissed.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::Compose,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Records which screen help was opened from.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Scrolls back to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll = 0;
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Compose => "Compose",
        Screen::Posts => "Posts",
        Screen::Help => "Help",
    }
}

/// One-sentence description shown above the bindings.
fn intro(origin: Screen) -> &'static str {
    match origin {
        Screen::Compose => "Fill in all three fields, then press Enter to publish.",
        Screen::Posts => "Every post the service has stored, oldest first.",
        Screen::Help => "You are reading it.",
    }
}

fn bindings(origin: Screen) -> &'static [Binding] {
    match origin {
        Screen::Compose => COMPOSE_BINDINGS,
        Screen::Posts => POSTS_BINDINGS,
        Screen::Help => HELP_BINDINGS,
    }
}

/// Builds the scrollable body for the origin screen's help.
fn help_lines(origin: Screen) -> Vec<Line<'static>> {
    let chord_style = Style::default().fg(Color::Yellow);

    let mut lines = vec![Line::from(""), Line::from(intro(origin)), Line::from("")];
    for (chord, effect) in bindings(origin) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {chord:<18}"), chord_style),
            Span::raw(*effect),
        ]));
    }
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Help ({}) ", screen_name(state.origin())))
        .title_bottom(
            Line::from(" ↑/↓ scroll · q/Esc back ").style(Style::default().fg(Color::DarkGray)),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = help_lines(state.origin());
    // Cap so the last line can never scroll past the top of the area.
    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    let scroll = state.scroll().min(max_scroll);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
