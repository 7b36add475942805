//! Posts screen — everything the service has stored, with manual refresh.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::Post;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the posts screen.
///
/// The post list itself lives on the `App` (the compose screen shares
/// it); this tracks only selection and fetch status.
#[derive(Debug, Clone, Default)]
pub struct PostListState {
    /// Number of posts currently in the shared list; bounds selection.
    count: usize,
    /// Index of the highlighted post, or `None` if the list is empty.
    selected: Option<usize>,
    /// Whether a fetch is outstanding.
    loading: bool,
    /// Error message from the last failed fetch.
    error: Option<String>,
}

impl PostListState {
    /// Creates an empty state. The first fetch outcome populates it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a fetch has started.
    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    /// Records a completed fetch of `count` posts.
    ///
    /// Selection is clamped to the new list; a previously empty list
    /// starts highlighted at the top.
    pub fn loaded(&mut self, count: usize) {
        self.count = count;
        self.selected = if count == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(count - 1))
        };
        self.loading = false;
        self.error = None;
    }

    /// Records a failed fetch. The previous list stays on screen.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns `true` while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.count => Some(i + 1),
            other => other,
        };
    }
}

impl ScreenState for PostListState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('r') => Action::RefreshPosts,
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Compose),
            _ => Action::None,
        }
    }
}

/// Renders the posts screen.
#[mutants::skip]
pub fn draw_posts(state: &PostListState, posts: &[Post], frame: &mut Frame, area: Rect) {
    let title = if state.is_loading() {
        " Posts (refreshing…) "
    } else {
        " Posts "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if posts.is_empty() {
        let message = match state.error() {
            Some(err) => format!("Could not load posts: {err}"),
            None => "No posts yet.".to_string(),
        };
        let lines = vec![
            Line::from(""),
            Line::from(message),
            Line::from("Press 'r' to refresh, Esc to compose."),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let header = Row::new(vec!["Title", "Author", "Content"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                post.title.clone(),
                post.author.clone(),
                post.content.clone(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(24),
        Constraint::Length(14),
        Constraint::Min(20),
    ];
    frame.render_widget(Table::new(rows, widths).header(header), table_area);

    let footer_text = match state.error() {
        Some(err) => format!("Refresh failed: {err}"),
        None => "Up/Down: select  r: refresh  Esc: back".to_string(),
    };
    let footer_style = if state.error().is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let footer = Paragraph::new(Line::from(footer_text)).style(footer_style);
    frame.render_widget(footer, footer_area);
}
