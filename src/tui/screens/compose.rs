//! Compose screen — the post entry form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::{Post, PostField};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{PostForm, draw_post_form};

/// State for the compose screen.
///
/// Owns the form plus the submitting/idle flag that locks Enter while
/// one publish request is outstanding.
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    form: PostForm,
    submitting: bool,
}

impl ComposeState {
    /// Creates an empty compose state, focused on the title field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &PostForm {
        &self.form
    }

    /// Returns `true` while a submission is waiting on the service.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Marks the in-flight submission as accepted.
    ///
    /// The form resets for the next post. Called after the list
    /// refresh has been triggered, preserving the notify-then-clear
    /// order.
    pub fn submission_succeeded(&mut self) {
        self.submitting = false;
        self.form.clear();
    }

    /// Marks the in-flight submission as failed.
    ///
    /// The form unlocks with every field left exactly as typed, so the
    /// user can press Enter to try again.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }

    /// Validates all fields and, if clean, emits the post for publishing.
    ///
    /// The validity decision and the displayed messages come from the
    /// same synchronous pass over the current values. At most one
    /// submission can be in flight: Enter does nothing until the
    /// previous outcome has been applied.
    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }
        if !self.form.validate_all() {
            return Action::None;
        }

        match Post::new(
            self.form.value(PostField::Title).to_string(),
            self.form.value(PostField::Content).to_string(),
            self.form.value(PostField::Author).to_string(),
        ) {
            Ok(post) => {
                self.submitting = true;
                Action::SubmitPost(post)
            }
            // validate_all already vetted every field
            Err(_) => Action::None,
        }
    }
}

impl ScreenState for ComposeState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Renders the compose screen: form on top, recent posts below.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_compose(state: &ComposeState, posts: &[Post], frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Compose ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, recent_area, footer_area] = Layout::vertical([
        Constraint::Length(12),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_post_form(state.form(), frame, form_area);

    // Recent posts, newest first
    let recent_block = Block::default()
        .title(" Recent posts ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let recent_inner = recent_block.inner(recent_area);
    frame.render_widget(recent_block, recent_area);

    if !posts.is_empty() {
        let rows: Vec<Row> = posts
            .iter()
            .rev()
            .take(3)
            .map(|post| {
                Row::new(vec![
                    post.title.clone(),
                    post.author.clone(),
                ])
            })
            .collect();

        let widths = [Constraint::Min(20), Constraint::Length(16)];
        frame.render_widget(Table::new(rows, widths), recent_inner);
    }

    let footer_text = if state.is_submitting() {
        "Publishing…"
    } else {
        "Tab: next field  Enter: publish  F2: posts  F1: help  Esc: quit"
    };
    let footer = Paragraph::new(Line::from(Span::raw(footer_text)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
