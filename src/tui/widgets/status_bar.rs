//! Status bar widget — persistent one-line service context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Resolved posts endpoint, so the user can see where posts go.
    pub endpoint: String,
    /// Number of posts currently loaded from the service.
    pub post_count: usize,
    /// Whether a submission is in flight.
    pub submitting: bool,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - Idle:      `[http://localhost:3000/post]  3 posts`
/// - In flight: `[http://localhost:3000/post]  3 posts  PUBLISHING`
///   (PUBLISHING in Yellow)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let noun = if ctx.post_count == 1 { "post" } else { "posts" };
    let mut spans: Vec<Span> = vec![
        Span::styled(format!("[{}]", ctx.endpoint), cyan),
        Span::styled(format!("  {} {noun}", ctx.post_count), cyan),
    ];
    if ctx.submitting {
        spans.push(Span::styled("  PUBLISHING", yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
