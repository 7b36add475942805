use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{ApiClient, ApiError};
use crate::model::Post;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ComposeState, HelpState, PostListState, draw_compose, draw_help, draw_posts,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// How long to wait for input before checking for finished requests.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Compose and publish a new post.
    Compose,
    /// Browse posts fetched from the service.
    Posts,
    /// Show keybinding help.
    Help,
}

/// Completion of a background service request.
///
/// Requests run on the tokio runtime; the event loop applies their
/// outcomes between input polls, so screen state only ever changes on
/// the UI thread.
#[derive(Debug)]
pub enum Outcome {
    /// A publish request finished.
    SubmitDone(Result<(), ApiError>),
    /// A post list fetch finished.
    PostsLoaded(Result<Vec<Post>, ApiError>),
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    compose: ComposeState,
    post_list: PostListState,
    help: HelpState,
    posts: Vec<Post>,
    client: ApiClient,
    runtime: Handle,
    outcome_tx: UnboundedSender<Outcome>,
    outcome_rx: UnboundedReceiver<Outcome>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Compose`] screen.
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Compose,
            compose: ComposeState::new(),
            post_list: PostListState::new(),
            help: HelpState::new(),
            posts: Vec::new(),
            client,
            runtime,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        }
    }

    /// Main event loop: apply finished requests → draw → poll input.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        self.refresh_posts();
        while !self.should_quit {
            self.drain_outcomes();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the active screen plus the shared status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Compose => draw_compose(&self.compose, &self.posts, frame, body),
            Screen::Posts => draw_posts(&self.post_list, &self.posts, frame, body),
            Screen::Help => draw_help(&self.help, frame, body),
        }

        let ctx = StatusBarContext {
            endpoint: self.client.posts_url().to_string(),
            post_count: self.posts.len(),
            submitting: self.compose.is_submitting(),
        };
        draw_status_bar(&ctx, frame, status);
    }

    /// Handles a key event: global keys first, then the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::F(1) => {
                if self.screen != Screen::Help {
                    self.help.set_origin(self.screen);
                    self.help.reset();
                    self.screen = Screen::Help;
                }
                return;
            }
            KeyCode::F(2) => {
                self.screen = Screen::Posts;
                return;
            }
            _ => {}
        }

        let action = match self.screen {
            Screen::Compose => self.compose.handle_key(key),
            Screen::Posts => self.post_list.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    /// Applies an [`Action`] returned by a screen.
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::SubmitPost(post) => self.submit_post(post),
            Action::RefreshPosts => self.refresh_posts(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Applies every outcome that has arrived since the last pass.
    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Applies one finished request to the UI state.
    ///
    /// A successful publish triggers the list refresh before the form
    /// clears. A failed publish is logged and unlocks the form with
    /// its text intact so the user can retry.
    fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::SubmitDone(Ok(())) => {
                self.refresh_posts();
                self.compose.submission_succeeded();
            }
            Outcome::SubmitDone(Err(err)) => {
                tracing::error!(error = %err, "failed to publish post");
                self.compose.submission_failed();
            }
            Outcome::PostsLoaded(Ok(posts)) => {
                self.posts = posts;
                self.post_list.loaded(self.posts.len());
            }
            Outcome::PostsLoaded(Err(err)) => {
                tracing::warn!(error = %err, "failed to fetch posts");
                self.post_list.load_failed(err.to_string());
            }
        }
    }

    /// Starts the publish request for an accepted submission.
    fn submit_post(&mut self, post: Post) {
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let result = client.create_post(&post).await;
            let _ = tx.send(Outcome::SubmitDone(result));
        });
    }

    /// Starts a post list fetch; also invoked after each successful
    /// publish so the list reflects the new post.
    fn refresh_posts(&mut self) {
        self.post_list.set_loading();
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let result = client.list_posts().await;
            let _ = tx.send(Outcome::PostsLoaded(result));
        });
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the posts most recently fetched from the service.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}
