use std::time::{Duration, Instant};

use crate::domain::{RequestState, Submission, SummaryFormat, SummaryResult};

/// How long a notification stays on the status bar.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// How long the copy confirmation stays visible.
pub const COPY_CONFIRMATION_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Form,
    Result,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Form => ActivePane::Result,
            ActivePane::Result => ActivePane::Form,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient status-bar message, the toast of the terminal world.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    expires_at: Instant,
}

/// Root controller state.
///
/// Owns the single [`RequestState`] and every transition on it. The methods
/// are synchronous and side-effect free apart from state mutation, so the
/// event loop stays a thin dispatcher and the lifecycle is testable without
/// a terminal or a network.
pub struct TuiApp {
    pub active_pane: ActivePane,
    pub input: String,
    pub format: SummaryFormat,
    pub validation_error: Option<String>,
    pub request: RequestState,
    /// Format the currently displayed result was requested with.
    pub shown_format: SummaryFormat,
    pub result_scroll: u16,
    pub notification: Option<Notification>,
    pub copied_until: Option<Instant>,
    pub should_quit: bool,
    latest_seq: u64,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            active_pane: ActivePane::Form,
            input: String::new(),
            format: SummaryFormat::Bullets,
            validation_error: None,
            request: RequestState::Idle,
            shown_format: SummaryFormat::Bullets,
            result_scroll: 0,
            notification: None,
            copied_until: None,
            should_quit: false,
            latest_seq: 0,
        }
    }

    /// Whether the form is accepting edits and submissions.
    pub fn form_enabled(&self) -> bool {
        !self.request.is_loading()
    }

    pub fn insert_char(&mut self, c: char) {
        if self.form_enabled() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.form_enabled() {
            self.input.pop();
        }
    }

    pub fn clear_input(&mut self) {
        if self.form_enabled() {
            self.input.clear();
        }
    }

    pub fn toggle_format(&mut self) {
        if self.form_enabled() {
            self.format = self.format.toggled();
        }
    }

    /// Validate the form and, if it passes, enter `Loading`.
    ///
    /// Returns the sequence number and submission for the caller to
    /// dispatch. On validation failure the inline message is set and the
    /// current result stays untouched. `None` while a request is already in
    /// flight.
    pub fn begin_submission(&mut self) -> Option<(u64, Submission)> {
        if !self.form_enabled() {
            return None;
        }

        match Submission::parse(&self.input, self.format) {
            Err(e) => {
                self.validation_error = Some(e.to_string());
                None
            }
            Ok(submission) => {
                self.validation_error = None;
                self.shown_format = submission.format;
                self.latest_seq += 1;
                self.request = RequestState::Loading;
                self.result_scroll = 0;
                self.copied_until = None;
                Some((self.latest_seq, submission))
            }
        }
    }

    /// Apply the outcome of a submission.
    ///
    /// Resolutions whose sequence is not the latest issued are stale and
    /// ignored, so a slow response can never overwrite a newer request.
    pub fn resolve(&mut self, seq: u64, outcome: Result<SummaryResult, String>) {
        if seq != self.latest_seq || !self.request.is_loading() {
            return;
        }

        match outcome {
            Ok(result) => {
                self.request = RequestState::Succeeded(result);
                self.notify(
                    NotificationKind::Success,
                    "Summary generated successfully!".to_string(),
                );
            }
            Err(message) => {
                self.request = RequestState::Failed(message.clone());
                self.notify(NotificationKind::Error, message);
            }
        }
    }

    /// The result to offer copy/download/open for: present only on success
    /// and only when the backend didn't signal failure in-band.
    pub fn displayable_result(&self) -> Option<&SummaryResult> {
        self.request.result().filter(|r| !r.is_backend_error())
    }

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notification = Some(Notification {
            kind,
            message,
            expires_at: Instant::now() + NOTIFICATION_TTL,
        });
    }

    pub fn notify_error(&mut self, message: String) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn mark_copied(&mut self) {
        self.copied_until = Some(Instant::now() + COPY_CONFIRMATION_TTL);
    }

    pub fn copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Expire transient state. Called on every loop pass.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
        if self.copied_until.is_some_and(|t| now >= t) {
            self.copied_until = None;
        }
    }

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
