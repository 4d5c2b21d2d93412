//! # recap
//!
//! A terminal client for a video summarization service.
//!
//! ## Architecture
//!
//! ```text
//! Form input → Submission → API client → SummaryResult → Result view
//! ```
//!
//! Everything here is presentation and plumbing: the summarization itself
//! happens in an external backend reachable over one JSON POST endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # One-shot summary on stdout
//! recap summarize https://www.youtube.com/watch?v=dQw4w9WgXcQ
//!
//! # Paragraph format, saved to a file
//! recap summarize --format paragraph --output . https://youtu.be/jNQXAC9IVRw
//!
//! # Interactive client
//! recap tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together configuration,
/// the API client, and the theme store.
pub mod app;

/// Command-line interface using clap.
///
/// - `summarize <url>` - One-shot summary to stdout
/// - `tui` - Launch the interactive client
/// - `theme [--toggle]` - Show or flip the persisted theme preference
pub mod cli;

/// HTTP client for the summarization backend.
///
/// - [`SummaryClient`](client::SummaryClient): Async trait for issuing requests
/// - [`HttpSummaryClient`](client::HttpSummaryClient): reqwest-based implementation
/// - [`ClientError`](client::ClientError): Backend / Network / Unknown taxonomy
pub mod client;

/// System clipboard access for the copy action.
pub mod clipboard;

/// Configuration management.
///
/// Loads from `~/.config/recap/config.toml`, supporting:
/// - API base URL (`RECAP_API_URL` overrides)
/// - Custom light/dark palettes (named or hex colors)
pub mod config;

/// Core domain models.
///
/// - [`Submission`](domain::Submission): A validated summarize request
/// - [`SummaryResult`](domain::SummaryResult): The backend's successful response
/// - [`RequestState`](domain::RequestState): Request lifecycle phase
pub mod domain;

/// Download-as-file export of a summary.
pub mod export;

/// Persisted dark/light preference.
pub mod theme;

/// Terminal user interface.
///
/// Form pane (URL + format selector) over a result pane, built with ratatui.
/// Keybindings: Tab switches panes, Enter submits, and on the result pane
/// c copies, d downloads, o opens the video, t toggles the theme, q quits.
pub mod tui;
