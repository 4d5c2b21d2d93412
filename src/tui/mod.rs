pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::client::ClientError;
use crate::domain::SummaryResult;
use crate::{clipboard, export};

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Submissions run on spawned tasks and report back here, so the loop
    // never blocks on the network and the form alone is disabled.
    let (tx, mut rx) =
        mpsc::unbounded_channel::<(u64, std::result::Result<SummaryResult, ClientError>)>();

    loop {
        while let Ok((seq, outcome)) = rx.try_recv() {
            app.resolve(seq, outcome.map_err(|e| e.to_string()));
        }
        app.tick();

        let palette = ctx.config.colors.palette(ctx.theme.is_dark());
        terminal.draw(|frame| layout::render(frame, &app, palette))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match event::map_key(key, app.active_pane) {
                Action::Quit => {
                    app.should_quit = true;
                }
                Action::FocusNext => {
                    app.active_pane = app.active_pane.next();
                }
                Action::FocusForm => {
                    app.active_pane = self::app::ActivePane::Form;
                }
                Action::FocusResult => {
                    app.active_pane = self::app::ActivePane::Result;
                }
                Action::InsertChar(c) => {
                    app.insert_char(c);
                }
                Action::Backspace => {
                    app.backspace();
                }
                Action::ClearInput => {
                    app.clear_input();
                }
                Action::ToggleFormat => {
                    app.toggle_format();
                }
                Action::Submit => {
                    if let Some((seq, submission)) = app.begin_submission() {
                        let client = ctx.client.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let outcome = client
                                .generate_summary(&submission.url, submission.format)
                                .await;
                            let _ = tx.send((seq, outcome));
                        });
                    }
                }
                Action::ScrollUp => {
                    app.scroll_up();
                }
                Action::ScrollDown => {
                    app.scroll_down();
                }
                Action::Copy => {
                    copy_summary(&mut app);
                }
                Action::Download => {
                    download_summary(&mut app);
                }
                Action::OpenVideo => {
                    open_video(&mut app);
                }
                Action::ToggleTheme => {
                    if let Err(e) = ctx.theme.toggle() {
                        app.notify_error(format!("Failed to save theme: {}", e));
                    }
                }
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Copy the raw summary text to the system clipboard. No-op in the error
/// layout, where there is no summary to copy.
fn copy_summary(app: &mut TuiApp) {
    let Some(summary) = app.displayable_result().map(|r| r.summary.clone()) else {
        return;
    };

    match clipboard::copy_text(&summary) {
        Ok(()) => app.mark_copied(),
        Err(e) => app.notify_error(e),
    }
}

fn download_summary(app: &mut TuiApp) {
    let Some(result) = app.displayable_result().cloned() else {
        return;
    };

    let written = export::default_export_dir().and_then(|dir| export::write_summary(&result, &dir));
    match written {
        Ok(path) => app.notify(
            self::app::NotificationKind::Success,
            format!("Saved {}", path.display()),
        ),
        Err(e) => app.notify_error(format!("Failed to save summary: {}", e)),
    }
}

fn open_video(app: &mut TuiApp) {
    let Some(url) = app.displayable_result().map(|r| r.video_url.clone()) else {
        return;
    };

    if let Err(e) = open::that(&url) {
        app.notify_error(format!("Failed to open browser: {}", e));
    }
}
