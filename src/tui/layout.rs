use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::Palette;
use crate::domain::{RequestState, SummaryFormat, SummaryResult};
use crate::tui::app::{ActivePane, NotificationKind, TuiApp};

pub fn render(frame: &mut Frame, app: &TuiApp, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(7), // Form pane
            Constraint::Min(8),    // Result pane
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, palette, chunks[0]);
    render_form_pane(frame, app, palette, chunks[1]);
    render_result_pane(frame, app, palette, chunks[2]);
    render_status_bar(frame, app, palette, chunks[3]);
}

fn border_style(palette: &Palette, active: bool) -> Style {
    if active {
        Style::default().fg(palette.border_active)
    } else {
        Style::default().fg(palette.border_inactive)
    }
}

fn render_header(frame: &mut Frame, palette: &Palette, area: Rect) {
    let header = Text::from(vec![
        Line::from(Span::styled(
            "recap",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get a summarized version of any YouTube video in seconds",
            Style::default().fg(palette.muted),
        )),
    ]);

    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
}

fn render_form_pane(frame: &mut Frame, app: &TuiApp, palette: &Palette, area: Rect) {
    let is_active = app.active_pane == ActivePane::Form;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "YouTube URL",
        Style::default().fg(palette.muted),
    )));

    let mut input_spans = vec![Span::styled(
        format!("> {}", app.input),
        Style::default().fg(palette.text),
    )];
    if is_active && app.form_enabled() {
        input_spans.push(Span::styled(
            "█",
            Style::default().fg(palette.accent),
        ));
    }
    lines.push(Line::from(input_spans));
    lines.push(Line::from(""));

    lines.push(format_selector(app, palette));

    if let Some(ref error) = app.validation_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(palette.error),
        )));
    } else if app.request.is_loading() {
        lines.push(Line::from(Span::styled(
            "Generating summary...",
            Style::default().fg(palette.accent),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: generate summary",
            Style::default().fg(palette.muted),
        )));
    }

    let block = Block::default()
        .title(" Summarize ")
        .borders(Borders::ALL)
        .border_style(border_style(palette, is_active));

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn format_selector(app: &TuiApp, palette: &Palette) -> Line<'static> {
    let radio = |format: SummaryFormat| -> Vec<Span<'static>> {
        let selected = app.format == format;
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        vec![
            Span::styled(marker.to_string(), style),
            Span::styled(format!(" {}", format.label()), style),
        ]
    };

    let mut spans = radio(SummaryFormat::Bullets);
    spans.push(Span::raw("   "));
    spans.extend(radio(SummaryFormat::Paragraph));
    Line::from(spans)
}

fn render_result_pane(frame: &mut Frame, app: &TuiApp, palette: &Palette, area: Rect) {
    let is_active = app.active_pane == ActivePane::Result;

    let (title, content) = match &app.request {
        RequestState::Idle => (
            " Summary ".to_string(),
            Text::from(Span::styled(
                "Paste a YouTube link above to get a summary.",
                Style::default().fg(palette.muted),
            )),
        ),
        RequestState::Loading => (
            " Summary ".to_string(),
            Text::from(Span::styled(
                "Generating summary...",
                Style::default().fg(palette.accent),
            )),
        ),
        RequestState::Failed(message) => (" Error ".to_string(), failure_text(message, palette)),
        RequestState::Succeeded(result) if result.is_backend_error() => (
            " Error ".to_string(),
            backend_error_text(result, palette),
        ),
        RequestState::Succeeded(result) => {
            let title = if app.copied() {
                " Summary — copied ✓ ".to_string()
            } else {
                " Summary ".to_string()
            };
            (title, summary_text(result, app.shown_format, palette))
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(palette, is_active));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn summary_text(result: &SummaryResult, format: SummaryFormat, palette: &Palette) -> Text<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Source: ", Style::default().fg(palette.muted)),
            Span::styled(
                result.video_title.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            result.video_url.clone(),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
    ];

    match format {
        SummaryFormat::Bullets => {
            for point in result.bullet_points() {
                lines.push(Line::from(Span::styled(
                    format!("• {}", point),
                    Style::default().fg(palette.text),
                )));
            }
        }
        SummaryFormat::Paragraph => {
            for line in result.summary.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(palette.text),
                )));
            }
        }
    }

    Text::from(lines)
}

fn backend_error_text(result: &SummaryResult, palette: &Palette) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            result.summary.clone(),
            Style::default().fg(palette.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please try another YouTube video with available captions. \
             Not all videos have transcripts available.",
            Style::default().fg(palette.muted),
        )),
    ])
}

fn failure_text(message: &str, palette: &Palette) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Resubmit to try again.",
            Style::default().fg(palette.muted),
        )),
    ])
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, palette: &Palette, area: Rect) {
    let (text, fg) = if let Some(ref note) = app.notification {
        let fg = match note.kind {
            NotificationKind::Success => palette.success,
            NotificationKind::Error => palette.error,
        };
        (note.message.clone(), fg)
    } else {
        let help = match app.active_pane {
            ActivePane::Form => {
                "Type URL  ←/→:Format  Enter:Submit  Tab:Results  Ctrl+T:Theme  Ctrl+C:Quit"
            }
            ActivePane::Result => {
                "j/k:Scroll  c:Copy  d:Download  o:Open  t:Theme  Tab:Form  q:Quit"
            }
        };
        (help.to_string(), palette.status_fg)
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(fg).bg(palette.status_bg));

    frame.render_widget(paragraph, area);
}
