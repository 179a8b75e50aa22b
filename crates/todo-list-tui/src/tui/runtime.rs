/*
[INPUT]:  Session, log buffer, startup mode, terminal input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and shared styles
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
[UPDATE]: 2026-10-12 Event loop with blocking input reader and UI tick
[UPDATE]: 2026-10-13 Render active modal overlay in TUI draw loop
*/

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use todo_list_tui::{Session, StartupMode};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::app::{ActiveModal, AppState};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::modal::draw_modal;
use super::ui::*;
use crate::logging::LogBufferHandle;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

/// Runs the TUI until the user quits.
///
/// Input is read on a blocking worker and handled one event at a time, so
/// a save finishes before the next key is processed.
pub async fn run_tui(
    session: Session,
    log_buffer: LogBufferHandle,
    startup: StartupMode,
    confirm_on_exit: bool,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = AppState::new(session, log_buffer, confirm_on_exit);
    app.begin(startup);
    info!(key = %app.session.key(), "tui started");

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| draw_ui(frame, &mut app))?;

        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        should_quit = handle_key_event(&mut app, key.code).await;
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[1]);
    draw_task_list(frame, middle[0], app);
    draw_logs(frame, middle[1], &app.log_buffer);

    draw_footer(frame, layout[2], app);

    match &app.active_modal {
        Some(ActiveModal::AddTask(modal)) => draw_modal(frame, area, &modal.to_modal()),
        Some(ActiveModal::Confirm(modal)) => draw_modal(frame, area, &modal.to_modal()),
        None => {}
    }
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[a]", key_style),
        Span::raw(" Add  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select  "),
        Span::styled("[t/b]", key_style),
        Span::raw(" Top/Bottom  "),
        Span::styled("[K/J]", key_style),
        Span::raw(" Raise/Lower  "),
        Span::styled("[d]", key_style),
        Span::raw(" Remove"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[s]", key_style),
        Span::raw(" Save  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
