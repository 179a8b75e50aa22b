/*
[INPUT]:  Session key, task count, dirty flag
[OUTPUT]: Header bar rendered into Ratatui frame
[POS]:    TUI UI header
[UPDATE]: 2026-10-12 Header with list key and unsaved marker
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let session = &app.session;
    let mut spans = vec![
        Span::styled(session.key().to_string(), header_style()),
        Span::raw(format!("  {} tasks", session.list().len())),
    ];
    if session.is_dirty() {
        spans.push(Span::styled("  [unsaved]", Style::default().fg(Color::Yellow)));
    }
    if !session.is_persistent() {
        spans.push(Span::styled("  [in-memory]", Style::default().fg(Color::DarkGray)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("ToDo List"),
    );
    frame.render_widget(header, area);
}
