/*
[INPUT]:  AppState task list and selection
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: 2026-10-12 Numbered task list with selection highlight
[UPDATE]: 2026-10-14 Truncate long tasks to the panel width
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::AppState;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_list(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &mut AppState) {
    let list = app.session.list();
    // borders, highlight symbol, "NN. " prefix
    let text_width = (area.width as usize).saturating_sub(2 + 2 + 4);

    let items = if list.is_empty() {
        vec![ListItem::new("No tasks yet. Press [a] to add one.")]
    } else {
        list.iter()
            .enumerate()
            .map(|(index, task)| {
                let text = if task.text().is_empty() {
                    "(empty)".to_string()
                } else {
                    truncate(task.text(), text_width)
                };
                ListItem::new(format!("{:>2}. {text}", index + 1))
            })
            .collect()
    };

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tasks"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(widget, area, &mut app.list_state);
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("日本語テキスト", 7), "日本語…");
    }
}
