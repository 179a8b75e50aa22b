/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: 2026-10-12 Modal framework for add-task input and confirmation prompts
[UPDATE]: 2026-10-14 Skip non-focusable message lines when cycling focus
*/

mod add_task;
mod confirm;

pub(in crate::tui) use add_task::AddTaskModal;
pub(in crate::tui) use confirm::{ConfirmModal, ConfirmPurpose};

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
}

pub(in crate::tui) enum Field {
    TextInput { label: String, value: String },
    Message(String),
    Button { label: String, action: ModalAction },
}

impl Field {
    fn is_focusable(&self) -> bool {
        !matches!(self, Field::Message(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Decline,
    Cancel,
    None,
}

impl Modal {
    fn cycle_focus(&mut self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        let mut index = self.focus_index;
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if self.fields[index].is_focusable() {
                self.focus_index = index;
                return;
            }
        }
    }

    fn height(&self) -> u16 {
        let buttons = self
            .fields
            .iter()
            .filter(|field| matches!(field, Field::Button { .. }))
            .count();
        let rows = self.fields.len() - buttons + usize::from(buttons > 0);
        // borders plus a blank line above the button row
        (rows + 3) as u16
    }
}

pub(in crate::tui) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    let width = area.width.saturating_mul(3) / 5;
    let rect = centered_rect(area, width.max(30), modal.height());
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(modal.title.as_str());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let focused = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines: Vec<Line> = Vec::new();
    let mut buttons: Vec<Span> = Vec::new();
    let mut cursor = None;

    for (index, field) in modal.fields.iter().enumerate() {
        let is_focused = index == modal.focus_index;
        match field {
            Field::TextInput { label, value } => {
                let prefix = format!("{label}: ");
                if is_focused {
                    let x = inner.x + (prefix.width() + value.width()) as u16;
                    cursor = Some((x.min(inner.right().saturating_sub(1)), inner.y + lines.len() as u16));
                }
                lines.push(Line::from(vec![Span::raw(prefix), Span::raw(value.clone())]));
            }
            Field::Message(text) => lines.push(Line::from(text.clone())),
            Field::Button { label, .. } => {
                let style = if is_focused { focused } else { Style::default() };
                buttons.push(Span::styled(format!("[{label}]"), style));
                buttons.push(Span::raw("  "));
            }
        }
    }
    if !buttons.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(buttons));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab | KeyCode::Right => {
            modal.cycle_focus(true);
            ModalAction::None
        }
        KeyCode::BackTab | KeyCode::Left => {
            modal.cycle_focus(false);
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => match modal.fields.get(modal.focus_index) {
            Some(Field::Button { action, .. }) => *action,
            Some(Field::TextInput { .. }) => ModalAction::Submit,
            _ => ModalAction::None,
        },
        _ => ModalAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Modal {
        Modal {
            title: "t".into(),
            focus_index: 1,
            fields: vec![
                Field::Message("question".into()),
                Field::Button {
                    label: "Yes".into(),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: "No".into(),
                    action: ModalAction::Decline,
                },
            ],
        }
    }

    #[test]
    fn test_focus_skips_messages() {
        let mut modal = sample();
        handle_modal_key(&mut modal, KeyCode::Tab);
        assert_eq!(modal.focus_index, 2);
        handle_modal_key(&mut modal, KeyCode::Tab);
        assert_eq!(modal.focus_index, 1);
        handle_modal_key(&mut modal, KeyCode::BackTab);
        assert_eq!(modal.focus_index, 2);
    }

    #[test]
    fn test_enter_triggers_focused_button() {
        let mut modal = sample();
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Enter), ModalAction::Submit);
        modal.focus_index = 2;
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Enter), ModalAction::Decline);
        assert_eq!(handle_modal_key(&mut modal, KeyCode::Esc), ModalAction::Cancel);
    }
}
