/*
[INPUT]:  Typed task text
[OUTPUT]: Add-task modal rendering state and submit/cancel actions
[POS]:    TUI UI modal for entering a new task
[UPDATE]: 2026-10-12 Add task entry modal
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct AddTaskModal {
    text: String,
    focus_index: usize,
}

impl AddTaskModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            text: String::new(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Add task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Task"),
                    value: self.text.clone(),
                },
                Field::Button {
                    label: String::from("Add"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.into_iter().next() {
            self.text = value;
        }
        action
    }

    pub(in crate::tui) fn text(&self) -> &str {
        self.text.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_submit() {
        let mut modal = AddTaskModal::new();
        for ch in "buy milk".chars() {
            assert_eq!(modal.handle_key(KeyCode::Char(ch)), ModalAction::None);
        }
        modal.handle_key(KeyCode::Backspace);
        assert_eq!(modal.text(), "buy mil");
        assert_eq!(modal.handle_key(KeyCode::Enter), ModalAction::Submit);
    }

    #[test]
    fn test_cancel_button() {
        let mut modal = AddTaskModal::new();
        modal.handle_key(KeyCode::Tab);
        modal.handle_key(KeyCode::Tab);
        assert_eq!(modal.handle_key(KeyCode::Enter), ModalAction::Cancel);
    }
}
