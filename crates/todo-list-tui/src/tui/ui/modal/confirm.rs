/*
[INPUT]:  Pending decision (load at startup, overwrite on save, save on exit)
[OUTPUT]: Yes/No/Cancel prompt state and the chosen action
[POS]:    TUI UI confirmation modal
[UPDATE]: 2026-10-12 Confirmation prompts for session policy
[UPDATE]: 2026-10-14 Add y/n shortcuts
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::tui) enum ConfirmPurpose {
    LoadAtStartup,
    Overwrite,
    SaveOnExit,
}

impl ConfirmPurpose {
    fn title(self) -> &'static str {
        match self {
            ConfirmPurpose::LoadAtStartup => "Saved list found",
            ConfirmPurpose::Overwrite => "Overwrite saved list",
            ConfirmPurpose::SaveOnExit => "Unsaved changes",
        }
    }

    fn question(self) -> &'static str {
        match self {
            ConfirmPurpose::LoadAtStartup => "Load the saved list? 'No' starts with an empty one.",
            ConfirmPurpose::Overwrite => "The saved list differs from this one. Replace it?",
            ConfirmPurpose::SaveOnExit => "Save before exiting?",
        }
    }

    fn allows_cancel(self) -> bool {
        matches!(self, ConfirmPurpose::SaveOnExit)
    }
}

pub(in crate::tui) struct ConfirmModal {
    purpose: ConfirmPurpose,
    focus_index: usize,
}

impl ConfirmModal {
    pub(in crate::tui) fn new(purpose: ConfirmPurpose) -> Self {
        Self {
            purpose,
            focus_index: 1,
        }
    }

    pub(in crate::tui) fn purpose(&self) -> ConfirmPurpose {
        self.purpose
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        let mut fields = vec![
            Field::Message(self.purpose.question().to_string()),
            Field::Button {
                label: String::from("Yes"),
                action: ModalAction::Submit,
            },
            Field::Button {
                label: String::from("No"),
                action: ModalAction::Decline,
            },
        ];
        if self.purpose.allows_cancel() {
            fields.push(Field::Button {
                label: String::from("Cancel"),
                action: ModalAction::Cancel,
            });
        }
        Modal {
            title: self.purpose.title().to_string(),
            focus_index: self.focus_index,
            fields,
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => return ModalAction::Submit,
            KeyCode::Char('n') | KeyCode::Char('N') => return ModalAction::Decline,
            _ => {}
        }
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.focus_index = modal.focus_index;
        if action == ModalAction::Cancel && !self.purpose.allows_cancel() {
            // Esc on a two-way prompt means "no"
            return ModalAction::Decline;
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        let mut modal = ConfirmModal::new(ConfirmPurpose::Overwrite);
        assert_eq!(modal.handle_key(KeyCode::Char('y')), ModalAction::Submit);
        assert_eq!(modal.handle_key(KeyCode::Char('N')), ModalAction::Decline);
    }

    #[test]
    fn test_escape_depends_on_purpose() {
        let mut two_way = ConfirmModal::new(ConfirmPurpose::LoadAtStartup);
        assert_eq!(two_way.handle_key(KeyCode::Esc), ModalAction::Decline);

        let mut three_way = ConfirmModal::new(ConfirmPurpose::SaveOnExit);
        assert_eq!(three_way.handle_key(KeyCode::Esc), ModalAction::Cancel);
        assert_eq!(three_way.to_modal().fields.len(), 4);
    }
}
