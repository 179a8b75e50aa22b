/*
[INPUT]:  Crossterm key codes
[OUTPUT]: AppState mutations and the quit decision
[POS]:    TUI key routing
[UPDATE]: 2026-10-12 Map list hotkeys to task list operations
[UPDATE]: 2026-10-13 Route modal input and confirmation outcomes
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, AppState, MoveKind};
use super::ui::modal::{ConfirmPurpose, ModalAction};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        return handle_modal_key_event(app, key).await;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => return app.request_quit(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.open_add_task(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('t') | KeyCode::Home => app.move_selected(MoveKind::Top),
        KeyCode::Char('b') | KeyCode::End => app.move_selected(MoveKind::Bottom),
        KeyCode::Char('K') | KeyCode::Char('+') => app.move_selected(MoveKind::Raise),
        KeyCode::Char('J') | KeyCode::Char('-') => app.move_selected(MoveKind::Lower),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('s') => app.request_save().await,
        _ => {}
    }
    false
}

async fn handle_modal_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match app.active_modal.as_mut() {
        Some(ActiveModal::AddTask(modal)) => {
            match modal.handle_key(key) {
                ModalAction::Submit => {
                    let text = modal.text().to_string();
                    app.close_modal();
                    app.add_task(text);
                }
                ModalAction::Cancel | ModalAction::Decline => app.close_modal(),
                ModalAction::None => {}
            }
            false
        }
        Some(ActiveModal::Confirm(modal)) => {
            let purpose = modal.purpose();
            let action = modal.handle_key(key);
            if action == ModalAction::None {
                return false;
            }
            app.close_modal();
            resolve_confirm(app, purpose, action).await
        }
        None => false,
    }
}

async fn resolve_confirm(app: &mut AppState, purpose: ConfirmPurpose, action: ModalAction) -> bool {
    match (purpose, action) {
        (ConfirmPurpose::LoadAtStartup, ModalAction::Submit) => app.load_saved(),
        (ConfirmPurpose::LoadAtStartup, _) => app.start_fresh(),
        (ConfirmPurpose::Overwrite, ModalAction::Submit) => {
            app.save_now().await;
        }
        (ConfirmPurpose::Overwrite, _) => {
            app.status_message = "save cancelled".to_string();
        }
        // Stay open if the save failed so the user can react
        (ConfirmPurpose::SaveOnExit, ModalAction::Submit) => return app.save_now().await,
        (ConfirmPurpose::SaveOnExit, ModalAction::Decline) => return true,
        (ConfirmPurpose::SaveOnExit, _) => {
            app.status_message = "quit cancelled".to_string();
        }
    }
    false
}
