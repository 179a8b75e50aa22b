/*
[INPUT]:  Session (live list + store), log buffer, startup mode, user intents
[OUTPUT]: AppState helpers for selection, reordering, save and quit flows
[POS]:    TUI app state
[UPDATE]: 2026-10-12 AppState over Session with selection that follows moved tasks
[UPDATE]: 2026-10-13 Add active modal state and confirmation flows
[UPDATE]: 2026-10-15 Run saves on a blocking worker
*/

use ratatui::widgets::ListState;
use todo_list_core::TaskId;
use todo_list_tui::{Session, StartOutcome, StartupMode};
use tracing::{info, warn};

use crate::logging::LogBufferHandle;
use crate::tui::ui::modal::{AddTaskModal, ConfirmModal, ConfirmPurpose};

pub(super) enum ActiveModal {
    AddTask(AddTaskModal),
    Confirm(ConfirmModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MoveKind {
    Top,
    Bottom,
    Raise,
    Lower,
}

pub(super) struct AppState {
    pub(super) session: Session,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) list_state: ListState,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
    pub(super) confirm_on_exit: bool,
}

impl AppState {
    pub(super) fn new(session: Session, log_buffer: LogBufferHandle, confirm_on_exit: bool) -> Self {
        let mut app = Self {
            session,
            log_buffer,
            list_state: ListState::default(),
            status_message: "Ready".to_string(),
            active_modal: None,
            confirm_on_exit,
        };
        app.clamp_selection();
        app
    }

    /// Applies the startup policy, opening the load prompt when needed.
    pub(super) fn begin(&mut self, mode: StartupMode) {
        match self.session.start(mode) {
            Ok(StartOutcome::Prompt) => {
                self.open_confirm(ConfirmPurpose::LoadAtStartup);
            }
            Ok(StartOutcome::Loaded(count)) => {
                self.status_message = format!("loaded {count} tasks");
            }
            Ok(StartOutcome::Missing) => {
                self.status_message = "no saved list; starting empty".to_string();
            }
            Ok(StartOutcome::Fresh) => {
                self.status_message = "starting with a new list".to_string();
            }
            Err(err) => {
                warn!(error = %err, "startup load failed");
                self.status_message = format!("load failed: {err}");
            }
        }
        self.clamp_selection();
    }

    pub(super) fn load_saved(&mut self) {
        match self.session.load() {
            Ok(count) => self.status_message = format!("loaded {count} tasks"),
            Err(err) => {
                warn!(error = %err, "load failed");
                self.status_message = format!("load failed: {err}");
            }
        }
        self.list_state.select(None);
        self.clamp_selection();
    }

    pub(super) fn start_fresh(&mut self) {
        self.session.start_fresh();
        self.status_message = "starting with a new list".to_string();
        self.clamp_selection();
    }

    pub(super) fn open_add_task(&mut self) {
        self.active_modal = Some(ActiveModal::AddTask(AddTaskModal::new()));
    }

    pub(super) fn open_confirm(&mut self, purpose: ConfirmPurpose) {
        self.active_modal = Some(ActiveModal::Confirm(ConfirmModal::new(purpose)));
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn selected_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.session.list().get(index).map(|task| task.id())
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.session.list().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub(super) fn add_task(&mut self, text: String) {
        self.session.list_mut().add(text);
        let last = self.session.list().len() - 1;
        self.list_state.select(Some(last));
        self.status_message = "task added".to_string();
    }

    pub(super) fn move_selected(&mut self, kind: MoveKind) {
        let Some(id) = self.selected_id() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        let list = self.session.list_mut();
        let moved = match kind {
            MoveKind::Top => list.move_to_front(id),
            MoveKind::Bottom => list.move_to_back(id),
            MoveKind::Raise => list.move_earlier(id),
            MoveKind::Lower => list.move_later(id),
        };
        match moved {
            Some(index) => self.list_state.select(Some(index)),
            None => {
                self.status_message = match kind {
                    MoveKind::Raise => "already at the top".to_string(),
                    _ => "already at the bottom".to_string(),
                };
            }
        }
    }

    pub(super) fn remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.status_message = "no task selected".to_string();
            return;
        };
        if let Some(task) = self.session.list_mut().remove(id) {
            self.status_message = format!("removed: {}", task.text());
        }
        self.clamp_selection();
    }

    /// Saves, asking first when a different saved list would be replaced.
    pub(super) async fn request_save(&mut self) {
        if self.session.needs_overwrite_confirmation() {
            self.open_confirm(ConfirmPurpose::Overwrite);
            return;
        }
        self.save_now().await;
    }

    pub(super) async fn save_now(&mut self) -> bool {
        match self.session.save_async().await {
            Ok(count) => {
                let at = chrono::Local::now().format("%H:%M:%S");
                self.status_message = format!("saved {count} tasks at {at}");
                true
            }
            Err(err) => {
                warn!(error = %err, "save failed");
                self.status_message = format!("save failed: {err}");
                false
            }
        }
    }

    /// Returns `true` when the app may exit right away.
    pub(super) fn request_quit(&mut self) -> bool {
        if self.confirm_on_exit && self.session.is_dirty() {
            self.open_confirm(ConfirmPurpose::SaveOnExit);
            return false;
        }
        info!("quitting");
        true
    }

    fn clamp_selection(&mut self) {
        let len = self.session.list().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}
