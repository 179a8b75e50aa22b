/*
[INPUT]:  Session, log buffer, startup mode
[OUTPUT]: Ratatui-based TUI for editing and saving the task list
[POS]:    TUI module for the todo-list binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::run_tui;
