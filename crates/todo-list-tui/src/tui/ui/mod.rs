/*
[INPUT]:  TUI app state and log buffer
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: 2026-10-12 Header, task list and log panels
*/

mod layout;
mod logs;
mod task_list;

pub mod modal;

pub(in crate::tui) use layout::draw_header;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_list::draw_task_list;
