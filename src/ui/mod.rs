use crate::app::AppAction;
use crate::backend_task::{BackendTaskSuccessResult, TaskSource};
use egui::Context;

pub mod components;
pub mod root_screen;
pub mod theme;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MessageType {
    Success,
    Info,
    Error,
}

pub trait ScreenLike {
    fn refresh(&mut self) {}
    fn ui(&mut self, ctx: &Context) -> AppAction;
    fn display_message(&mut self, _message: &str, _message_type: MessageType) {}
    fn display_task_result(&mut self, _backend_task_success_result: BackendTaskSuccessResult) {
        self.display_message("Success", MessageType::Success)
    }
    fn display_task_error(&mut self, _source: TaskSource, message: &str) {
        self.display_message(message, MessageType::Error)
    }
}
