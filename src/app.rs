use crate::backend_task::session::SessionTask;
use crate::backend_task::{BackendTask, BackendTaskSuccessResult, TaskSource};
use crate::components::balance_poller::BalancePoller;
use crate::context::AppContext;
use crate::ui::ScreenLike;
use crate::ui::root_screen::RootScreen;
use crate::ui::theme::apply_theme;
use crate::utils::egui_mpsc::{EguiMpscAsync, SenderAsync};
use eframe::{App, egui};
use std::ops::BitOrAssign;
use std::sync::Arc;
use tokio::sync::mpsc;

const TASK_RESULT_CHANNEL_CAPACITY: usize = 256;

/// Outcome of a backend task as delivered to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    Success(Box<BackendTaskSuccessResult>),
    Error { source: TaskSource, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    None,
    BackendTask(BackendTask),
}

impl BitOrAssign for AppAction {
    fn bitor_assign(&mut self, rhs: Self) {
        if matches!(rhs, AppAction::None) {
            return;
        }
        *self = rhs;
    }
}

pub struct AppState {
    pub app_context: Arc<AppContext>,
    pub root_screen: RootScreen,
    task_result_sender: SenderAsync<TaskResult>,
    task_result_receiver: mpsc::Receiver<TaskResult>,
    balance_poller: Option<BalancePoller>,
}

impl AppState {
    /// Must be called inside a tokio runtime; tasks are spawned on it.
    pub fn new(ctx: egui::Context, app_context: Arc<AppContext>) -> Self {
        apply_theme(&ctx, app_context.config().theme);

        let (task_result_sender, task_result_receiver) =
            mpsc::channel(TASK_RESULT_CHANNEL_CAPACITY).with_egui_ctx(ctx);
        let root_screen = RootScreen::new(&app_context);

        let app = Self {
            app_context,
            root_screen,
            task_result_sender,
            task_result_receiver,
            balance_poller: None,
        };

        if let Some(wallet) = app.app_context.previously_authorized_wallet() {
            tracing::info!(adapter = wallet.name(), "Reconnecting previously authorized wallet");
            app.handle_backend_task(BackendTask::SessionTask(SessionTask::Connect(wallet.kind())));
        }

        app
    }

    /// Runs `task` in the background and reports its outcome through the
    /// result channel. A task that panics is reported with its generic
    /// failure message so the UI never waits on it forever.
    pub fn handle_backend_task(&self, task: BackendTask) {
        let app_context = self.app_context.clone();
        let sender = self.task_result_sender.clone();
        let source = task.source();
        let failure_message = task.failure_message();

        tokio::spawn(async move {
            let handle = tokio::spawn(async move { app_context.run_backend_task(task).await });
            let task_result = match handle.await {
                Ok(Ok(result)) => TaskResult::Success(Box::new(result)),
                Ok(Err(message)) => TaskResult::Error { source, message },
                Err(e) => {
                    tracing::error!(?source, "Backend task aborted: {}", e);
                    TaskResult::Error {
                        source,
                        message: failure_message.to_string(),
                    }
                }
            };
            if sender.send(task_result).await.is_err() {
                tracing::debug!("Task result dropped, UI already closed");
            }
        });
    }

    /// Keeps exactly one poller running for the connected address.
    fn sync_balance_poller(&mut self) {
        let session = self.app_context.session();
        let active = session.address.filter(|_| session.is_connected());
        let polling = self.balance_poller.as_ref().map(BalancePoller::address);

        match (polling, active) {
            (Some(current), Some(address)) if current == address => {}
            (_, Some(address)) => {
                self.balance_poller = Some(BalancePoller::spawn_poller(
                    &self.app_context,
                    address,
                    self.task_result_sender.clone(),
                ));
            }
            (Some(_), None) => self.balance_poller = None,
            (None, None) => {}
        }
    }

    pub fn is_polling_balance(&self) -> bool {
        self.balance_poller.is_some()
    }
}

impl App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(task_result) = self.task_result_receiver.try_recv() {
            match task_result {
                TaskResult::Success(result) => self.root_screen.display_task_result(*result),
                TaskResult::Error { source, message } => {
                    self.root_screen.display_task_error(source, &message)
                }
            }
        }

        self.sync_balance_poller();

        match self.root_screen.ui(ctx) {
            AppAction::None => {}
            AppAction::BackendTask(task) => self.handle_backend_task(task),
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.balance_poller.take();
        self.app_context.teardown();
    }
}
