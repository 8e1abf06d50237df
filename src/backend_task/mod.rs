use crate::backend_task::session::SessionTask;
use crate::context::AppContext;
use crate::model::balance::BalanceSnapshot;
use crate::model::mint::MintRecord;
use crate::model::token_action::TokenActionRequest;
use crate::wallet::WalletAdapterKind;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::sync::Arc;

pub mod balance;
pub mod session;
pub mod tokens;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendTask {
    SessionTask(SessionTask),
    TokenTask(TokenActionRequest),
}

impl BackendTask {
    pub fn source(&self) -> TaskSource {
        match self {
            BackendTask::SessionTask(_) => TaskSource::Session,
            BackendTask::TokenTask(_) => TaskSource::TokenAction,
        }
    }

    /// Message reported when the task dies without producing a result.
    pub fn failure_message(&self) -> &'static str {
        match self {
            BackendTask::SessionTask(task) => task.failure_message(),
            BackendTask::TokenTask(request) => tokens::failure_message(request),
        }
    }
}

/// Which part of the UI a task result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
    Session,
    Balance,
    TokenAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendTaskSuccessResult {
    None,
    Connected {
        adapter: WalletAdapterKind,
        address: Pubkey,
    },
    Disconnected,
    BalanceFetched(BalanceSnapshot),
    TokenCreated(MintRecord),
    TokensMinted {
        symbol: String,
        signature: Signature,
    },
    TokensSent {
        symbol: String,
        signature: Signature,
    },
}

impl BackendTaskSuccessResult {
    pub fn source(&self) -> Option<TaskSource> {
        match self {
            BackendTaskSuccessResult::None => None,
            BackendTaskSuccessResult::Connected { .. } | BackendTaskSuccessResult::Disconnected => {
                Some(TaskSource::Session)
            }
            BackendTaskSuccessResult::BalanceFetched(_) => Some(TaskSource::Balance),
            BackendTaskSuccessResult::TokenCreated(_)
            | BackendTaskSuccessResult::TokensMinted { .. }
            | BackendTaskSuccessResult::TokensSent { .. } => Some(TaskSource::TokenAction),
        }
    }
}

impl AppContext {
    pub async fn run_backend_task(
        self: &Arc<Self>,
        task: BackendTask,
    ) -> Result<BackendTaskSuccessResult, String> {
        match task {
            BackendTask::SessionTask(session_task) => self.run_session_task(session_task).await,
            BackendTask::TokenTask(request) => self.run_token_task(request).await,
        }
    }
}
