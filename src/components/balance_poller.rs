use crate::app::TaskResult;
use crate::backend_task::balance::FETCH_BALANCE_FAILED;
use crate::backend_task::{BackendTaskSuccessResult, TaskSource};
use crate::context::AppContext;
use crate::utils::egui_mpsc::SenderAsync;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Background refresh of the SOL balance of one address.
///
/// Fetches immediately, then once per refresh interval. A fetch is awaited
/// before the next tick is taken, and ticks missed meanwhile are skipped, so
/// at most one request is outstanding. Nothing is sent after cancellation.
#[derive(Debug)]
pub struct BalancePoller {
    address: Pubkey,
    cancel: CancellationToken,
}

impl BalancePoller {
    pub fn spawn_poller(
        app_context: &Arc<AppContext>,
        address: Pubkey,
        sender: SenderAsync<TaskResult>,
    ) -> Self {
        let cancel = app_context.task_manager.child_token();
        let interval = app_context.config.balance_refresh_interval();
        tracing::debug!(%address, ?interval, "Starting balance poller");

        app_context.task_manager.spawn_sync(poll_balance(
            app_context.clone(),
            address,
            interval,
            sender,
            cancel.clone(),
        ));

        Self { address, cancel }
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn stop(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!(address = %self.address, "Stopping balance poller");
            self.cancel.cancel();
        }
    }
}

impl Drop for BalancePoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_balance(
    app_context: Arc<AppContext>,
    address: Pubkey,
    interval: Duration,
    sender: SenderAsync<TaskResult>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            result = app_context.fetch_balance(&address) => result,
        };

        let task_result = match result {
            Ok(snapshot) => {
                TaskResult::Success(Box::new(BackendTaskSuccessResult::BalanceFetched(snapshot)))
            }
            Err(e) => {
                tracing::error!(%address, "{}: {}", FETCH_BALANCE_FAILED, e);
                TaskResult::Error {
                    source: TaskSource::Balance,
                    message: FETCH_BALANCE_FAILED.to_string(),
                }
            }
        };

        if cancel.is_cancelled() || sender.send(task_result).await.is_err() {
            break;
        }
    }

    tracing::debug!(%address, "Balance poller finished");
}
