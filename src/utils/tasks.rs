use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio::time::{Duration, timeout};
use tokio_util::sync::CancellationToken;

/// Timeout duration for graceful shutdown.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Tracks long-lived background tasks (the balance poller) so they can be
/// cancelled and joined when the application exits.
#[derive(Debug, Clone)]
pub struct TaskManager {
    pub cancellation_token: CancellationToken,
    tasks: Arc<Mutex<JoinSet<()>>>,
}

impl TaskManager {
    pub fn new() -> Self {
        TaskManager {
            cancellation_token: CancellationToken::new(),
            tasks: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Token cancelled together with the manager, but cancellable on its own.
    pub fn child_token(&self) -> CancellationToken {
        self.cancellation_token.child_token()
    }

    /// Spawn a subtask from synchronous code. Must be called inside a tokio runtime.
    #[inline(always)]
    pub fn spawn_sync<F>(&self, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let subtasks = self.tasks.clone();
        tokio::spawn(spawn_subtask(subtasks, future));
    }

    /// Number of subtasks registered and not yet reaped.
    pub async fn active_tasks(&self) -> usize {
        let mut tasks = self.tasks.lock().await;
        reap_finished(&mut tasks);
        tasks.len()
    }

    /// Cancel all subtasks, wait up to [`SHUTDOWN_TIMEOUT`] for them to finish,
    /// then abort whatever is left.
    ///
    /// Blocks the calling thread; call it from outside async context.
    pub fn shutdown(&self) -> Result<(), String> {
        let cancel = self.cancellation_token.clone();
        let subtasks = self.tasks.clone();

        let (tx, mut rx) = tokio::sync::oneshot::channel::<()>();
        let completed = Arc::new(AtomicUsize::new(0));

        let counter = completed.clone();
        // runs detached so that cancelling subtasks cannot cancel the shutdown itself
        tokio::task::spawn(async move {
            cancel.cancel();

            let tasks_list = subtasks.clone();
            timeout(SHUTDOWN_TIMEOUT, async move {
                let mut tasks = tasks_list.lock().await;
                while let Some(handle) = tasks.join_next().await {
                    if let Err(e) = handle {
                        tracing::error!("Subtask failed: {:?}", e);
                    }
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            })
            .await
            .ok();

            subtasks.lock().await.shutdown().await;

            if tx.send(()).is_err() {
                tracing::error!("Failed to send shutdown completion signal");
            }
        });

        const WAIT_TIME: Duration = Duration::from_millis(100);
        for _ in 0..SHUTDOWN_TIMEOUT.as_millis() / WAIT_TIME.as_millis() {
            if rx.try_recv().is_ok() {
                break;
            }
            std::thread::sleep(WAIT_TIME);
        }

        tracing::debug!(
            "Shutdown complete, {} subtasks finished cleanly",
            completed.load(Ordering::Relaxed)
        );

        Ok(())
    }
}

async fn spawn_subtask<F>(subtasks: Arc<Mutex<JoinSet<()>>>, future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let mut subtasks_lock = subtasks.lock().await;
    reap_finished(&mut subtasks_lock);
    subtasks_lock.spawn(future);
}

/// Drops results of subtasks that already finished so the set does not grow
/// with every poller restart.
fn reap_finished(tasks: &mut JoinSet<()>) {
    while let Some(result) = tasks.try_join_next() {
        if let Err(e) = result {
            if e.is_panic() {
                tracing::error!("Subtask panicked: {:?}", e);
            }
        }
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        TaskManager::new()
    }
}
