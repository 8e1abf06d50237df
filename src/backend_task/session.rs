use crate::backend_task::BackendTaskSuccessResult;
use crate::context::AppContext;
use crate::wallet::WalletAdapterKind;
use std::sync::Arc;

pub const CONNECT_WALLET_FAILED: &str = "Failed to connect wallet";
pub const DISCONNECT_WALLET_FAILED: &str = "Failed to disconnect wallet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTask {
    Connect(WalletAdapterKind),
    Disconnect,
}

impl SessionTask {
    pub fn failure_message(&self) -> &'static str {
        match self {
            SessionTask::Connect(_) => CONNECT_WALLET_FAILED,
            SessionTask::Disconnect => DISCONNECT_WALLET_FAILED,
        }
    }
}

impl AppContext {
    pub async fn run_session_task(
        self: &Arc<Self>,
        task: SessionTask,
    ) -> Result<BackendTaskSuccessResult, String> {
        match task {
            SessionTask::Connect(kind) => self.connect_wallet(kind).await,
            SessionTask::Disconnect => {
                self.disconnect_wallet().await;
                Ok(BackendTaskSuccessResult::Disconnected)
            }
        }
    }

    /// Connects `kind` and remembers it for auto-connect. On failure the
    /// session is reset and the adapter's own error text is returned.
    async fn connect_wallet(
        &self,
        kind: WalletAdapterKind,
    ) -> Result<BackendTaskSuccessResult, String> {
        let wallet = self
            .wallet_adapter(kind)
            .ok_or_else(|| format!("{} wallet is not supported", kind))?;

        self.mark_connecting(kind);
        match wallet.connect().await {
            Ok(address) => {
                self.mark_connected(wallet, address);
                if let Err(e) = self.db.set_last_wallet_adapter(kind) {
                    tracing::warn!("Failed to remember wallet adapter: {}", e);
                }
                tracing::info!(adapter = kind.name(), %address, "Wallet connected");
                Ok(BackendTaskSuccessResult::Connected {
                    adapter: kind,
                    address,
                })
            }
            Err(e) => {
                tracing::error!(adapter = kind.name(), "Wallet connection failed: {}", e);
                self.disconnect();
                Err(e.to_string())
            }
        }
    }

    async fn disconnect_wallet(&self) {
        if let Some(wallet) = self.disconnect() {
            wallet.disconnect().await;
            tracing::info!(adapter = wallet.name(), "Wallet disconnected");
        }
        if let Err(e) = self.db.clear_last_wallet_adapter() {
            tracing::warn!("Failed to clear wallet adapter: {}", e);
        }
    }
}
