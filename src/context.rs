use crate::chain::{ClusterClient, RpcCluster, SplTokenClient, TokenProgramClient};
use crate::config::Config;
use crate::database::Database;
use crate::model::cluster::Cluster;
use crate::model::mint::MintRecord;
use crate::model::session::Session;
use crate::utils::tasks::TaskManager;
use crate::wallet::{
    KeypairFileWallet, ReadyState, SeedPhraseWallet, WalletAdapter, WalletAdapterKind,
};
use solana_sdk::pubkey::Pubkey;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Session provider shared by every view and backend task.
///
/// Owns the single RPC connection, the supported wallet adapters and the
/// connection state. Views only read [`Session`] snapshots; all mutation
/// happens through the session backend tasks and [`AppContext::disconnect`].
pub struct AppContext {
    pub(crate) config: Config,
    pub(crate) cluster: Cluster,
    pub(crate) db: Arc<Database>,
    pub(crate) rpc: Arc<dyn ClusterClient>,
    pub(crate) token_program: Arc<dyn TokenProgramClient>,
    pub(crate) wallets: Vec<Arc<dyn WalletAdapter>>,
    session: RwLock<Session>,
    active_wallet: RwLock<Option<Arc<dyn WalletAdapter>>>,
    pub(crate) task_manager: TaskManager,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("cluster", &self.cluster)
            .field("endpoint", &self.rpc.endpoint())
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

impl AppContext {
    pub fn new(config: Config, db: Arc<Database>, task_manager: TaskManager) -> Arc<Self> {
        let endpoint = config.endpoint();
        tracing::info!(cluster = %config.cluster, %endpoint, "Opening cluster connection");

        let rpc: Arc<dyn ClusterClient> = Arc::new(RpcCluster::new(endpoint));
        let token_program: Arc<dyn TokenProgramClient> =
            Arc::new(SplTokenClient::new(rpc.clone()));
        let wallets: Vec<Arc<dyn WalletAdapter>> = vec![
            Arc::new(KeypairFileWallet::new(config.keypair_path())),
            Arc::new(SeedPhraseWallet::new(
                config.wallet_mnemonic.clone(),
                config.wallet_passphrase.clone(),
            )),
        ];

        Self::with_clients(config, db, rpc, token_program, wallets, task_manager)
    }

    /// Builds a context around explicit clients and adapters.
    pub fn with_clients(
        config: Config,
        db: Arc<Database>,
        rpc: Arc<dyn ClusterClient>,
        token_program: Arc<dyn TokenProgramClient>,
        wallets: Vec<Arc<dyn WalletAdapter>>,
        task_manager: TaskManager,
    ) -> Arc<Self> {
        Arc::new(Self {
            cluster: config.cluster,
            config,
            db,
            rpc,
            token_program,
            wallets,
            session: RwLock::new(Session::default()),
            active_wallet: RwLock::new(None),
            task_manager,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn session(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn wallet_adapters(&self) -> &[Arc<dyn WalletAdapter>] {
        &self.wallets
    }

    pub fn wallet_adapter(&self, kind: WalletAdapterKind) -> Option<Arc<dyn WalletAdapter>> {
        self.wallets.iter().find(|w| w.kind() == kind).cloned()
    }

    pub fn active_wallet(&self) -> Option<Arc<dyn WalletAdapter>> {
        self.active_wallet
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mints created on the current cluster. Storage errors yield an empty list.
    pub fn registered_mints(&self) -> Vec<MintRecord> {
        self.db.get_mints(self.cluster).unwrap_or_else(|e| {
            tracing::error!("Failed to load registered mints: {}", e);
            Vec::new()
        })
    }

    /// Adapter to reconnect at startup: the last authorized one, if
    /// auto-connect is enabled and the adapter is ready.
    pub fn previously_authorized_wallet(&self) -> Option<Arc<dyn WalletAdapter>> {
        if !self.config.auto_connect {
            return None;
        }
        let kind = self
            .db
            .get_last_wallet_adapter()
            .inspect_err(|e| tracing::warn!("Failed to read last wallet adapter: {}", e))
            .ok()
            .flatten()?;
        self.wallet_adapter(kind)
            .filter(|wallet| wallet.ready_state() == ReadyState::Installed)
    }

    pub(crate) fn mark_connecting(&self, kind: WalletAdapterKind) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Session::connecting(kind);
    }

    pub(crate) fn mark_connected(&self, wallet: Arc<dyn WalletAdapter>, address: Pubkey) {
        let kind = wallet.kind();
        *self
            .active_wallet
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(wallet);
        *self.session.write().unwrap_or_else(PoisonError::into_inner) =
            Session::connected(kind, address);
    }

    /// Resets the session to disconnected and hands back the adapter that was
    /// active so its key can be released.
    pub fn disconnect(&self) -> Option<Arc<dyn WalletAdapter>> {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Session::default();
        self.active_wallet
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Cancels background work and drops the session. Called when the app closes.
    pub fn teardown(&self) {
        self.task_manager.cancellation_token.cancel();
        if let Some(wallet) = self.disconnect() {
            tracing::debug!(adapter = wallet.name(), "Session closed at teardown");
        }
    }
}
