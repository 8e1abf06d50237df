use crate::wallet::{KeypairSlot, ReadyState, WalletAdapter, WalletAdapterKind, WalletError};
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::transaction::Transaction;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Wallet backed by a Solana CLI keypair file (JSON array of 64 bytes).
#[derive(Debug)]
pub struct KeypairFileWallet {
    path: Option<PathBuf>,
    slot: KeypairSlot,
}

impl KeypairFileWallet {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            slot: KeypairSlot::default(),
        }
    }

    fn load(&self, path: &Path) -> Result<Keypair, WalletError> {
        let load_error = |reason: String| WalletError::Load {
            kind: WalletAdapterKind::KeypairFile,
            reason,
        };

        let contents = Zeroizing::new(std::fs::read_to_string(path).map_err(|e| {
            load_error(format!("cannot read {}: {}", path.display(), e))
        })?);
        let bytes: Zeroizing<Vec<u8>> = Zeroizing::new(
            serde_json::from_str(&contents)
                .map_err(|e| load_error(format!("invalid keypair JSON: {}", e)))?,
        );
        Keypair::try_from(&bytes[..]).map_err(|e| load_error(e.to_string()))
    }
}

#[async_trait]
impl WalletAdapter for KeypairFileWallet {
    fn kind(&self) -> WalletAdapterKind {
        WalletAdapterKind::KeypairFile
    }

    fn ready_state(&self) -> ReadyState {
        match &self.path {
            Some(path) if path.is_file() => ReadyState::Installed,
            _ => ReadyState::NotDetected,
        }
    }

    async fn connect(&self) -> Result<Pubkey, WalletError> {
        let path = self
            .path
            .as_deref()
            .filter(|path| path.is_file())
            .ok_or(WalletError::NotReady(self.kind()))?;
        let keypair = self.load(path)?;
        let public_key = self.slot.store(keypair);
        tracing::info!(%public_key, path = %path.display(), "Keypair file wallet connected");
        Ok(public_key)
    }

    async fn disconnect(&self) {
        self.slot.clear();
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.slot.public_key()
    }

    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        self.slot.sign(transaction)
    }
}
