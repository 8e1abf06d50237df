//! In-process wallet adapters.
//!
//! Each adapter loads a signing key from a local source, exposes its public
//! key once connected, and signs transactions built by the token program
//! client. Private key material never leaves the adapter.

pub mod keypair_file;
pub mod seed_phrase;

use async_trait::async_trait;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use std::fmt;
use std::sync::{PoisonError, RwLock};

pub use keypair_file::KeypairFileWallet;
pub use seed_phrase::SeedPhraseWallet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
#[serde(rename_all = "kebab-case")]
pub enum WalletAdapterKind {
    KeypairFile,
    SeedPhrase,
}

impl WalletAdapterKind {
    pub fn name(&self) -> &'static str {
        match self {
            WalletAdapterKind::KeypairFile => "Keypair File",
            WalletAdapterKind::SeedPhrase => "Seed Phrase",
        }
    }

    /// Value stored in the settings table.
    pub fn as_setting_str(&self) -> &'static str {
        match self {
            WalletAdapterKind::KeypairFile => "keypair-file",
            WalletAdapterKind::SeedPhrase => "seed-phrase",
        }
    }

    pub fn from_setting_str(value: &str) -> Option<Self> {
        enum_iterator::all::<WalletAdapterKind>().find(|kind| kind.as_setting_str() == value)
    }
}

impl fmt::Display for WalletAdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether an adapter's key source is available on this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Installed,
    NotDetected,
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("{0} wallet is not available")]
    NotReady(WalletAdapterKind),
    #[error("Failed to load {kind} wallet: {reason}")]
    Load {
        kind: WalletAdapterKind,
        reason: String,
    },
    #[error("Wallet not connected")]
    NotConnected,
    #[error("Failed to sign transaction: {0}")]
    Signing(String),
}

#[async_trait]
pub trait WalletAdapter: Send + Sync + fmt::Debug {
    fn kind(&self) -> WalletAdapterKind;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn ready_state(&self) -> ReadyState;

    /// Load the signing key and return the wallet address.
    async fn connect(&self) -> Result<Pubkey, WalletError>;

    /// Forget the loaded key. Idempotent.
    async fn disconnect(&self);

    fn public_key(&self) -> Option<Pubkey>;

    /// Add this wallet's signature to `transaction` using its current blockhash.
    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError>;
}

/// Holds the key of a connected adapter.
#[derive(Default)]
pub(crate) struct KeypairSlot {
    keypair: RwLock<Option<Keypair>>,
}

impl fmt::Debug for KeypairSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeypairSlot")
            .field("public_key", &self.public_key())
            .finish()
    }
}

impl KeypairSlot {
    pub(crate) fn store(&self, keypair: Keypair) -> Pubkey {
        let public_key = keypair.pubkey();
        *self
            .keypair
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(keypair);
        public_key
    }

    pub(crate) fn clear(&self) {
        self.keypair
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    pub(crate) fn public_key(&self) -> Option<Pubkey> {
        self.keypair
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Signer::pubkey)
    }

    pub(crate) fn sign(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        let guard = self.keypair.read().unwrap_or_else(PoisonError::into_inner);
        let keypair = guard.as_ref().ok_or(WalletError::NotConnected)?;
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[keypair], blockhash)
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}
