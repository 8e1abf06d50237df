//! Cluster connection and SPL token program access.
//!
//! Both seams are traits so the UI and backend tasks can be exercised against
//! in-memory doubles; the production implementations wrap `solana-client`
//! and the `spl-token` instruction builders.

pub mod rpc;
pub mod spl;

#[cfg(test)]
pub(crate) mod mock;

use crate::wallet::{WalletAdapter, WalletError};
use async_trait::async_trait;
use solana_client::client_error::ClientError;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

pub use rpc::RpcCluster;
pub use spl::SplTokenClient;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("RPC request failed: {0}")]
    Rpc(String),
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("Failed to build instruction: {0}")]
    Instruction(String),
    #[error("Failed to sign transaction: {0}")]
    Signing(String),
    #[error("Wallet not connected")]
    NotConnected,
}

impl From<ClientError> for ChainError {
    fn from(value: ClientError) -> Self {
        ChainError::Rpc(value.to_string())
    }
}

/// Connection to a single Solana cluster.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    fn endpoint(&self) -> String;

    async fn get_balance(&self, address: &Pubkey) -> Result<u64, ChainError>;

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, ChainError>;

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize)
    -> Result<u64, ChainError>;

    async fn latest_blockhash(&self) -> Result<Hash, ChainError>;

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ChainError>;
}

/// SPL token program operations. The wallet pays fees and signs every
/// transaction.
#[async_trait]
pub trait TokenProgramClient: Send + Sync {
    /// Create and initialize a new mint. Returns the mint address.
    async fn create_mint(
        &self,
        payer: &dyn WalletAdapter,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> Result<Pubkey, ChainError>;

    /// Associated token account of `owner` for `mint`, created when absent.
    async fn get_or_create_associated_token_account(
        &self,
        payer: &dyn WalletAdapter,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> Result<Pubkey, ChainError>;

    /// Mint `amount` base units to `destination`; the payer is the mint authority.
    async fn mint_to(
        &self,
        payer: &dyn WalletAdapter,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
    ) -> Result<Signature, ChainError>;

    /// Checked transfer of `amount` base units; the payer owns `source`.
    async fn transfer(
        &self,
        payer: &dyn WalletAdapter,
        mint: &Pubkey,
        source: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        decimals: u8,
    ) -> Result<Signature, ChainError>;
}
