use crate::chain::ChainError;
use crate::context::AppContext;
use crate::model::balance::BalanceSnapshot;
use solana_sdk::pubkey::Pubkey;

/// User-facing message for a failed balance refresh.
pub const FETCH_BALANCE_FAILED: &str = "Failed to fetch balance";

impl AppContext {
    pub async fn fetch_balance(&self, address: &Pubkey) -> Result<BalanceSnapshot, ChainError> {
        let lamports = self.rpc.get_balance(address).await?;
        tracing::trace!(%address, lamports, "Balance fetched");
        Ok(BalanceSnapshot::new(*address, lamports))
    }
}
