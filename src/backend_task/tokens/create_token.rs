use crate::backend_task::tokens::TokenTaskError;
use crate::chain::ChainError;
use crate::context::AppContext;
use crate::model::mint::MintRecord;
use crate::wallet::WalletAdapter;
use chrono::{DateTime, Utc};

impl AppContext {
    /// Creates a mint with the wallet as payer and mint authority, no freeze
    /// authority, and records it in the registry for this cluster.
    pub(super) async fn create_token(
        &self,
        wallet: &dyn WalletAdapter,
        name: String,
        symbol: String,
        decimals: u8,
    ) -> Result<MintRecord, TokenTaskError> {
        let authority = wallet.public_key().ok_or(ChainError::NotConnected)?;
        let mint = self
            .token_program
            .create_mint(wallet, &authority, None, decimals)
            .await?;

        let record = MintRecord {
            mint,
            name,
            symbol,
            decimals,
            authority,
            cluster: self.cluster,
            // registry stores whole seconds
            created_at: DateTime::<Utc>::from_timestamp(Utc::now().timestamp(), 0)
                .unwrap_or_default(),
        };
        self.db
            .insert_mint(&record)
            .map_err(|source| TokenTaskError::Registry { mint, source })?;

        tracing::info!(%mint, symbol = %record.symbol, "Token created");
        Ok(record)
    }
}
