use crate::backend_task::tokens::TokenTaskError;
use crate::chain::ChainError;
use crate::context::AppContext;
use crate::model::mint::MintRecord;
use crate::wallet::WalletAdapter;
use solana_sdk::signature::Signature;

impl AppContext {
    /// Mints `amount` base units into the wallet's own associated token account.
    pub(super) async fn mint_tokens(
        &self,
        wallet: &dyn WalletAdapter,
        mint: &MintRecord,
        amount: u64,
    ) -> Result<Signature, TokenTaskError> {
        let owner = wallet.public_key().ok_or(ChainError::NotConnected)?;
        let destination = self
            .token_program
            .get_or_create_associated_token_account(wallet, &mint.mint, &owner)
            .await?;
        let signature = self
            .token_program
            .mint_to(wallet, &mint.mint, &destination, amount)
            .await?;

        tracing::info!(mint = %mint.mint, amount, %signature, "Tokens minted");
        Ok(signature)
    }
}
