use crate::backend_task::tokens::TokenTaskError;
use crate::chain::ChainError;
use crate::context::AppContext;
use crate::model::mint::MintRecord;
use crate::wallet::WalletAdapter;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

impl AppContext {
    /// Checked transfer between the wallet's and the recipient's associated
    /// token accounts, creating either one when missing.
    pub(super) async fn transfer_tokens(
        &self,
        wallet: &dyn WalletAdapter,
        mint: &MintRecord,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<Signature, TokenTaskError> {
        let owner = wallet.public_key().ok_or(ChainError::NotConnected)?;
        let source = self
            .token_program
            .get_or_create_associated_token_account(wallet, &mint.mint, &owner)
            .await?;
        let destination = self
            .token_program
            .get_or_create_associated_token_account(wallet, &mint.mint, recipient)
            .await?;
        let signature = self
            .token_program
            .transfer(
                wallet,
                &mint.mint,
                &source,
                &destination,
                amount,
                mint.decimals,
            )
            .await?;

        tracing::info!(mint = %mint.mint, %recipient, amount, %signature, "Tokens sent");
        Ok(signature)
    }
}
