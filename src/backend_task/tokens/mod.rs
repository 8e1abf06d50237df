use crate::backend_task::BackendTaskSuccessResult;
use crate::chain::ChainError;
use crate::context::AppContext;
use crate::model::token_action::TokenActionRequest;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

mod create_token;
mod mint_tokens;
mod transfer_tokens;

pub const CREATE_TOKEN_FAILED: &str = "Failed to create token";
pub const MINT_TOKENS_FAILED: &str = "Failed to mint tokens";
pub const SEND_TOKENS_FAILED: &str = "Failed to send tokens";

/// User-facing message for a failed `request`.
pub fn failure_message(request: &TokenActionRequest) -> &'static str {
    match request {
        TokenActionRequest::CreateToken { .. } => CREATE_TOKEN_FAILED,
        TokenActionRequest::MintTokens { .. } => MINT_TOKENS_FAILED,
        TokenActionRequest::SendTokens { .. } => SEND_TOKENS_FAILED,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenTaskError {
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error("Mint {mint} was created but could not be recorded: {source}")]
    Registry {
        mint: Pubkey,
        source: rusqlite::Error,
    },
}

impl AppContext {
    /// Runs a token action with the connected wallet. The underlying error is
    /// logged; callers only get the generic message for the action.
    pub async fn run_token_task(
        self: &Arc<Self>,
        request: TokenActionRequest,
    ) -> Result<BackendTaskSuccessResult, String> {
        let generic_error = failure_message(&request);

        let Some(wallet) = self.active_wallet() else {
            tracing::error!("{}: {}", generic_error, ChainError::NotConnected);
            return Err(generic_error.to_string());
        };
        let wallet = wallet.as_ref();

        let result = match request {
            TokenActionRequest::CreateToken {
                name,
                symbol,
                decimals,
            } => self
                .create_token(wallet, name, symbol, decimals)
                .await
                .map(BackendTaskSuccessResult::TokenCreated),
            TokenActionRequest::MintTokens { mint, amount } => self
                .mint_tokens(wallet, &mint, amount.value())
                .await
                .map(|signature| BackendTaskSuccessResult::TokensMinted {
                    symbol: mint.symbol.clone(),
                    signature,
                }),
            TokenActionRequest::SendTokens {
                mint,
                recipient,
                amount,
            } => self
                .transfer_tokens(wallet, &mint, &recipient, amount.value())
                .await
                .map(|signature| BackendTaskSuccessResult::TokensSent {
                    symbol: mint.symbol.clone(),
                    signature,
                }),
        };

        result.map_err(|e| {
            tracing::error!("{}: {}", generic_error, e);
            generic_error.to_string()
        })
    }
}
