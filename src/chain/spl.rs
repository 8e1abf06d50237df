use crate::chain::{ChainError, ClusterClient, TokenProgramClient};
use crate::wallet::WalletAdapter;
use async_trait::async_trait;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use spl_token::solana_program::program_pack::Pack;
use std::sync::Arc;

/// Token program client assembling `spl-token` instructions into wallet-signed
/// transactions.
pub struct SplTokenClient {
    cluster: Arc<dyn ClusterClient>,
}

impl SplTokenClient {
    pub fn new(cluster: Arc<dyn ClusterClient>) -> Self {
        Self { cluster }
    }

    /// Sign with the wallet (fee payer) and any extra signers, then submit.
    async fn submit(
        &self,
        payer: &dyn WalletAdapter,
        instructions: &[Instruction],
        extra_signer: Option<&Keypair>,
    ) -> Result<Signature, ChainError> {
        let payer_key = payer.public_key().ok_or(ChainError::NotConnected)?;
        let blockhash = self.cluster.latest_blockhash().await?;

        let mut transaction = Transaction::new_with_payer(instructions, Some(&payer_key));
        transaction.message.recent_blockhash = blockhash;
        if let Some(signer) = extra_signer {
            transaction
                .try_partial_sign(&[signer], blockhash)
                .map_err(|e| ChainError::Signing(e.to_string()))?;
        }
        payer.sign_transaction(&mut transaction).await?;

        self.cluster.send_and_confirm(&transaction).await
    }
}

fn payer_key(payer: &dyn WalletAdapter) -> Result<Pubkey, ChainError> {
    payer.public_key().ok_or(ChainError::NotConnected)
}

#[async_trait]
impl TokenProgramClient for SplTokenClient {
    async fn create_mint(
        &self,
        payer: &dyn WalletAdapter,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
        decimals: u8,
    ) -> Result<Pubkey, ChainError> {
        let payer_key = payer_key(payer)?;
        let mint = Keypair::new();
        let space = spl_token::state::Mint::LEN;
        let lamports = self
            .cluster
            .minimum_balance_for_rent_exemption(space)
            .await?;

        let instructions = vec![
            system_instruction::create_account(
                &payer_key,
                &mint.pubkey(),
                lamports,
                space as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint2(
                &spl_token::id(),
                &mint.pubkey(),
                mint_authority,
                freeze_authority,
                decimals,
            )
            .map_err(|e| ChainError::Instruction(e.to_string()))?,
        ];

        let signature = self.submit(payer, &instructions, Some(&mint)).await?;
        tracing::info!(mint = %mint.pubkey(), %signature, decimals, "Mint created");
        Ok(mint.pubkey())
    }

    async fn get_or_create_associated_token_account(
        &self,
        payer: &dyn WalletAdapter,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> Result<Pubkey, ChainError> {
        let address = get_associated_token_address(owner, mint);
        if self.cluster.account_exists(&address).await? {
            return Ok(address);
        }

        let instruction = create_associated_token_account_idempotent(
            &payer_key(payer)?,
            owner,
            mint,
            &spl_token::id(),
        );
        let signature = self.submit(payer, &[instruction], None).await?;
        tracing::info!(%address, %owner, %mint, %signature, "Associated token account created");
        Ok(address)
    }

    async fn mint_to(
        &self,
        payer: &dyn WalletAdapter,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
    ) -> Result<Signature, ChainError> {
        let instruction = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            destination,
            &payer_key(payer)?,
            &[],
            amount,
        )
        .map_err(|e| ChainError::Instruction(e.to_string()))?;
        self.submit(payer, &[instruction], None).await
    }

    async fn transfer(
        &self,
        payer: &dyn WalletAdapter,
        mint: &Pubkey,
        source: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        decimals: u8,
    ) -> Result<Signature, ChainError> {
        let instruction = spl_token::instruction::transfer_checked(
            &spl_token::id(),
            source,
            mint,
            destination,
            &payer_key(payer)?,
            &[],
            amount,
            decimals,
        )
        .map_err(|e| ChainError::Instruction(e.to_string()))?;
        self.submit(payer, &[instruction], None).await
    }
}
