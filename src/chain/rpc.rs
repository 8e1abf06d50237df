use crate::chain::{ChainError, ClusterClient};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

/// JSON-RPC connection opened once for the application lifetime.
pub struct RpcCluster {
    client: RpcClient,
}

impl RpcCluster {
    pub fn new(url: String) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url, CommitmentConfig::confirmed()),
        }
    }
}

#[async_trait]
impl ClusterClient for RpcCluster {
    fn endpoint(&self) -> String {
        self.client.url()
    }

    async fn get_balance(&self, address: &Pubkey) -> Result<u64, ChainError> {
        Ok(self.client.get_balance(address).await?)
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, ChainError> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await?;
        Ok(response.value.is_some())
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ChainError> {
        Ok(self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }

    async fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature, ChainError> {
        let signature = self.client.send_and_confirm_transaction(transaction).await?;
        tracing::debug!(%signature, "Transaction confirmed");
        Ok(signature)
    }
}
