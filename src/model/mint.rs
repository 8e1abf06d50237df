use crate::model::cluster::Cluster;
use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;

/// A token mint created from this application and remembered locally so that
/// later mint and send actions can refer to it by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRecord {
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub authority: Pubkey,
    pub cluster: Cluster,
    pub created_at: DateTime<Utc>,
}

impl MintRecord {
    /// `NAME (SYMBOL)` label used in token selectors.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}
