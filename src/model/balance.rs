use crate::model::amount::Amount;
use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;

/// Number of fractional digits shown for the SOL balance.
pub const BALANCE_DISPLAY_PLACES: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub address: Pubkey,
    pub lamports: u64,
    pub fetched_at: DateTime<Utc>,
}

impl BalanceSnapshot {
    pub fn new(address: Pubkey, lamports: u64) -> Self {
        Self {
            address,
            lamports,
            fetched_at: Utc::now(),
        }
    }

    pub fn amount(&self) -> Amount {
        Amount::sol_from_lamports(self.lamports)
    }

    /// Balance in SOL with a fixed number of fractional digits, e.g. `2.5000`.
    pub fn display_value(&self) -> String {
        self.amount().to_fixed_string(BALANCE_DISPLAY_PLACES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_four_fractional_digits() {
        let snapshot = BalanceSnapshot::new(Pubkey::new_unique(), 2_500_000_000);
        assert_eq!(snapshot.display_value(), "2.5000");
        assert_eq!(snapshot.amount().unit_name(), Some("SOL"));
    }
}
