use crate::wallet::WalletAdapterKind;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Snapshot of the wallet session handed to views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub address: Option<Pubkey>,
    pub state: ConnectionState,
    pub adapter: Option<WalletAdapterKind>,
}

impl Session {
    pub fn connecting(adapter: WalletAdapterKind) -> Self {
        Self {
            address: None,
            state: ConnectionState::Connecting,
            adapter: Some(adapter),
        }
    }

    pub fn connected(adapter: WalletAdapterKind, address: Pubkey) -> Self {
        Self {
            address: Some(address),
            state: ConnectionState::Connected,
            adapter: Some(adapter),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected && self.address.is_some()
    }

    /// Active address in `abcd...wxyz` form.
    pub fn short_address(&self) -> Option<String> {
        self.address
            .map(|address| truncate_address(&address.to_string()))
    }
}

/// Keeps the first and last four characters of a base58 address.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
