use crate::wallet::{KeypairSlot, ReadyState, WalletAdapter, WalletAdapterKind, WalletError};
use async_trait::async_trait;
use bip39::Mnemonic;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::keypair::keypair_from_seed;
use solana_sdk::transaction::Transaction;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Wallet derived from a BIP-39 mnemonic the way the Solana CLI does it:
/// the first 32 bytes of the BIP-39 seed are the ed25519 secret.
pub struct SeedPhraseWallet {
    phrase: Option<Zeroizing<String>>,
    passphrase: Zeroizing<String>,
    slot: KeypairSlot,
}

impl fmt::Debug for SeedPhraseWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedPhraseWallet")
            .field("configured", &self.phrase.is_some())
            .field("slot", &self.slot)
            .finish()
    }
}

impl SeedPhraseWallet {
    pub fn new(phrase: Option<String>, passphrase: Option<String>) -> Self {
        Self {
            phrase: phrase
                .filter(|phrase| !phrase.trim().is_empty())
                .map(Zeroizing::new),
            passphrase: Zeroizing::new(passphrase.unwrap_or_default()),
            slot: KeypairSlot::default(),
        }
    }

    fn derive(&self, phrase: &str) -> Result<Keypair, WalletError> {
        let load_error = |reason: String| WalletError::Load {
            kind: WalletAdapterKind::SeedPhrase,
            reason,
        };

        let normalized = Zeroizing::new(
            phrase
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase(),
        );
        let mnemonic = Mnemonic::parse_normalized(&normalized)
            .map_err(|e| load_error(format!("invalid mnemonic: {}", e)))?;
        let mut seed = mnemonic.to_seed(self.passphrase.as_str());
        let keypair = keypair_from_seed(&seed[..32]).map_err(|e| load_error(e.to_string()));
        seed.zeroize();
        keypair
    }
}

#[async_trait]
impl WalletAdapter for SeedPhraseWallet {
    fn kind(&self) -> WalletAdapterKind {
        WalletAdapterKind::SeedPhrase
    }

    fn ready_state(&self) -> ReadyState {
        if self.phrase.is_some() {
            ReadyState::Installed
        } else {
            ReadyState::NotDetected
        }
    }

    async fn connect(&self) -> Result<Pubkey, WalletError> {
        let phrase = self
            .phrase
            .as_ref()
            .ok_or(WalletError::NotReady(self.kind()))?;
        let keypair = self.derive(phrase)?;
        let public_key = self.slot.store(keypair);
        tracing::info!(%public_key, "Seed phrase wallet connected");
        Ok(public_key)
    }

    async fn disconnect(&self) {
        self.slot.clear();
    }

    fn public_key(&self) -> Option<Pubkey> {
        self.slot.public_key()
    }

    async fn sign_transaction(&self, transaction: &mut Transaction) -> Result<(), WalletError> {
        self.slot.sign(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[tokio::test]
    async fn derivation_is_deterministic() {
        let first = SeedPhraseWallet::new(Some(PHRASE.to_string()), None);
        let second = SeedPhraseWallet::new(Some(format!("  {}  ", PHRASE.to_uppercase())), None);
        assert_eq!(first.ready_state(), ReadyState::Installed);
        assert_eq!(
            first.connect().await.unwrap(),
            second.connect().await.unwrap()
        );
    }

    #[tokio::test]
    async fn passphrase_changes_the_address() {
        let plain = SeedPhraseWallet::new(Some(PHRASE.to_string()), None);
        let protected =
            SeedPhraseWallet::new(Some(PHRASE.to_string()), Some("TREZOR".to_string()));
        assert_ne!(
            plain.connect().await.unwrap(),
            protected.connect().await.unwrap()
        );
    }

    #[tokio::test]
    async fn rejects_bad_phrases() {
        let missing = SeedPhraseWallet::new(Some("   ".to_string()), None);
        assert_eq!(missing.ready_state(), ReadyState::NotDetected);
        assert!(matches!(
            missing.connect().await,
            Err(WalletError::NotReady(WalletAdapterKind::SeedPhrase))
        ));

        let invalid = SeedPhraseWallet::new(Some("abandon ".repeat(12)), None);
        assert!(matches!(
            invalid.connect().await,
            Err(WalletError::Load { .. })
        ));
        assert!(!format!("{:?}", invalid).contains("abandon"));
    }
}
