use crate::model::amount::{Amount, MAX_TOKEN_DECIMALS};
use crate::model::mint::MintRecord;
use enum_iterator::Sequence;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Tabs of the token action panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Sequence)]
pub enum TokenTab {
    #[default]
    Create,
    Mint,
    Send,
}

impl TokenTab {
    /// Tab caption.
    pub fn label(&self) -> &'static str {
        match self {
            TokenTab::Create => "Create",
            TokenTab::Mint => "Mint",
            TokenTab::Send => "Send",
        }
    }

    /// Submit button caption.
    pub fn title(&self) -> &'static str {
        match self {
            TokenTab::Create => "Create Token",
            TokenTab::Mint => "Mint Tokens",
            TokenTab::Send => "Send Tokens",
        }
    }

    /// Submit button caption while an action is in flight.
    pub fn pending_title(&self) -> &'static str {
        match self {
            TokenTab::Create => "Creating...",
            TokenTab::Mint => "Minting...",
            TokenTab::Send => "Sending...",
        }
    }
}

/// Form input rejected before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Please enter amount")]
    MissingAmount,
    #[error("Select a token first")]
    NoTokenSelected,
    #[error("Decimals must be between 0 and {max}, got {0}", max = MAX_TOKEN_DECIMALS)]
    DecimalsOutOfRange(u8),
    #[error("A token with symbol {0} already exists")]
    DuplicateSymbol(String),
    #[error("{0}")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    ZeroAmount,
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
}

/// A token operation built from form state at submit time.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenActionRequest {
    CreateToken {
        name: String,
        symbol: String,
        decimals: u8,
    },
    MintTokens {
        mint: MintRecord,
        amount: Amount,
    },
    SendTokens {
        mint: MintRecord,
        recipient: Pubkey,
        amount: Amount,
    },
}

impl TokenActionRequest {
    pub fn create(
        name: &str,
        symbol: &str,
        decimals: u8,
        existing: &[MintRecord],
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        let symbol = symbol.trim().to_uppercase();
        if name.is_empty() || symbol.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(ValidationError::DecimalsOutOfRange(decimals));
        }
        if existing.iter().any(|record| record.symbol == symbol) {
            return Err(ValidationError::DuplicateSymbol(symbol));
        }
        Ok(Self::CreateToken {
            name: name.to_string(),
            symbol,
            decimals,
        })
    }

    pub fn mint(selected: Option<&MintRecord>, amount: &str) -> Result<Self, ValidationError> {
        if amount.trim().is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let mint = selected.ok_or(ValidationError::NoTokenSelected)?;
        let amount = parse_positive_amount(amount, mint)?;
        Ok(Self::MintTokens {
            mint: mint.clone(),
            amount,
        })
    }

    pub fn send(
        selected: Option<&MintRecord>,
        recipient: &str,
        amount: &str,
    ) -> Result<Self, ValidationError> {
        let recipient = recipient.trim();
        if recipient.is_empty() || amount.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let mint = selected.ok_or(ValidationError::NoTokenSelected)?;
        let recipient = Pubkey::from_str(recipient)
            .map_err(|e| ValidationError::InvalidRecipient(e.to_string()))?;
        let amount = parse_positive_amount(amount, mint)?;
        Ok(Self::SendTokens {
            mint: mint.clone(),
            recipient,
            amount,
        })
    }

    pub fn tab(&self) -> TokenTab {
        match self {
            Self::CreateToken { .. } => TokenTab::Create,
            Self::MintTokens { .. } => TokenTab::Mint,
            Self::SendTokens { .. } => TokenTab::Send,
        }
    }
}

fn parse_positive_amount(input: &str, mint: &MintRecord) -> Result<Amount, ValidationError> {
    let amount = Amount::parse_with_decimals(input, mint.decimals)
        .map_err(ValidationError::InvalidAmount)?
        .with_unit_name(&mint.symbol);
    if amount.value() == 0 {
        return Err(ValidationError::ZeroAmount);
    }
    Ok(amount)
}
