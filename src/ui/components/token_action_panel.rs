use crate::model::amount::{MAX_TOKEN_DECIMALS, SOL_DECIMAL_PLACES};
use crate::model::mint::MintRecord;
use crate::model::token_action::{TokenActionRequest, TokenTab, ValidationError};
use crate::ui::components::amount_input::AmountInput;
use crate::ui::components::styled::{StyledButton, StyledCard, styled_text_edit_singleline};
use crate::ui::theme::{SolanaColors, Spacing, Typography};
use egui::{ComboBox, RichText, Slider, Ui};
use solana_sdk::pubkey::Pubkey;

const FIELD_WIDTH: f32 = 280.0;

/// Outcome of one frame of the token action panel.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenPanelEvent {
    None,
    Submit(TokenActionRequest),
    Invalid(ValidationError),
}

/// Create / mint / send form. Validation happens when a submit button is
/// pressed; nothing is sent while `loading` is set.
#[derive(Debug, Clone)]
pub struct TokenActionPanel {
    pub tab: TokenTab,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub selected_mint: Option<Pubkey>,
    pub mint_amount: String,
    pub recipient: String,
    pub send_amount: String,
}

impl Default for TokenActionPanel {
    fn default() -> Self {
        Self {
            tab: TokenTab::default(),
            name: String::new(),
            symbol: String::new(),
            decimals: SOL_DECIMAL_PLACES,
            selected_mint: None,
            mint_amount: String::new(),
            recipient: String::new(),
            send_amount: String::new(),
        }
    }
}

impl TokenActionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints selectable on the active tab. Minting is only offered for mints
    /// whose authority is the connected wallet.
    fn offered<'m>(
        &self,
        mints: &'m [MintRecord],
        wallet: Option<Pubkey>,
    ) -> Vec<&'m MintRecord> {
        mints
            .iter()
            .filter(|record| self.tab != TokenTab::Mint || Some(record.authority) == wallet)
            .collect()
    }

    fn selected<'m>(&self, offered: &[&'m MintRecord]) -> Option<&'m MintRecord> {
        let selected = self.selected_mint?;
        offered.iter().copied().find(|record| record.mint == selected)
    }

    /// Builds the request for the active tab from the current fields.
    pub fn build_request(
        &self,
        mints: &[MintRecord],
        wallet: Option<Pubkey>,
    ) -> Result<TokenActionRequest, ValidationError> {
        let offered = self.offered(mints, wallet);
        match self.tab {
            TokenTab::Create => {
                TokenActionRequest::create(&self.name, &self.symbol, self.decimals, mints)
            }
            TokenTab::Mint => TokenActionRequest::mint(self.selected(&offered), &self.mint_amount),
            TokenTab::Send => TokenActionRequest::send(
                self.selected(&offered),
                &self.recipient,
                &self.send_amount,
            ),
        }
    }

    /// Clears the inputs consumed by a successful action on `tab`.
    pub fn clear_after_success(&mut self, tab: TokenTab) {
        match tab {
            TokenTab::Create => {
                self.name.clear();
                self.symbol.clear();
            }
            TokenTab::Mint => self.mint_amount.clear(),
            TokenTab::Send => {
                self.recipient.clear();
                self.send_amount.clear();
            }
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        mints: &[MintRecord],
        wallet: Option<Pubkey>,
        loading: bool,
    ) -> TokenPanelEvent {
        StyledCard::new()
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for tab in enum_iterator::all::<TokenTab>() {
                        ui.selectable_value(
                            &mut self.tab,
                            tab,
                            RichText::new(tab.label()).font(Typography::body()),
                        );
                    }
                });
                ui.separator();
                ui.add_space(Spacing::SM);

                let offered = self.offered(mints, wallet);
                if self.tab != TokenTab::Create && self.selected(&offered).is_none() {
                    self.selected_mint = offered.first().map(|record| record.mint);
                }

                let submit_label = if loading {
                    self.tab.pending_title()
                } else {
                    self.tab.title()
                };

                match self.tab {
                    TokenTab::Create => self.create_fields(ui),
                    TokenTab::Mint => self.mint_fields(ui, &offered, loading),
                    TokenTab::Send => self.send_fields(ui, &offered, loading),
                }

                ui.add_space(Spacing::MD);
                let clicked = StyledButton::primary(submit_label)
                    .enabled(!loading)
                    .min_width(FIELD_WIDTH)
                    .show(ui)
                    .clicked();

                if !clicked || loading {
                    return TokenPanelEvent::None;
                }
                match self.build_request(mints, wallet) {
                    Ok(request) => TokenPanelEvent::Submit(request),
                    Err(e) => TokenPanelEvent::Invalid(e),
                }
            })
    }

    fn create_fields(&mut self, ui: &mut Ui) {
        let dark_mode = ui.ctx().style().visuals.dark_mode;
        ui.label("Token name");
        ui.add(
            styled_text_edit_singleline(&mut self.name, dark_mode)
                .hint_text("My Token")
                .desired_width(FIELD_WIDTH),
        );
        ui.add_space(Spacing::SM);
        ui.label("Symbol");
        ui.add(
            styled_text_edit_singleline(&mut self.symbol, dark_mode)
                .hint_text("MTK")
                .desired_width(FIELD_WIDTH),
        );
        ui.add_space(Spacing::SM);
        ui.label("Decimals");
        ui.add(Slider::new(&mut self.decimals, 0..=MAX_TOKEN_DECIMALS));
    }

    fn mint_selector(&mut self, ui: &mut Ui, offered: &[&MintRecord]) -> Option<MintRecord> {
        let dark_mode = ui.ctx().style().visuals.dark_mode;
        if offered.is_empty() {
            ui.label(
                RichText::new("Create a token first")
                    .color(SolanaColors::text_secondary(dark_mode)),
            );
            return None;
        }

        let selected = self.selected(offered).cloned();
        let selected_text = selected
            .as_ref()
            .map(MintRecord::label)
            .unwrap_or_else(|| "Select token".to_string());
        ComboBox::from_id_salt(("token_mint_selector", self.tab.label()))
            .selected_text(selected_text)
            .width(FIELD_WIDTH)
            .show_ui(ui, |ui| {
                for record in offered {
                    let label = record.label();
                    ui.selectable_value(&mut self.selected_mint, Some(record.mint), label);
                }
            });
        self.selected(offered).cloned()
    }

    fn mint_fields(&mut self, ui: &mut Ui, offered: &[&MintRecord], loading: bool) {
        ui.label("Token");
        let selected = self.mint_selector(ui, offered);
        ui.add_space(Spacing::SM);
        amount_field(ui, &mut self.mint_amount, selected.as_ref(), loading);
    }

    fn send_fields(&mut self, ui: &mut Ui, offered: &[&MintRecord], loading: bool) {
        let dark_mode = ui.ctx().style().visuals.dark_mode;
        ui.label("Token");
        let selected = self.mint_selector(ui, offered);
        ui.add_space(Spacing::SM);
        ui.label("Recipient address");
        ui.add(
            styled_text_edit_singleline(&mut self.recipient, dark_mode)
                .hint_text("Recipient public key")
                .font(Typography::monospace())
                .desired_width(FIELD_WIDTH),
        );
        ui.add_space(Spacing::SM);
        amount_field(ui, &mut self.send_amount, selected.as_ref(), loading);
    }
}

fn amount_field(ui: &mut Ui, text: &mut String, token: Option<&MintRecord>, loading: bool) {
    ui.label("Amount");
    let decimals = token.map_or(SOL_DECIMAL_PLACES, |record| record.decimals);
    let mut input = AmountInput::new(text, decimals)
        .hint_text("0.0")
        .desired_width(FIELD_WIDTH - 60.0)
        .enabled(!loading);
    if let Some(record) = token {
        input = input.unit_name(record.symbol.clone());
    }
    input.show(ui);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cluster::Cluster;
    use chrono::Utc;

    fn gold(authority: Pubkey) -> MintRecord {
        MintRecord {
            mint: Pubkey::new_unique(),
            name: "Gold".into(),
            symbol: "GLD".into(),
            decimals: 9,
            authority,
            cluster: Cluster::Devnet,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_create_form_is_rejected() {
        let panel = TokenActionPanel::new();
        assert_eq!(panel.build_request(&[], None), Err(ValidationError::MissingFields));
    }

    #[test]
    fn mint_request_uses_selected_token() {
        let wallet = Pubkey::new_unique();
        let gold = gold(wallet);
        let mut panel = TokenActionPanel::new();
        panel.tab = TokenTab::Mint;
        panel.mint_amount = "3".into();

        assert_eq!(
            panel.build_request(std::slice::from_ref(&gold), Some(wallet)),
            Err(ValidationError::NoTokenSelected)
        );

        panel.selected_mint = Some(gold.mint);
        match panel.build_request(std::slice::from_ref(&gold), Some(wallet)) {
            Ok(TokenActionRequest::MintTokens { amount, .. }) => {
                assert_eq!(amount.value(), 3_000_000_000)
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn mint_is_only_offered_to_the_mint_authority() {
        let wallet = Pubkey::new_unique();
        let foreign = gold(Pubkey::new_unique());
        let mut panel = TokenActionPanel::new();
        panel.selected_mint = Some(foreign.mint);
        panel.mint_amount = "1".into();
        panel.recipient = Pubkey::new_unique().to_string();
        panel.send_amount = "1".into();

        panel.tab = TokenTab::Mint;
        assert_eq!(
            panel.build_request(std::slice::from_ref(&foreign), Some(wallet)),
            Err(ValidationError::NoTokenSelected)
        );

        panel.tab = TokenTab::Send;
        assert!(matches!(
            panel.build_request(std::slice::from_ref(&foreign), Some(wallet)),
            Ok(TokenActionRequest::SendTokens { .. })
        ));
    }

    #[test]
    fn success_clears_only_the_consumed_fields() {
        let mut panel = TokenActionPanel {
            name: "Gold".into(),
            symbol: "GLD".into(),
            mint_amount: "1".into(),
            recipient: "abc".into(),
            send_amount: "2".into(),
            ..TokenActionPanel::default()
        };

        panel.clear_after_success(TokenTab::Create);
        assert!(panel.name.is_empty() && panel.symbol.is_empty());
        assert_eq!(panel.mint_amount, "1");

        panel.clear_after_success(TokenTab::Send);
        assert!(panel.recipient.is_empty() && panel.send_amount.is_empty());
        assert_eq!(panel.mint_amount, "1");
    }
}
