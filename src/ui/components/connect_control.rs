use crate::app::AppAction;
use crate::backend_task::BackendTask;
use crate::backend_task::session::SessionTask;
use crate::context::AppContext;
use crate::model::session::{ConnectionState, Session};
use crate::ui::components::styled::{StyledButton, StyledCard};
use crate::ui::theme::{SolanaColors, Spacing, Typography};
use crate::wallet::ReadyState;
use egui::{RichText, Ui};
use std::sync::Arc;

pub const SELECT_WALLET_LABEL: &str = "Select Wallet";
pub const CONNECTING_LABEL: &str = "Connecting...";
pub const DISCONNECT_LABEL: &str = "Disconnect";

fn readiness_label(state: ReadyState) -> &'static str {
    match state {
        ReadyState::Installed => "Detected",
        ReadyState::NotDetected => "Not detected",
    }
}

/// Wallet picker and connect/disconnect button.
#[derive(Debug, Default)]
pub struct ConnectControl {
    selector_open: bool,
}

impl ConnectControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        app_context: &Arc<AppContext>,
        session: &Session,
    ) -> AppAction {
        let mut action = AppAction::None;
        let dark_mode = ui.ctx().style().visuals.dark_mode;

        match session.state {
            ConnectionState::Connected => {
                self.selector_open = false;
                ui.horizontal(|ui| {
                    if let Some(address) = session.short_address() {
                        ui.label(
                            RichText::new(address)
                                .font(Typography::monospace())
                                .color(SolanaColors::GREEN),
                        );
                    }
                    if StyledButton::secondary(DISCONNECT_LABEL).show(ui).clicked() {
                        action = AppAction::BackendTask(BackendTask::SessionTask(
                            SessionTask::Disconnect,
                        ));
                    }
                });
            }
            ConnectionState::Connecting => {
                self.selector_open = false;
                ui.horizontal(|ui| {
                    ui.spinner();
                    StyledButton::primary(CONNECTING_LABEL).enabled(false).show(ui);
                });
            }
            ConnectionState::Disconnected => {
                if StyledButton::primary(SELECT_WALLET_LABEL).show(ui).clicked() {
                    self.selector_open = !self.selector_open;
                }
                if self.selector_open {
                    ui.add_space(Spacing::SM);
                    StyledCard::new().title("Choose a wallet").show(ui, |ui| {
                        for wallet in app_context.wallet_adapters() {
                            let ready_state = wallet.ready_state();
                            ui.horizontal(|ui| {
                                let clicked = StyledButton::secondary(wallet.name())
                                    .enabled(ready_state == ReadyState::Installed)
                                    .min_width(160.0)
                                    .show(ui)
                                    .clicked();
                                ui.label(
                                    RichText::new(readiness_label(ready_state))
                                        .font(Typography::body_small())
                                        .color(SolanaColors::text_secondary(dark_mode)),
                                );
                                if clicked {
                                    self.selector_open = false;
                                    action = AppAction::BackendTask(BackendTask::SessionTask(
                                        SessionTask::Connect(wallet.kind()),
                                    ));
                                }
                            });
                        }
                    });
                }
            }
        }

        action
    }
}
