use crate::app::AppAction;
use crate::backend_task::{BackendTask, BackendTaskSuccessResult, TaskSource};
use crate::context::AppContext;
use crate::model::mint::MintRecord;
use crate::model::notification::{DEFAULT_NOTIFICATION_CAPACITY, NotificationQueue};
use crate::model::session::{Session, truncate_address};
use crate::model::token_action::TokenTab;
use crate::ui::components::balance_panel::BalancePanel;
use crate::ui::components::connect_control::ConnectControl;
use crate::ui::components::notifications::show_notifications;
use crate::ui::components::styled::island_central_panel;
use crate::ui::components::token_action_panel::{TokenActionPanel, TokenPanelEvent};
use crate::ui::theme::{SolanaColors, Spacing, Typography};
use crate::ui::{MessageType, ScreenLike};
use egui::{Align, Context, Frame, Layout, Margin, RichText, TopBottomPanel, Ui, Vec2};
use std::sync::Arc;
use std::time::Instant;

pub const CONNECT_PROMPT: &str = "Connect your wallet to get started";

/// Top-level view. Owns the notification queue and the loading flag shared
/// by the token actions; everything else is read from the context.
pub struct RootScreen {
    app_context: Arc<AppContext>,
    notifications: NotificationQueue,
    header_connect_control: ConnectControl,
    prompt_connect_control: ConnectControl,
    balance_panel: BalancePanel,
    token_panel: TokenActionPanel,
    mints: Vec<MintRecord>,
    loading: bool,
}

impl RootScreen {
    pub fn new(app_context: &Arc<AppContext>) -> Self {
        let notifications = NotificationQueue::new(
            DEFAULT_NOTIFICATION_CAPACITY,
            app_context.config().notification_ttl(),
        );
        Self {
            app_context: app_context.clone(),
            notifications,
            header_connect_control: ConnectControl::new(),
            prompt_connect_control: ConnectControl::new(),
            balance_panel: BalancePanel::new(),
            token_panel: TokenActionPanel::new(),
            mints: app_context.registered_mints(),
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn balance_panel(&self) -> &BalancePanel {
        &self.balance_panel
    }

    pub fn token_panel_mut(&mut self) -> &mut TokenActionPanel {
        &mut self.token_panel
    }

    fn connect_hint(&self) -> String {
        let adapters = self
            .app_context
            .wallet_adapters()
            .iter()
            .map(|wallet| wallet.name())
            .collect::<Vec<_>>()
            .join(" or ");
        format!(
            "Use a {} wallet on {}",
            adapters,
            self.app_context.cluster().display_name()
        )
    }

    fn header(&mut self, ctx: &Context, session: &Session) -> AppAction {
        let dark_mode = ctx.style().visuals.dark_mode;
        TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(SolanaColors::surface(dark_mode))
                    .inner_margin(Margin::same(Spacing::MD_I8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Sol Token Tool")
                            .font(Typography::heading_small())
                            .color(SolanaColors::PURPLE),
                    );
                    ui.label(
                        RichText::new(self.app_context.cluster().display_name())
                            .font(Typography::body_small())
                            .color(SolanaColors::text_secondary(dark_mode)),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.header_connect_control.ui(ui, &self.app_context, session)
                    })
                    .inner
                })
                .inner
            })
            .inner
    }

    fn connect_prompt(&mut self, ui: &mut Ui, session: &Session) -> AppAction {
        let dark_mode = ui.ctx().style().visuals.dark_mode;
        let hint = self.connect_hint();
        ui.vertical_centered(|ui| {
            ui.add_space(Spacing::XL * 2.0);
            ui.label(RichText::new(CONNECT_PROMPT).font(Typography::heading_large()));
            ui.add_space(Spacing::SM);
            ui.label(RichText::new(hint).color(SolanaColors::text_secondary(dark_mode)));
            ui.add_space(Spacing::LG);
            self.prompt_connect_control.ui(ui, &self.app_context, session)
        })
        .inner
    }

    fn dashboard(&mut self, ui: &mut Ui, session: &Session) -> AppAction {
        let available = ui.available_size();
        let balance_width = (available.x - Spacing::MD) / 3.0;

        let event = ui
            .horizontal_top(|ui| {
                ui.allocate_ui_with_layout(
                    Vec2::new(balance_width, available.y),
                    Layout::top_down(Align::Min),
                    |ui| self.balance_panel.ui(ui, &self.mints),
                );
                ui.add_space(Spacing::MD);
                ui.vertical(|ui| {
                    self.token_panel.ui(ui, &self.mints, session.address, self.loading)
                })
                .inner
            })
            .inner;

        match event {
            TokenPanelEvent::None => AppAction::None,
            TokenPanelEvent::Invalid(e) => {
                self.display_message(&e.to_string(), MessageType::Error);
                AppAction::None
            }
            TokenPanelEvent::Submit(request) => {
                if self.loading {
                    return AppAction::None;
                }
                self.loading = true;
                AppAction::BackendTask(BackendTask::TokenTask(request))
            }
        }
    }

    fn finish_token_action(&mut self, tab: TokenTab, message: String) {
        self.loading = false;
        self.token_panel.clear_after_success(tab);
        self.display_message(&message, MessageType::Success);
    }
}

impl ScreenLike for RootScreen {
    fn refresh(&mut self) {
        self.mints = self.app_context.registered_mints();
    }

    fn ui(&mut self, ctx: &Context) -> AppAction {
        let session = self.app_context.session();
        if !session.is_connected() {
            self.balance_panel.clear();
        }

        let mut action = self.header(ctx, &session);

        action |= island_central_panel(ctx, |ui| {
            if session.is_connected() {
                self.dashboard(ui, &session)
            } else {
                self.connect_prompt(ui, &session)
            }
        });

        let now = Instant::now();
        if let Some(next_expiry) = self.notifications.prune(now) {
            ctx.request_repaint_after(next_expiry.saturating_duration_since(now));
        }
        show_notifications(ctx, &mut self.notifications);

        action
    }

    fn display_message(&mut self, message: &str, message_type: MessageType) {
        self.notifications.push(message_type, message);
    }

    fn display_task_result(&mut self, result: BackendTaskSuccessResult) {
        match result {
            BackendTaskSuccessResult::None => {}
            BackendTaskSuccessResult::Connected { address, .. } => {
                self.balance_panel.clear();
                self.refresh();
                self.display_message(
                    &format!("Connected: {}", truncate_address(&address.to_string())),
                    MessageType::Success,
                );
            }
            BackendTaskSuccessResult::Disconnected => {
                self.balance_panel.clear();
                self.display_message("Wallet disconnected", MessageType::Info);
            }
            BackendTaskSuccessResult::BalanceFetched(snapshot) => {
                let active = self.app_context.session().address;
                self.balance_panel.set_snapshot(snapshot, active);
            }
            BackendTaskSuccessResult::TokenCreated(record) => {
                let message = format!("Token created: {}", record.mint);
                self.token_panel.selected_mint = Some(record.mint);
                self.refresh();
                self.finish_token_action(TokenTab::Create, message);
            }
            BackendTaskSuccessResult::TokensMinted { signature, .. } => {
                self.finish_token_action(TokenTab::Mint, format!("Tokens minted: {}", signature));
            }
            BackendTaskSuccessResult::TokensSent { signature, .. } => {
                self.finish_token_action(TokenTab::Send, format!("Tokens sent: {}", signature));
            }
        }
    }

    fn display_task_error(&mut self, source: TaskSource, message: &str) {
        if source == TaskSource::TokenAction {
            self.loading = false;
        }
        self.display_message(message, MessageType::Error);
    }
}
