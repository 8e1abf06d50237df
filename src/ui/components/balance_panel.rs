use crate::model::balance::BalanceSnapshot;
use crate::model::mint::MintRecord;
use crate::ui::components::styled::StyledCard;
use crate::ui::theme::{Shape, SolanaColors, Spacing, Typography};
use chrono_humanize::HumanTime;
use egui::{CornerRadius, RichText, Sense, Ui, Vec2};
use solana_sdk::pubkey::Pubkey;

pub const SOL_BALANCE_HEADING: &str = "SOL Balance";
pub const TOKENS_HEADING: &str = "Your Tokens";
pub const NO_TOKENS_LABEL: &str = "No tokens found";

/// Latest balance of the active address plus the registered token list.
///
/// Holds on to the last snapshot when a refresh fails so the previous value
/// stays visible.
#[derive(Debug, Default)]
pub struct BalancePanel {
    snapshot: Option<BalanceSnapshot>,
}

impl BalancePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&BalanceSnapshot> {
        self.snapshot.as_ref()
    }

    /// Accepts `snapshot` only if it belongs to `active`. Late results for a
    /// previous address are dropped.
    pub fn set_snapshot(&mut self, snapshot: BalanceSnapshot, active: Option<Pubkey>) -> bool {
        if active != Some(snapshot.address) {
            return false;
        }
        self.snapshot = Some(snapshot);
        true
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    pub fn ui(&self, ui: &mut Ui, mints: &[MintRecord]) {
        let dark_mode = ui.ctx().style().visuals.dark_mode;

        StyledCard::new().title(SOL_BALANCE_HEADING).show(ui, |ui| {
            match &self.snapshot {
                Some(snapshot) => {
                    ui.label(
                        RichText::new(format!("{} SOL", snapshot.display_value()))
                            .font(Typography::heading_large())
                            .color(SolanaColors::GREEN),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Updated {}",
                            HumanTime::from(snapshot.fetched_at)
                        ))
                        .font(Typography::body_small())
                        .color(SolanaColors::text_secondary(dark_mode)),
                    );
                }
                None => skeleton(ui, dark_mode),
            }
        });

        ui.add_space(Spacing::MD);

        StyledCard::new().title(TOKENS_HEADING).show(ui, |ui| {
            if mints.is_empty() {
                ui.label(
                    RichText::new(NO_TOKENS_LABEL).color(SolanaColors::text_secondary(dark_mode)),
                );
                return;
            }
            for record in mints {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&record.symbol).strong());
                    ui.label(
                        RichText::new(&record.name).color(SolanaColors::text_secondary(dark_mode)),
                    );
                });
                ui.label(
                    RichText::new(record.mint.to_string())
                        .font(Typography::monospace())
                        .color(SolanaColors::text_secondary(dark_mode)),
                );
                ui.add_space(Spacing::XS);
            }
        });
    }
}

fn skeleton(ui: &mut Ui, dark_mode: bool) {
    for width in [160.0, 100.0] {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 18.0), Sense::hover());
        ui.painter().rect_filled(
            rect,
            CornerRadius::same(Shape::RADIUS_SM),
            SolanaColors::skeleton(dark_mode),
        );
        ui.add_space(Spacing::XS);
    }
}
