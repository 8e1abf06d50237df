use crate::model::notification::NotificationQueue;
use crate::ui::MessageType;
use crate::ui::theme::{Shadow, Shape, SolanaColors, Spacing, Typography};
use egui::{
    Align2, Area, Color32, Context, CornerRadius, Frame, Id, Margin, RichText, Sense, Stroke,
};

const TOAST_WIDTH: f32 = 320.0;

fn prefix(kind: MessageType) -> &'static str {
    match kind {
        MessageType::Success => "✔",
        MessageType::Info => "ℹ",
        MessageType::Error => "✖",
    }
}

/// Draws the queued toasts stacked in the bottom-right corner.
///
/// Clicking a toast dismisses it. Expired entries must be pruned by the
/// caller before rendering.
pub fn show_notifications(ctx: &Context, queue: &mut NotificationQueue) {
    if queue.is_empty() {
        return;
    }
    let dark_mode = ctx.style().visuals.dark_mode;
    let mut dismissed = None;

    Area::new(Id::new("notifications"))
        .anchor(Align2::RIGHT_BOTTOM, [-Spacing::MD, -Spacing::MD])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(TOAST_WIDTH);
            for (index, notification) in queue.iter().enumerate() {
                let accent = SolanaColors::message_color(notification.kind);
                let response = Frame::new()
                    .fill(SolanaColors::surface(dark_mode))
                    .stroke(Stroke::new(Shape::BORDER_WIDTH, accent))
                    .corner_radius(CornerRadius::same(Shape::RADIUS_SM))
                    .inner_margin(Margin::same(Spacing::MD_I8 / 2))
                    .shadow(Shadow::elevated())
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(prefix(notification.kind)).color(accent));
                            ui.label(
                                RichText::new(&notification.message)
                                    .font(Typography::body_small())
                                    .color(if dark_mode {
                                        Color32::WHITE
                                    } else {
                                        SolanaColors::text_primary(dark_mode)
                                    }),
                            );
                        });
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    dismissed = Some(index);
                }
                ui.add_space(Spacing::XS);
            }
        });

    if let Some(index) = dismissed {
        queue.dismiss(index);
    }
}
