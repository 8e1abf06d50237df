use crate::ui::theme::{Shadow, Shape, SolanaColors, Spacing, Typography};
use egui::{
    Button, CentralPanel, Color32, Context, CornerRadius, Frame, Margin, Response, RichText,
    Stroke, TextEdit, Ui, Vec2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonVariant {
    Primary,
    Secondary,
}

/// Button in the application palette. Disabled buttons stay visible.
pub(crate) struct StyledButton {
    text: String,
    variant: ButtonVariant,
    enabled: bool,
    min_width: Option<f32>,
}

impl StyledButton {
    pub fn new(text: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            text: text.into(),
            variant,
            enabled: true,
            min_width: None,
        }
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(text, ButtonVariant::Primary)
    }

    pub fn secondary(text: impl Into<String>) -> Self {
        Self::new(text, ButtonVariant::Secondary)
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let dark_mode = ui.ctx().style().visuals.dark_mode;

        let (text_color, fill, stroke) = match self.variant {
            ButtonVariant::Primary => (Color32::WHITE, SolanaColors::PURPLE, None),
            ButtonVariant::Secondary => (
                SolanaColors::text_primary(dark_mode),
                SolanaColors::surface(dark_mode),
                Some(Stroke::new(Shape::BORDER_WIDTH, SolanaColors::GREEN)),
            ),
        };
        let fill = if self.enabled {
            fill
        } else {
            fill.gamma_multiply(0.4)
        };

        let label = RichText::new(self.text)
            .font(Typography::body())
            .color(text_color);
        let mut button = Button::new(label)
            .fill(fill)
            .corner_radius(CornerRadius::same(Shape::RADIUS_MD));
        if let Some(stroke) = stroke {
            button = button.stroke(stroke);
        }
        if let Some(min_width) = self.min_width {
            button = button.min_size(Vec2::new(min_width, 0.0));
        }

        let response = ui.add_enabled(self.enabled, button);
        if response.hovered() && self.enabled {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response
    }
}

/// Bordered surface with an optional heading.
pub(crate) struct StyledCard {
    title: Option<String>,
    padding: f32,
}

impl Default for StyledCard {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledCard {
    pub fn new() -> Self {
        Self {
            title: None,
            padding: Spacing::CARD_PADDING,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show<R>(self, ui: &mut Ui, content: impl FnOnce(&mut Ui) -> R) -> R {
        let dark_mode = ui.ctx().style().visuals.dark_mode;

        Frame::new()
            .fill(SolanaColors::surface(dark_mode))
            .stroke(Stroke::new(Shape::BORDER_WIDTH, SolanaColors::border(dark_mode)))
            .corner_radius(CornerRadius::same(Shape::RADIUS_MD))
            .inner_margin(Margin::same(self.padding as i8))
            .shadow(Shadow::medium())
            .show(ui, |ui| {
                if let Some(title) = self.title {
                    ui.label(RichText::new(title).font(Typography::heading_small()).strong());
                    ui.add_space(Spacing::SM);
                }
                content(ui)
            })
            .inner
    }
}

pub fn styled_text_edit_singleline(text: &mut String, dark_mode: bool) -> TextEdit<'_> {
    TextEdit::singleline(text)
        .text_color(SolanaColors::text_primary(dark_mode))
        .background_color(SolanaColors::input_background(dark_mode))
}

pub fn island_central_panel<R>(ctx: &Context, content: impl FnOnce(&mut Ui) -> R) -> R {
    let dark_mode = ctx.style().visuals.dark_mode;

    CentralPanel::default()
        .frame(
            Frame::new()
                .fill(SolanaColors::background(dark_mode))
                .inner_margin(Margin::same(Spacing::MD_I8)),
        )
        .show(ctx, content)
        .inner
}
