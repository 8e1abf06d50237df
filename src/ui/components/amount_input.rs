use crate::model::amount::Amount;
use crate::ui::components::styled::styled_text_edit_singleline;
use crate::ui::theme::{SolanaColors, Typography};
use egui::{Response, RichText, Ui, WidgetText};

/// Text field for a token amount in display units.
///
/// The form keeps ownership of the raw text so it can be cleared after a
/// successful action. Parsing happens on every frame against the token's
/// decimals and any problem is shown under the field; the authoritative
/// check still runs when the request is built on submit.
pub struct AmountInput<'a> {
    text: &'a mut String,
    decimals: u8,
    unit_name: Option<String>,
    hint_text: Option<WidgetText>,
    desired_width: Option<f32>,
    enabled: bool,
}

impl<'a> AmountInput<'a> {
    pub fn new(text: &'a mut String, decimals: u8) -> Self {
        Self {
            text,
            decimals,
            unit_name: None,
            hint_text: None,
            desired_width: None,
            enabled: true,
        }
    }

    pub fn unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = Some(unit_name.into());
        self
    }

    pub fn hint_text<T: Into<WidgetText>>(mut self, hint_text: T) -> Self {
        self.hint_text = Some(hint_text.into());
        self
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the response of the text field.
    pub fn show(self, ui: &mut Ui) -> Response {
        let dark_mode = ui.ctx().style().visuals.dark_mode;
        let AmountInput {
            text,
            decimals,
            unit_name,
            hint_text,
            desired_width,
            enabled,
        } = self;

        ui.vertical(|ui| {
            let response = ui
                .horizontal(|ui| {
                    let mut text_edit = styled_text_edit_singleline(text, dark_mode);
                    if let Some(hint) = hint_text {
                        text_edit = text_edit.hint_text(hint);
                    }
                    if let Some(width) = desired_width {
                        text_edit = text_edit.desired_width(width);
                    }
                    let response = ui.add_enabled(enabled, text_edit);

                    if let Some(unit) = &unit_name {
                        ui.label(
                            RichText::new(unit)
                                .color(SolanaColors::text_secondary(dark_mode))
                                .font(Typography::body_small()),
                        );
                    }
                    response
                })
                .inner;

            if let Err(error) = parse_amount_text(text, decimals, unit_name.as_deref()) {
                ui.label(
                    RichText::new(error)
                        .color(SolanaColors::ERROR)
                        .font(Typography::body_small()),
                );
            }

            response
        })
        .inner
    }
}

/// Empty input is not an error here; the submit path reports it.
pub fn parse_amount_text(
    text: &str,
    decimals: u8,
    unit_name: Option<&str>,
) -> Result<Option<Amount>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let amount = Amount::parse_with_decimals(text, decimals)?;
    if amount.value() == 0 {
        return Err("Amount must be greater than zero".to_string());
    }
    Ok(Some(match unit_name {
        Some(unit) => amount.with_unit_name(unit),
        None => amount,
    }))
}
