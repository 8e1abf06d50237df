use crate::ui::MessageType;
use egui::{Color32, FontFamily, FontId, Stroke, Vec2};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

pub fn detect_system_theme() -> Result<ThemeMode, String> {
    match dark_light::detect().map_err(|e| e.to_string())? {
        dark_light::Mode::Dark => Ok(ThemeMode::Dark),
        dark_light::Mode::Light => Ok(ThemeMode::Light),
        dark_light::Mode::Unspecified => Ok(ThemeMode::Dark),
    }
}

/// Resolve `System` to a concrete mode; falls back to dark when detection fails.
pub fn resolve_theme_mode(preference: ThemeMode) -> ThemeMode {
    match preference {
        ThemeMode::System => detect_system_theme()
            .inspect_err(|e| tracing::warn!("Failed to detect system theme: {}", e))
            .unwrap_or(ThemeMode::Dark),
        other => other,
    }
}

/// Solana brand palette.
pub struct SolanaColors;

impl SolanaColors {
    /// #9945FF
    pub const PURPLE: Color32 = Color32::from_rgb(0x99, 0x45, 0xFF);
    /// #14F195
    pub const GREEN: Color32 = Color32::from_rgb(0x14, 0xF1, 0x95);
    /// #0F0F0F
    pub const DARK: Color32 = Color32::from_rgb(0x0F, 0x0F, 0x0F);
    /// #F8F9FA
    pub const LIGHT: Color32 = Color32::from_rgb(0xF8, 0xF9, 0xFA);

    pub const ERROR: Color32 = Color32::from_rgb(235, 87, 87);
    pub const INFO: Color32 = Color32::from_rgb(52, 152, 219);

    const DARK_SURFACE: Color32 = Color32::from_rgb(26, 26, 30);
    const DARK_INPUT: Color32 = Color32::from_rgb(36, 36, 42);
    const DARK_BORDER: Color32 = Color32::from_rgb(58, 58, 66);
    const DARK_TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    const DARK_SKELETON: Color32 = Color32::from_rgb(48, 48, 56);

    const LIGHT_SURFACE: Color32 = Color32::WHITE;
    const LIGHT_INPUT: Color32 = Color32::from_rgb(241, 243, 245);
    const LIGHT_BORDER: Color32 = Color32::from_rgb(222, 226, 230);
    const LIGHT_TEXT_SECONDARY: Color32 = Color32::from_rgb(100, 110, 125);
    const LIGHT_SKELETON: Color32 = Color32::from_rgb(225, 228, 232);

    pub fn background(dark_mode: bool) -> Color32 {
        if dark_mode { Self::DARK } else { Self::LIGHT }
    }

    pub fn surface(dark_mode: bool) -> Color32 {
        if dark_mode {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }

    pub fn input_background(dark_mode: bool) -> Color32 {
        if dark_mode {
            Self::DARK_INPUT
        } else {
            Self::LIGHT_INPUT
        }
    }

    pub fn border(dark_mode: bool) -> Color32 {
        if dark_mode {
            Self::DARK_BORDER
        } else {
            Self::LIGHT_BORDER
        }
    }

    pub fn text_primary(dark_mode: bool) -> Color32 {
        if dark_mode { Self::LIGHT } else { Self::DARK }
    }

    pub fn text_secondary(dark_mode: bool) -> Color32 {
        if dark_mode {
            Self::DARK_TEXT_SECONDARY
        } else {
            Self::LIGHT_TEXT_SECONDARY
        }
    }

    /// Placeholder block shown while the first balance is loading.
    pub fn skeleton(dark_mode: bool) -> Color32 {
        if dark_mode {
            Self::DARK_SKELETON
        } else {
            Self::LIGHT_SKELETON
        }
    }

    pub fn message_color(message_type: MessageType) -> Color32 {
        match message_type {
            MessageType::Success => Self::GREEN,
            MessageType::Info => Self::INFO,
            MessageType::Error => Self::ERROR,
        }
    }
}

pub struct Typography;

impl Typography {
    pub const SCALE_SM: f32 = 14.0;
    pub const SCALE_BASE: f32 = 16.0;
    pub const SCALE_XL: f32 = 20.0;
    pub const SCALE_XXXL: f32 = 30.0;

    pub fn heading_large() -> FontId {
        FontId::new(Self::SCALE_XXXL, FontFamily::Proportional)
    }

    pub fn heading_small() -> FontId {
        FontId::new(Self::SCALE_XL, FontFamily::Proportional)
    }

    pub fn body() -> FontId {
        FontId::new(Self::SCALE_BASE, FontFamily::Proportional)
    }

    pub fn body_small() -> FontId {
        FontId::new(Self::SCALE_SM, FontFamily::Proportional)
    }

    pub fn monospace() -> FontId {
        FontId::new(Self::SCALE_BASE, FontFamily::Monospace)
    }
}

pub struct Spacing;

impl Spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;

    pub const MD_I8: i8 = 16;

    pub const CARD_PADDING: f32 = 20.0;
}

pub struct Shape;

impl Shape {
    pub const RADIUS_SM: u8 = 6;
    pub const RADIUS_MD: u8 = 12;

    pub const BORDER_WIDTH: f32 = 1.0;
}

pub struct Shadow;

impl Shadow {
    pub fn medium() -> egui::Shadow {
        egui::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_rgba_unmultiplied(0, 0, 0, 12),
        }
    }

    pub fn elevated() -> egui::Shadow {
        egui::Shadow {
            offset: [0, 12],
            blur: 32,
            spread: 0,
            color: Color32::from_rgba_unmultiplied(0, 0, 0, 18),
        }
    }
}

/// Apply the Solana palette to the egui context
pub fn apply_theme(ctx: &egui::Context, theme_mode: ThemeMode) {
    let dark_mode = resolve_theme_mode(theme_mode) == ThemeMode::Dark;

    let mut style = (*ctx.style()).clone();
    style.visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    style.visuals.dark_mode = dark_mode;

    style.visuals.window_fill = SolanaColors::surface(dark_mode);
    style.visuals.panel_fill = SolanaColors::background(dark_mode);
    style.visuals.extreme_bg_color = SolanaColors::input_background(dark_mode);
    style.visuals.faint_bg_color = SolanaColors::surface(dark_mode);
    style.visuals.window_stroke = Stroke::new(1.0, SolanaColors::border(dark_mode));
    style.visuals.window_shadow = Shadow::elevated();
    style.visuals.popup_shadow = Shadow::medium();

    style.visuals.widgets.inactive.bg_fill = SolanaColors::surface(dark_mode);
    style.visuals.widgets.inactive.weak_bg_fill = SolanaColors::surface(dark_mode);
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, SolanaColors::border(dark_mode));
    style.visuals.widgets.inactive.fg_stroke.color = SolanaColors::text_primary(dark_mode);

    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, SolanaColors::PURPLE);
    style.visuals.widgets.hovered.fg_stroke.color = SolanaColors::text_primary(dark_mode);

    style.visuals.widgets.active.bg_fill = SolanaColors::PURPLE;
    style.visuals.widgets.active.weak_bg_fill = SolanaColors::PURPLE;
    style.visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    style.visuals.widgets.open.bg_stroke = Stroke::new(2.0, SolanaColors::PURPLE);

    style.visuals.selection.bg_fill = SolanaColors::PURPLE.gamma_multiply(0.6);
    style.visuals.selection.stroke = Stroke::new(1.0, SolanaColors::GREEN);
    style.visuals.hyperlink_color = SolanaColors::GREEN;
    style.visuals.override_text_color = Some(SolanaColors::text_primary(dark_mode));

    style.spacing.item_spacing = Vec2::new(Spacing::SM, Spacing::SM);
    style.spacing.button_padding = Vec2::new(16.0, 8.0);
    style.spacing.indent = Spacing::MD;

    ctx.set_style(style);
}
