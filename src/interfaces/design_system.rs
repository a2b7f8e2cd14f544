use eframe::egui;

/// Warm light design system: orange-to-rose accents on a pale background
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(245, 247, 250); // #F5F7FA
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(245, 247, 250);
    pub const BG_CARD: egui::Color32 = egui::Color32::WHITE;
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(236, 239, 244);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(245, 158, 66); // #F59E42 (Orange)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(244, 63, 94); // #F43F5E (Rose)

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(90);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(119, 119, 85); // #777755

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: f32 = 14.0;
    pub const ROUNDING_LARGE: f32 = 18.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.weak_bg_fill = Self::BG_INPUT;
        visuals.widgets.hovered.weak_bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.25);
        visuals.widgets.active.weak_bg_fill = Self::ACCENT_SECONDARY.linear_multiply(0.35);

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.6);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_SECONDARY);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Header banner and result cards
    pub fn accent_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::ACCENT_PRIMARY)
            .corner_radius(Self::ROUNDING_LARGE)
            .stroke(egui::Stroke::new(2.0, Self::ACCENT_SECONDARY))
            .inner_margin(Self::SPACING_LARGE as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
