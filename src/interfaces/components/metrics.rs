use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A highlighted card showing one headline amount
pub fn render_amount_card(ui: &mut egui::Ui, title: &str, value: &str, context: Option<&str>) {
    Card::new().title(title).accent(true).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(30.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );

            if let Some(ctx) = context {
                ui.label(
                    egui::RichText::new(ctx)
                        .size(12.0)
                        .color(egui::Color32::WHITE.linear_multiply(0.85)),
                );
            }
        });
    });
}

/// A status pill (e.g., model score)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}

/// Two-column label/value list
pub fn render_key_values(ui: &mut egui::Ui, id: &str, rows: &[(&str, String)]) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([DesignSystem::SPACING_MEDIUM, DesignSystem::SPACING_SMALL])
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(
                    egui::RichText::new(*label)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.label(egui::RichText::new(value).color(DesignSystem::TEXT_SECONDARY));
                ui.end_row();
            }
        });
}
