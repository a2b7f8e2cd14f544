use crate::domain::employee::{
    EXPERIENCE_STEP, EducationLevel, EmployeeProfile, Gender, JobTitle, MAX_AGE, MAX_EXPERIENCE,
    MIN_AGE, MIN_EXPERIENCE,
};
use eframe::egui;

/// Editable state behind the input form
#[derive(Debug, Clone, Default)]
pub struct SalaryForm {
    pub profile: EmployeeProfile,
}

impl SalaryForm {
    /// Draws the inputs. Returns true when the user asked for a prediction.
    pub fn show(&mut self, ui: &mut egui::Ui, busy: bool) -> bool {
        let profile = &mut self.profile;

        ui.add(
            egui::Slider::new(&mut profile.age, MIN_AGE..=MAX_AGE)
                .text("👤 Age"),
        );
        ui.add_space(6.0);

        option_combo(ui, "⚧ Gender", &mut profile.gender, Gender::ALL);
        option_combo(
            ui,
            "🎓 Education Level",
            &mut profile.education,
            EducationLevel::ALL,
        );
        option_combo(ui, "💼 Job Title", &mut profile.job_title, JobTitle::ALL);
        ui.add_space(6.0);

        ui.add(
            egui::Slider::new(&mut profile.experience, MIN_EXPERIENCE..=MAX_EXPERIENCE)
                .step_by(EXPERIENCE_STEP)
                .fixed_decimals(1)
                .text("📈 Years of Experience"),
        );
        ui.add_space(12.0);

        let button = egui::Button::new(egui::RichText::new("🔮 Predict Salary").size(16.0).strong())
            .min_size(egui::vec2(ui.available_width(), 40.0));
        ui.add_enabled(!busy, button).clicked()
    }
}

fn option_combo<T>(ui: &mut egui::Ui, label: &str, value: &mut T, options: &[T])
where
    T: Copy + PartialEq + std::fmt::Display,
{
    egui::ComboBox::from_label(label)
        .selected_text(value.to_string())
        .width(220.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, option.to_string());
            }
        });
}
