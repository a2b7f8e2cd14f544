use crate::application::client::{EstimateOutcome, SalaryClient};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{
    render_amount_card, render_key_values, render_status_pill,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::salary_form::SalaryForm;
use crate::interfaces::view_models::EstimateViewModel;
use eframe::egui;
use std::time::Duration;

const FAILURE_HINT: &str = "Ensure the model was trained using these input features.";

enum ResultView {
    Empty,
    Ready(EstimateViewModel),
    Failed(String),
}

pub struct SalaryApp {
    client: SalaryClient,
    form: SalaryForm,
    result: ResultView,
}

impl SalaryApp {
    pub fn new(client: SalaryClient) -> Self {
        Self {
            client,
            form: SalaryForm::default(),
            result: ResultView::Empty,
        }
    }

    fn apply(&mut self, outcome: EstimateOutcome) {
        self.result = match outcome {
            Ok(estimate) => ResultView::Ready(EstimateViewModel::from_estimate(&estimate)),
            Err(e) => ResultView::Failed(e.to_string()),
        };
    }

    fn header(ui: &mut egui::Ui) {
        DesignSystem::accent_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("🤵 Employee Salary Prediction")
                        .size(28.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new("Estimate salaries based on input features")
                        .color(egui::Color32::WHITE),
                );
            });
        });
    }

    fn side_panel(&self, ui: &mut egui::Ui) {
        let service = self.client.service();

        Card::new().title("📊 Model Score").show(ui, |ui| match service.model_score() {
            Some(score) => render_status_pill(ui, &format!("{:.4}", score), DesignSystem::SUCCESS),
            None => render_status_pill(ui, "unavailable", DesignSystem::TEXT_MUTED),
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        Card::new().title("🔧 Features Used").show(ui, |ui| {
            for feature in service.feature_names() {
                ui.label(format!("• {}", feature));
            }
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        Card::new().title("📝 Instructions").show(ui, |ui| {
            ui.label("1. Fill all the details.");
            ui.label("2. Click 'Predict Salary'.");
            ui.label("3. View predicted salary with insights.");
        });
    }

    fn results(&self, ui: &mut egui::Ui) {
        match &self.result {
            ResultView::Empty => {}
            ResultView::Ready(vm) => {
                ui.columns(2, |columns| {
                    render_amount_card(&mut columns[0], "💰 Predicted Salary", &vm.base_salary, None);
                    render_amount_card(
                        &mut columns[1],
                        "💱 Converted Salary",
                        &vm.converted_salary,
                        Some(&vm.rate),
                    );
                });
                ui.add_space(DesignSystem::SPACING_MEDIUM);

                Card::new().title("📌 Summary of Inputs").show(ui, |ui| {
                    render_key_values(ui, "input_summary", &vm.summary);
                });
            }
            ResultView::Failed(message) => {
                Card::new().show(ui, |ui| {
                    ui.label(egui::RichText::new(message).color(DesignSystem::DANGER).strong());
                    ui.label(egui::RichText::new(FAILURE_HINT).color(DesignSystem::INFO));
                });
            }
        }
    }
}

impl eframe::App for SalaryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        if let Some(outcome) = self.client.poll() {
            self.apply(outcome);
        }
        let busy = self.client.is_pending();

        egui::SidePanel::right("info_panel")
            .default_width(280.0)
            .resizable(true)
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| self.side_panel(ui));

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    Self::header(ui);
                    ui.add_space(DesignSystem::SPACING_LARGE);

                    let submitted = Card::new()
                        .title("📋 Input Employee Details")
                        .show(ui, |ui| self.form.show(ui, busy))
                        .inner;

                    if submitted {
                        self.client.submit(self.form.profile.clone());
                    }

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    if busy {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Predicting...");
                        });
                    }
                    self.results(ui);

                    ui.add_space(DesignSystem::SPACING_LARGE);
                    ui.separator();
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(concat!(
                                "salary-predictor v",
                                env!("CARGO_PKG_VERSION"),
                                " | 🦀 egui"
                            ))
                            .size(11.0)
                            .color(DesignSystem::TEXT_MUTED),
                        );
                    });
                });
            });

        if busy || self.client.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

/// Shown instead of the form when the model bundle could not be loaded.
pub struct StartupErrorApp {
    details: String,
}

impl StartupErrorApp {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

impl eframe::App for StartupErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                Card::new().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("❗ Please retrain the model first.")
                            .size(18.0)
                            .strong()
                            .color(DesignSystem::DANGER),
                    );
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    ui.label(egui::RichText::new(&self.details).color(DesignSystem::TEXT_MUTED));
                });
            });
    }
}
