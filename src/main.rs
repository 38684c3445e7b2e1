#![deny(missing_docs)]

//! Entry point for the egui-based symptom prediction UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use sympred::config;
use sympred::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use sympred::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(820.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Symptom Predictor",
        native_options,
        Box::new(move |_cc| {
            let app = config
                .map_err(|err| format!("Failed to load config: {err}"))
                .and_then(EguiApp::new);
            match app {
                Ok(app) => Ok(Box::new(app)),
                Err(err) => {
                    tracing::error!("{err}");
                    Ok(Box::new(LaunchError { message: err }))
                }
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
