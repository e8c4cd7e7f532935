#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::PumpflowApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Pumpflow"),
        ..Default::default()
    };

    eframe::run_native(
        "Pumpflow",
        options,
        Box::new(|cc| Ok(Box::new(PumpflowApp::new(cc)))),
    )
}
