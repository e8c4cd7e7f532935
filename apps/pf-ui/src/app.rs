//! Operating point workspace.
//!
//! Immediate-mode shell around `pf_app::render_chart`: widgets hold plain
//! values, every frame rebuilds `OperatingParameters` from them and recomputes
//! the chart. The session (active dataset) is the only state that survives
//! between frames.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use pf_app::{
    ChartData, OperatingParameters, PARALLEL_RANGE, SERIES_RANGE, SessionState, render_chart,
};
use pf_core::units::{cp, kgm3, km, m};
use pf_hydro::NominalSize;

pub struct PumpflowApp {
    session: SessionState,
    viscosity_cp: f64,
    density_kg_per_m3: f64,
    pipeline_length_km: f64,
    static_lift_m: f64,
    pipe_size: NominalSize,
    parallel_pumps: u32,
    series_pumps: u32,
    upload_status: String,
}

impl PumpflowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: SessionState::new(),
            viscosity_cp: 10.0,
            density_kg_per_m3: 820.0,
            pipeline_length_km: 20.0,
            static_lift_m: 50.0,
            pipe_size: NominalSize::In8,
            parallel_pumps: 1,
            series_pumps: 1,
            upload_status: "Default pump curve is used".to_string(),
        }
    }

    fn parameters(&self) -> OperatingParameters {
        OperatingParameters {
            viscosity: cp(self.viscosity_cp),
            density: kgm3(self.density_kg_per_m3),
            pipeline_length: km(self.pipeline_length_km),
            static_lift: m(self.static_lift_m),
            pipe_size: self.pipe_size,
            parallel_count: self.parallel_pumps,
            series_count: self.series_pumps,
        }
    }

    fn pick_upload(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Pump curve", &["csv", "xls", "xlsx", "xlsm"])
            .pick_file()
        else {
            return;
        };
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        match std::fs::read(&path) {
            Ok(bytes) => match self.session.upload(&bytes, &filename) {
                Ok(()) => {
                    self.upload_status = format!("Pump curve uploaded: {filename}");
                }
                Err(err) => {
                    self.upload_status = format!("Upload rejected ({err}); previous curve kept");
                }
            },
            Err(err) => {
                self.upload_status = format!("Could not read {filename}: {err}");
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Adjust pump curve");
        ui.add(
            egui::Slider::new(&mut self.parallel_pumps, PARALLEL_RANGE).text("Parallel pumps"),
        );
        ui.add(egui::Slider::new(&mut self.series_pumps, SERIES_RANGE).text("Series pumps"));

        ui.separator();
        ui.heading("Pipeline");
        egui::Grid::new("pipeline_inputs").num_columns(2).show(ui, |ui| {
            ui.label("Viscosity (cP)");
            ui.add(
                egui::DragValue::new(&mut self.viscosity_cp)
                    .speed(0.5)
                    .range(0.1..=10_000.0),
            );
            ui.end_row();

            ui.label("Density (kg/m³)");
            ui.add(
                egui::DragValue::new(&mut self.density_kg_per_m3)
                    .speed(1.0)
                    .range(1.0..=3_000.0),
            );
            ui.end_row();

            ui.label("Length (km)");
            ui.add(
                egui::DragValue::new(&mut self.pipeline_length_km)
                    .speed(0.5)
                    .range(0.0..=10_000.0),
            );
            ui.end_row();

            ui.label("Delta Z (m)");
            ui.add(
                egui::DragValue::new(&mut self.static_lift_m)
                    .speed(1.0)
                    .range(-1_000.0..=1_000.0),
            );
            ui.end_row();

            ui.label("Pipe diameter");
            egui::ComboBox::from_id_salt("pipe_size")
                .selected_text(self.pipe_size.to_string())
                .show_ui(ui, |ui| {
                    for size in NominalSize::ALL {
                        ui.selectable_value(&mut self.pipe_size, size, size.to_string());
                    }
                });
            ui.end_row();
        });

        ui.separator();
        if ui.button("Upload pump curve…").clicked() {
            self.pick_upload();
        }
        ui.label(&self.upload_status);
    }

    fn chart(&self, ui: &mut egui::Ui, chart: &ChartData) {
        let head: PlotPoints = chart
            .discharge
            .iter()
            .zip(&chart.head)
            .map(|(&q, &h)| [q, h])
            .collect();
        // No secondary axis in egui_plot; efficiency is drawn as percent so
        // it shares the head scale legibly.
        let efficiency: PlotPoints = chart
            .discharge
            .iter()
            .zip(&chart.efficiency)
            .map(|(&q, &e)| [q, e * 100.0])
            .collect();
        let losses: PlotPoints = chart
            .loss_flow
            .iter()
            .zip(&chart.loss_head)
            .map(|(&q, &h)| [q, h])
            .collect();

        Plot::new("operating_point")
            .legend(Legend::default())
            .x_axis_label("Discharge (m³/h)")
            .y_axis_label("Head (m) / Efficiency (%)")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(head).name("Pump head (m)"));
                plot_ui.line(Line::new(efficiency).name("Pump efficiency (%)"));
                plot_ui.line(Line::new(losses).name("Pipeline losses (m)"));
            });
    }
}

impl eframe::App for PumpflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .min_width(260.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pump characteristic and system resistance");
            match render_chart(&self.parameters(), &self.session) {
                Ok(chart) => self.chart(ui, &chart),
                Err(err) => {
                    ui.colored_label(egui::Color32::RED, format!("Cannot compute chart: {err}"));
                }
            }
        });
    }
}
