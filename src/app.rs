use eframe::egui;
use log::warn;

use crate::export;
use crate::synth::{self, WaveShape};
use crate::ui::components::WaveformPlot;

const PREVIEW_SAMPLES: usize = 1000;
const MIN_FREQUENCY_HZ: f64 = 20.0;
const MAX_FREQUENCY_HZ: f64 = 2000.0;

// Main app state
pub struct WaveshaperApp {
    shape: WaveShape,
    frequency_hz: f64,
    samples: Vec<f64>,
    status: Option<String>,
}

impl WaveshaperApp {
    pub fn new() -> Self {
        let shape = WaveShape::Sine;
        let frequency_hz = 440.0;

        // Synthesize up front so the plot is populated on first frame
        Self {
            shape,
            frequency_hz,
            samples: synth::synthesize(shape, frequency_hz),
            status: None,
        }
    }

    fn regenerate(&mut self) {
        self.samples = synth::synthesize(self.shape, self.frequency_hz);
    }

    fn export_waveform(&mut self) {
        self.regenerate();

        let dest = rfd::FileDialog::new()
            .add_filter("WAV files", &["wav"])
            .set_file_name("waveform.wav")
            .set_title("Save waveform as WAV")
            .save_file();

        match export::export(dest, &self.samples) {
            Ok(Some(path)) => {
                self.status = Some(format!("Waveform saved to {}", path.display()));
            }
            // Dialog cancelled, nothing to do
            Ok(None) => {}
            Err(e) => {
                warn!("export failed: {e:#}");
                self.status = Some(format!("Export failed: {e:#}"));
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Wave Type:");
            let mut changed = false;
            egui::ComboBox::new("wave_shape", "")
                .selected_text(self.shape.to_string())
                .show_ui(ui, |ui| {
                    for shape in WaveShape::ALL {
                        if ui
                            .selectable_value(&mut self.shape, shape, shape.to_string())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            if ui
                .add(
                    egui::Slider::new(
                        &mut self.frequency_hz,
                        MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ,
                    )
                    .text("Frequency (Hz)"),
                )
                .changed()
            {
                changed = true;
            }

            if ui.button("Generate").clicked() {
                changed = true;
            }

            if ui.button("Export WAV").clicked() {
                self.export_waveform();
            }

            if changed {
                self.regenerate();
            }
        });
    }
}

impl eframe::App for WaveshaperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui);
            ui.separator();

            ui.heading(format!(
                "{} Wave @ {:.1} Hz",
                self.shape, self.frequency_hz
            ));
            WaveformPlot::new(synth::time_axis(), &self.samples, PREVIEW_SAMPLES)
                .height(320.0)
                .show(ui, "waveform_preview");

            if let Some(status) = &self.status {
                ui.add_space(4.0);
                ui.label(status);
            }
        });
    }
}
