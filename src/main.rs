use anyhow::Result;
use eframe::egui;
use log::info;

mod app;
mod export;
mod synth;
mod ui;

fn main() -> Result<()> {
    env_logger::init();
    info!("starting waveform generator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Waveform Generator & Visualizer",
        options,
        Box::new(|_cc| Ok(Box::new(app::WaveshaperApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("application error: {e}"))
}
