use egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

const LINE_COLOR: Color32 = Color32::from_rgb(0, 188, 212);

/// Line plot of a waveform prefix against its time axis.
///
/// The y-range is pinned to [-1.2, 1.2] so every shape is framed the same
/// way regardless of amplitude.
pub struct WaveformPlot {
    points: Vec<[f64; 2]>,
    height: f32,
}

impl WaveformPlot {
    /// Pairs each sample with its timestamp, keeping only the first
    /// `max_points` samples.
    pub fn new(times: impl Iterator<Item = f64>, samples: &[f64], max_points: usize) -> Self {
        let points = times
            .zip(samples)
            .take(max_points)
            .map(|(t, &s)| [t, s])
            .collect();

        Self {
            points,
            height: 260.0,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn show(self, ui: &mut Ui, id_source: impl std::hash::Hash) {
        let plot = Plot::new(id_source)
            .height(self.height)
            .include_y(-1.2)
            .include_y(1.2)
            .x_axis_label("Time (s)")
            .y_axis_label("Amplitude")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false);

        plot.show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(self.points)).color(LINE_COLOR);
            plot_ui.line(line);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{synthesize, time_axis, WaveShape};

    #[test]
    fn preview_keeps_only_the_leading_samples() {
        let samples = synthesize(WaveShape::Sine, 440.0);
        let plot = WaveformPlot::new(time_axis(), &samples, 1000);
        assert_eq!(plot.points.len(), 1000);
        assert_eq!(plot.points[0], [0.0, 0.0]);
    }

    #[test]
    fn preview_handles_short_buffers() {
        let samples = [0.5, -0.5];
        let plot = WaveformPlot::new(time_axis(), &samples, 1000);
        assert_eq!(plot.points.len(), 2);
    }
}
