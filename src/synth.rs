use std::f64::consts::PI;
use std::fmt;

pub const SAMPLE_RATE: u32 = 44100;
pub const DURATION_SECS: f64 = 1.0;

/// Number of samples in one generated buffer.
pub const NUM_SAMPLES: usize = (SAMPLE_RATE as f64 * DURATION_SECS) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveShape {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    CustomBlend,
}

impl WaveShape {
    pub const ALL: [WaveShape; 5] = [
        WaveShape::Sine,
        WaveShape::Square,
        WaveShape::Sawtooth,
        WaveShape::Triangle,
        WaveShape::CustomBlend,
    ];

    /// Parses a human-readable tag back into a shape. Unknown tags yield
    /// `None`; callers that need a total mapping fall back to silence
    /// (see `synthesize_tag`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Sine" => Some(WaveShape::Sine),
            "Square" => Some(WaveShape::Square),
            "Sawtooth" => Some(WaveShape::Sawtooth),
            "Triangle" => Some(WaveShape::Triangle),
            "Custom Blend" => Some(WaveShape::CustomBlend),
            _ => None,
        }
    }

    /// Amplitude of this shape at time `t` seconds for the given frequency.
    ///
    /// All shapes are closed-form and bounded; nothing here clamps or
    /// range-checks, so a zero or non-finite frequency simply flows
    /// through the formulas.
    pub fn sample(&self, frequency_hz: f64, t: f64) -> f64 {
        match self {
            WaveShape::Sine => (2.0 * PI * frequency_hz * t).sin(),
            // sign(sin), with sign(0) = 0 so the value set is {-1, 0, 1}
            WaveShape::Square => {
                let s = (2.0 * PI * frequency_hz * t).sin();
                if s > 0.0 {
                    1.0
                } else if s < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            // Ramps -1 to 1 once per period, discontinuous wrap
            WaveShape::Sawtooth => {
                let x = frequency_hz * t;
                2.0 * (x - (0.5 + x).floor())
            }
            WaveShape::Triangle => {
                let x = frequency_hz * t;
                2.0 * (2.0 * (x - (x + 0.5).floor())).abs() - 1.0
            }
            // Fixed-weight mix of the three components at the same (f, t).
            // Not renormalized, so the sum can reach +/-1.0 only when the
            // components line up.
            WaveShape::CustomBlend => {
                0.5 * WaveShape::Sine.sample(frequency_hz, t)
                    + 0.3 * WaveShape::Square.sample(frequency_hz, t)
                    + 0.2 * WaveShape::Triangle.sample(frequency_hz, t)
            }
        }
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaveShape::Sine => "Sine",
            WaveShape::Square => "Square",
            WaveShape::Sawtooth => "Sawtooth",
            WaveShape::Triangle => "Triangle",
            WaveShape::CustomBlend => "Custom Blend",
        };
        f.write_str(name)
    }
}

/// Timestamps `i / SAMPLE_RATE` paired index-for-index with a sample buffer.
pub fn time_axis() -> impl Iterator<Item = f64> {
    (0..NUM_SAMPLES).map(|i| i as f64 / SAMPLE_RATE as f64)
}

/// Renders one second of the given shape at `frequency_hz`.
///
/// Pure and deterministic: the same inputs always produce a bit-for-bit
/// identical buffer of exactly `NUM_SAMPLES` values. The buffer is freshly
/// allocated on every call and handed to the caller.
pub fn synthesize(shape: WaveShape, frequency_hz: f64) -> Vec<f64> {
    time_axis().map(|t| shape.sample(frequency_hz, t)).collect()
}

/// String-keyed variant of [`synthesize`]. An unrecognized tag is not an
/// error; it degrades to a silent buffer of the usual length.
pub fn synthesize_tag(tag: &str, frequency_hz: f64) -> Vec<f64> {
    match WaveShape::from_tag(tag) {
        Some(shape) => synthesize(shape, frequency_hz),
        None => vec![0.0; NUM_SAMPLES],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_fills_the_whole_buffer() {
        for shape in WaveShape::ALL {
            for freq in [20.0, 440.0, 2000.0] {
                assert_eq!(synthesize(shape, freq).len(), NUM_SAMPLES);
            }
        }
        assert_eq!(NUM_SAMPLES, 44100);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = synthesize(WaveShape::Sine, 440.0);
        let b = synthesize(WaveShape::Sine, 440.0);
        assert_eq!(a, b);
    }

    #[test]
    fn sine_hits_zero_then_peak() {
        // 441 Hz puts the quarter-period exactly on sample 25
        let buf = synthesize(WaveShape::Sine, 441.0);
        assert_eq!(buf[0], 0.0);
        assert!((buf[25] - 1.0).abs() < 1e-9, "got {}", buf[25]);
    }

    #[test]
    fn square_values_come_from_the_sign_set() {
        let buf = synthesize(WaveShape::Square, 440.0);
        assert!(buf.iter().all(|&s| s == -1.0 || s == 0.0 || s == 1.0));
        // t = 0 is the one spot guaranteed to exercise sign(0)
        assert_eq!(buf[0], 0.0);
    }

    #[test]
    fn sawtooth_and_triangle_stay_in_range() {
        for shape in [WaveShape::Sawtooth, WaveShape::Triangle] {
            for freq in [0.0, 20.0, 443.7, 2000.0] {
                let buf = synthesize(shape, freq);
                assert!(
                    buf.iter().all(|&s| (-1.0..=1.0).contains(&s)),
                    "{shape} at {freq} Hz left [-1, 1]"
                );
            }
        }
    }

    #[test]
    fn blend_at_time_zero_is_the_triangle_term() {
        // sine and sign(0) contribute nothing at t = 0; triangle starts at -1
        for freq in [20.0, 440.0, 2000.0] {
            let buf = synthesize(WaveShape::CustomBlend, freq);
            assert_eq!(buf[0], 0.2 * -1.0);
        }
    }

    #[test]
    fn blend_matches_its_components_sample_for_sample() {
        let f = 523.25;
        let blend = synthesize(WaveShape::CustomBlend, f);
        let sine = synthesize(WaveShape::Sine, f);
        let square = synthesize(WaveShape::Square, f);
        let triangle = synthesize(WaveShape::Triangle, f);
        for i in 0..NUM_SAMPLES {
            let expected = 0.5 * sine[i] + 0.3 * square[i] + 0.2 * triangle[i];
            assert_eq!(blend[i], expected, "sample {i}");
        }
    }

    #[test]
    fn unknown_tag_degrades_to_silence() {
        for tag in ["", "Noise", "sine"] {
            let buf = synthesize_tag(tag, 440.0);
            assert_eq!(buf.len(), NUM_SAMPLES);
            assert!(buf.iter().all(|&s| s == 0.0));
        }
    }

    #[test]
    fn tags_round_trip_through_display() {
        for shape in WaveShape::ALL {
            assert_eq!(WaveShape::from_tag(&shape.to_string()), Some(shape));
        }
    }

    #[test]
    fn zero_frequency_sine_is_silent() {
        let buf = synthesize(WaveShape::Sine, 0.0);
        assert!(buf.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn time_axis_pairs_with_the_buffer() {
        let axis: Vec<f64> = time_axis().collect();
        assert_eq!(axis.len(), NUM_SAMPLES);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[44099], 44099.0 / 44100.0);
    }
}
