use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::synth::SAMPLE_RATE;

/// Clamps each sample to [-1.0, 1.0] and scales it to the signed 16-bit
/// range. Clamping before the scale bounds the result to [-32767, 32767],
/// so the cast can never wrap even when a blend sums past full scale.
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .collect()
}

/// Writes the buffer as a mono 16-bit PCM WAV file at the fixed sample rate.
pub fn write_wav(path: &Path, samples: &[f64]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("creating {}", path.display()))?;
    for value in quantize(samples) {
        writer.write_sample(value)?;
    }
    writer.finalize().context("finalizing WAV file")?;

    Ok(())
}

/// Writes the buffer to `dest` if a destination was chosen. `None` is the
/// save dialog's cancel path and is skipped without touching the file
/// system.
pub fn export(dest: Option<PathBuf>, samples: &[f64]) -> Result<Option<PathBuf>> {
    let Some(path) = dest else {
        return Ok(None);
    };

    write_wav(&path, samples)?;
    info!("waveform saved to {}", path.display());
    Ok(Some(path))
}
