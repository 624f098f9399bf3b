use anyhow::{bail, Context, Result};
use haardsp::HaarPlan;
use hound::{SampleFormat, WavReader};
use std::fmt::Write as _;
use std::path::Path;

/// Signal used when no samples are supplied.
pub const REFERENCE_SIGNAL: [f32; 8] = [4.0, 6.0, 10.0, 12.0, 8.0, 6.0, 5.0, 5.0];

/// Read the first channel of a WAV file as samples scaled to `[-1, 1]`.
pub fn read_wav(path: &Path) -> Result<Vec<f32>> {
    let mut reader =
        WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;
    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()?
        }
    };
    Ok(samples.into_iter().step_by(channels).collect())
}

/// Pick the transform level: the maximum when none is requested, the clamped
/// value when `clamp` is set, otherwise the request if it is in range.
pub fn resolve_level(plan: &HaarPlan, requested: Option<u32>, clamp: bool) -> Result<u32> {
    match requested {
        None => Ok(plan.max_level()),
        Some(level) if clamp => {
            let clamped = plan.clamp_level(level);
            if clamped != level {
                log::warn!("level {} clamped to {}", level, clamped);
            }
            Ok(clamped)
        }
        Some(level) => match plan.check_level(level) {
            Ok(level) => Ok(level),
            Err(_) => bail!(
                "please choose a DWT level between 0 and {} (got {})",
                plan.max_level(),
                level
            ),
        },
    }
}

/// One `value at index i = v` line per sample, followed by a blank line.
pub fn format_listing(samples: &[f32]) -> String {
    let mut out = String::new();
    for (i, v) in samples.iter().enumerate() {
        let _ = writeln!(out, "value at index {} = {}", i, v);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_maximum() {
        let plan = HaarPlan::new(16).unwrap();
        assert_eq!(resolve_level(&plan, None, false).unwrap(), 4);
    }

    #[test]
    fn out_of_range_level_rejected_or_clamped() {
        let plan = HaarPlan::new(8).unwrap();
        assert!(resolve_level(&plan, Some(5), false).is_err());
        assert_eq!(resolve_level(&plan, Some(5), true).unwrap(), 3);
        assert_eq!(resolve_level(&plan, Some(2), false).unwrap(), 2);
    }

    #[test]
    fn listing_format() {
        let text = format_listing(&[1.5, -2.0]);
        assert_eq!(text, "value at index 0 = 1.5\nvalue at index 1 = -2\n\n");
    }
}
