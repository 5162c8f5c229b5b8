//! Alignment of the audio energy series onto segment boundaries.
//!
//! Audio features are optional. Every "no data" case yields `None`, which
//! the scorer treats as a missing term rather than an error.

use reelcut_models::AudioFeatureSeries;

/// Mean RMS energy of the samples with `start <= t < end`.
///
/// Returns `None` when the series is absent or empty, when `start` lies
/// past the last sample, or when no sample falls inside the range.
pub fn mean_energy_in_range(
    series: Option<&AudioFeatureSeries>,
    start: f64,
    end: f64,
) -> Option<f64> {
    let series = series?;
    let len = series.len();
    if len == 0 {
        return None;
    }

    let time_axis = &series.time_axis[..len];
    let start_idx = time_axis.partition_point(|&t| t < start);
    let end_idx = time_axis.partition_point(|&t| t < end);

    if start_idx >= len || end_idx <= start_idx {
        return None;
    }

    let samples = &series.rms_energy[start_idx..end_idx];
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Bounded loudness term: `min(mean_rms * gain, 1.0)`.
pub fn energy_score(mean_rms: f64, gain: f64) -> f64 {
    (mean_rms * gain).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> AudioFeatureSeries {
        AudioFeatureSeries::try_new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.01, 0.02, 0.03, 0.04, 0.05],
        )
        .unwrap()
    }

    #[test]
    fn test_mean_over_half_open_range() {
        let s = series();
        let mean = mean_energy_in_range(Some(&s), 1.0, 3.0).unwrap();
        assert!((mean - 0.025).abs() < 1e-9);

        let mean = mean_energy_in_range(Some(&s), 0.5, 10.0).unwrap();
        assert!((mean - 0.035).abs() < 1e-9);
    }

    #[test]
    fn test_absent_or_empty_series() {
        assert_eq!(mean_energy_in_range(None, 0.0, 5.0), None);
        let empty = AudioFeatureSeries::default();
        assert_eq!(mean_energy_in_range(Some(&empty), 0.0, 5.0), None);
    }

    #[test]
    fn test_start_past_last_sample() {
        let s = series();
        assert_eq!(mean_energy_in_range(Some(&s), 4.5, 9.0), None);
    }

    #[test]
    fn test_no_samples_in_range() {
        let s = series();
        assert_eq!(mean_energy_in_range(Some(&s), 1.2, 1.8), None);
    }

    #[test]
    fn test_energy_score_is_clamped() {
        assert!((energy_score(0.05, 10.0) - 0.5).abs() < 1e-9);
        assert!((energy_score(0.5, 10.0) - 1.0).abs() < 1e-9);
    }
}
