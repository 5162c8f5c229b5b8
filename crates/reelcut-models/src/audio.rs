//! Audio feature models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audio feature construction error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AudioFeatureError {
    #[error("time axis has {time_axis} samples but rms energy has {rms_energy}")]
    LengthMismatch { time_axis: usize, rms_energy: usize },
}

/// RMS energy sampled along a time axis.
///
/// `time_axis` is ascending seconds; `rms_energy[i]` is the frame energy at
/// `time_axis[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioFeatureSeries {
    pub time_axis: Vec<f64>,
    pub rms_energy: Vec<f64>,

    /// Total audio duration in seconds, if the extractor reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl AudioFeatureSeries {
    /// Build a series, rejecting mismatched lengths.
    pub fn try_new(time_axis: Vec<f64>, rms_energy: Vec<f64>) -> Result<Self, AudioFeatureError> {
        if time_axis.len() != rms_energy.len() {
            return Err(AudioFeatureError::LengthMismatch {
                time_axis: time_axis.len(),
                rms_energy: rms_energy.len(),
            });
        }
        Ok(Self {
            time_axis,
            rms_energy,
            duration: None,
        })
    }

    /// Build a series from frame energies at a fixed hop.
    ///
    /// Frame `i` sits at `i * hop_length / sample_rate` seconds.
    pub fn from_frames(rms_energy: Vec<f64>, sample_rate: u32, hop_length: u32) -> Self {
        let step = hop_length as f64 / sample_rate as f64;
        let time_axis = (0..rms_energy.len()).map(|i| i as f64 * step).collect();
        Self {
            time_axis,
            rms_energy,
            duration: None,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn len(&self) -> usize {
        self.time_axis.len().min(self.rms_energy.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
