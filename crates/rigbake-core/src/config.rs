#![allow(dead_code)]
//! Bake request configuration.

use serde::{Deserialize, Serialize};

use crate::error::BakeError;

/// The six core transform channels baked by default.
pub const CORE_TRANSFORM_CHANNELS: [&str; 6] = ["tx", "ty", "tz", "rx", "ry", "rz"];

/// The three Euler rotation channels the continuity fix operates on.
pub const ROTATION_CHANNELS: [&str; 3] = ["rx", "ry", "rz"];

/// Options forwarded verbatim to the host evaluator for each sample.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Request shortest-path rotation sampling where the evaluator supports it.
    pub minimize_rotation: bool,
    /// Detach constraints/expressions from the baked channels once sampling ends.
    pub disable_implicit_control: bool,
    /// Keep keys outside the baked range instead of discarding them.
    pub preserve_outside_keys: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            minimize_rotation: false,
            disable_implicit_control: true,
            preserve_outside_keys: false,
        }
    }
}

/// Configuration for one bake call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakeRequest {
    /// Distinct transform identifiers to bake. Empty is a valid no-op.
    pub transforms: Vec<String>,
    /// Inclusive (start, end); taken from the host playback range when `None`.
    pub time_range: Option<(f64, f64)>,
    /// Frames between samples; 1 = every frame.
    pub sample_step: u32,
    /// Channel names to bake.
    pub attributes: Vec<String>,
    /// Run the continuity corrector on each transform's rotation keys after
    /// baking.
    pub apply_continuity_fix: bool,
    /// Transforms exempted from the continuity fix.
    pub skip_list: Vec<String>,
    pub minimize_rotation: bool,
    pub disable_implicit_control: bool,
    pub preserve_outside_keys: bool,
}

impl Default for BakeRequest {
    fn default() -> Self {
        Self {
            transforms: Vec::new(),
            time_range: None,
            sample_step: 1,
            attributes: CORE_TRANSFORM_CHANNELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            apply_continuity_fix: true,
            skip_list: Vec::new(),
            minimize_rotation: false,
            disable_implicit_control: true,
            preserve_outside_keys: false,
        }
    }
}

impl BakeRequest {
    /// A request for the given transforms with every other field at its
    /// default.
    pub fn for_transforms<I, S>(transforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transforms: transforms.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Check that the request is well-formed. Violations are fatal for the
    /// whole call; an empty transform set is not one (it is a no-op).
    pub fn validate(&self) -> Result<(), BakeError> {
        if self.sample_step == 0 {
            return Err(BakeError::Configuration(
                "sample_step must be at least 1".to_string(),
            ));
        }
        if self.attributes.is_empty() {
            return Err(BakeError::Configuration(
                "attribute set must not be empty".to_string(),
            ));
        }
        if let Some((start, end)) = self.time_range {
            if !start.is_finite() || !end.is_finite() || start > end {
                return Err(BakeError::Configuration(format!(
                    "invalid time range ({start}, {end})"
                )));
            }
        }
        Ok(())
    }

    /// The evaluator pass-through bundle for this request.
    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions {
            minimize_rotation: self.minimize_rotation,
            disable_implicit_control: self.disable_implicit_control,
            preserve_outside_keys: self.preserve_outside_keys,
        }
    }
}
