#![allow(dead_code)]
//! Dense per-frame rotation keys for one transform.

use serde::{Deserialize, Serialize};

use crate::config::ROTATION_CHANNELS;
use crate::error::BakeError;
use crate::host::KeyframeStore;

/// One key per frame for the three Euler rotation channels of a transform,
/// index-aligned: key `k` of each channel belongs to the same instant.
///
/// Created fresh by the baker, consumed and rewritten by the continuity
/// corrector, then discarded after write-back; there is no persistence beyond
/// the host's keyframe store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationCurve {
    /// Strictly increasing frame numbers, one per key.
    pub frames: Vec<i64>,
    /// X channel, degrees.
    pub x: Vec<f64>,
    /// Y channel, degrees.
    pub y: Vec<f64>,
    /// Z channel, degrees.
    pub z: Vec<f64>,
}

impl RotationCurve {
    /// Build a curve, checking the alignment invariants.
    pub fn new(
        frames: Vec<i64>,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<f64>,
    ) -> Result<Self, BakeError> {
        let curve = Self { frames, x, y, z };
        curve.validate()?;
        Ok(curve)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All four arrays share one length and frames increase strictly.
    pub fn validate(&self) -> Result<(), BakeError> {
        let n = self.frames.len();
        if self.x.len() != n || self.y.len() != n || self.z.len() != n {
            return Err(BakeError::Configuration(format!(
                "rotation channels are not key-aligned ({n} frames, {}/{}/{} values)",
                self.x.len(),
                self.y.len(),
                self.z.len()
            )));
        }
        if self.frames.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BakeError::Configuration(
                "frame numbers must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a transform's baked rotation keys from the store. The store's
    /// read interface is index-aligned to the baked range, so key indices
    /// stand in for frame numbers.
    pub fn read_from<S: KeyframeStore + ?Sized>(
        store: &S,
        transform: &str,
    ) -> Result<Self, BakeError> {
        let [cx, cy, cz] = ROTATION_CHANNELS;
        let n = store.key_count(transform, cx)?;
        let x = store.read_key_values(transform, cx)?;
        let y = store.read_key_values(transform, cy)?;
        let z = store.read_key_values(transform, cz)?;
        if x.len() != n || y.len() != n || z.len() != n {
            return Err(BakeError::Configuration(format!(
                "rotation channels of '{transform}' are not key-aligned"
            )));
        }
        let frames = (0..n as i64).collect();
        Ok(Self { frames, x, y, z })
    }

    /// Write every key back to the store, index by index, preserving the
    /// original frame numbering (write_key overwrites in place).
    pub fn write_back<S: KeyframeStore + ?Sized>(
        &self,
        store: &mut S,
        transform: &str,
    ) -> Result<(), BakeError> {
        let [cx, cy, cz] = ROTATION_CHANNELS;
        for k in 0..self.len() {
            store.write_key(transform, cx, k, self.x[k])?;
            store.write_key(transform, cy, k, self.y[k])?;
            store.write_key(transform, cz, k, self.z[k])?;
        }
        Ok(())
    }
}

/// Export a curve as serde_json::Value (stable schema for tooling/diagnostics).
pub fn export_curve_json(curve: &RotationCurve) -> serde_json::Value {
    serde_json::to_value(curve).unwrap_or(serde_json::Value::Null)
}
