//! In-memory mock scene hosts shared by rigbake integration tests.
//!
//! `MockScene` implements the bake-side traits over per-frame channel tables;
//! `MockJointScene` implements the timeline + joint access used by the
//! world-space re-expression pass. Both record every call so tests can assert
//! orchestration order and side effects.

use std::collections::HashMap;

use rigbake_core::config::SampleOptions;
use rigbake_core::error::BakeError;
use rigbake_core::host::{JointAccess, KeyframeStore, SceneEvaluator, Timeline, ViewportControl};

/// Per-frame channel samples for one mock transform.
#[derive(Clone, Debug, Default)]
pub struct MockTransform {
    /// First frame the sample tables cover.
    pub base_frame: i64,
    /// Channel name -> one value per frame starting at `base_frame`.
    pub channels: HashMap<String, Vec<f64>>,
    /// Frame at which evaluation starts failing, if any.
    pub fail_from: Option<i64>,
}

impl MockTransform {
    pub fn new(base_frame: i64) -> Self {
        Self {
            base_frame,
            channels: HashMap::new(),
            fail_from: None,
        }
    }

    pub fn with_channel(mut self, name: &str, values: Vec<f64>) -> Self {
        self.channels.insert(name.to_string(), values);
        self
    }

    pub fn failing_from(mut self, frame: i64) -> Self {
        self.fail_from = Some(frame);
        self
    }
}

/// Scene host backing `bake_transforms` in tests.
#[derive(Debug, Default)]
pub struct MockScene {
    pub playback: (f64, f64),
    pub transforms: HashMap<String, MockTransform>,
    /// Keys written through `write_key`, dense per (transform, channel).
    pub keys: HashMap<(String, String), Vec<f64>>,
    /// (transform, channel, index) of every write, in order.
    pub write_log: Vec<(String, String, usize)>,
    pub active_surface: String,
    /// Every surface id the scene was switched to, in order.
    pub surface_history: Vec<String>,
    /// Options observed on the most recent evaluation.
    pub last_options: Option<SampleOptions>,
    /// (transform, frame) of every evaluation, in order.
    pub sample_log: Vec<(String, i64)>,
}

impl MockScene {
    pub fn new(playback: (f64, f64)) -> Self {
        Self {
            playback,
            active_surface: "perspective".to_string(),
            ..Default::default()
        }
    }

    pub fn add_transform(&mut self, name: &str, transform: MockTransform) {
        self.transforms.insert(name.to_string(), transform);
    }

    /// Keys written so far for one channel (empty if none).
    pub fn written(&self, transform: &str, channel: &str) -> &[f64] {
        self.keys
            .get(&(transform.to_string(), channel.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Timeline for MockScene {
    fn playback_range(&self) -> (f64, f64) {
        self.playback
    }

    fn set_current_frame(&mut self, _frame: i64) -> Result<(), BakeError> {
        Ok(())
    }
}

impl SceneEvaluator for MockScene {
    fn sample_at_time(
        &mut self,
        transform: &str,
        frame: i64,
        attributes: &[String],
        options: &SampleOptions,
    ) -> Result<Vec<f64>, BakeError> {
        self.last_options = Some(*options);
        self.sample_log.push((transform.to_string(), frame));

        let data = self
            .transforms
            .get(transform)
            .ok_or_else(|| BakeError::Evaluation {
                transform: transform.to_string(),
                frame,
                reason: "unknown transform".to_string(),
            })?;
        if let Some(fail_from) = data.fail_from {
            if frame >= fail_from {
                return Err(BakeError::Evaluation {
                    transform: transform.to_string(),
                    frame,
                    reason: "injected failure".to_string(),
                });
            }
        }

        let mut values = Vec::with_capacity(attributes.len());
        for attr in attributes {
            let samples =
                data.channels
                    .get(attr)
                    .ok_or_else(|| BakeError::ChannelNotFound {
                        transform: transform.to_string(),
                        channel: attr.clone(),
                    })?;
            let idx = usize::try_from(frame - data.base_frame)
                .ok()
                .filter(|i| *i < samples.len())
                .ok_or_else(|| BakeError::Evaluation {
                    transform: transform.to_string(),
                    frame,
                    reason: "frame outside sample table".to_string(),
                })?;
            values.push(samples[idx]);
        }
        Ok(values)
    }
}

impl KeyframeStore for MockScene {
    fn key_count(&self, transform: &str, channel: &str) -> Result<usize, BakeError> {
        self.keys
            .get(&(transform.to_string(), channel.to_string()))
            .map(Vec::len)
            .ok_or_else(|| BakeError::ChannelNotFound {
                transform: transform.to_string(),
                channel: channel.to_string(),
            })
    }

    fn read_key_values(&self, transform: &str, channel: &str) -> Result<Vec<f64>, BakeError> {
        self.keys
            .get(&(transform.to_string(), channel.to_string()))
            .cloned()
            .ok_or_else(|| BakeError::ChannelNotFound {
                transform: transform.to_string(),
                channel: channel.to_string(),
            })
    }

    fn write_key(
        &mut self,
        transform: &str,
        channel: &str,
        index: usize,
        value: f64,
    ) -> Result<(), BakeError> {
        self.write_log
            .push((transform.to_string(), channel.to_string(), index));
        let keys = self
            .keys
            .entry((transform.to_string(), channel.to_string()))
            .or_default();
        if keys.len() <= index {
            keys.resize(index + 1, 0.0);
        }
        keys[index] = value;
        Ok(())
    }
}

impl ViewportControl for MockScene {
    fn set_active_surface(&mut self, id: &str) -> Option<String> {
        let previous = std::mem::replace(&mut self.active_surface, id.to_string());
        self.surface_history.push(id.to_string());
        Some(previous)
    }

    fn restore_surface(&mut self, id: &str) {
        self.active_surface = id.to_string();
        self.surface_history.push(id.to_string());
    }
}

/// Per-frame local rotations for one mock joint.
#[derive(Clone, Debug)]
pub struct MockJoint {
    pub base_frame: i64,
    /// One local rotation per frame starting at `base_frame`.
    pub local: Vec<[f64; 3]>,
}

impl MockJoint {
    pub fn new(base_frame: i64, local: Vec<[f64; 3]>) -> Self {
        Self { base_frame, local }
    }
}

/// Joint-table host backing `remove_flip` in tests. The hierarchy is flat, so
/// world rotation equals local rotation; re-applying a world rotation stores
/// its canonical form (each component wrapped into (-180, 180]).
#[derive(Debug, Default)]
pub struct MockJointScene {
    pub playback: (f64, f64),
    pub current_frame: i64,
    pub joints: HashMap<String, MockJoint>,
    /// Every frame the clock was advanced to, in order.
    pub frame_log: Vec<i64>,
    /// (joint, frame, rotation) for every key set, in order.
    pub keyed: Vec<(String, i64, [f64; 3])>,
}

fn canonical(v: f64) -> f64 {
    let mut r = v % 360.0;
    if r > 180.0 {
        r -= 360.0;
    } else if r <= -180.0 {
        r += 360.0;
    }
    r
}

impl MockJointScene {
    pub fn new(playback: (f64, f64)) -> Self {
        Self {
            playback,
            ..Default::default()
        }
    }

    pub fn add_joint(&mut self, name: &str, joint: MockJoint) {
        self.joints.insert(name.to_string(), joint);
    }

    fn slot(&self, joint: &str) -> Result<(usize, &MockJoint), BakeError> {
        let data = self
            .joints
            .get(joint)
            .ok_or_else(|| BakeError::JointNotFound(joint.to_string()))?;
        let idx = usize::try_from(self.current_frame - data.base_frame)
            .ok()
            .filter(|i| *i < data.local.len())
            .ok_or_else(|| BakeError::Evaluation {
                transform: joint.to_string(),
                frame: self.current_frame,
                reason: "frame outside joint table".to_string(),
            })?;
        Ok((idx, data))
    }
}

impl Timeline for MockJointScene {
    fn playback_range(&self) -> (f64, f64) {
        self.playback
    }

    fn set_current_frame(&mut self, frame: i64) -> Result<(), BakeError> {
        self.current_frame = frame;
        self.frame_log.push(frame);
        Ok(())
    }
}

impl JointAccess for MockJointScene {
    fn world_rotation(&self, joint: &str) -> Result<[f64; 3], BakeError> {
        let (idx, data) = self.slot(joint)?;
        Ok(data.local[idx])
    }

    fn set_world_rotation(&mut self, joint: &str, rotation: [f64; 3]) -> Result<(), BakeError> {
        let (idx, _) = self.slot(joint)?;
        let data = self.joints.get_mut(joint).expect("slot checked existence");
        data.local[idx] = rotation.map(canonical);
        Ok(())
    }

    fn local_rotation(&self, joint: &str) -> Result<[f64; 3], BakeError> {
        let (idx, data) = self.slot(joint)?;
        Ok(data.local[idx])
    }

    fn set_local_rotation(&mut self, joint: &str, rotation: [f64; 3]) -> Result<(), BakeError> {
        let (idx, _) = self.slot(joint)?;
        let data = self.joints.get_mut(joint).expect("slot checked existence");
        data.local[idx] = rotation;
        Ok(())
    }

    fn key_rotation(&mut self, joint: &str, frame: i64) -> Result<(), BakeError> {
        let (idx, data) = self.slot(joint)?;
        let rotation = data.local[idx];
        self.keyed.push((joint.to_string(), frame, rotation));
        Ok(())
    }
}
