#![allow(dead_code)]
//! Collaborator traits implemented by the surrounding scene system.
//!
//! Hosts (a DCC bridge, a test mock) implement these and pass themselves into
//! the orchestration entry points. File import/export, skin weights, and
//! panel bookkeeping live entirely on the host side of these seams.

use crate::config::SampleOptions;
use crate::error::BakeError;

/// Opaque transform identifier (small string key).
pub type TransformHandle = String;

/// Access to the host's global timeline.
pub trait Timeline {
    /// Active playback range, used as the default time range when a request
    /// does not supply one.
    fn playback_range(&self) -> (f64, f64);

    /// Advance the single global simulation clock to `frame`. Only one frame
    /// can be current at a time.
    fn set_current_frame(&mut self, frame: i64) -> Result<(), BakeError>;
}

/// Full dependency-graph evaluation at an instant. May be expensive.
pub trait SceneEvaluator {
    /// Evaluate `transform` at `frame` under full constraint/expression
    /// evaluation and return one value per entry of `attributes`, in order.
    fn sample_at_time(
        &mut self,
        transform: &str,
        frame: i64,
        attributes: &[String],
        options: &SampleOptions,
    ) -> Result<Vec<f64>, BakeError>;
}

/// Dense keyframe storage, index-aligned to the baked range.
pub trait KeyframeStore {
    fn key_count(&self, transform: &str, channel: &str) -> Result<usize, BakeError>;

    fn read_key_values(&self, transform: &str, channel: &str) -> Result<Vec<f64>, BakeError>;

    /// Idempotent: overwrites any existing key at `index`.
    fn write_key(
        &mut self,
        transform: &str,
        channel: &str,
        index: usize,
        value: f64,
    ) -> Result<(), BakeError>;
}

/// Scoped swap of the active display surface during sampling.
pub trait ViewportControl {
    /// Swap the active surface to `id`, returning the previously active
    /// surface when a swap actually occurred.
    fn set_active_surface(&mut self, id: &str) -> Option<String>;

    /// Restore a previously active surface.
    fn restore_surface(&mut self, id: &str);
}

/// Joint rotation access used only by the world-space re-expression pass.
pub trait JointAccess {
    fn world_rotation(&self, joint: &str) -> Result<[f64; 3], BakeError>;

    fn set_world_rotation(&mut self, joint: &str, rotation: [f64; 3]) -> Result<(), BakeError>;

    fn local_rotation(&self, joint: &str) -> Result<[f64; 3], BakeError>;

    fn set_local_rotation(&mut self, joint: &str, rotation: [f64; 3]) -> Result<(), BakeError>;

    /// Set a key on each of the three rotation channels at `frame`, using the
    /// joint's current local rotation.
    fn key_rotation(&mut self, joint: &str, frame: i64) -> Result<(), BakeError>;
}

/// Everything the bake orchestration needs from a host.
pub trait BakeHost: Timeline + SceneEvaluator + KeyframeStore + ViewportControl {}

impl<T: Timeline + SceneEvaluator + KeyframeStore + ViewportControl + ?Sized> BakeHost for T {}
