//! rigbake core (host-agnostic)
//!
//! Samples procedural/constraint-driven transform animation into dense
//! per-frame keyframes, then repairs the gimbal-flip artifact that Euler
//! rotation channels exhibit after such sampling. The scene graph, keyframe
//! storage, and viewport stay behind the traits in `host`; the core consumes
//! a time range, per-frame sampled values, and a write-back interface, and
//! knows nothing about meshes, materials, or rig topology.

pub mod baking;
pub mod config;
pub mod continuity;
pub mod curve;
pub mod error;
pub mod host;
pub mod reexpress;
pub mod report;

// Re-exports for consumers (hosts, tests)
pub use baking::{bake_transforms, fix_transform, SAMPLING_SURFACE};
pub use config::{BakeRequest, SampleOptions, CORE_TRANSFORM_CHANNELS, ROTATION_CHANNELS};
pub use continuity::{correct_curve, correct_in_place, correct_step};
pub use curve::{export_curve_json, RotationCurve};
pub use error::BakeError;
pub use host::{
    BakeHost, JointAccess, KeyframeStore, SceneEvaluator, Timeline, TransformHandle,
    ViewportControl,
};
pub use reexpress::remove_flip;
pub use report::{BakeReport, TransformOutcome, TransformStatus};
