//! Error types shared across the bake pipeline.
//!
//! A configuration error on the overall request is fatal and surfaces
//! immediately; per-transform failures are caught at the transform boundary
//! and collected into the batch report instead of aborting the batch.

use thiserror::Error;

/// Errors produced while baking, correcting, or re-expressing rotation keys.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BakeError {
    /// The request is not well-formed (reversed or non-finite time range,
    /// empty attribute set, zero sample step, misaligned channel arrays).
    #[error("invalid bake configuration: {0}")]
    Configuration(String),

    /// A requested channel does not exist on the given transform.
    #[error("channel '{channel}' not found on '{transform}'")]
    ChannelNotFound { transform: String, channel: String },

    /// The host evaluator failed to produce a value at a frame.
    #[error("evaluation failed for '{transform}' at frame {frame}: {reason}")]
    Evaluation {
        transform: String,
        frame: i64,
        reason: String,
    },

    /// A joint disappeared mid-range during world-space re-expression.
    #[error("joint '{0}' not found")]
    JointNotFound(String),
}
