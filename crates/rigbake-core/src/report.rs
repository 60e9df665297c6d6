#![allow(dead_code)]
//! Per-transform outcome collection for one bake call.
//!
//! Best effort across the set, fail-fast within one transform: failures are
//! recorded here instead of aborting the batch, so callers keep the
//! diagnostics a blanket skip-on-error policy would discard.

use crate::error::BakeError;

/// What happened to one requested transform.
#[derive(Clone, Debug, PartialEq)]
pub enum TransformStatus {
    /// Keys baked; no continuity fix requested.
    Baked,
    /// Keys baked and the continuity fix applied.
    Corrected,
    /// Keys baked; the transform was on the skip list for the fix.
    CorrectionSkipped,
    /// Baking failed; keys already written remain (no rollback).
    Failed(BakeError),
    /// Keys baked but the continuity fix failed.
    CorrectionFailed(BakeError),
}

/// One transform's outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformOutcome {
    pub transform: String,
    pub status: TransformStatus,
}

/// Outcomes for every transform of a bake call, in request order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BakeReport {
    pub outcomes: Vec<TransformOutcome>,
}

impl BakeReport {
    #[inline]
    pub fn push(&mut self, transform: impl Into<String>, status: TransformStatus) {
        self.outcomes.push(TransformOutcome {
            transform: transform.into(),
            status,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &TransformOutcome> {
        self.outcomes.iter().filter(|o| {
            matches!(
                o.status,
                TransformStatus::Failed(_) | TransformStatus::CorrectionFailed(_)
            )
        })
    }

    pub fn all_ok(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn status_of(&self, transform: &str) -> Option<&TransformStatus> {
        self.outcomes
            .iter()
            .find(|o| o.transform == transform)
            .map(|o| &o.status)
    }
}
