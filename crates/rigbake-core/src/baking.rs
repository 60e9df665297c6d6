#![allow(dead_code)]
//! Bake orchestration: sample transforms to dense keys, then repair flips.
//!
//! Every frame is evaluated through the full dependency graph (simulation
//! sampling), never interpolated from sparse keys. Sampling is strictly
//! sequential per transform and per frame; the host owns a single global
//! simulation clock, so only one frame can be current at a time.

use log::warn;

use crate::config::BakeRequest;
use crate::continuity::correct_curve;
use crate::curve::RotationCurve;
use crate::error::BakeError;
use crate::host::{BakeHost, KeyframeStore};
use crate::report::{BakeReport, TransformStatus};

/// Non-rendering surface the viewport is swapped to while sampling; hosts map
/// this to whatever their redraw-free view is.
pub const SAMPLING_SURFACE: &str = "dope-sheet";

/// Bake every requested transform over the request's time range, one key per
/// sample frame per attribute, then apply the continuity fix where requested.
///
/// A malformed request fails immediately. Per-transform failures are logged,
/// recorded in the report, and do not abort the batch. An interrupted
/// transform is left partially baked; there is no rollback.
pub fn bake_transforms<H: BakeHost + ?Sized>(
    host: &mut H,
    request: &BakeRequest,
) -> Result<BakeReport, BakeError> {
    request.validate()?;
    if request.transforms.is_empty() {
        return Ok(BakeReport::default());
    }

    let (start, end) = request
        .time_range
        .unwrap_or_else(|| host.playback_range());
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(BakeError::Configuration(format!(
            "invalid time range ({start}, {end})"
        )));
    }
    // Frame bounds truncate toward zero, matching the host's integer clock.
    let (start, end) = (start.trunc() as i64, end.trunc() as i64);

    // Sampling pays full-graph evaluation per frame; swap the viewport to a
    // non-rendering surface so each step does not also pay for a redraw.
    // Per-transform failures are caught below, so every path out of this
    // function passes the restore.
    let previous_surface = host.set_active_surface(SAMPLING_SURFACE);

    let mut statuses: Vec<TransformStatus> = Vec::with_capacity(request.transforms.len());
    for transform in &request.transforms {
        match bake_one(host, transform, start, end, request) {
            Ok(()) => statuses.push(TransformStatus::Baked),
            Err(err) => {
                warn!("bake failed for '{transform}': {err}");
                statuses.push(TransformStatus::Failed(err));
            }
        }
    }

    if request.apply_continuity_fix {
        for (transform, status) in request.transforms.iter().zip(statuses.iter_mut()) {
            if !matches!(status, TransformStatus::Baked) {
                continue;
            }
            if request.skip_list.iter().any(|s| s == transform) {
                *status = TransformStatus::CorrectionSkipped;
                continue;
            }
            match fix_transform(host, transform) {
                Ok(()) => *status = TransformStatus::Corrected,
                Err(err) => {
                    warn!("continuity fix failed for '{transform}': {err}");
                    *status = TransformStatus::CorrectionFailed(err);
                }
            }
        }
    }

    if let Some(surface) = previous_surface {
        host.restore_surface(&surface);
    }

    let mut report = BakeReport::default();
    for (transform, status) in request.transforms.iter().zip(statuses) {
        report.push(transform.clone(), status);
    }
    Ok(report)
}

/// Sample one transform across the frame range and write one key per sample
/// per attribute (key index = sample ordinal). Fail-fast: the first error
/// aborts this transform, leaving any keys already written.
fn bake_one<H: BakeHost + ?Sized>(
    host: &mut H,
    transform: &str,
    start: i64,
    end: i64,
    request: &BakeRequest,
) -> Result<(), BakeError> {
    let options = request.sample_options();
    let step = i64::from(request.sample_step);
    let mut index = 0usize;
    let mut frame = start;
    while frame <= end {
        let values = host.sample_at_time(transform, frame, &request.attributes, &options)?;
        if values.len() != request.attributes.len() {
            return Err(BakeError::Evaluation {
                transform: transform.to_string(),
                frame,
                reason: format!(
                    "evaluator returned {} values for {} attributes",
                    values.len(),
                    request.attributes.len()
                ),
            });
        }
        for (channel, value) in request.attributes.iter().zip(values) {
            host.write_key(transform, channel, index, value)?;
        }
        index += 1;
        frame += step;
    }
    Ok(())
}

/// Apply the continuity corrector to one transform's baked rotation keys and
/// write the corrected values back index by index. Curves with fewer than two
/// keys are left untouched.
pub fn fix_transform<S: KeyframeStore + ?Sized>(
    store: &mut S,
    transform: &str,
) -> Result<(), BakeError> {
    let curve = RotationCurve::read_from(store, transform)?;
    if curve.len() < 2 {
        return Ok(());
    }
    let corrected = correct_curve(&curve);
    corrected.write_back(store, transform)
}
