#![allow(dead_code)]
//! World-space re-expression: a coarser flip remedy, independent of the
//! continuity corrector.
//!
//! For every frame in the range the pass re-applies each joint's world
//! rotation unchanged, forcing the host to re-express the same orientation in
//! its canonical internal form (which biases toward continuity with the
//! previous frame), then rounds the local rotation to 3 decimals, re-applies
//! it, and keys the three rotation channels. Operates on the current scene
//! state, not a previously baked curve. The two remedies target the same
//! artifact and may be used exclusively of one another.

use crate::error::BakeError;
use crate::host::{JointAccess, Timeline};

/// Decimal digits kept when re-applying local rotations.
const ROUND_DIGITS: i32 = 3;

/// Round half away from zero (the behavior of `f64::round`).
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Re-express and re-key every joint over `time_range` (defaults to the host
/// playback range).
///
/// A missing joint fails the whole pass immediately: partial re-keying
/// without full coverage is a strictly worse artifact than not running at
/// all.
pub fn remove_flip<H>(
    host: &mut H,
    joints: &[String],
    time_range: Option<(f64, f64)>,
) -> Result<(), BakeError>
where
    H: Timeline + JointAccess + ?Sized,
{
    let (start, end) = time_range.unwrap_or_else(|| host.playback_range());
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(BakeError::Configuration(format!(
            "invalid time range ({start}, {end})"
        )));
    }
    let (start, end) = (start.trunc() as i64, end.trunc() as i64);

    for frame in start..=end {
        host.set_current_frame(frame)?;
        for joint in joints {
            let world = host.world_rotation(joint)?;
            host.set_world_rotation(joint, world)?;

            let local = host.local_rotation(joint)?;
            let rounded = local.map(|v| round_to(v, ROUND_DIGITS));
            host.set_local_rotation(joint, rounded)?;

            host.key_rotation(joint, frame)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should round half away from zero at 3 decimals
    #[test]
    fn rounding_half_away_from_zero() {
        assert_eq!(round_to(1.23449, 3), 1.234);
        assert_eq!(round_to(1.23451, 3), 1.235);
        assert_eq!(round_to(-1.23451, 3), -1.235);
        assert_eq!(round_to(12.0, 3), 12.0);
    }
}
