#![allow(dead_code)]
//! Euler-angle continuity correction for densely baked rotation curves.
//!
//! Independently sampled Euler channels are blind to the ±360° periodicity of
//! each axis and to the X/Z ambiguity that opens up when Y approaches ±90°,
//! so a bake can land adjacent keys on different but equivalent branches and
//! the playback shows a sudden flip. This pass walks the curve forward in
//! time, treating each previous corrected key as ground truth and folding the
//! next key into the branch (multiple of 360°, or the 180°-pole-flipped
//! branch) nearest it. Greedy and single-pass: valid only when the data was
//! sampled densely enough that no true per-frame step reaches the fold
//! thresholds.
//!
//! The 90/270/180 thresholds are a fixed contract tuned on production rigs.
//! Changing them changes output on real data.

use crate::curve::RotationCurve;

/// Amount to subtract when `delta` exceeds `limit`: whole multiples of 360°
/// (plus one) separating the value from the branch nearest the previous key.
/// Truncation toward zero, not floor; the two differ for negative quotients
/// and the asymmetry is part of the contract.
fn fold_above(delta: f64, limit: f64) -> f64 {
    (((delta - limit) / 360.0).trunc() + 1.0) * 360.0
}

/// Amount to add when `delta` falls below `limit`.
fn fold_below(delta: f64, limit: f64) -> f64 {
    (((delta - limit) / -360.0).trunc() + 1.0) * 360.0
}

/// Rewrite one key against the previous, already-corrected key.
///
/// The returned `(x, y, z)` represents the same 3-D orientation as the input
/// modulo 360° per channel and the pole-flip identity
/// `(x, y, z) == (x - 180, 180 - y, z - 180)`.
pub fn correct_step(prev: [f64; 3], current: [f64; 3]) -> [f64; 3] {
    let [px, py, pz] = prev;
    let [mut x, mut y, mut z] = current;

    let mut xd = x - px;
    if xd < -90.0 {
        x += fold_below(xd, -90.0);
    }
    xd = x - px;
    if xd > 270.0 {
        x -= fold_above(xd, 270.0);
    }

    let mut zd = z - pz;
    if zd < -90.0 {
        z += fold_below(zd, -90.0);
    }
    zd = z - pz;
    if zd > 270.0 {
        z -= fold_above(zd, 270.0);
    }

    // Strict pole band: a residual X delta in (90, 270) means the sample
    // crossed a gimbal pole; resolve by flipping the representation.
    xd = x - px;
    if xd > 90.0 && xd < 270.0 {
        x -= 180.0;
        y = 180.0 - y;
        z -= 180.0;
    }

    let mut yd = y - py;
    if yd > 180.0 {
        y -= fold_above(yd, 180.0);
    }
    yd = y - py;
    if yd < -180.0 {
        y += fold_below(yd, -180.0);
    }

    [x, y, z]
}

/// Correct a curve in place. Key 0 is never modified; keys are rewritten in
/// increasing order, each step consuming the previous corrected key.
pub fn correct_in_place(curve: &mut RotationCurve) {
    for k in 1..curve.len() {
        let prev = [curve.x[k - 1], curve.y[k - 1], curve.z[k - 1]];
        let current = [curve.x[k], curve.y[k], curve.z[k]];
        let [x, y, z] = correct_step(prev, current);
        curve.x[k] = x;
        curve.y[k] = y;
        curve.z[k] = z;
    }
}

/// Pure variant: returns a corrected copy and leaves the input untouched.
pub fn correct_curve(curve: &RotationCurve) -> RotationCurve {
    let mut out = curve.clone();
    correct_in_place(&mut out);
    out
}
